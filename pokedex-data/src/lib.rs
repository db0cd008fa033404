extern crate alloc;

mod common;
mod list;
mod mons;

#[cfg(test)]
pub mod test_util;

pub use common::*;
pub use list::*;
pub use mons::*;
