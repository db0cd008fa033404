mod measurement;
mod named_resource;

pub use measurement::Decaunits;
pub use named_resource::NamedResource;
