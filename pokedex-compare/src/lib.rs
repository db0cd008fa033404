mod comparison;
mod selection;

pub use comparison::{
    Comparison,
    Contender,
    StatComparison,
    compare,
};
pub use selection::{
    MAX_SELECTION,
    SelectionStore,
};
