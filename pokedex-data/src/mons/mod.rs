mod pokemon;
mod slots;
mod sprites;
mod stat;

pub use pokemon::{
    Pokemon,
    PokemonStat,
};
pub use slots::{
    AbilitySlot,
    TypeSlot,
};
pub use sprites::Sprites;
pub use stat::{
    CANONICAL_STAT_ORDER,
    Stat,
    StatTable,
    StatTableEntries,
};
