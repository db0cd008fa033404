mod error;
mod normalizer;
mod raw;
mod search;
mod validator;

pub use error::ValidationError;
pub use normalizer::{
    normalize_pokemon,
    parse_list_page,
    parse_pokemon,
};
pub use raw::{
    RawAbilitySlot,
    RawListPage,
    RawNamedResource,
    RawOtherSprites,
    RawPokemon,
    RawSpriteVariant,
    RawSprites,
    RawStat,
    RawTypeSlot,
};
pub use search::{
    SearchTerm,
    is_slug,
};
pub use validator::{
    validate_list_entries,
    validate_list_page,
    validate_pokemon,
};
