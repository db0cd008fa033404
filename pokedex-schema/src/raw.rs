//! Payload shapes as served by the upstream API.
//!
//! Deserialization checks field presence and types. Value constraints are checked separately by
//! the validator.

use serde::{
    Deserialize,
    Deserializer,
};

/// Deserializes a field that must be present but may be `null`.
///
/// Plain [`Option`] fields are allowed to be missing entirely.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// A named reference to another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawNamedResource {
    pub name: String,
    pub url: String,
}

/// A single image variant nested under `sprites.other`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSpriteVariant {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Alternative image sets.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
pub struct RawOtherSprites {
    #[serde(default)]
    pub dream_world: Option<RawSpriteVariant>,
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<RawSpriteVariant>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSprites {
    #[serde(deserialize_with = "nullable")]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<RawOtherSprites>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawTypeSlot {
    pub slot: u32,
    pub r#type: RawNamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: RawNamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawAbilitySlot {
    pub ability: RawNamedResource,
    pub is_hidden: bool,
    pub slot: u32,
}

/// A single species, as served by `pokemon/{id or name}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub sprites: RawSprites,
    pub types: Vec<RawTypeSlot>,
    pub stats: Vec<RawStat>,
    pub abilities: Vec<RawAbilitySlot>,
}

/// A page of the species listing, as served by `pokemon?limit=&offset=`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawListPage {
    pub count: u32,
    #[serde(deserialize_with = "nullable")]
    pub next: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub previous: Option<String>,
    pub results: Vec<RawNamedResource>,
}
