use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    AbilitySlot,
    Decaunits,
    Sprites,
    Stat,
    StatTable,
    TypeSlot,
};

/// A single base stat of a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PokemonStat {
    pub name: Stat,
    pub base_stat: u32,
    pub effort: u32,
}

/// A normalized species record.
///
/// Only produced by normalizing a validated upstream payload, so `types`, `stats`, and
/// `abilities` are never empty. `types` and `abilities` are sorted by slot. `stats` keeps the
/// upstream order; look stats up by name rather than by position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Height, in decimeters.
    pub height: u32,
    /// Weight, in hectograms.
    pub weight: u32,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<PokemonStat>,
    pub abilities: Vec<AbilitySlot>,
}

impl Pokemon {
    /// The base value of the given stat, or 0 if the stat is missing.
    pub fn base_stat(&self, stat: Stat) -> u32 {
        self.stats
            .iter()
            .find(|entry| entry.name == stat)
            .map(|entry| entry.base_stat)
            .unwrap_or(0)
    }

    /// All base stats, keyed by name.
    pub fn stat_table(&self) -> StatTable {
        self.stats
            .iter()
            .rev()
            .map(|entry| (entry.name, entry.base_stat))
            .collect()
    }

    /// The sum of all six base stats.
    pub fn stat_total(&self) -> u64 {
        self.stat_table().sum()
    }

    /// Height for display, in meters.
    pub fn height_in_meters(&self) -> Decaunits {
        Decaunits(self.height)
    }

    /// Weight for display, in kilograms.
    pub fn weight_in_kilograms(&self) -> Decaunits {
        Decaunits(self.weight)
    }

    /// Names of all types, in slot order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.r#type.name.as_str())
    }
}
