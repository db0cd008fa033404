use std::collections::VecDeque;

use pokedex_data::Pokemon;

/// Maximum number of species held for comparison.
pub const MAX_SELECTION: usize = 2;

/// The species a user has picked for side-by-side comparison.
///
/// Holds at most [`MAX_SELECTION`] species, unique by id, oldest first. Adding past capacity
/// evicts the oldest entry. No operation fails.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionStore {
    entries: VecDeque<Pokemon>,
}

impl SelectionStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a species to the selection.
    ///
    /// Does nothing if a species with the same id is already selected. Returns the species
    /// evicted to make room, if any.
    pub fn add(&mut self, pokemon: Pokemon) -> Option<Pokemon> {
        if self.contains(pokemon.id) {
            return None;
        }
        self.entries.push_back(pokemon);
        if self.entries.len() > MAX_SELECTION {
            let evicted = self.entries.pop_front();
            if let Some(evicted) = &evicted {
                log::debug!("evicted {} from comparison", evicted.name);
            }
            return evicted;
        }
        None
    }

    /// Removes the species with the given id, if selected.
    pub fn remove(&mut self, id: u32) {
        self.entries.retain(|pokemon| pokemon.id != id);
    }

    /// Removes all species.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Checks if the species with the given id is selected.
    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|pokemon| pokemon.id == id)
    }

    /// Number of selected species.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks if the selection is full, which is when it can be compared.
    pub fn can_compare(&self) -> bool {
        self.count() == MAX_SELECTION
    }

    /// Selected species, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &Pokemon> {
        self.entries.iter()
    }

    /// The primary and secondary species, when exactly two are selected.
    pub fn pair(&self) -> Option<(&Pokemon, &Pokemon)> {
        match (self.entries.front(), self.entries.get(1)) {
            (Some(primary), Some(secondary)) if self.can_compare() => Some((primary, secondary)),
            _ => None,
        }
    }
}
