use anyhow::Result;
use futures_util::future::join_all;
use pokedex_data::{
    NamedResource,
    Pokemon,
};

use crate::{
    PokeApiClient,
    PokemonRef,
};

/// A page of fully-resolved species, for browsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    /// Species that resolved successfully, in listing order.
    pub items: Vec<Pokemon>,
    /// Offset of the following page, if the listing has one.
    pub next_offset: Option<u32>,
}

impl PokeApiClient {
    /// Resolves listing entries into full species concurrently.
    ///
    /// Entries that fail to resolve are dropped; the rest are returned in listing order.
    pub async fn resolve_entries(&self, entries: &[NamedResource]) -> Vec<Pokemon> {
        let results = join_all(
            entries
                .iter()
                .map(|entry| self.get_pokemon(PokemonRef::Name(entry.name.clone()))),
        )
        .await;
        entries
            .iter()
            .zip(results)
            .filter_map(|(entry, result)| match result {
                Ok(pokemon) => Some(pokemon),
                Err(err) => {
                    log::warn!("dropping {} from results: {err:#}", entry.name);
                    None
                }
            })
            .collect()
    }

    /// Fetches one catalog page, starting at the given offset.
    pub async fn get_catalog_page(&self, offset: u32) -> Result<CatalogPage> {
        let limit = self.options().catalog_page_limit;
        let list = self.get_pokemon_list(Some(limit), offset).await?;
        let items = self.resolve_entries(&list.results).await;
        Ok(CatalogPage {
            items,
            next_offset: list
                .has_next()
                .then(|| offset.checked_add(limit))
                .flatten(),
        })
    }
}
