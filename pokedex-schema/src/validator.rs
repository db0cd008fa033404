use std::{
    fmt::Display,
    sync::LazyLock,
};

use pokedex_data::{
    ListPage,
    NamedResource,
};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    RawListPage,
    RawNamedResource,
    RawPokemon,
    ValidationError,
};

fn is_url(value: &str) -> bool {
    static RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+\S*$").unwrap());
    RE.is_match(value)
}

/// Records value-level problems against field paths.
#[derive(Default)]
struct Checker {
    error: ValidationError,
}

impl Checker {
    fn positive<P>(&mut self, path: P, value: u32)
    where
        P: Display,
    {
        if value == 0 {
            self.error.push(path, "must be a positive integer");
        }
    }

    fn non_empty_string<P>(&mut self, path: P, value: &str)
    where
        P: Display,
    {
        if value.is_empty() {
            self.error.push(path, "must not be empty");
        }
    }

    fn url<P>(&mut self, path: P, value: &str)
    where
        P: Display,
    {
        if !is_url(value) {
            self.error.push(path, format!("invalid url `{value}`"));
        }
    }

    fn optional_url<P>(&mut self, path: P, value: Option<&str>)
    where
        P: Display,
    {
        if let Some(value) = value {
            self.url(path, value);
        }
    }

    fn non_empty_list<P, T>(&mut self, path: P, value: &[T])
    where
        P: Display,
    {
        if value.is_empty() {
            self.error.push(path, "must contain at least 1 element");
        }
    }

    fn named_resource(&mut self, path: &str, value: &RawNamedResource) {
        self.non_empty_string(format!("{path}.name"), &value.name);
        self.url(format!("{path}.url"), &value.url);
    }

    fn finish(self) -> Result<(), ValidationError> {
        self.error.into_result()
    }
}

fn check_pokemon(pokemon: &RawPokemon) -> Result<(), ValidationError> {
    let mut checker = Checker::default();
    checker.positive("id", pokemon.id);
    checker.non_empty_string("name", &pokemon.name);
    checker.positive("height", pokemon.height);
    checker.positive("weight", pokemon.weight);

    let sprites = &pokemon.sprites;
    checker.optional_url("sprites.front_default", sprites.front_default.as_deref());
    if let Some(other) = &sprites.other {
        if let Some(dream_world) = &other.dream_world {
            checker.optional_url(
                "sprites.other.dream_world.front_default",
                dream_world.front_default.as_deref(),
            );
        }
        if let Some(official_artwork) = &other.official_artwork {
            checker.optional_url(
                "sprites.other.official-artwork.front_default",
                official_artwork.front_default.as_deref(),
            );
        }
    }

    checker.non_empty_list("types", &pokemon.types);
    for (i, slot) in pokemon.types.iter().enumerate() {
        checker.positive(format!("types[{i}].slot"), slot.slot);
        checker.named_resource(&format!("types[{i}].type"), &slot.r#type);
    }

    checker.non_empty_list("stats", &pokemon.stats);
    for (i, stat) in pokemon.stats.iter().enumerate() {
        checker.named_resource(&format!("stats[{i}].stat"), &stat.stat);
    }

    checker.non_empty_list("abilities", &pokemon.abilities);
    for (i, slot) in pokemon.abilities.iter().enumerate() {
        checker.positive(format!("abilities[{i}].slot"), slot.slot);
        checker.named_resource(&format!("abilities[{i}].ability"), &slot.ability);
    }

    checker.finish()
}

fn check_list_entries(path: &str, entries: &[RawNamedResource]) -> Checker {
    let mut checker = Checker::default();
    for (i, entry) in entries.iter().enumerate() {
        checker.named_resource(&format!("{path}[{i}]"), entry);
    }
    checker
}

fn into_named_resources(entries: Vec<RawNamedResource>) -> Vec<NamedResource> {
    entries
        .into_iter()
        .map(|entry| NamedResource::new(entry.name, entry.url))
        .collect()
}

/// Validates a single species payload.
///
/// Succeeds with the upstream shape, which must still be normalized.
pub fn validate_pokemon(value: &Value) -> Result<RawPokemon, ValidationError> {
    let pokemon = RawPokemon::deserialize(value)?;
    check_pokemon(&pokemon)?;
    Ok(pokemon)
}

/// Validates a page of the species listing.
pub fn validate_list_page(value: &Value) -> Result<ListPage, ValidationError> {
    let page = RawListPage::deserialize(value)?;
    let mut checker = check_list_entries("results", &page.results);
    checker.optional_url("next", page.next.as_deref());
    checker.optional_url("previous", page.previous.as_deref());
    checker.finish()?;
    Ok(ListPage {
        count: page.count,
        next: page.next,
        previous: page.previous,
        results: into_named_resources(page.results),
    })
}

/// Validates the `results` array of a listing page on its own.
pub fn validate_list_entries(value: &Value) -> Result<Vec<NamedResource>, ValidationError> {
    let entries = Vec::<RawNamedResource>::deserialize(value)?;
    check_list_entries("", &entries).finish()?;
    Ok(into_named_resources(entries))
}
