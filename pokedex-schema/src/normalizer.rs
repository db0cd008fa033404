use std::str::FromStr;

use pokedex_data::{
    AbilitySlot,
    ListPage,
    NamedResource,
    Pokemon,
    PokemonStat,
    Sprites,
    Stat,
    TypeSlot,
};
use serde_json::Value;

use crate::{
    RawAbilitySlot,
    RawNamedResource,
    RawPokemon,
    RawSprites,
    RawStat,
    RawTypeSlot,
    ValidationError,
    validate_list_page,
    validate_pokemon,
};

fn named_resource(resource: RawNamedResource) -> NamedResource {
    NamedResource::new(resource.name, resource.url)
}

fn normalize_sprites(sprites: RawSprites) -> Sprites {
    let other = sprites.other.unwrap_or_default();
    let official_artwork = other
        .official_artwork
        .and_then(|variant| variant.front_default)
        .or_else(|| sprites.front_default.clone());
    let dream_world = other.dream_world.and_then(|variant| variant.front_default);
    Sprites {
        front_default: sprites.front_default,
        official_artwork,
        dream_world,
    }
}

fn normalize_types(types: Vec<RawTypeSlot>) -> Vec<TypeSlot> {
    let mut types = types
        .into_iter()
        .map(|slot| TypeSlot {
            slot: slot.slot,
            r#type: named_resource(slot.r#type),
        })
        .collect::<Vec<_>>();
    types.sort_by_key(|slot| slot.slot);
    types
}

/// Recognizes one of the six stat slugs, exactly as the upstream service spells them.
fn recognize_stat(name: &str) -> Option<Stat> {
    Stat::from_str(name)
        .ok()
        .filter(|stat| stat.to_string() == name)
}

/// Unrecognized stats fail the whole payload rather than being skipped.
fn normalize_stats(stats: Vec<RawStat>) -> Result<Vec<PokemonStat>, ValidationError> {
    let mut error = ValidationError::default();
    let mut normalized = Vec::with_capacity(stats.len());
    for (i, stat) in stats.into_iter().enumerate() {
        match recognize_stat(&stat.stat.name) {
            Some(name) => normalized.push(PokemonStat {
                name,
                base_stat: stat.base_stat,
                effort: stat.effort,
            }),
            None => error.push(
                format!("stats[{i}].stat.name"),
                format!("unknown stat `{}`", stat.stat.name),
            ),
        }
    }
    error.into_result()?;
    Ok(normalized)
}

fn normalize_abilities(abilities: Vec<RawAbilitySlot>) -> Vec<AbilitySlot> {
    let mut abilities = abilities
        .into_iter()
        .map(|slot| AbilitySlot {
            ability: named_resource(slot.ability),
            is_hidden: slot.is_hidden,
            slot: slot.slot,
        })
        .collect::<Vec<_>>();
    abilities.sort_by_key(|slot| slot.slot);
    abilities
}

/// Normalizes a validated species payload into a [`Pokemon`].
///
/// `types` and `abilities` are stably sorted by slot. `stats` keeps the upstream order.
pub fn normalize_pokemon(pokemon: RawPokemon) -> Result<Pokemon, ValidationError> {
    Ok(Pokemon {
        id: pokemon.id,
        name: pokemon.name,
        height: pokemon.height,
        weight: pokemon.weight,
        sprites: normalize_sprites(pokemon.sprites),
        types: normalize_types(pokemon.types),
        stats: normalize_stats(pokemon.stats)?,
        abilities: normalize_abilities(pokemon.abilities),
    })
}

/// Validates and normalizes a single species payload.
pub fn parse_pokemon(value: &Value) -> Result<Pokemon, ValidationError> {
    normalize_pokemon(validate_pokemon(value)?)
}

/// Validates a page of the species listing.
pub fn parse_list_page(value: &Value) -> Result<ListPage, ValidationError> {
    validate_list_page(value)
}
