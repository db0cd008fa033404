//! Upstream payloads for tests, shaped like real PokéAPI responses.

use serde_json::{
    Value,
    json,
};

const API: &str = "https://pokeapi.co/api/v2";
const SPRITES: &str = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

const STAT_NAMES: [&str; 6] = [
    "hp",
    "attack",
    "defense",
    "special-attack",
    "special-defense",
    "speed",
];

fn named(kind: &str, name: &str, id: u32) -> Value {
    json!({ "name": name, "url": format!("{API}/{kind}/{id}/") })
}

/// Stat entries in upstream order, one per canonical stat.
pub fn stats(values: [u32; 6]) -> Value {
    Value::Array(
        STAT_NAMES
            .iter()
            .zip(values)
            .enumerate()
            .map(|(i, (name, value))| {
                json!({
                    "base_stat": value,
                    "effort": 0,
                    "stat": named("stat", name, i as u32 + 1),
                })
            })
            .collect(),
    )
}

/// A species payload with every image variant and the given base stats.
///
/// Carries extra upstream fields the validator must ignore.
pub fn pokemon(id: u32, name: &str, types: &[&str], values: [u32; 6]) -> Value {
    json!({
        "id": id,
        "name": name,
        "base_experience": 64,
        "height": 7,
        "weight": 69,
        "is_default": true,
        "order": id,
        "sprites": {
            "front_default": format!("{SPRITES}/{id}.png"),
            "back_default": format!("{SPRITES}/back/{id}.png"),
            "other": {
                "dream_world": {
                    "front_default": format!("{SPRITES}/other/dream-world/{id}.svg"),
                    "front_female": null,
                },
                "official-artwork": {
                    "front_default": format!("{SPRITES}/other/official-artwork/{id}.png"),
                    "front_shiny": format!("{SPRITES}/other/official-artwork/shiny/{id}.png"),
                },
            },
        },
        "types": types
            .iter()
            .enumerate()
            .map(|(i, name)| json!({ "slot": i + 1, "type": named("type", name, i as u32 + 1) }))
            .collect::<Vec<_>>(),
        "stats": stats(values),
        "abilities": [
            { "ability": named("ability", "overgrow", 65), "is_hidden": false, "slot": 1 },
            { "ability": named("ability", "chlorophyll", 34), "is_hidden": true, "slot": 3 },
        ],
        "moves": [],
    })
}

/// Bulbasaur: stat total 318.
pub fn bulbasaur() -> Value {
    pokemon(1, "bulbasaur", &["grass", "poison"], [45, 49, 49, 65, 65, 45])
}

/// Ivysaur: stat total 405.
pub fn ivysaur() -> Value {
    pokemon(2, "ivysaur", &["grass", "poison"], [60, 62, 63, 80, 80, 60])
}

/// Charmander: stat total 309.
pub fn charmander() -> Value {
    pokemon(4, "charmander", &["fire"], [39, 52, 43, 60, 50, 65])
}

/// Squirtle: stat total 314.
pub fn squirtle() -> Value {
    pokemon(7, "squirtle", &["water"], [44, 48, 65, 50, 64, 43])
}

/// A listing page over the given names.
pub fn list_page(count: u32, offset: u32, limit: u32, names: &[&str]) -> Value {
    let page_url = |offset: u32| format!("{API}/pokemon?offset={offset}&limit={limit}");
    let next = (offset + limit < count).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));
    json!({
        "count": count,
        "next": next,
        "previous": previous,
        "results": names
            .iter()
            .enumerate()
            .map(|(i, name)| named("pokemon", name, offset + i as u32 + 1))
            .collect::<Vec<_>>(),
    })
}
