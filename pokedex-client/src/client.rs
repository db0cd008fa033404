use std::fmt::Display;

use anyhow::{
    Error,
    Result,
};
use pokedex_data::{
    ListPage,
    Pokemon,
};
use pokedex_schema::{
    SearchTerm,
    ValidationError,
    is_slug,
    parse_list_page,
    parse_pokemon,
};
use serde_json::{
    Value,
    json,
};

use crate::{
    ClientOptions,
    PokeApiTransport,
    RemoteError,
    ReqwestTransport,
};

/// Reference to a single species, by numeric id or by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokemonRef {
    Id(u32),
    Name(String),
}

impl Display for PokemonRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<u32> for PokemonRef {
    fn from(value: u32) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for PokemonRef {
    fn from(value: &str) -> Self {
        Self::Name(value.to_owned())
    }
}

impl From<String> for PokemonRef {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl From<&SearchTerm> for PokemonRef {
    fn from(value: &SearchTerm) -> Self {
        Self::Name(value.as_str().to_owned())
    }
}

/// Client for the species endpoints of the upstream API.
///
/// Every payload is validated and normalized before it is returned. Errors are
/// [`ValidationError`], [`RemoteError`], or [`NetworkError`][`crate::NetworkError`], wrapped in
/// [`anyhow::Error`]; see [`failure_kind`][`crate::failure_kind`].
pub struct PokeApiClient {
    options: ClientOptions,
    transport: Box<dyn PokeApiTransport>,
}

impl PokeApiClient {
    /// Creates a new client over HTTP(S).
    pub fn new(options: ClientOptions) -> Result<Self> {
        let transport = ReqwestTransport::new(&options)?;
        Ok(Self::with_transport(options, Box::new(transport)))
    }

    /// Creates a new client over the given transport.
    pub fn with_transport(options: ClientOptions, transport: Box<dyn PokeApiTransport>) -> Self {
        Self { options, transport }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    async fn request(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        log::debug!("GET {path} {query:?}");
        let response = self.transport.get(path, query).await?;
        if !response.is_success() {
            let details = serde_json::from_str::<Value>(&response.body)
                .unwrap_or_else(|err| json!({ "message": err.to_string() }));
            return Err(RemoteError::new(response.status, Some(details)).into());
        }
        serde_json::from_str(&response.body).map_err(|err| {
            Error::new(ValidationError::at(
                "",
                format!("response body is not valid JSON: {err}"),
            ))
        })
    }

    /// Fetches a single species by id or name.
    ///
    /// Names must be species slugs; anything else fails with [`ValidationError`] before a request
    /// is made.
    pub async fn get_pokemon<R>(&self, pokemon: R) -> Result<Pokemon>
    where
        R: Into<PokemonRef>,
    {
        let pokemon = pokemon.into();
        if let PokemonRef::Name(name) = &pokemon
            && !is_slug(name)
        {
            return Err(
                ValidationError::at("name", format!("invalid species name `{name}`")).into(),
            );
        }
        let data = self.request(&format!("pokemon/{pokemon}"), &[]).await?;
        Ok(parse_pokemon(&data)?)
    }

    /// Fetches one page of the species listing.
    ///
    /// A server-side failure (5xx) yields an empty page instead of an error, so listings stay
    /// usable while the upstream service is down. Every other failure is returned.
    pub async fn get_pokemon_list(&self, limit: Option<u32>, offset: u32) -> Result<ListPage> {
        let limit = limit.unwrap_or(self.options.default_limit);
        let query = [("limit", limit.to_string()), ("offset", offset.to_string())];
        let data = match self.request("pokemon", &query).await {
            Ok(data) => data,
            Err(err) => match err.downcast_ref::<RemoteError>() {
                Some(remote) if remote.is_server_error() => {
                    log::warn!("PokéAPI unavailable, returning empty list: {err:#}");
                    return Ok(ListPage::empty());
                }
                _ => return Err(err),
            },
        };
        Ok(parse_list_page(&data)?)
    }

    /// Searches for a single species by free-text term.
    ///
    /// The term is trimmed and lowercased. Terms that cannot name a species fail with
    /// [`ValidationError`] without issuing a request.
    pub async fn search_pokemon(&self, term: &str) -> Result<Pokemon> {
        let term = SearchTerm::parse(term)?;
        self.get_pokemon(&term).await
    }
}
