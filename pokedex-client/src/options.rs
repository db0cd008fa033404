use anyhow::{
    Context,
    Result,
};
use serde::{
    Deserialize,
    Serialize,
};

fn default_base_url() -> String {
    "https://pokeapi.co/api/v2/".to_owned()
}

fn default_limit() -> u32 {
    24
}

fn default_catalog_page_limit() -> u32 {
    12
}

/// Options for configuring [`PokeApiClient`][`crate::PokeApiClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Base URL of the API; paths are resolved relative to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size for listings when the caller does not pick one.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Page size for catalog pages, which are resolved entry by entry.
    #[serde(default = "default_catalog_page_limit")]
    pub catalog_page_limit: u32,

    /// User agent sent with every request.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_limit: default_limit(),
            catalog_page_limit: default_catalog_page_limit(),
            user_agent: None,
        }
    }
}

impl ClientOptions {
    /// Reads options from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid client options")
    }
}
