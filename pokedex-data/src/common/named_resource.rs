use serde::{
    Deserialize,
    Serialize,
};

/// A named reference to another resource of the upstream API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Creates a new named resource.
    pub fn new<N, U>(name: N, url: U) -> Self
    where
        N: Into<String>,
        U: Into<String>,
    {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
