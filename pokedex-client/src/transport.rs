use anyhow::Result;
use async_trait::async_trait;

/// A response received from the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new<S>(status: u16, body: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Checks if the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport for reaching the upstream API.
///
/// Implementations fail with [`NetworkError`][`crate::NetworkError`] when no response is
/// received. Non-2xx responses are returned as responses, not errors.
#[async_trait]
pub trait PokeApiTransport: Send + Sync {
    /// Issues a GET request for a path relative to the API base URL.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<TransportResponse>;
}
