use anyhow::Error;
use pokedex_schema::ValidationError;
use serde_json::Value;
use thiserror::Error;

/// An error for a request that received a non-2xx response.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct RemoteError {
    status: u16,
    message: String,
    details: Option<Value>,
}

impl RemoteError {
    /// Constructs a new remote error for the given status.
    pub fn new(status: u16, details: Option<Value>) -> Self {
        Self {
            status,
            message: format!("PokéAPI request failed ({status})"),
            details,
        }
    }

    /// HTTP status of the response.
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Decoded body of the failed response.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Checks if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Checks if the upstream service failed on its own side.
    pub fn is_server_error(&self) -> bool {
        self.status >= 500
    }
}

/// An error for a request that never received a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("network failure: {msg}")]
pub struct NetworkError {
    msg: String,
}

impl NetworkError {
    pub fn new<S>(msg: S) -> Self
    where
        S: Into<String>,
    {
        Self { msg: msg.into() }
    }
}

/// How a failed operation should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The requested species does not exist.
    NotFound,
    /// The upstream service answered with an error.
    Unavailable,
    /// The upstream service answered with data we cannot trust.
    InvalidData,
    /// The upstream service could not be reached.
    Network,
}

/// Classifies an error returned by [`PokeApiClient`][`crate::PokeApiClient`].
pub fn failure_kind(error: &Error) -> FailureKind {
    if let Some(error) = error.downcast_ref::<RemoteError>() {
        if error.is_not_found() {
            FailureKind::NotFound
        } else {
            FailureKind::Unavailable
        }
    } else if error.is::<ValidationError>() {
        FailureKind::InvalidData
    } else if error.is::<NetworkError>() {
        FailureKind::Network
    } else {
        FailureKind::Unavailable
    }
}

/// Checks if the error is a [`RemoteError`] for a missing resource.
pub fn is_not_found(error: &Error) -> bool {
    failure_kind(error) == FailureKind::NotFound
}
