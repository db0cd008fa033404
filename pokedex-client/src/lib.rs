mod catalog;
mod client;
mod error;
mod http;
mod options;
mod transport;

pub use catalog::CatalogPage;
pub use client::{
    PokeApiClient,
    PokemonRef,
};
pub use error::{
    FailureKind,
    NetworkError,
    RemoteError,
    failure_kind,
    is_not_found,
};
pub use http::ReqwestTransport;
pub use options::ClientOptions;
pub use transport::{
    PokeApiTransport,
    TransportResponse,
};
