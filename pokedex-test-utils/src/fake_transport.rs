use std::{
    collections::HashMap,
    sync::{
        Arc,
        Mutex,
    },
};

use anyhow::Result;
use async_trait::async_trait;
use pokedex_client::{
    NetworkError,
    PokeApiTransport,
    TransportResponse,
};
use serde_json::Value;

/// A request received by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
}

#[derive(Debug, Clone)]
enum Route {
    Respond(TransportResponse),
    NetworkFailure(String),
}

#[derive(Default)]
struct State {
    routes: HashMap<String, Route>,
    requests: Vec<RecordedRequest>,
}

/// In-memory [`PokeApiTransport`] serving canned responses by path.
///
/// Query parameters are recorded but do not affect routing. Unknown paths answer 404 with the
/// plain-text body the real service uses. Clones share routes and recorded requests.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<State>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn route(self, path: &str, route: Route) -> Self {
        self.state
            .lock()
            .unwrap()
            .routes
            .insert(path.to_owned(), route);
        self
    }

    /// Responds to the path with the given status and raw body.
    pub fn with_body(self, path: &str, status: u16, body: &str) -> Self {
        self.route(path, Route::Respond(TransportResponse::new(status, body)))
    }

    /// Responds to the path with the given status and JSON body.
    pub fn with_json(self, path: &str, status: u16, body: Value) -> Self {
        self.with_body(path, status, &body.to_string())
    }

    /// Serves a species payload under both `pokemon/{id}` and `pokemon/{name}`.
    pub fn with_pokemon(self, payload: Value) -> Self {
        let id = payload["id"].to_string();
        let name = payload["name"].as_str().unwrap_or_default().to_owned();
        self.with_json(&format!("pokemon/{id}"), 200, payload.clone())
            .with_json(&format!("pokemon/{name}"), 200, payload)
    }

    /// Fails requests for the path without a response.
    pub fn with_network_failure(self, path: &str) -> Self {
        self.route(
            path,
            Route::NetworkFailure(format!("connection reset while requesting {path}")),
        )
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    /// Paths of all requests received so far, in order.
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|request| request.path)
            .collect()
    }
}

#[async_trait]
impl PokeApiTransport for FakeTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<TransportResponse> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(RecordedRequest {
            path: path.to_owned(),
            query: query
                .iter()
                .map(|(key, value)| ((*key).to_owned(), value.clone()))
                .collect(),
        });
        match state.routes.get(path) {
            Some(Route::Respond(response)) => Ok(response.clone()),
            Some(Route::NetworkFailure(msg)) => Err(NetworkError::new(msg.clone()).into()),
            None => Ok(TransportResponse::new(404, "Not Found")),
        }
    }
}
