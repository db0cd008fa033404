use anyhow::{
    Context,
    Result,
};
use async_trait::async_trait;
use reqwest::{
    Client,
    Url,
    header,
};

use crate::{
    ClientOptions,
    NetworkError,
    PokeApiTransport,
    TransportResponse,
};

/// [`PokeApiTransport`] over HTTP(S).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
}

impl ReqwestTransport {
    /// Creates a new transport from client options.
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let mut base_url = options.base_url.clone();
        // Relative paths replace the last segment unless the base ends with a slash.
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url).context("invalid base url")?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let mut builder = Client::builder().default_headers(headers);
        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder.build().context("failed to create http client")?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid request path {path}"))
    }
}

#[async_trait]
impl PokeApiTransport for ReqwestTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<TransportResponse> {
        let url = self.url(path)?;
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|err| NetworkError::new(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| NetworkError::new(err.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}
