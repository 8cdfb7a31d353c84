//! Reqwest-backed transport.
//!
//! Owns connection details only: resolving the server path against the origin,
//! sending the GET and reading the body. Status policy and JSON decoding stay in
//! [`crate::ApiClient`]. On `wasm32` reqwest drives the browser's fetch API, so
//! the same type serves the web build.

use reqwest::{Client, Url};

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::transport::{RawResponse, Transport};

/// HTTP transport bound to one origin.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    origin: Url,
}

impl HttpTransport {
    /// Build a transport for `origin` with reqwest's defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when the origin is not an absolute URL.
    pub fn new(origin: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: Client::new(),
            origin: parse_origin(origin)?,
        })
    }

    /// Build a transport from the `[api]` configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when no origin is configured, the
    /// origin is not an absolute URL, or the reqwest client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        let origin = config
            .origin
            .as_deref()
            .ok_or_else(|| FetchError::Transport("no API origin configured".to_string()))?;
        let origin = parse_origin(origin)?;

        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout() {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        #[cfg(target_arch = "wasm32")]
        {
            if config.timeout_ms.is_some() {
                tracing::debug!("request timeout is not applied in the browser");
            }
        }
        let client = builder.build().map_err(map_transport_error)?;

        Ok(Self { client, origin })
    }

    /// Absolute URL for a server path.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when the path cannot be joined.
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.origin
            .join(path)
            .map_err(|e| FetchError::Transport(format!("invalid request path {path:?}: {e}")))
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, FetchError> {
        let url = self.resolve(path)?;
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn parse_origin(origin: &str) -> Result<Url, FetchError> {
    Url::parse(origin).map_err(|e| FetchError::Transport(format!("invalid origin {origin:?}: {e}")))
}

fn map_transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against_origin() {
        let transport = HttpTransport::new("http://localhost:8080").unwrap();
        let url = transport.resolve("/api/items/by-owner/3").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/items/by-owner/3");
    }

    #[test]
    fn test_resolve_replaces_origin_path() {
        let transport = HttpTransport::new("https://example.org/dashboard/").unwrap();
        let url = transport.resolve("/api/health").unwrap();
        assert_eq!(url.as_str(), "https://example.org/api/health");
    }

    #[test]
    fn test_relative_origin_is_rejected() {
        let err = HttpTransport::new("localhost").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_from_config_requires_origin() {
        let err = HttpTransport::from_config(&ClientConfig::default()).unwrap_err();
        assert_eq!(
            err,
            FetchError::Transport("no API origin configured".to_string())
        );
    }

    #[test]
    fn test_from_config_with_origin() {
        let config = ClientConfig::default()
            .with_origin("http://127.0.0.1:5000")
            .with_timeout(std::time::Duration::from_secs(1));
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(
            transport.resolve("/api/users").unwrap().as_str(),
            "http://127.0.0.1:5000/api/users"
        );
    }
}
