//! # ApiClient: one GET primitive, many path bindings
//!
//! [`ApiClient`] joins the configured base path (`/api`) with a relative path,
//! asks its [`Transport`] for a single GET, and applies one response policy:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | transport could not complete the exchange | [`FetchError::Transport`] |
//! | non-2xx status | [`FetchError::RequestFailed`] with the status |
//! | 2xx with a body that is not JSON | [`FetchError::Decode`] |
//! | 2xx with JSON | `Ok(serde_json::Value)` |
//!
//! The typed operations ([`get_users`](ApiClient::get_users) and friends) are
//! thin bindings: build the [`Endpoint`] path, call
//! [`fetch_json`](ApiClient::fetch_json), decode. A collection decodes as a
//! whole, so one malformed record fails the call instead of yielding a partial
//! list.
//!
//! Each call is one attempt unless [`ClientConfig::retries`] says otherwise.

use std::fmt::Display;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::models::{HealthRecord, ItemRecord, UserRecord};
use crate::transport::Transport;

/// A logical backend resource and its positional parameters.
///
/// Identifiers are interpolated as given; their format is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    Users,
    User(String),
    Items,
    ItemsByOwner(String),
    ItemsByCategory(String),
    LowStockItems,
}

impl Endpoint {
    /// Path relative to the API base.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Health => "/health".to_string(),
            Endpoint::Users => "/users".to_string(),
            Endpoint::User(id) => format!("/users/{id}"),
            Endpoint::Items => "/items".to_string(),
            Endpoint::ItemsByOwner(owner_id) => format!("/items/by-owner/{owner_id}"),
            Endpoint::ItemsByCategory(category_id) => format!("/items/by-category/{category_id}"),
            Endpoint::LowStockItems => "/items/low-stock".to_string(),
        }
    }
}

/// Client for the dashboard backend, generic over how bytes move.
#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport> {
    transport: T,
    config: ClientConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// GET `base_path + path` and return the body as untyped JSON.
    pub async fn fetch_json(&self, path: &str) -> Result<Value, FetchError> {
        let full_path = format!("{}{}", self.config.base_path, path);
        let mut attempt = 0;
        loop {
            match self.fetch_once(&full_path).await {
                Err(err) if attempt < self.config.retries && err.is_retryable() => {
                    attempt += 1;
                    tracing::warn!(
                        path = %full_path,
                        attempt,
                        error = %err,
                        "Retrying API request"
                    );
                }
                result => return result,
            }
        }
    }

    async fn fetch_once(&self, full_path: &str) -> Result<Value, FetchError> {
        tracing::debug!(path = %full_path, "GET");
        let response = self.transport.get(full_path).await?;
        if !response.is_success() {
            return Err(FetchError::RequestFailed {
                status: response.status,
            });
        }
        Ok(serde_json::from_slice(&response.body)?)
    }

    async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R, FetchError> {
        let value = self.fetch_json(&endpoint.path()).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get_health(&self) -> Result<HealthRecord, FetchError> {
        self.fetch(Endpoint::Health).await
    }

    pub async fn get_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        self.fetch(Endpoint::Users).await
    }

    pub async fn get_user(&self, id: impl Display) -> Result<UserRecord, FetchError> {
        self.fetch(Endpoint::User(id.to_string())).await
    }

    pub async fn get_items(&self) -> Result<Vec<ItemRecord>, FetchError> {
        self.fetch(Endpoint::Items).await
    }

    pub async fn get_items_by_owner(
        &self,
        owner_id: impl Display,
    ) -> Result<Vec<ItemRecord>, FetchError> {
        self.fetch(Endpoint::ItemsByOwner(owner_id.to_string())).await
    }

    pub async fn get_items_by_category(
        &self,
        category_id: impl Display,
    ) -> Result<Vec<ItemRecord>, FetchError> {
        self.fetch(Endpoint::ItemsByCategory(category_id.to_string())).await
    }

    /// Items the backend considers below its stock threshold.
    pub async fn get_low_stock_items(&self) -> Result<Vec<ItemRecord>, FetchError> {
        self.fetch(Endpoint::LowStockItems).await
    }
}
