//! # Client configuration: the `[api]` table of `dashboard.toml`
//!
//! ```toml
//! [api]
//! base_path = "/api"                 # prefix joined with every relative path
//! origin = "http://localhost:8080"   # omit in the browser: the page origin is used
//! retries = 0                        # extra attempts after a transport error or 5xx
//! timeout_ms = 5000                  # omit for no timeout (native only)
//! ```
//!
//! Every field has a default, so an empty table is the production behaviour: one
//! attempt per call against `/api` with no timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for [`crate::ApiClient`] and [`crate::HttpTransport`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Prefix prepended to every relative path.
    #[serde(default = "default_base_path")]
    pub base_path: String,
    /// Scheme and authority the base path is resolved against.
    #[serde(default)]
    pub origin: Option<String>,
    /// Extra attempts after a retryable failure. 0 means a single attempt.
    #[serde(default)]
    pub retries: u32,
    /// Per-request timeout in milliseconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_base_path() -> String {
    "/api".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            origin: None,
            retries: 0,
            timeout_ms: None,
        }
    }
}

impl ClientConfig {
    /// Builder method to set the origin requests are resolved against.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Builder method to set the number of retries.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Builder method to set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
