//! # API crate: typed client for the dashboard's JSON backend
//!
//! This crate is the leaf of the dashboard workspace. It knows how to reach the
//! backend's `/api` routes, how to tell a usable response from a failed one, and
//! how to turn the JSON it gets back into read-only records. It knows nothing
//! about pages or rendering; the `ui` crate consumes it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] and the [`Endpoint`] descriptors: base-path joining, status policy, JSON decoding, optional retries |
//! | [`transport`] | The async [`Transport`] trait and the [`RawResponse`] it yields |
//! | [`http`] | [`HttpTransport`], the reqwest-backed transport used natively and in the browser |
//! | [`config`] | [`ClientConfig`]: base path, origin, retries and timeout |
//! | [`error`] | [`FetchError`]: transport, status and decode failures |
//! | [`models`] | [`HealthRecord`], [`UserRecord`], [`ItemRecord`] |
//!
//! [`MemoryTransport`] is an in-memory transport with canned responses, used by
//! tests throughout the workspace.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod transport;

mod memory;
pub use memory::MemoryTransport;

pub use client::{ApiClient, Endpoint};
pub use config::ClientConfig;
pub use error::FetchError;
pub use http::HttpTransport;
pub use models::{HealthRecord, ItemRecord, UserRecord};
pub use transport::{RawResponse, Transport};
