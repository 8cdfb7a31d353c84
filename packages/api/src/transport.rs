//! The seam between [`crate::ApiClient`] and the network.
//!
//! A [`Transport`] performs exactly one GET and reports what came back. It does
//! not judge the status code or parse the body; that policy lives in the client
//! so every transport behaves the same. Implementations:
//! [`crate::HttpTransport`] (reqwest) and [`crate::MemoryTransport`] (canned).

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Async GET primitive.
///
/// `path` is absolute on the server (`/api/users`), already carrying any
/// interpolated identifiers. Errors are reserved for failures to complete the
/// exchange; a 404 is a successful exchange.
pub trait Transport {
    fn get(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<RawResponse, crate::FetchError>>;
}
