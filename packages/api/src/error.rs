//! Failure taxonomy for API requests.

use thiserror::Error;

/// Why a request did not produce usable data.
///
/// Sections treat every variant as "resource unavailable"; the variants only
/// exist so diagnostics can say which layer failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server could not be reached (DNS, connection, CORS, timeout).
    #[error("transport error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("API error: {status}")]
    RequestFailed { status: u16 },
    /// The body was not valid JSON or did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }

    /// Transport failures and 5xx answers may succeed on another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::RequestFailed { status } => *status >= 500,
            Self::Decode(_) => false,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
