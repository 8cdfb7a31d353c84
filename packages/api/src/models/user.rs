//! # User record
//!
//! [`UserRecord`] is what `GET /api/users` returns as an ordered array and
//! `GET /api/users/{id}` returns on its own. Only `name` and `email` are shown
//! in the page; `id` is kept, untyped and optional, so callers can build
//! follow-up paths such as `/items/by-owner/{id}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user as served by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// Whatever the backend uses as a key; absent in some payloads.
    #[serde(default)]
    pub id: Option<Value>,
    pub name: String,
    pub email: String,
}
