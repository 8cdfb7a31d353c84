use serde::{Deserialize, Serialize};

/// Liveness payload from `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthRecord {
    pub version: String,
}
