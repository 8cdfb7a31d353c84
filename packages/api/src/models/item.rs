use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An item as served by `GET /api/items` and its filtered variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    /// Backend key, kept untyped; the page never reads it.
    #[serde(default)]
    pub id: Option<Value>,
    pub name: String,
    pub price: f64,
    /// Missing ids are rendered with the fallback category label.
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub owner_id: Option<Value>,
    /// Stock level; only the low-stock route filters on it.
    #[serde(default)]
    pub quantity: Option<i64>,
}
