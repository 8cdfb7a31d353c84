use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Label shown for a category id the table does not know.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One `[[items.categories]]` row of the page configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryName {
    pub id: i64,
    pub name: String,
}

/// Immutable mapping from category id to display name.
///
/// The backend only sends ids; names are a display concern owned by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTable {
    names: BTreeMap<i64, String>,
}

impl CategoryTable {
    pub fn new(names: impl IntoIterator<Item = (i64, String)>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn from_entries(entries: &[CategoryName]) -> Self {
        Self::new(entries.iter().map(|c| (c.id, c.name.clone())))
    }

    /// Display name for `id`, or [`UNKNOWN_CATEGORY`] when absent or unmapped.
    pub fn name_for(&self, id: Option<i64>) -> &str {
        id.and_then(|id| self.names.get(&id))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The categories the backend ships with.
pub fn default_categories() -> Vec<CategoryName> {
    [(1, "Electronics"), (2, "Tools"), (3, "Toys")]
        .into_iter()
        .map(|(id, name)| CategoryName {
            id,
            name: name.to_string(),
        })
        .collect()
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::from_entries(&default_categories())
    }
}
