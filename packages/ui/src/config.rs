//! # Page configuration: `dashboard.toml`
//!
//! Read once when the page starts. Every field has a default, so a missing or
//! empty file gives the production behaviour.
//!
//! ```toml
//! [api]
//! base_path = "/api"
//! retries = 0
//!
//! [items]
//! category_enrichment = true   # false renders name + price only
//!
//! [[items.categories]]
//! id = 1
//! name = "Electronics"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PageConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`api::ClientConfig`] | The `[api]` table. |
//! | [`ItemsConfig`] | The `[items]` table: enrichment switch and category names. |

use api::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::categories::{default_categories, CategoryName, CategoryTable};
use crate::render::ItemStyle;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub api: ClientConfig,
    #[serde(default)]
    pub items: ItemsConfig,
}

/// How the items section presents records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemsConfig {
    /// Show a category name next to each item.
    #[serde(default = "default_category_enrichment")]
    pub category_enrichment: bool,
    /// Names for category ids. Replaces the defaults entirely when present.
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryName>,
}

fn default_category_enrichment() -> bool {
    true
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            category_enrichment: default_category_enrichment(),
            categories: default_categories(),
        }
    }
}

impl ItemsConfig {
    pub fn item_style(&self) -> ItemStyle {
        if self.category_enrichment {
            ItemStyle::WithCategory(CategoryTable::from_entries(&self.categories))
        } else {
            ItemStyle::Plain
        }
    }
}

impl PageConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
