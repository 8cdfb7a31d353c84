//! # Sections: fetch, transform, render
//!
//! Each section is one async function that owns its render target for the
//! duration of the call and catches every [`FetchError`] at its own boundary.
//! Nothing is returned: the outcome is visible only in the target and in the
//! [`ActivityLog`].
//!
//! | Section | Success | Failure |
//! |---------|---------|---------|
//! | [`health_section`] | `"v" + version` in the version target | `"offline"` in the version target |
//! | [`users_section`] | one entry per user, server order | target untouched, error journaled |
//! | [`items_section`] | one entry per item, server order | target untouched, error journaled |
//!
//! Collections are decoded completely before the first append, so a list target
//! never receives part of a response.

use std::fmt;

use api::{ApiClient, FetchError, Transport};

use crate::activity_log::{ActivityLog, LogLevel};
use crate::render::{item_entry, user_entry, version_label, ItemStyle, OFFLINE};
use crate::target::{ListTarget, TextTarget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Health,
    Users,
    Items,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::Health => "health",
            Section::Users => "users",
            Section::Items => "items",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn record_failure(log: &ActivityLog, section: Section, err: &FetchError) {
    let message = format!("Failed to load {section}: {err}");
    match section {
        Section::Health => {
            tracing::warn!(
                section = section.name(),
                status = ?err.status(),
                error = %err,
                "Backend unavailable, showing offline"
            );
            log.push(LogLevel::Warning, &message);
        }
        Section::Users | Section::Items => {
            tracing::error!(
                section = section.name(),
                status = ?err.status(),
                error = %err,
                "Failed to load section"
            );
            log.push(LogLevel::Error, &message);
        }
    }
}

pub async fn health_section<T: Transport>(
    client: &ApiClient<T>,
    target: &mut impl TextTarget,
    log: &ActivityLog,
) {
    match client.get_health().await {
        Ok(health) => target.set_text(&version_label(&health)),
        Err(err) => {
            record_failure(log, Section::Health, &err);
            target.set_text(OFFLINE);
        }
    }
}

pub async fn users_section<T: Transport>(
    client: &ApiClient<T>,
    target: &mut impl ListTarget,
    log: &ActivityLog,
) {
    match client.get_users().await {
        Ok(users) => {
            for user in &users {
                target.append(user_entry(user));
            }
        }
        Err(err) => record_failure(log, Section::Users, &err),
    }
}

pub async fn items_section<T: Transport>(
    client: &ApiClient<T>,
    target: &mut impl ListTarget,
    style: &ItemStyle,
    log: &ActivityLog,
) {
    match client.get_items().await {
        Ok(items) => {
            for item in &items {
                target.append(item_entry(item, style));
            }
        }
        Err(err) => record_failure(log, Section::Items, &err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::CategoryTable;
    use crate::target::{MemoryList, MemoryText};
    use api::{ClientConfig, MemoryTransport};
    use serde_json::json;

    fn client(transport: MemoryTransport) -> ApiClient<MemoryTransport> {
        ApiClient::new(transport, ClientConfig::default())
    }

    #[tokio::test]
    async fn test_health_success() {
        let client =
            client(MemoryTransport::new().with_json("/api/health", &json!({"version": "1.4.2"})));
        let mut target = MemoryText::new();
        let log = ActivityLog::new();

        health_section(&client, &mut target, &log).await;

        assert_eq!(target.text(), "v1.4.2");
        assert!(log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_health_offline_for_every_failure_class() {
        let transports = [
            MemoryTransport::new().with_unreachable("/api/health", "connection refused"),
            MemoryTransport::new().with_response("/api/health", 503, ""),
            MemoryTransport::new().with_response("/api/health", 200, "not json"),
            MemoryTransport::new().with_json("/api/health", &json!({"status": "ok"})),
        ];
        for transport in transports {
            let mut target = MemoryText::new();
            let log = ActivityLog::new();

            health_section(&client(transport), &mut target, &log).await;

            assert_eq!(target.text(), OFFLINE);
            assert_eq!(log.entries().len(), 1);
            assert_eq!(log.entries()[0].level, LogLevel::Warning);
        }
    }

    #[tokio::test]
    async fn test_users_render_in_server_order() {
        let client = client(MemoryTransport::new().with_json(
            "/api/users",
            &json!([
                {"id": 2, "name": "Bob", "email": "b@x.com"},
                {"id": 1, "name": "Ann", "email": "a@x.com"},
                {"id": 3, "name": "Cy", "email": "c@x.com"},
            ]),
        ));
        let target = MemoryList::new();
        let log = ActivityLog::new();

        users_section(&client, &mut target.clone(), &log).await;

        let rows: Vec<_> = target.entries().iter().map(|e| e.texts().join("|")).collect();
        assert_eq!(rows, ["Bob|b@x.com", "Ann|a@x.com", "Cy|c@x.com"]);
    }

    #[tokio::test]
    async fn test_users_failure_leaves_target_untouched() {
        let client = client(MemoryTransport::new().with_response("/api/users", 500, ""));
        let target = MemoryList::new();
        let log = ActivityLog::new();

        users_section(&client, &mut target.clone(), &log).await;

        assert!(target.is_empty());
        assert!(log.has_errors());
        assert_eq!(
            log.entries()[0].message,
            "Failed to load users: API error: 500"
        );
    }

    #[tokio::test]
    async fn test_users_malformed_record_renders_nothing() {
        let client = client(MemoryTransport::new().with_json(
            "/api/users",
            &json!([
                {"id": 1, "name": "Ann", "email": "a@x.com"},
                {"id": 2, "email": "b@x.com"},
            ]),
        ));
        let target = MemoryList::new();
        let log = ActivityLog::new();

        users_section(&client, &mut target.clone(), &log).await;

        assert!(target.is_empty());
        assert!(log.has_errors());
    }

    #[tokio::test]
    async fn test_empty_collection_renders_nothing_without_error() {
        let client = client(MemoryTransport::new().with_json("/api/items", &json!([])));
        let target = MemoryList::new();
        let log = ActivityLog::new();

        items_section(&client, &mut target.clone(), &ItemStyle::default(), &log).await;

        assert!(target.is_empty());
        assert!(log.entries().is_empty());
    }

    #[tokio::test]
    async fn test_items_with_category_enrichment() {
        let client = client(MemoryTransport::new().with_json(
            "/api/items",
            &json!([
                {"id": 1, "name": "Widget", "price": 9.99, "owner_id": 1, "category_id": 1},
                {"id": 2, "name": "Gadget", "price": 24.99, "owner_id": 2, "category_id": 7},
                {"id": 3, "name": "Doohickey", "price": 4.99, "owner_id": 1},
            ]),
        ));
        let target = MemoryList::new();
        let log = ActivityLog::new();

        items_section(&client, &mut target.clone(), &ItemStyle::default(), &log).await;

        let rows: Vec<_> = target.entries().iter().map(|e| e.texts().join("|")).collect();
        assert_eq!(
            rows,
            [
                "Widget|Electronics|$9.99",
                "Gadget|Unknown|$24.99",
                "Doohickey|Unknown|$4.99",
            ]
        );
    }

    #[tokio::test]
    async fn test_items_plain_style() {
        let client = client(MemoryTransport::new().with_json(
            "/api/items",
            &json!([{"id": 1, "name": "Bolt", "price": 9, "category_id": 2}]),
        ));
        let target = MemoryList::new();
        let log = ActivityLog::new();

        items_section(&client, &mut target.clone(), &ItemStyle::Plain, &log).await;

        assert_eq!(target.entries()[0].texts(), ["Bolt", "$9.00"]);
    }

    #[tokio::test]
    async fn test_items_use_injected_table() {
        let client = client(MemoryTransport::new().with_json(
            "/api/items",
            &json!([{"id": 1, "name": "Bolt", "price": 1.5, "category_id": 1}]),
        ));
        let style = ItemStyle::WithCategory(CategoryTable::new([(1, "Fasteners".to_string())]));
        let target = MemoryList::new();

        items_section(&client, &mut target.clone(), &style, &ActivityLog::new()).await;

        assert_eq!(target.entries()[0].field("category"), Some("Fasteners"));
    }

    #[tokio::test]
    async fn test_items_transport_failure_is_journaled() {
        let client = client(MemoryTransport::new().with_unreachable("/api/items", "dns"));
        let target = MemoryList::new();
        let log = ActivityLog::new();

        items_section(&client, &mut target.clone(), &ItemStyle::default(), &log).await;

        assert!(target.is_empty());
        assert_eq!(
            log.entries()[0].message,
            "Failed to load items: transport error: dns"
        );
    }
}
