use api::{ApiClient, HttpTransport};
use dioxus::prelude::*;

use crate::activity_log::{ActivityLog, LogLevel};
use crate::bootstrap::{Bootstrap, RenderTargets};
use crate::config::PageConfig;
use crate::entry::Entry;
use crate::render::OFFLINE;
use crate::target::TextTarget;
use crate::views::EntryList;
use crate::OnlineIndicator;

/// The dashboard page: version indicator, users list, items list.
///
/// Sections start once, when the view mounts, and each fills its own signal.
/// The [`ActivityLog`] is provided as context for devtools; it is not shown.
#[component]
pub fn DashboardView(config: PageConfig) -> Element {
    let mut version = use_signal(String::new);
    let users = use_signal(Vec::<Entry>::new);
    let items = use_signal(Vec::<Entry>::new);
    let log = use_context_provider(ActivityLog::new);

    use_hook(move || {
        let transport = match HttpTransport::from_config(&config.api) {
            Ok(transport) => transport,
            Err(err) => {
                tracing::error!(error = %err, "Cannot build the API transport");
                log.push(LogLevel::Error, &format!("Cannot build the API transport: {err}"));
                version.set_text(OFFLINE);
                return;
            }
        };
        let client = ApiClient::new(transport, config.api.clone());
        Bootstrap::new(client, config.items.item_style(), log).start(
            RenderTargets {
                version,
                users,
                items,
            },
            |section| {
                spawn(section);
            },
        );
    });

    rsx! {
        div {
            class: "dashboard",
            header {
                class: "dashboard-header",
                h1 { "Dashboard" }
                OnlineIndicator { text: version() }
            }
            section {
                class: "dashboard-section",
                h2 { "Users" }
                EntryList { id: "users-list", entries: users() }
            }
            section {
                class: "dashboard-section",
                h2 { "Items" }
                EntryList { id: "items-list", entries: items() }
            }
        }
    }
}
