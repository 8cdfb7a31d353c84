use dioxus::prelude::*;

use ui::views::DashboardView;
use ui::PageConfig;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");
const DASHBOARD_TOML: &str = include_str!("../dashboard.toml");

fn main() {
    dioxus::launch(App);
}

/// Embedded `dashboard.toml`, with the API origin defaulting to the page's own.
fn page_config() -> PageConfig {
    let mut config = PageConfig::from_toml(DASHBOARD_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", PageConfig::filename(), e);
        PageConfig::default()
    });
    if config.api.origin.is_none() {
        config.api.origin = page_origin();
    }
    config
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[component]
fn App() -> Element {
    let config = use_hook(page_config);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        DashboardView { config }
    }
}
