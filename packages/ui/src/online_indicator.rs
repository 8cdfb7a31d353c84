//! Backend version / offline indicator for the page header.

use dioxus::prelude::*;

use crate::render::OFFLINE;

/// Shows whatever the health section wrote: `"v1.2"` once the backend answers,
/// `"offline"` if it does not. Empty while the request is in flight.
#[component]
pub fn OnlineIndicator(text: String) -> Element {
    let class = if text == OFFLINE {
        "online-indicator online-indicator--offline"
    } else {
        "online-indicator"
    };

    rsx! {
        span {
            id: "version",
            class: "{class}",
            "{text}"
        }
    }
}
