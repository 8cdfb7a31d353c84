use dioxus::prelude::*;

use crate::entry::Entry;

/// A `<ul>` with one `<li>` per entry and one `<span>` per field.
#[component]
pub fn EntryList(id: String, entries: Vec<Entry>) -> Element {
    rsx! {
        ul {
            id: "{id}",
            class: "entry-list",
            for (index, entry) in entries.iter().enumerate() {
                li {
                    key: "{index}",
                    for field in entry.fields.iter() {
                        span {
                            class: field.class,
                            "{field.text}"
                        }
                    }
                }
            }
        }
    }
}
