//! # Render targets: where sections write
//!
//! A section owns exactly one target and nothing else writes to it, so targets
//! need no coordination between sections.
//!
//! | Trait | Page implementation | Test implementation |
//! |-------|--------------------|---------------------|
//! | [`TextTarget`] | `Signal<String>` behind `<span id="version">` | [`MemoryText`] |
//! | [`ListTarget`] | `Signal<Vec<Entry>>` behind `<ul id="users-list">` / `<ul id="items-list">` | [`MemoryList`] |

use std::sync::{Arc, Mutex, MutexGuard};

use dioxus::prelude::*;

use crate::entry::Entry;

/// A single-value text display.
pub trait TextTarget {
    fn set_text(&mut self, text: &str);
}

/// A list display that only grows by whole entries.
pub trait ListTarget {
    fn append(&mut self, entry: Entry);
}

impl TextTarget for Signal<String> {
    fn set_text(&mut self, text: &str) {
        self.set(text.to_string());
    }
}

impl ListTarget for Signal<Vec<Entry>> {
    fn append(&mut self, entry: Entry) {
        self.write().push(entry);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory TextTarget. Clones share the same text.
#[derive(Clone, Debug, Default)]
pub struct MemoryText {
    text: Arc<Mutex<String>>,
}

impl MemoryText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        lock(&self.text).clone()
    }
}

impl TextTarget for MemoryText {
    fn set_text(&mut self, text: &str) {
        *lock(&self.text) = text.to_string();
    }
}

/// In-memory ListTarget. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryList {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl MemoryList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Entry> {
        lock(&self.entries).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ListTarget for MemoryList {
    fn append(&mut self, entry: Entry) {
        lock(&self.entries).push(entry);
    }
}
