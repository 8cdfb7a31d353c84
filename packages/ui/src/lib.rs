//! This crate contains the dashboard's rendering pipeline and its UI.
//!
//! The pipeline is plain Rust and runs anywhere: [`sections`] fetch through an
//! [`api::ApiClient`], [`render`] turns records into [`Entry`] values, and
//! [`Bootstrap`] starts the sections as independent tasks writing into
//! [`TextTarget`] / [`ListTarget`] implementations. The Dioxus views plug
//! signals in as targets.

pub mod activity_log;
pub use activity_log::{ActivityLog, LogEntry, LogLevel};

pub mod bootstrap;
pub use bootstrap::{Bootstrap, RenderTargets};

pub mod categories;
pub use categories::{CategoryName, CategoryTable, UNKNOWN_CATEGORY};

pub mod config;
pub use config::{ItemsConfig, PageConfig};

mod entry;
pub use entry::{Entry, Field};

pub mod render;
pub use render::{format_price, ItemStyle, OFFLINE};

pub mod sections;
pub use sections::Section;

pub mod target;
pub use target::{ListTarget, MemoryList, MemoryText, TextTarget};

mod online_indicator;
pub use online_indicator::OnlineIndicator;

pub mod views;
