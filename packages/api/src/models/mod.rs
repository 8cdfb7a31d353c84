//! Records returned by the backend.
//!
//! All records are read-only once decoded; the UI derives display strings from
//! them and never writes back.

mod health;
mod item;
mod user;

pub use health::HealthRecord;
pub use item::ItemRecord;
pub use user::UserRecord;
