//! Data models
//!
//! Shared between the server and its tests.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//!
//! Each model also has a `*View` type: the exact JSON shape the API returns.

pub mod pizza;
pub mod restaurant;
pub mod restaurant_pizza;

// Re-exports
pub use pizza::*;
pub use restaurant::*;
pub use restaurant_pizza::*;
