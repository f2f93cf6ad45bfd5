//! Data models
//!
//! Shared between desk-server and the typed API client.
//! Domain enums use SCREAMING_SNAKE_CASE wire casing.

pub mod complaint;
pub mod health;
pub mod insights;
pub mod user;

// Re-exports
pub use complaint::*;
pub use health::*;
pub use insights::*;
pub use user::*;
