//! Shared types for AptCare
//!
//! Common types used by the desk server and its clients: domain models,
//! error types and the unified API response structure.

pub mod error;
pub mod models;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Category, Complaint, ComplaintStatus, Priority, TriageSuggestion, User, UserRole};
