//! AptCare Client - HTTP client for the Desk Server
//!
//! Provides network-based HTTP calls to the Desk Server API.
//! With the `in-process` feature, also drives an `axum::Router`
//! directly through tower (zero network, used by integration tests).

pub mod client;
pub mod error;

pub use client::{AptCareClient, Client, InProcessClient, NetworkClient};
pub use error::{ClientError, ClientResult};

// Re-export shared types for convenience
pub use shared::error::ApiResponse;
pub use shared::models::{
    Category, Complaint, ComplaintCreate, ComplaintStatus, HealthStatus, InsightsReport, Priority,
    User, UserRole,
};
