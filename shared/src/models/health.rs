//! Health Model

use serde::{Deserialize, Serialize};

/// Liveness snapshot returned by the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub environment: String,
}
