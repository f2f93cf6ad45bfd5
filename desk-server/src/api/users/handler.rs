//! User API Handlers

use axum::extract::State;
use shared::error::ApiResponse;
use shared::models::User;

use crate::core::ServerState;
use crate::utils::ok;

/// List the full user roster
pub async fn list(State(state): State<ServerState>) -> ApiResponse<Vec<User>> {
    ok(state.directory.list().to_vec())
}

/// List maintenance workers only (for the assignment picker)
pub async fn workers(State(state): State<ServerState>) -> ApiResponse<Vec<User>> {
    ok(state.directory.workers())
}
