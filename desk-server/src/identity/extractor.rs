//! Acting User Extractor
//!
//! Custom extractor that resolves the `x-acting-user` header against the
//! user directory

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::AppError;
use shared::models::{User, ACTING_USER_HEADER};

use crate::core::ServerState;

/// The user a request acts as
///
/// Resolved from the `x-acting-user` header. Use this extractor in
/// protected handlers to get the full directory record of the caller.
#[derive(Debug, Clone)]
pub struct ActingUser(pub User);

impl FromRequestParts<ServerState> for ActingUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already resolved (from middleware)
        if let Some(acting) = parts.extensions.get::<ActingUser>() {
            return Ok(acting.clone());
        }

        let user_id = parts
            .headers
            .get(ACTING_USER_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(AppError::acting_user_missing)?;

        let user = state
            .directory
            .get(user_id)
            .cloned()
            .ok_or_else(|| AppError::acting_user_unknown(user_id))?;

        let acting = ActingUser(user);

        // Store in extensions for potential reuse
        parts.extensions.insert(acting.clone());

        Ok(acting)
    }
}
