//! Complaint API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{ApiResponse, AppError, AppResult};
use shared::models::{
    Complaint, ComplaintAssign, ComplaintCreate, ComplaintFeedback, ComplaintStatusUpdate,
    UserRole,
};
use validator::Validate;

use crate::core::ServerState;
use crate::identity::ActingUser;
use crate::utils::{ok, ok_with_message};

/// Submit a new complaint
///
/// The resident's manual category/priority ride along as the fallback
/// for when classification fails.
pub async fn submit(
    State(state): State<ServerState>,
    ActingUser(actor): ActingUser,
    Json(payload): Json<ComplaintCreate>,
) -> AppResult<ApiResponse<Complaint>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let complaint = state.submission.submit(&actor, payload).await?;
    Ok(ok_with_message(complaint, "Complaint submitted"))
}

/// List complaints visible to the acting user
pub async fn list(
    State(state): State<ServerState>,
    ActingUser(actor): ActingUser,
) -> ApiResponse<Vec<Complaint>> {
    ok(state.store.visible_to(&actor))
}

/// Get one complaint, if it falls within the acting user's filter
///
/// Records outside the filter read as absent rather than forbidden.
pub async fn get_by_id(
    State(state): State<ServerState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Complaint>> {
    let complaint = state.store.get(&id)?;

    let visible = match actor.role {
        UserRole::Admin => true,
        UserRole::Resident => complaint.resident_id == actor.id,
        UserRole::Worker => complaint.worker_id.as_deref() == Some(actor.id.as_str()),
    };
    if !visible {
        return Err(AppError::complaint_not_found(id));
    }

    Ok(ok(complaint))
}

/// Assign a worker to a pending complaint (admin only)
pub async fn assign(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ComplaintAssign>,
) -> AppResult<ApiResponse<Complaint>> {
    let worker = state
        .directory
        .get(&payload.worker_id)
        .cloned()
        .ok_or_else(|| AppError::user_not_found(&payload.worker_id))?;

    let complaint = state.store.assign(&id, &worker)?;
    tracing::info!(complaint = %id, worker = %worker.id, "Complaint assigned");

    Ok(ok_with_message(complaint, "Worker assigned"))
}

/// Move a complaint along the lifecycle (assigned worker only)
pub async fn update_status(
    State(state): State<ServerState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<String>,
    Json(payload): Json<ComplaintStatusUpdate>,
) -> AppResult<ApiResponse<Complaint>> {
    let complaint = state.store.get(&id)?;
    if complaint.worker_id.as_deref() != Some(actor.id.as_str()) {
        return Err(AppError::not_assigned_worker(id));
    }

    let updated = state.store.set_status(&id, payload.status)?;
    tracing::info!(complaint = %id, status = %updated.status, "Complaint status updated");

    Ok(ok_with_message(updated, "Status updated"))
}

/// Leave feedback on a completed complaint (owning resident only)
pub async fn feedback(
    State(state): State<ServerState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<String>,
    Json(payload): Json<ComplaintFeedback>,
) -> AppResult<ApiResponse<Complaint>> {
    let complaint = state.store.get(&id)?;
    if complaint.resident_id != actor.id {
        return Err(AppError::not_complaint_owner(id));
    }

    let rated = state
        .store
        .set_feedback(&id, payload.rating, payload.feedback)?;
    tracing::info!(complaint = %id, rating = payload.rating, "Feedback recorded");

    Ok(ok_with_message(rated, "Feedback recorded"))
}
