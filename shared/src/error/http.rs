//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::UserNotFound | Self::ComplaintNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::InvalidStatusTransition
            | Self::ComplaintAlreadyAssigned
            | Self::FeedbackAlreadySubmitted
            | Self::ComplaintNotCompleted => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::ActingUserMissing | Self::ActingUserUnknown => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::ResidentRequired
            | Self::AdminRequired
            | Self::NotAssignedWorker
            | Self::NotComplaintOwner => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
