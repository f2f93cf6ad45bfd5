//! Unified error codes for AptCare
//!
//! This module defines all error codes used across the desk server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: User errors
//! - 2xxx: Complaint errors
//! - 3xxx: Feedback errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: User ====================
    /// Acting user header is missing from the request
    ActingUserMissing = 1001,
    /// Acting user is not in the directory
    ActingUserUnknown = 1002,
    /// User not found
    UserNotFound = 1003,
    /// User is not a maintenance worker
    NotAWorker = 1004,
    /// Operation requires the resident role
    ResidentRequired = 1005,
    /// Operation requires the admin role
    AdminRequired = 1006,

    // ==================== 2xxx: Complaint ====================
    /// Complaint not found
    ComplaintNotFound = 2001,
    /// Status transition is not allowed
    InvalidStatusTransition = 2002,
    /// Complaint already has a worker assigned
    ComplaintAlreadyAssigned = 2003,
    /// Acting worker is not the assigned worker
    NotAssignedWorker = 2004,
    /// Acting resident does not own the complaint
    NotComplaintOwner = 2005,

    // ==================== 3xxx: Feedback ====================
    /// Feedback has already been submitted
    FeedbackAlreadySubmitted = 3001,
    /// Rating is outside the accepted range
    RatingOutOfRange = 3002,
    /// Complaint is not completed yet
    ComplaintNotCompleted = 3003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // User
            ErrorCode::ActingUserMissing => "Acting user header is missing",
            ErrorCode::ActingUserUnknown => "Acting user is not in the directory",
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::NotAWorker => "User is not a maintenance worker",
            ErrorCode::ResidentRequired => "Only residents can perform this operation",
            ErrorCode::AdminRequired => "Only admins can perform this operation",

            // Complaint
            ErrorCode::ComplaintNotFound => "Complaint not found",
            ErrorCode::InvalidStatusTransition => "Status transition is not allowed",
            ErrorCode::ComplaintAlreadyAssigned => "Complaint already has a worker assigned",
            ErrorCode::NotAssignedWorker => "Only the assigned worker can update this complaint",
            ErrorCode::NotComplaintOwner => "Only the submitting resident can rate this complaint",

            // Feedback
            ErrorCode::FeedbackAlreadySubmitted => "Feedback has already been submitted",
            ErrorCode::RatingOutOfRange => "Rating must be between 1 and 5",
            ErrorCode::ComplaintNotCompleted => "Complaint is not completed yet",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // User
            1001 => Ok(ErrorCode::ActingUserMissing),
            1002 => Ok(ErrorCode::ActingUserUnknown),
            1003 => Ok(ErrorCode::UserNotFound),
            1004 => Ok(ErrorCode::NotAWorker),
            1005 => Ok(ErrorCode::ResidentRequired),
            1006 => Ok(ErrorCode::AdminRequired),

            // Complaint
            2001 => Ok(ErrorCode::ComplaintNotFound),
            2002 => Ok(ErrorCode::InvalidStatusTransition),
            2003 => Ok(ErrorCode::ComplaintAlreadyAssigned),
            2004 => Ok(ErrorCode::NotAssignedWorker),
            2005 => Ok(ErrorCode::NotComplaintOwner),

            // Feedback
            3001 => Ok(ErrorCode::FeedbackAlreadySubmitted),
            3002 => Ok(ErrorCode::RatingOutOfRange),
            3003 => Ok(ErrorCode::ComplaintNotCompleted),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::Unknown.code(), 1);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::AlreadyExists.code(), 4);
        assert_eq!(ErrorCode::InvalidRequest.code(), 5);

        // User
        assert_eq!(ErrorCode::ActingUserMissing.code(), 1001);
        assert_eq!(ErrorCode::ActingUserUnknown.code(), 1002);
        assert_eq!(ErrorCode::UserNotFound.code(), 1003);
        assert_eq!(ErrorCode::NotAWorker.code(), 1004);
        assert_eq!(ErrorCode::ResidentRequired.code(), 1005);
        assert_eq!(ErrorCode::AdminRequired.code(), 1006);

        // Complaint
        assert_eq!(ErrorCode::ComplaintNotFound.code(), 2001);
        assert_eq!(ErrorCode::InvalidStatusTransition.code(), 2002);
        assert_eq!(ErrorCode::ComplaintAlreadyAssigned.code(), 2003);
        assert_eq!(ErrorCode::NotAssignedWorker.code(), 2004);
        assert_eq!(ErrorCode::NotComplaintOwner.code(), 2005);

        // Feedback
        assert_eq!(ErrorCode::FeedbackAlreadySubmitted.code(), 3001);
        assert_eq!(ErrorCode::RatingOutOfRange.code(), 3002);
        assert_eq!(ErrorCode::ComplaintNotCompleted.code(), 3003);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::ComplaintNotFound.is_success());
        assert!(!ErrorCode::InternalError.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::ActingUserMissing));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::ComplaintNotFound));
        assert_eq!(ErrorCode::try_from(9001), Ok(ErrorCode::InternalError));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize() {
        let code = ErrorCode::NotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "3");

        let code = ErrorCode::ComplaintNotFound;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "2001");

        let code = ErrorCode::Success;
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "0");
    }

    #[test]
    fn test_deserialize() {
        let code: ErrorCode = serde_json::from_str("0").unwrap();
        assert_eq!(code, ErrorCode::Success);

        let code: ErrorCode = serde_json::from_str("2001").unwrap();
        assert_eq!(code, ErrorCode::ComplaintNotFound);

        let code: ErrorCode = serde_json::from_str("9001").unwrap();
        assert_eq!(code, ErrorCode::InternalError);
    }

    #[test]
    fn test_deserialize_invalid() {
        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());

        let result: Result<ErrorCode, _> = serde_json::from_str("10000");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::NotFound), "3");
        assert_eq!(format!("{}", ErrorCode::ComplaintNotFound), "2001");
        assert_eq!(format!("{}", ErrorCode::InternalError), "9001");
    }

    #[test]
    fn test_message() {
        assert_eq!(
            ErrorCode::Success.message(),
            "Operation completed successfully"
        );
        assert_eq!(ErrorCode::NotFound.message(), "Resource not found");
        assert_eq!(ErrorCode::ComplaintNotFound.message(), "Complaint not found");
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }

    #[test]
    fn test_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::ActingUserUnknown,
            ErrorCode::NotAWorker,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::FeedbackAlreadySubmitted,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }
}
