//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: User errors
/// - 2xxx: Complaint errors
/// - 3xxx: Feedback errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// User errors (1xxx)
    User,
    /// Complaint errors (2xxx)
    Complaint,
    /// Feedback errors (3xxx)
    Feedback,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::User,
            2000..3000 => Self::Complaint,
            3000..4000 => Self::Feedback,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::User => "user",
            Self::Complaint => "complaint",
            Self::Feedback => "feedback",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(5), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::User);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::User);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Complaint);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Feedback);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ActingUserMissing.category(), ErrorCategory::User);
        assert_eq!(
            ErrorCode::ComplaintNotFound.category(),
            ErrorCategory::Complaint
        );
        assert_eq!(
            ErrorCode::FeedbackAlreadySubmitted.category(),
            ErrorCategory::Feedback
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::User.name(), "user");
        assert_eq!(ErrorCategory::Complaint.name(), "complaint");
        assert_eq!(ErrorCategory::Feedback.name(), "feedback");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let category = ErrorCategory::User;
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, "\"user\"");

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
