//! Complaint Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// Maintenance category (fixed enumeration)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Electrical,
    Plumbing,
    Cleaning,
    Lift,
    Security,
    Other,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 6] = [
        Category::Electrical,
        Category::Plumbing,
        Category::Cleaning,
        Category::Lift,
        Category::Security,
        Category::Other,
    ];

    /// Wire-format string for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Electrical => "ELECTRICAL",
            Self::Plumbing => "PLUMBING",
            Self::Cleaning => "CLEANING",
            Self::Lift => "LIFT",
            Self::Security => "SECURITY",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for category strings outside the fixed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid category: {0}")]
pub struct InvalidCategory(pub String);

impl TryFrom<&str> for Category {
    type Error = InvalidCategory;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "ELECTRICAL" => Ok(Self::Electrical),
            "PLUMBING" => Ok(Self::Plumbing),
            "CLEANING" => Ok(Self::Cleaning),
            "LIFT" => Ok(Self::Lift),
            "SECURITY" => Ok(Self::Security),
            "OTHER" => Ok(Self::Other),
            other => Err(InvalidCategory(other.to_string())),
        }
    }
}

/// Complaint priority (fixed enumeration)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Wire-format string for this priority
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error for priority strings outside the fixed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid priority: {0}")]
pub struct InvalidPriority(pub String);

impl TryFrom<&str> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            "URGENT" => Ok(Self::Urgent),
            other => Err(InvalidPriority(other.to_string())),
        }
    }
}

/// Complaint lifecycle status
///
/// Linear lifecycle: PENDING → ASSIGNED → IN_PROGRESS → COMPLETED.
/// Assignment is admin-driven; acceptance and completion are worker-driven.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Assigned,
    InProgress,
    Completed,
}

impl ComplaintStatus {
    /// Wire-format string for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    /// Whether the lifecycle allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: ComplaintStatus) -> bool {
        matches!(
            (*self, next),
            (Self::Pending, Self::Assigned)
                | (Self::Assigned, Self::InProgress)
                | (Self::InProgress, Self::Completed)
        )
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured suggestion from the classifier gateway
///
/// Values are already validated against the fixed enumerations;
/// a suggestion never carries an out-of-range category or priority.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriageSuggestion {
    pub category: Category,
    pub priority: Priority,
    /// Short human-readable summary of the complaint
    pub summary: String,
}

/// Post-resolution feedback left by the requesting resident
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    /// Star rating, 1..=5
    pub rating: u8,
    pub text: String,
}

/// Complaint entity (maintenance request record)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Complaint {
    pub id: String,
    pub resident_id: String,
    pub resident_name: String,
    /// Apartment unit, "N/A" when the requester has none
    pub unit_number: String,
    pub category: Category,
    pub description: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
    /// Assigned worker (set together by assignment)
    pub worker_id: Option<String>,
    pub worker_name: Option<String>,
    /// Set once, only after completion
    pub feedback: Option<Feedback>,
}

/// Submit complaint payload (the transient draft)
///
/// The description is validated here for presence and length; the
/// submission service additionally rejects whitespace-only text.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComplaintCreate {
    #[validate(length(min = 1, max = 2000, message = "Description must be 1-2000 characters"))]
    pub description: String,
    /// Manually selected category (fallback when classification fails)
    pub category: Category,
    /// Manually selected priority (fallback when classification fails)
    pub priority: Priority,
}

/// Assign worker payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintAssign {
    pub worker_id: String,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintStatusUpdate {
    pub status: ComplaintStatus,
}

/// Submit feedback payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintFeedback {
    pub rating: u8,
    pub feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_format() {
        assert_eq!(
            serde_json::to_string(&Category::Electrical).unwrap(),
            "\"ELECTRICAL\""
        );
        let parsed: Category = serde_json::from_str("\"PLUMBING\"").unwrap();
        assert_eq!(parsed, Category::Plumbing);
    }

    #[test]
    fn test_category_try_from() {
        assert_eq!(Category::try_from("LIFT").unwrap(), Category::Lift);
        let err = Category::try_from("GARDENING").unwrap_err();
        assert_eq!(err, InvalidCategory("GARDENING".to_string()));
    }

    #[test]
    fn test_category_rejects_lowercase() {
        assert!(Category::try_from("plumbing").is_err());
        assert!(serde_json::from_str::<Category>("\"plumbing\"").is_err());
    }

    #[test]
    fn test_priority_try_from() {
        assert_eq!(Priority::try_from("URGENT").unwrap(), Priority::Urgent);
        assert!(Priority::try_from("CRITICAL").is_err());
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(ComplaintStatus::default(), ComplaintStatus::Pending);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
    }

    #[test]
    fn test_status_linear_transitions() {
        use ComplaintStatus::*;

        assert!(Pending.can_transition_to(Assigned));
        assert!(Assigned.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));

        // No skipping, no reversing, no self-loops
        assert!(!Pending.can_transition_to(InProgress));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Assigned.can_transition_to(Completed));
        assert!(!Assigned.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(InProgress));
        assert!(!Completed.can_transition_to(Completed));
    }

    #[test]
    fn test_complaint_create_validation() {
        use validator::Validate;

        let valid = ComplaintCreate {
            description: "Main hall lights flickering since morning.".to_string(),
            category: Category::Electrical,
            priority: Priority::Medium,
        };
        assert!(valid.validate().is_ok());

        let empty = ComplaintCreate {
            description: String::new(),
            category: Category::Other,
            priority: Priority::Low,
        };
        assert!(empty.validate().is_err());

        let too_long = ComplaintCreate {
            description: "x".repeat(2001),
            category: Category::Other,
            priority: Priority::Low,
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_complaint_serde_roundtrip() {
        let complaint = Complaint {
            id: "c1".to_string(),
            resident_id: "r1".to_string(),
            resident_name: "Arun Kumar".to_string(),
            unit_number: "A-102".to_string(),
            category: Category::Electrical,
            description: "Main hall lights flickering since morning.".to_string(),
            priority: Priority::Medium,
            status: ComplaintStatus::Pending,
            created_at: chrono::Utc::now(),
            worker_id: None,
            worker_name: None,
            feedback: None,
        };

        let json = serde_json::to_string(&complaint).unwrap();
        assert!(json.contains("\"category\":\"ELECTRICAL\""));
        assert!(json.contains("\"status\":\"PENDING\""));

        let back: Complaint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, complaint);
    }
}
