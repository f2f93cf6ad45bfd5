//! User Model

use serde::{Deserialize, Serialize};

use super::complaint::Category;

/// Header carrying the acting user's id on API requests
pub const ACTING_USER_HEADER: &str = "x-acting-user";

/// Role of a community member
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Resident,
    Admin,
    Worker,
}

impl UserRole {
    /// Wire-format string for this role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "RESIDENT",
            Self::Admin => "ADMIN",
            Self::Worker => "WORKER",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User entity (community roster entry)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub email: String,
    /// Apartment unit (residents only)
    pub unit_number: Option<String>,
    /// Maintenance speciality (workers only)
    pub worker_type: Option<Category>,
}

impl User {
    pub fn is_resident(&self) -> bool {
        self.role == UserRole::Resident
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn is_worker(&self) -> bool {
        self.role == UserRole::Worker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serialize() {
        assert_eq!(
            serde_json::to_string(&UserRole::Resident).unwrap(),
            "\"RESIDENT\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Worker).unwrap(),
            "\"WORKER\""
        );
    }

    #[test]
    fn test_role_deserialize() {
        let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, UserRole::Admin);
        assert!(serde_json::from_str::<UserRole>("\"MANAGER\"").is_err());
    }

    #[test]
    fn test_role_predicates() {
        let user = User {
            id: "w1".to_string(),
            name: "Ramesh".to_string(),
            role: UserRole::Worker,
            email: "ramesh@worker.com".to_string(),
            unit_number: None,
            worker_type: Some(Category::Electrical),
        };
        assert!(user.is_worker());
        assert!(!user.is_resident());
        assert!(!user.is_admin());
    }
}
