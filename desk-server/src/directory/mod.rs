//! 用户名册
//!
//! 启动时载入社区成员名单（住户、管理员、维修工），供
//! 操作用户解析和派单时的维修工查找使用。没有名册之外的
//! 身份概念，也没有名册的运行期变更。

use shared::models::{Category, User, UserRole};

/// In-memory community roster
///
/// Immutable after construction; lookups are plain slice scans.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    /// Build the directory with the standard community roster
    pub fn seeded() -> Self {
        Self {
            users: seed_users(),
        }
    }

    /// Build a directory from explicit users (tests)
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Look up one user by id
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All members
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Members with the WORKER role
    pub fn workers(&self) -> Vec<User> {
        self.users
            .iter()
            .filter(|u| u.is_worker())
            .cloned()
            .collect()
    }
}

fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "r1".into(),
            name: "Arun Kumar".into(),
            role: UserRole::Resident,
            email: "arun@example.com".into(),
            unit_number: Some("A-102".into()),
            worker_type: None,
        },
        User {
            id: "r2".into(),
            name: "Priya Mani".into(),
            role: UserRole::Resident,
            email: "priya@example.com".into(),
            unit_number: Some("B-405".into()),
            worker_type: None,
        },
        User {
            id: "a1".into(),
            name: "Admin Prabhu".into(),
            role: UserRole::Admin,
            email: "admin@aptcare.com".into(),
            unit_number: None,
            worker_type: None,
        },
        User {
            id: "w1".into(),
            name: "Ramesh Electrician".into(),
            role: UserRole::Worker,
            email: "ramesh@worker.com".into(),
            unit_number: None,
            worker_type: Some(Category::Electrical),
        },
        User {
            id: "w2".into(),
            name: "Suresh Plumber".into(),
            role: UserRole::Worker,
            email: "suresh@worker.com".into(),
            unit_number: None,
            worker_type: Some(Category::Plumbing),
        },
        User {
            id: "w3".into(),
            name: "Mani Cleaning".into(),
            role: UserRole::Worker,
            email: "mani@worker.com".into(),
            unit_number: None,
            worker_type: Some(Category::Cleaning),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_roster() {
        let directory = UserDirectory::seeded();
        assert_eq!(directory.list().len(), 6);

        let arun = directory.get("r1").unwrap();
        assert_eq!(arun.name, "Arun Kumar");
        assert_eq!(arun.role, UserRole::Resident);
        assert_eq!(arun.unit_number.as_deref(), Some("A-102"));

        let admin = directory.get("a1").unwrap();
        assert!(admin.is_admin());
        assert!(admin.unit_number.is_none());
    }

    #[test]
    fn test_unknown_id() {
        let directory = UserDirectory::seeded();
        assert!(directory.get("r99").is_none());
    }

    #[test]
    fn test_workers_have_specialities() {
        let directory = UserDirectory::seeded();
        let workers = directory.workers();

        assert_eq!(workers.len(), 3);
        assert!(workers.iter().all(|w| w.is_worker()));
        assert!(workers.iter().all(|w| w.worker_type.is_some()));

        let plumber = workers.iter().find(|w| w.id == "w2").unwrap();
        assert_eq!(plumber.worker_type, Some(Category::Plumbing));
    }
}
