//! ComplaintStore - In-memory complaint collection
//!
//! Single shared list behind a `parking_lot::RwLock`. Records are
//! prepended on insert so the list always reads newest first. Lifecycle
//! mutations validate the linear status transitions before applying.

use chrono::{Duration, Utc};
use parking_lot::RwLock;
use shared::error::{AppError, ErrorCode};
use shared::models::{Category, Complaint, ComplaintStatus, Feedback, Priority, User, UserRole};
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Complaint not found: {0}")]
    NotFound(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: ComplaintStatus,
        to: ComplaintStatus,
    },

    #[error("Complaint already assigned: {0}")]
    AlreadyAssigned(String),

    #[error("User is not a worker: {0}")]
    NotAWorker(String),

    #[error("Feedback already submitted: {0}")]
    AlreadyRated(String),

    #[error("Rating out of range: {0}")]
    RatingOutOfRange(u8),

    #[error("Complaint not completed: {0}")]
    NotCompleted(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => AppError::complaint_not_found(id),
            StoreError::InvalidTransition { from, to } => {
                AppError::with_message(
                    ErrorCode::InvalidStatusTransition,
                    format!("Cannot move complaint from {} to {}", from, to),
                )
                .with_detail("from", from.as_str())
                .with_detail("to", to.as_str())
            }
            StoreError::AlreadyAssigned(id) => AppError::with_message(
                ErrorCode::ComplaintAlreadyAssigned,
                format!("Complaint {} is already assigned", id),
            )
            .with_detail("complaint_id", id),
            StoreError::NotAWorker(id) => AppError::not_a_worker(id),
            StoreError::AlreadyRated(id) => AppError::with_message(
                ErrorCode::FeedbackAlreadySubmitted,
                format!("Feedback already submitted for complaint {}", id),
            )
            .with_detail("complaint_id", id),
            StoreError::RatingOutOfRange(rating) => AppError::with_message(
                ErrorCode::RatingOutOfRange,
                format!("Rating must be between 1 and 5, got {}", rating),
            )
            .with_detail("rating", rating),
            StoreError::NotCompleted(id) => AppError::with_message(
                ErrorCode::ComplaintNotCompleted,
                format!("Complaint {} is not completed yet", id),
            )
            .with_detail("complaint_id", id),
        }
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// In-memory complaint collection (newest first)
#[derive(Debug, Default)]
pub struct ComplaintStore {
    complaints: RwLock<Vec<Complaint>>,
}

impl ComplaintStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            complaints: RwLock::new(Vec::new()),
        }
    }

    /// Prepend a record (becomes the newest entry)
    pub fn insert(&self, complaint: Complaint) {
        self.complaints.write().insert(0, complaint);
    }

    /// All records, newest first
    pub fn list_all(&self) -> Vec<Complaint> {
        self.complaints.read().clone()
    }

    /// One record by id
    pub fn get(&self, id: &str) -> StoreResult<Complaint> {
        self.complaints
            .read()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Records submitted by one resident
    pub fn for_resident(&self, resident_id: &str) -> Vec<Complaint> {
        self.complaints
            .read()
            .iter()
            .filter(|c| c.resident_id == resident_id)
            .cloned()
            .collect()
    }

    /// Records assigned to one worker
    pub fn for_worker(&self, worker_id: &str) -> Vec<Complaint> {
        self.complaints
            .read()
            .iter()
            .filter(|c| c.worker_id.as_deref() == Some(worker_id))
            .cloned()
            .collect()
    }

    /// Role-filtered view: admin sees all, resident sees own, worker sees assigned
    pub fn visible_to(&self, user: &User) -> Vec<Complaint> {
        match user.role {
            UserRole::Admin => self.list_all(),
            UserRole::Resident => self.for_resident(&user.id),
            UserRole::Worker => self.for_worker(&user.id),
        }
    }

    /// Assign a worker to a PENDING complaint
    ///
    /// Records worker id and name together and moves the record to ASSIGNED.
    pub fn assign(&self, id: &str, worker: &User) -> StoreResult<Complaint> {
        if !worker.is_worker() {
            return Err(StoreError::NotAWorker(worker.id.clone()));
        }

        let mut complaints = self.complaints.write();
        let complaint = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if complaint.status != ComplaintStatus::Pending {
            return Err(StoreError::AlreadyAssigned(id.to_string()));
        }

        complaint.worker_id = Some(worker.id.clone());
        complaint.worker_name = Some(worker.name.clone());
        complaint.status = ComplaintStatus::Assigned;
        Ok(complaint.clone())
    }

    /// Move a record along the linear lifecycle
    ///
    /// ASSIGNED is only reachable through [`assign`](Self::assign), which
    /// records the worker; this operation covers worker acceptance
    /// (ASSIGNED -> IN_PROGRESS) and completion (IN_PROGRESS -> COMPLETED).
    pub fn set_status(&self, id: &str, next: ComplaintStatus) -> StoreResult<Complaint> {
        let mut complaints = self.complaints.write();
        let complaint = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if next == ComplaintStatus::Assigned || !complaint.status.can_transition_to(next) {
            return Err(StoreError::InvalidTransition {
                from: complaint.status,
                to: next,
            });
        }

        complaint.status = next;
        Ok(complaint.clone())
    }

    /// Record resident feedback on a COMPLETED complaint
    ///
    /// Rating must be 1..=5; a record accepts feedback exactly once.
    pub fn set_feedback(&self, id: &str, rating: u8, text: Option<String>) -> StoreResult<Complaint> {
        if !(1..=5).contains(&rating) {
            return Err(StoreError::RatingOutOfRange(rating));
        }

        let mut complaints = self.complaints.write();
        let complaint = complaints
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if complaint.status != ComplaintStatus::Completed {
            return Err(StoreError::NotCompleted(id.to_string()));
        }
        if complaint.feedback.is_some() {
            return Err(StoreError::AlreadyRated(id.to_string()));
        }

        complaint.feedback = Some(Feedback {
            rating,
            text: text.unwrap_or_default(),
        });
        Ok(complaint.clone())
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.complaints.read().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.complaints.read().is_empty()
    }

    /// Load the demo complaints (newest first after loading)
    pub fn seed_demo(&self) {
        let now = Utc::now();

        self.insert(Complaint {
            id: "c2".into(),
            resident_id: "r2".into(),
            resident_name: "Priya Mani".into(),
            unit_number: "B-405".into(),
            category: Category::Plumbing,
            description: "Severe water leakage in kitchen sink.".into(),
            priority: Priority::High,
            status: ComplaintStatus::Assigned,
            created_at: now - Duration::hours(2),
            worker_id: Some("w2".into()),
            worker_name: Some("Suresh Plumber".into()),
            feedback: None,
        });
        self.insert(Complaint {
            id: "c1".into(),
            resident_id: "r1".into(),
            resident_name: "Arun Kumar".into(),
            unit_number: "A-102".into(),
            category: Category::Electrical,
            description: "Main hall lights flickering since morning.".into(),
            priority: Priority::Medium,
            status: ComplaintStatus::Pending,
            created_at: now - Duration::hours(1),
            worker_id: None,
            worker_name: None,
            feedback: None,
        });
    }
}
