//! Insights Model (admin dashboard aggregations)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::complaint::Category;

/// Complaint count for one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub count: i64,
}

/// Complaint counts by lifecycle stage
///
/// `in_work` covers ASSIGNED and IN_PROGRESS together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatusBreakdown {
    pub pending: i64,
    pub in_work: i64,
    pub done: i64,
}

/// Open assigned-task count for one worker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkerLoad {
    pub worker_id: String,
    pub worker_name: String,
    /// Assigned complaints not yet COMPLETED
    pub open_tasks: i64,
}

/// Aggregated snapshot for the admin dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightsReport {
    pub total_complaints: i64,
    /// Complaints still PENDING (no worker assigned)
    pub pending_count: i64,
    /// URGENT complaints not yet COMPLETED
    pub urgent_open_count: i64,
    /// One entry per category, zeros included
    pub category_breakdown: Vec<CategoryBreakdown>,
    pub status_breakdown: StatusBreakdown,
    /// One entry per worker in the directory
    pub staff_load: Vec<WorkerLoad>,
    pub generated_at: DateTime<Utc>,
}
