//! Admin insights over the complaint collection
//!
//! Pure aggregation, computed on demand from a snapshot of the store.
//! Category counts cover every category, zeros included, so charts
//! always render the full axis.

use chrono::Utc;
use shared::models::{
    Category, CategoryBreakdown, ComplaintStatus, InsightsReport, Priority, StatusBreakdown,
    WorkerLoad,
};

use crate::complaints::store::ComplaintStore;
use crate::directory::UserDirectory;

/// Build the current insights report
pub fn build_report(store: &ComplaintStore, directory: &UserDirectory) -> InsightsReport {
    let complaints = store.list_all();

    let pending = complaints
        .iter()
        .filter(|c| c.status == ComplaintStatus::Pending)
        .count() as i64;
    let in_work = complaints
        .iter()
        .filter(|c| {
            matches!(
                c.status,
                ComplaintStatus::Assigned | ComplaintStatus::InProgress
            )
        })
        .count() as i64;
    let done = complaints
        .iter()
        .filter(|c| c.status == ComplaintStatus::Completed)
        .count() as i64;

    let urgent_open = complaints
        .iter()
        .filter(|c| c.priority == Priority::Urgent && c.status != ComplaintStatus::Completed)
        .count() as i64;

    let category_breakdown = Category::ALL
        .iter()
        .map(|category| CategoryBreakdown {
            category: *category,
            count: complaints.iter().filter(|c| c.category == *category).count() as i64,
        })
        .collect();

    let staff_load = directory
        .workers()
        .iter()
        .map(|worker| WorkerLoad {
            worker_id: worker.id.clone(),
            worker_name: worker.name.clone(),
            open_tasks: complaints
                .iter()
                .filter(|c| {
                    c.worker_id.as_deref() == Some(worker.id.as_str())
                        && c.status != ComplaintStatus::Completed
                })
                .count() as i64,
        })
        .collect();

    InsightsReport {
        total_complaints: complaints.len() as i64,
        pending_count: pending,
        urgent_open_count: urgent_open,
        category_breakdown,
        status_breakdown: StatusBreakdown {
            pending,
            in_work,
            done,
        },
        staff_load,
        generated_at: Utc::now(),
    }
}
