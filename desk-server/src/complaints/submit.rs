//! 提交流程:校验草稿 -> 请求分类建议 -> 合并 -> 入库
//!
//! The classifier is consulted exactly once per submission. Any
//! classification failure falls back to the resident's manual
//! selections; a failure never blocks the submission.

use std::sync::Arc;

use chrono::Utc;
use shared::error::{AppError, AppResult};
use shared::models::{Complaint, ComplaintCreate, ComplaintStatus, TriageSuggestion, User};
use uuid::Uuid;

use crate::classifier::ComplaintClassifier;
use crate::complaints::store::ComplaintStore;

/// Orchestrates complaint submission
pub struct SubmissionService {
    store: Arc<ComplaintStore>,
    classifier: Arc<dyn ComplaintClassifier>,
}

impl SubmissionService {
    pub fn new(store: Arc<ComplaintStore>, classifier: Arc<dyn ComplaintClassifier>) -> Self {
        Self { store, classifier }
    }

    /// Submit a complaint draft on behalf of a resident
    ///
    /// A suggestion overrides the manual category and priority; a
    /// classification failure keeps them. The stored record starts
    /// PENDING regardless of the classification outcome. Nothing is
    /// written to the store until the classifier call has settled.
    pub async fn submit(&self, resident: &User, draft: ComplaintCreate) -> AppResult<Complaint> {
        if draft.description.trim().is_empty() {
            return Err(AppError::validation("Description must not be empty"));
        }

        tracing::info!(resident = %resident.id, "Analyzing complaint description");

        let suggestion = match self.classifier.classify(&draft.description).await {
            Ok(suggestion) => {
                tracing::info!(
                    category = %suggestion.category,
                    priority = %suggestion.priority,
                    "Classifier suggestion accepted"
                );
                Some(suggestion)
            }
            Err(err) => {
                tracing::warn!(
                    kind = err.kind(),
                    error = %err,
                    "Classification failed, keeping manual selections"
                );
                None
            }
        };

        let complaint = resolve(resident, draft, suggestion);
        self.store.insert(complaint.clone());

        tracing::info!(
            complaint = %complaint.id,
            category = %complaint.category,
            priority = %complaint.priority,
            "Complaint recorded"
        );
        Ok(complaint)
    }
}

/// Merge a draft and an optional suggestion into a full record
///
/// The suggestion wins when present; otherwise the manual selections
/// stand. Identity, timestamps and the PENDING status are fixed here.
fn resolve(resident: &User, draft: ComplaintCreate, suggestion: Option<TriageSuggestion>) -> Complaint {
    let (category, priority) = match &suggestion {
        Some(s) => (s.category, s.priority),
        None => (draft.category, draft.priority),
    };

    Complaint {
        id: Uuid::new_v4().to_string(),
        resident_id: resident.id.clone(),
        resident_name: resident.name.clone(),
        unit_number: resident
            .unit_number
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        category,
        description: draft.description,
        priority,
        status: ComplaintStatus::Pending,
        created_at: Utc::now(),
        worker_id: None,
        worker_name: None,
        feedback: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{ClassifierError, ClassifierResult};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use shared::models::{Category, Priority, UserRole};
    use std::time::Duration;

    struct SuggestingClassifier(TriageSuggestion);

    #[async_trait]
    impl ComplaintClassifier for SuggestingClassifier {
        async fn classify(&self, _description: &str) -> ClassifierResult<TriageSuggestion> {
            Ok(self.0.clone())
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl ComplaintClassifier for FailingClassifier {
        async fn classify(&self, _description: &str) -> ClassifierResult<TriageSuggestion> {
            Err(ClassifierError::Transport("simulated connection reset".to_string()))
        }
    }

    struct OffMenuClassifier;

    #[async_trait]
    impl ComplaintClassifier for OffMenuClassifier {
        async fn classify(&self, _description: &str) -> ClassifierResult<TriageSuggestion> {
            Err(ClassifierError::InvalidSuggestion("Invalid category: GARDENING".to_string()))
        }
    }

    struct HangingClassifier;

    #[async_trait]
    impl ComplaintClassifier for HangingClassifier {
        async fn classify(&self, _description: &str) -> ClassifierResult<TriageSuggestion> {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    #[derive(Default)]
    struct RecordingClassifier {
        seen: Mutex<Option<String>>,
    }

    #[async_trait]
    impl ComplaintClassifier for RecordingClassifier {
        async fn classify(&self, description: &str) -> ClassifierResult<TriageSuggestion> {
            *self.seen.lock() = Some(description.to_string());
            Err(ClassifierError::NotConfigured)
        }
    }

    fn test_resident() -> User {
        User {
            id: "r1".to_string(),
            name: "Arun Kumar".to_string(),
            role: UserRole::Resident,
            email: "arun@example.com".to_string(),
            unit_number: Some("A-102".to_string()),
            worker_type: None,
        }
    }

    fn resident_without_unit() -> User {
        User {
            unit_number: None,
            ..test_resident()
        }
    }

    fn draft(description: &str) -> ComplaintCreate {
        ComplaintCreate {
            description: description.to_string(),
            category: Category::Other,
            priority: Priority::Low,
        }
    }

    fn create_test_service(
        classifier: impl ComplaintClassifier + 'static,
    ) -> (Arc<ComplaintStore>, SubmissionService) {
        let store = Arc::new(ComplaintStore::new());
        let service = SubmissionService::new(store.clone(), Arc::new(classifier));
        (store, service)
    }

    #[tokio::test]
    async fn test_suggestion_overrides_manual_selection() {
        let (store, service) = create_test_service(SuggestingClassifier(TriageSuggestion {
            category: Category::Plumbing,
            priority: Priority::High,
            summary: "Kitchen sink leaking".to_string(),
        }));

        let complaint = service
            .submit(&test_resident(), draft("Water everywhere under the kitchen sink"))
            .await
            .unwrap();

        assert_eq!(complaint.category, Category::Plumbing);
        assert_eq!(complaint.priority, Priority::High);
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_manual_selection() {
        let (store, service) = create_test_service(FailingClassifier);

        let complaint = service
            .submit(&test_resident(), draft("Water everywhere under the kitchen sink"))
            .await
            .unwrap();

        assert_eq!(complaint.category, Category::Other);
        assert_eq!(complaint.priority, Priority::Low);
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_suggestion_keeps_manual_selection() {
        let (store, service) = create_test_service(OffMenuClassifier);

        let complaint = service
            .submit(&test_resident(), draft("Weeds taking over the courtyard"))
            .await
            .unwrap();

        assert_eq!(complaint.category, Category::Other);
        assert_eq!(complaint.priority, Priority::Low);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_urgent_suggestion_still_starts_pending() {
        let (_, service) = create_test_service(SuggestingClassifier(TriageSuggestion {
            category: Category::Electrical,
            priority: Priority::Urgent,
            summary: "Sparking socket".to_string(),
        }));

        let complaint = service
            .submit(&test_resident(), draft("Socket in the hall is sparking"))
            .await
            .unwrap();

        assert_eq!(complaint.priority, Priority::Urgent);
        assert_eq!(complaint.status, ComplaintStatus::Pending);
    }

    #[tokio::test]
    async fn test_unit_number_from_resident() {
        let (_, service) = create_test_service(FailingClassifier);

        let complaint = service
            .submit(&test_resident(), draft("Door lock jammed"))
            .await
            .unwrap();

        assert_eq!(complaint.unit_number, "A-102");
        assert_eq!(complaint.resident_name, "Arun Kumar");
    }

    #[tokio::test]
    async fn test_unit_number_falls_back_to_na() {
        let (_, service) = create_test_service(FailingClassifier);

        let complaint = service
            .submit(&resident_without_unit(), draft("Door lock jammed"))
            .await
            .unwrap();

        assert_eq!(complaint.unit_number, "N/A");
    }

    #[tokio::test]
    async fn test_whitespace_description_rejected() {
        let (store, service) = create_test_service(FailingClassifier);

        let err = service
            .submit(&test_resident(), draft("   \n\t "))
            .await
            .unwrap_err();

        assert_eq!(u16::from(err.code), 2);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_generated_ids_are_unique() {
        let (_, service) = create_test_service(FailingClassifier);
        let resident = test_resident();

        let first = service.submit(&resident, draft("Broken letterbox")).await.unwrap();
        let second = service.submit(&resident, draft("Broken letterbox")).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_submissions_read_newest_first() {
        let (store, service) = create_test_service(FailingClassifier);
        let resident = test_resident();

        service.submit(&resident, draft("First issue")).await.unwrap();
        service.submit(&resident, draft("Second issue")).await.unwrap();

        let all = store.list_all();
        assert_eq!(all[0].description, "Second issue");
        assert_eq!(all[1].description, "First issue");
    }

    #[tokio::test]
    async fn test_classifier_sees_the_description() {
        let recorder = Arc::new(RecordingClassifier::default());
        let store = Arc::new(ComplaintStore::new());
        let service = SubmissionService::new(store, recorder.clone());

        service
            .submit(&test_resident(), draft("Corridor light is out"))
            .await
            .unwrap();

        assert_eq!(recorder.seen.lock().as_deref(), Some("Corridor light is out"));
    }

    #[tokio::test]
    async fn test_dropped_submission_leaves_store_untouched() {
        let (store, service) = create_test_service(HangingClassifier);
        let resident = test_resident();

        let fut = service.submit(&resident, draft("Lift stuck between floors"));
        let outcome = tokio::time::timeout(Duration::from_millis(10), fut).await;

        assert!(outcome.is_err());
        assert!(store.is_empty());
    }
}
