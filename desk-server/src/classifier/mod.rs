//! 智能分类网关
//!
//! 将报修描述提交给外部文本理解服务，获得建议的分类和优先级。
//! 每次调用只发起一次外部请求，不重试、不缓存；任何失败都以
//! [`ClassifierError`] 的形式返回给提交流程，由其回退到手动选择。

mod gemini;

pub use gemini::GeminiClassifier;

use async_trait::async_trait;
use shared::models::TriageSuggestion;
use thiserror::Error;

/// Classifier errors
///
/// All kinds collapse to "no suggestion" for the submission path;
/// they stay distinct here for logging.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// No API key configured
    #[error("Classifier not configured")]
    NotConfigured,

    /// Connect/timeout/transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Service reachable but returned a non-success status
    #[error("Service returned status {0}")]
    ServiceStatus(u16),

    /// Response body not in the expected structure
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Response parsed but category/priority outside the fixed enumerations
    #[error("Invalid suggestion: {0}")]
    InvalidSuggestion(String),
}

impl ClassifierError {
    /// Short kind tag for structured log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::Transport(_) => "transport",
            Self::ServiceStatus(_) => "service_status",
            Self::MalformedResponse(_) => "malformed_response",
            Self::InvalidSuggestion(_) => "invalid_suggestion",
        }
    }
}

/// Result type for classifier operations
pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Classification seam between the submission path and the external service
///
/// Implementations must never panic and never let an error escape other
/// than as [`ClassifierError`].
#[async_trait]
pub trait ComplaintClassifier: Send + Sync {
    /// Suggest category/priority for a complaint description
    ///
    /// The caller guarantees `description` is non-empty; issuing
    /// exactly one outbound call per invocation is the implementor's
    /// contract.
    async fn classify(&self, description: &str) -> ClassifierResult<TriageSuggestion>;
}
