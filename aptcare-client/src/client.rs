//! 统一客户端实现

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shared::error::ApiResponse;
use shared::models::{
    ACTING_USER_HEADER, Complaint, ComplaintAssign, ComplaintCreate, ComplaintFeedback,
    ComplaintStatus, ComplaintStatusUpdate, HealthStatus, InsightsReport, User,
};

// ============================================================================
// Client Trait
// ============================================================================

/// 统一客户端接口
#[async_trait]
pub trait Client: Send + Sync {
    /// 健康检查
    async fn health(&self) -> ClientResult<HealthStatus>;

    /// 获取社区成员名单
    async fn list_users(&self) -> ClientResult<Vec<User>>;

    /// 获取维修工名单
    async fn list_workers(&self) -> ClientResult<Vec<User>>;

    /// 提交报修 (住户)
    async fn submit_complaint(&self, draft: &ComplaintCreate) -> ClientResult<Complaint>;

    /// 获取当前用户可见的报修列表
    async fn list_complaints(&self) -> ClientResult<Vec<Complaint>>;

    /// 获取单条报修
    async fn get_complaint(&self, id: &str) -> ClientResult<Complaint>;

    /// 指派维修工 (管理员)
    async fn assign_worker(&self, id: &str, worker_id: &str) -> ClientResult<Complaint>;

    /// 更新报修状态 (维修工)
    async fn update_status(&self, id: &str, status: ComplaintStatus) -> ClientResult<Complaint>;

    /// 提交评价 (住户, 已完成的报修)
    async fn submit_feedback(
        &self,
        id: &str,
        rating: u8,
        feedback: Option<&str>,
    ) -> ClientResult<Complaint>;

    /// 获取管理报表 (管理员)
    async fn insights(&self) -> ClientResult<InsightsReport>;

    /// 当前操作用户 id
    fn acting_user(&self) -> Option<&str>;
}

// ============================================================================
// AptCareClient Factory
// ============================================================================

/// 客户端工厂
pub struct AptCareClient;

impl AptCareClient {
    /// 创建网络客户端
    pub fn network(base_url: &str) -> NetworkClient {
        NetworkClient::new(base_url)
    }

    /// 创建同进程客户端 (需要传入 Router)
    #[cfg(feature = "in-process")]
    pub fn in_process(router: axum::Router) -> InProcessClient {
        InProcessClient::new(router)
    }
}

fn unwrap_data<T>(resp: ApiResponse<T>, what: &str) -> ClientResult<T> {
    resp.data
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {} data", what)))
}

fn map_error_status(status: StatusCode, text: String) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
        StatusCode::FORBIDDEN => ClientError::Forbidden(text),
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST => ClientError::Validation(text),
        StatusCode::CONFLICT => ClientError::Conflict(text),
        _ => ClientError::Internal(text),
    }
}

// ============================================================================
// NetworkClient - HTTP 网络客户端
// ============================================================================

/// 网络客户端 (HTTP)
#[derive(Debug, Clone)]
pub struct NetworkClient {
    client: reqwest::Client,
    base_url: String,
    acting_user: Option<String>,
}

impl NetworkClient {
    /// 创建新的网络客户端
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            acting_user: None,
        }
    }

    /// 设置操作用户 (相当于原界面的登录选择)
    pub fn act_as(&mut self, user_id: impl Into<String>) {
        self.acting_user = Some(user_id.into());
    }

    /// 清除操作用户
    pub fn act_as_nobody(&mut self) {
        self.acting_user = None;
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "GET request");
        let mut req = self.client.get(&url);

        if let Some(user) = &self.acting_user {
            req = req.header(ACTING_USER_HEADER, user);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "POST request");
        let mut req = self.client.post(&url).json(body);

        if let Some(user) = &self.acting_user {
            req = req.header(ACTING_USER_HEADER, user);
        }

        let resp = req.send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<T> {
        let status = resp.status();

        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(map_error_status(status, text));
        }

        resp.json().await.map_err(Into::into)
    }
}

#[async_trait]
impl Client for NetworkClient {
    async fn health(&self) -> ClientResult<HealthStatus> {
        let resp: ApiResponse<HealthStatus> = self.get("/api/health").await?;
        unwrap_data(resp, "health")
    }

    async fn list_users(&self) -> ClientResult<Vec<User>> {
        let resp: ApiResponse<Vec<User>> = self.get("/api/users").await?;
        unwrap_data(resp, "user list")
    }

    async fn list_workers(&self) -> ClientResult<Vec<User>> {
        let resp: ApiResponse<Vec<User>> = self.get("/api/users/workers").await?;
        unwrap_data(resp, "worker list")
    }

    async fn submit_complaint(&self, draft: &ComplaintCreate) -> ClientResult<Complaint> {
        let resp: ApiResponse<Complaint> = self.post("/api/complaints", draft).await?;
        unwrap_data(resp, "complaint")
    }

    async fn list_complaints(&self) -> ClientResult<Vec<Complaint>> {
        let resp: ApiResponse<Vec<Complaint>> = self.get("/api/complaints").await?;
        unwrap_data(resp, "complaint list")
    }

    async fn get_complaint(&self, id: &str) -> ClientResult<Complaint> {
        let resp: ApiResponse<Complaint> = self.get(&format!("/api/complaints/{}", id)).await?;
        unwrap_data(resp, "complaint")
    }

    async fn assign_worker(&self, id: &str, worker_id: &str) -> ClientResult<Complaint> {
        let req = ComplaintAssign {
            worker_id: worker_id.to_string(),
        };
        let resp: ApiResponse<Complaint> = self
            .post(&format!("/api/complaints/{}/assign", id), &req)
            .await?;
        unwrap_data(resp, "complaint")
    }

    async fn update_status(&self, id: &str, status: ComplaintStatus) -> ClientResult<Complaint> {
        let req = ComplaintStatusUpdate { status };
        let resp: ApiResponse<Complaint> = self
            .post(&format!("/api/complaints/{}/status", id), &req)
            .await?;
        unwrap_data(resp, "complaint")
    }

    async fn submit_feedback(
        &self,
        id: &str,
        rating: u8,
        feedback: Option<&str>,
    ) -> ClientResult<Complaint> {
        let req = ComplaintFeedback {
            rating,
            feedback: feedback.map(|s| s.to_string()),
        };
        let resp: ApiResponse<Complaint> = self
            .post(&format!("/api/complaints/{}/feedback", id), &req)
            .await?;
        unwrap_data(resp, "complaint")
    }

    async fn insights(&self) -> ClientResult<InsightsReport> {
        let resp: ApiResponse<InsightsReport> = self.get("/api/insights").await?;
        unwrap_data(resp, "insights")
    }

    fn acting_user(&self) -> Option<&str> {
        self.acting_user.as_deref()
    }
}

// ============================================================================
// InProcessClient - 同进程客户端 (tower oneshot)
// ============================================================================

/// 同进程客户端 (直接调用 Router，零网络开销)
#[cfg(feature = "in-process")]
#[derive(Clone)]
pub struct InProcessClient {
    router: axum::Router,
    acting_user: Option<String>,
}

#[cfg(feature = "in-process")]
impl InProcessClient {
    /// 创建同进程客户端
    pub fn new(router: axum::Router) -> Self {
        Self {
            router,
            acting_user: None,
        }
    }

    /// 设置操作用户
    pub fn act_as(&mut self, user_id: impl Into<String>) {
        self.acting_user = Some(user_id.into());
    }

    /// 清除操作用户
    pub fn act_as_nobody(&mut self) {
        self.acting_user = None;
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: http::Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<T> {
        use axum::body::Body;
        use tower::ServiceExt;

        let mut builder = http::Request::builder().method(method).uri(path);

        if let Some(user) = &self.acting_user {
            builder = builder.header(ACTING_USER_HEADER, user);
        }

        if body.is_some() {
            builder = builder.header("Content-Type", "application/json");
        }

        let req = builder
            .body(Body::from(body.unwrap_or_default()))
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let resp = self
            .router
            .clone()
            .oneshot(req)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
            .await
            .map_err(|e| ClientError::Internal(e.to_string()))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&bytes).to_string();
            return Err(map_error_status(status, text));
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

#[cfg(feature = "in-process")]
#[async_trait]
impl Client for InProcessClient {
    async fn health(&self) -> ClientResult<HealthStatus> {
        let resp: ApiResponse<HealthStatus> =
            self.request(http::Method::GET, "/api/health", None).await?;
        unwrap_data(resp, "health")
    }

    async fn list_users(&self) -> ClientResult<Vec<User>> {
        let resp: ApiResponse<Vec<User>> =
            self.request(http::Method::GET, "/api/users", None).await?;
        unwrap_data(resp, "user list")
    }

    async fn list_workers(&self) -> ClientResult<Vec<User>> {
        let resp: ApiResponse<Vec<User>> = self
            .request(http::Method::GET, "/api/users/workers", None)
            .await?;
        unwrap_data(resp, "worker list")
    }

    async fn submit_complaint(&self, draft: &ComplaintCreate) -> ClientResult<Complaint> {
        let body = serde_json::to_vec(draft)?;
        let resp: ApiResponse<Complaint> = self
            .request(http::Method::POST, "/api/complaints", Some(body))
            .await?;
        unwrap_data(resp, "complaint")
    }

    async fn list_complaints(&self) -> ClientResult<Vec<Complaint>> {
        let resp: ApiResponse<Vec<Complaint>> = self
            .request(http::Method::GET, "/api/complaints", None)
            .await?;
        unwrap_data(resp, "complaint list")
    }

    async fn get_complaint(&self, id: &str) -> ClientResult<Complaint> {
        let resp: ApiResponse<Complaint> = self
            .request(http::Method::GET, &format!("/api/complaints/{}", id), None)
            .await?;
        unwrap_data(resp, "complaint")
    }

    async fn assign_worker(&self, id: &str, worker_id: &str) -> ClientResult<Complaint> {
        let req = ComplaintAssign {
            worker_id: worker_id.to_string(),
        };
        let body = serde_json::to_vec(&req)?;
        let resp: ApiResponse<Complaint> = self
            .request(
                http::Method::POST,
                &format!("/api/complaints/{}/assign", id),
                Some(body),
            )
            .await?;
        unwrap_data(resp, "complaint")
    }

    async fn update_status(&self, id: &str, status: ComplaintStatus) -> ClientResult<Complaint> {
        let req = ComplaintStatusUpdate { status };
        let body = serde_json::to_vec(&req)?;
        let resp: ApiResponse<Complaint> = self
            .request(
                http::Method::POST,
                &format!("/api/complaints/{}/status", id),
                Some(body),
            )
            .await?;
        unwrap_data(resp, "complaint")
    }

    async fn submit_feedback(
        &self,
        id: &str,
        rating: u8,
        feedback: Option<&str>,
    ) -> ClientResult<Complaint> {
        let req = ComplaintFeedback {
            rating,
            feedback: feedback.map(|s| s.to_string()),
        };
        let body = serde_json::to_vec(&req)?;
        let resp: ApiResponse<Complaint> = self
            .request(
                http::Method::POST,
                &format!("/api/complaints/{}/feedback", id),
                Some(body),
            )
            .await?;
        unwrap_data(resp, "complaint")
    }

    async fn insights(&self) -> ClientResult<InsightsReport> {
        let resp: ApiResponse<InsightsReport> = self
            .request(http::Method::GET, "/api/insights", None)
            .await?;
        unwrap_data(resp, "insights")
    }

    fn acting_user(&self) -> Option<&str> {
        self.acting_user.as_deref()
    }
}

// Placeholder for non-feature builds
#[cfg(not(feature = "in-process"))]
pub struct InProcessClient {
    _private: (),
}
