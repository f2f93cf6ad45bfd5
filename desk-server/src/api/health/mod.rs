//! 健康检查路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 身份 |
//! |------|------|------|------|
//! | /api/health | GET | 简单健康检查 | 无 |
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "code": 0,
//!   "message": "OK",
//!   "data": { "status": "ok", "version": "0.1.0", "environment": "development" }
//! }
//! ```

use axum::{Router, extract::State, routing::get};
use shared::error::ApiResponse;
use shared::models::HealthStatus;

use crate::core::ServerState;
use crate::utils::ok;

/// 健康检查路由 - 公共路由 (无需身份)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/health", get(health))
}

/// Simple liveness probe
async fn health(State(state): State<ServerState>) -> ApiResponse<HealthStatus> {
    ok(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
    })
}
