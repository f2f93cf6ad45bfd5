//! 管理报表路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 身份 |
//! |------|------|------|------|
//! | /api/insights | GET | 当前报修聚合快照 | 管理员 |

use axum::{Router, extract::State, middleware, routing::get};
use shared::error::ApiResponse;
use shared::models::InsightsReport;

use crate::complaints::insights::build_report;
use crate::core::ServerState;
use crate::identity::require_admin;
use crate::utils::ok;

/// 报表路由 - 仅管理员
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/insights", get(report))
        .layer(middleware::from_fn(require_admin))
}

/// Aggregated snapshot for the admin dashboard
async fn report(State(state): State<ServerState>) -> ApiResponse<InsightsReport> {
    ok(build_report(&state.store, &state.directory))
}
