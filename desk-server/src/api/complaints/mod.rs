//! Complaint API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::core::ServerState;
use crate::identity::{require_admin, require_resident};

/// Complaint router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/complaints", routes())
}

fn routes() -> Router<ServerState> {
    // 读取路由:任何已识别用户可用 (列表按角色过滤)
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    // 住户路由:提交与评价
    let resident_routes = Router::new()
        .route("/", post(handler::submit))
        .route("/{id}/feedback", post(handler::feedback))
        .layer(middleware::from_fn(require_resident));

    // 工人路由:状态流转 (是否为被指派工人在处理器中校验)
    let worker_routes = Router::new().route("/{id}/status", post(handler::update_status));

    // 管理路由:指派 (仅管理员)
    let manage_routes = Router::new()
        .route("/{id}/assign", post(handler::assign))
        .layer(middleware::from_fn(require_admin));

    read_routes
        .merge(resident_routes)
        .merge(worker_routes)
        .merge(manage_routes)
}
