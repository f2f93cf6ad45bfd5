//! User API Module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// User router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/users", routes())
}

fn routes() -> Router<ServerState> {
    // 读取路由:无需身份 (登录页用名册渲染操作人选择)
    Router::new()
        .route("/", get(handler::list))
        .route("/workers", get(handler::workers))
}
