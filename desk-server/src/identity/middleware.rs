//! 身份中间件
//!
//! 为基于请求头的身份识别提供 Axum 中间件

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::AppError;
use shared::models::ACTING_USER_HEADER;

use crate::core::ServerState;
use crate::identity::ActingUser;

/// 身份解析中间件 - 要求请求携带有效操作人
///
/// 从 `x-acting-user` 头读取用户 ID 并在名册中解析。
/// 解析成功后将 [`ActingUser`] 注入请求扩展 (`req.extensions_mut().insert(user)`)。
///
/// # 跳过解析的路径
///
/// - `OPTIONS *` (CORS 预检)
/// - 非 `/api/` 路径
/// - `/api/health` (健康检查)
/// - `/api/users`, `/api/users/workers` (登录页的名册选择)
///
/// # 错误处理
///
/// | 错误 | HTTP 状态码 |
/// |------|------------|
/// | 无 x-acting-user 头 | 401 Unauthorized |
/// | 用户不在名册中 | 401 Unauthorized |
pub async fn resolve_identity(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();

    // 允许 CORS 预检的 OPTIONS 请求 (跳过解析)
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    // 非 API 路由跳过解析 (让它们正常返回 404)
    if !path.starts_with("/api/") {
        return Ok(next.run(req).await);
    }

    // 公共 API 路由跳过解析
    let is_public_api_route =
        path == "/api/health" || path == "/api/users" || path == "/api/users/workers";
    if is_public_api_route {
        return Ok(next.run(req).await);
    }

    let user_id = req
        .headers()
        .get(ACTING_USER_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let user_id = match user_id {
        Some(id) => id,
        None => {
            tracing::warn!(uri = %req.uri(), "Request without acting user header");
            return Err(AppError::acting_user_missing());
        }
    };

    match state.directory.get(user_id) {
        Some(user) => {
            req.extensions_mut().insert(ActingUser(user.clone()));
            Ok(next.run(req).await)
        }
        None => {
            tracing::warn!(user_id = %user_id, uri = %req.uri(), "Unknown acting user");
            Err(AppError::acting_user_unknown(user_id))
        }
    }
}

/// 管理员中间件 - 要求管理员角色
///
/// 检查 `ActingUser.role == ADMIN`，需在 [`resolve_identity`] 之后运行
///
/// # 错误
///
/// 非管理员返回 403 Forbidden
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<ActingUser>()
        .ok_or_else(AppError::acting_user_missing)?;
    if !user.0.is_admin() {
        tracing::warn!(
            user_id = %user.0.id,
            role = %user.0.role,
            "Admin-only route denied"
        );
        return Err(AppError::admin_required());
    }

    Ok(next.run(req).await)
}

/// 住户中间件 - 要求住户角色
///
/// 检查 `ActingUser.role == RESIDENT`，需在 [`resolve_identity`] 之后运行
///
/// # 错误
///
/// 非住户返回 403 Forbidden
pub async fn require_resident(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<ActingUser>()
        .ok_or_else(AppError::acting_user_missing)?;
    if !user.0.is_resident() {
        tracing::warn!(
            user_id = %user.0.id,
            role = %user.0.role,
            "Resident-only route denied"
        );
        return Err(AppError::resident_required());
    }

    Ok(next.run(req).await)
}
