//! 统一错误处理
//!
//! Re-exports the shared error system and provides success-response helpers:
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("complaint"))
//!
//! // 返回成功响应
//! Ok(ok(data))
//! ```

use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> ApiResponse<T> {
    ApiResponse::success(data)
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> ApiResponse<T> {
    ApiResponse::success_with_message(message, data)
}
