//! 身份模块
//!
//! 基于 `x-acting-user` 请求头的轻量身份层，提供提取器和中间件：
//! - [`ActingUser`] - 当前操作人上下文
//! - [`resolve_identity`] - 身份解析中间件 (全局)
//! - [`require_admin`] / [`require_resident`] - 角色检查中间件 (路由级)

pub mod extractor;
pub mod middleware;

pub use extractor::ActingUser;
pub use middleware::{require_admin, require_resident, resolve_identity};
