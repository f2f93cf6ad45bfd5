//! AptCare Desk Server - 公寓报修管理后台
//!
//! # 架构概述
//!
//! 本模块是 Desk Server 的主入口，提供以下核心功能：
//!
//! - **智能分类** (`classifier`): 报修描述的外部文本理解网关
//! - **报修域** (`complaints`): 存储、提交流程、管理报表
//! - **用户名册** (`directory`): 固定花名册与角色
//! - **身份层** (`identity`): `x-acting-user` 提取器与中间件
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! desk-server/src/
//! ├── core/          # 配置、状态、启动
//! ├── identity/      # 操作人解析、角色检查
//! ├── classifier/    # 分类网关
//! ├── complaints/    # 报修存储、提交流程、报表
//! ├── directory/     # 用户名册
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod classifier;
pub mod complaints;
pub mod core;
pub mod directory;
pub mod identity;
pub mod utils;

// Re-export 公共类型
pub use classifier::{ClassifierError, ComplaintClassifier, GeminiClassifier};
pub use complaints::{ComplaintStore, SubmissionService};
pub use core::{Config, Server, ServerState};
pub use directory::UserDirectory;
pub use identity::ActingUser;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_level};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    // .env 文件可选，缺失时静默跳过
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════════╗
║                 APTCARE  DESK                    ║
║      Apartment Maintenance Request Manager       ║
╚══════════════════════════════════════════════════╝
    "#
    );
}
