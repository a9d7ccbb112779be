//! Tavola Server - 餐厅管理系统后端
//!
//! # 架构概述
//!
//! 本模块是 Tavola 后端的主入口，提供以下核心功能：
//!
//! - **补货任务** (`restock`): 库存自动补货任务及其调用契约
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **认证** (`auth`): JWT 校验 + Argon2 密码哈希
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! tavola-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证中间件
//! ├── restock/       # 补货任务
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 工具函数
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod restock;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use crate::core::server::build_router;
pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use restock::{AutoRestocker, JobOutcome, RestockRunner};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    // Load .env if present, ignore if missing
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  ______                  __
 /_  __/___ __   ______  / /___ _
  / / / __ `/ | / / __ \/ / __ `/
 / / / /_/ /| |/ / /_/ / / /_/ /
/_/  \__,_/ |___/\____/_/\__,_/
    "#
    );
}
