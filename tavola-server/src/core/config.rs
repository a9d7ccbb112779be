//! 服务器配置
//!
//! 所有配置在启动时从环境变量读取一次，构造成 [`Config`] 后注入
//! [`crate::core::ServerState`]；请求处理器不再读进程环境。
//!
//! # 环境变量
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | WORK_DIR | /var/lib/tavola | 工作目录 |
//! | HTTP_PORT | 3000 | HTTP 服务端口 |
//! | ENVIRONMENT | development | 运行环境 |
//! | CRON_SECRET | (未设置) | 定时任务接口密钥，未设置时放行所有请求 |
//! | RESTOCK_TIMEOUT_MS | 30000 | 补货任务超时 (毫秒) |
//! | ADMIN_USERNAME | admin | 初始管理员用户名 |
//! | ADMIN_PASSWORD | admin123 | 初始管理员密码 |
//!
//! # 示例
//!
//! ```ignore
//! WORK_DIR=/data/tavola HTTP_PORT=8080 CRON_SECRET=s3cret cargo run
//! ```

use std::path::PathBuf;

use crate::auth::JwtConfig;

/// 服务器配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 定时任务接口密钥 (`x-cron-auth-token` 头)
    ///
    /// 未设置时接口放行所有请求，启动时会打印警告。
    pub cron_secret: Option<String>,
    /// 补货任务超时 (毫秒)
    pub restock_timeout_ms: u64,
    /// 初始管理员用户名
    pub admin_username: String,
    /// 初始管理员密码
    pub admin_password: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/tavola".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            cron_secret: std::env::var("CRON_SECRET").ok().filter(|s| !s.is_empty()),
            restock_timeout_ms: std::env::var("RESTOCK_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".into()),
            jwt: JwtConfig::default(),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
