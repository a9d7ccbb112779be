//! Server boundary errors

use thiserror::Error;

/// 服务器启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Bind failed: {0}")]
    Bind(std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(anyhow::Error),
}

/// 服务器层 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
