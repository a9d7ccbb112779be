//! 补货任务模块
//!
//! # 调用契约
//!
//! [`RestockRunner::run_cycle`] 执行一个补货周期并返回 [`JobOutcome`]。
//! 调用方 (cron 接口) 的义务：
//!
//! - 每个请求最多调用一次
//! - `success` 按 1:1 映射为 HTTP 200/500
//! - 结果负载原样透传，不增删字段
//! - 捕获任务抛出的一切错误，翻译为带通用消息的 500 响应
//!
//! 具体实现见 [`AutoRestocker`]。

pub mod auto;

pub use auto::AutoRestocker;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::AppError;

/// 补货任务结果
///
/// `success` 永远存在且为布尔值；`details` 展平后原样出现在响应体中，
/// 任务可以自由附加统计字段 (如 `restocked`)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl JobOutcome {
    /// 成功结果
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            details: Map::new(),
        }
    }

    /// 失败结果
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            details: Map::new(),
        }
    }

    /// 附加统计字段
    pub fn with_detail(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.details.insert(key.to_string(), value.into());
        self
    }
}

/// 补货任务接口
///
/// 以 trait object 形式挂在服务器状态上，测试可以注入替身。
#[async_trait]
pub trait RestockRunner: Send + Sync {
    /// 执行一个补货周期
    async fn run_cycle(&self) -> Result<JobOutcome, AppError>;
}
