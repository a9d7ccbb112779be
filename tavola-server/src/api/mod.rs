//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`init`] - 管理员初始化接口
//! - [`auth`] - 当前用户接口
//! - [`cron`] - 定时补货任务接口 (header 密钥门控)
//! - [`service_status`] - 营业状态开关接口
//! - [`table_types`] - 桌位类型管理接口
//! - [`inventory`] - 库存管理接口

pub mod auth;
pub mod cron;
pub mod health;
pub mod init;
pub mod inventory;
pub mod service_status;
pub mod table_types;
