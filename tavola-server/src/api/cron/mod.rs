//! 定时补货任务路由
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/cron/restock | GET/POST | 触发一个补货周期 | `x-cron-auth-token` 头密钥 |
//! | /api/restock-events | GET | 最近补货记录 | JWT |
//!
//! 补货接口由外部调度器 (cron) 触发，不走 JWT 中间件，
//! 由处理器内部的 header 密钥门控保护。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/cron/restock",
            get(handler::run_restock).post(handler::run_restock),
        )
        .route("/api/restock-events", get(handler::list_restock_events))
}
