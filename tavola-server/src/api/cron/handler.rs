//! Cron Job Handlers
//!
//! 访问门控 + 补货任务调用。任务结果原样透传为响应体，
//! `success` 按 1:1 映射为 HTTP 200/500。

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::FutureExt;
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::RestockEvent;
use crate::db::repository::RestockEventRepository;
use crate::restock::JobOutcome;
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// 定时任务认证头
pub const CRON_AUTH_HEADER: &str = "x-cron-auth-token";

/// GET|POST /api/cron/restock - 触发一个补货周期
///
/// # 门控
///
/// 配置了密钥时，`x-cron-auth-token` 头必须与之完全一致，否则返回
/// 401 且不调用任务。未配置密钥时放行所有请求 (启动时已打印警告)。
///
/// # 失败语义
///
/// 任务返回错误、panic 或超时都被捕获并翻译为带通用消息的 500，
/// 原始错误只出现在服务端日志里。
pub async fn run_restock(State(state): State<ServerState>, headers: HeaderMap) -> Response {
    // Access gate
    if let Some(expected) = state.config.cron_secret.as_deref() {
        let supplied = headers.get(CRON_AUTH_HEADER).and_then(|v| v.to_str().ok());
        if supplied != Some(expected) {
            security_log!(
                "WARN",
                "cron_auth_failed",
                header_present = supplied.is_some()
            );
            return AppError::unauthorized().into_response();
        }
    }

    // Single-flight: 同一时刻最多一个补货周期
    let Some(_guard) = state.try_begin_restock() else {
        return AppError::conflict("Restock cycle already in progress").into_response();
    };

    let runner = state.restock.clone();
    let cycle = AssertUnwindSafe(async move { runner.run_cycle().await }).catch_unwind();
    let timeout = Duration::from_millis(state.config.restock_timeout_ms);

    match tokio::time::timeout(timeout, cycle).await {
        // 超时 - 任务被取消，按失败处理
        Err(_) => {
            tracing::error!(timeout_ms = state.config.restock_timeout_ms, "Restock job timed out");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(JobOutcome::failed("Restock job timed out")),
            )
                .into_response()
        }
        // 任务 panic - 捕获并返回通用失败
        Ok(Err(_)) => {
            tracing::error!("Restock job panicked");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(JobOutcome::failed("Restock job failed")),
            )
                .into_response()
        }
        // 任务返回错误 - 详情只进日志
        Ok(Ok(Err(e))) => {
            tracing::error!(error = %e, "Restock job failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(JobOutcome::failed("Restock job failed")),
            )
                .into_response()
        }
        // 任务完成 - 结果原样透传
        Ok(Ok(Ok(outcome))) => {
            let status = if outcome.success {
                StatusCode::OK
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(outcome)).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub limit: Option<i64>,
}

/// GET /api/restock-events - 最近补货记录 (新到旧)
pub async fn list_restock_events(
    State(state): State<ServerState>,
    Query(query): Query<EventsQuery>,
) -> AppResult<Json<Vec<RestockEvent>>> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let repo = RestockEventRepository::new(state.db.clone());
    let events = repo.find_recent(limit).await?;
    Ok(Json(events))
}
