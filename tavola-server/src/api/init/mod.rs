//! 管理员初始化路由
//!
//! 幂等地确保初始管理员账号存在。任何失败都只在服务端记录详情，
//! 对外统一返回通用的失败消息。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::UserRepository;

/// 初始化路由 - 公共路由 (无需认证，操作幂等)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/init", get(init))
}

#[derive(Serialize)]
struct InitResponse {
    success: bool,
    message: &'static str,
}

/// GET /api/init - 确保管理员账号存在
async fn init(State(state): State<ServerState>) -> Response {
    let repo = UserRepository::new(state.db.clone());

    match repo
        .ensure_admin(&state.config.admin_username, &state.config.admin_password)
        .await
    {
        Ok(created) => {
            if created {
                tracing::info!(username = %state.config.admin_username, "Admin user created");
            }
            (
                StatusCode::OK,
                Json(InitResponse {
                    success: true,
                    message: "Initialization completed",
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Admin initialization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(InitResponse {
                    success: false,
                    message: "Initialization failed",
                }),
            )
                .into_response()
        }
    }
}
