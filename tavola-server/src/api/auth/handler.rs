//! Authentication Handlers

use axum::{Extension, Json, extract::State};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult};

/// 对外暴露的用户信息 - 只有这四个白名单字段
///
/// 响应类型本身保证密码哈希等额外字段不会泄漏。
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub role: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserInfo,
}

/// GET /api/auth/me - 当前用户信息
///
/// role/status 从数据库读取最新值；令牌主体已不存在时视为未授权。
pub async fn me(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<MeResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let record = repo
        .find_by_id(&user.id)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let id = record
        .id
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or(user.id);

    Ok(Json(MeResponse {
        success: true,
        user: UserInfo {
            id,
            username: record.username,
            role: record.role,
            status: record.status,
        },
    }))
}
