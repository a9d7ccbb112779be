//! Table Type API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use surrealdb::RecordId;
use validator::Validate;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{TableType, TableTypeCreate, TableTypeUpdate};
use crate::db::repository::TableTypeRepository;
use crate::utils::{AppError, AppResult};

/// 当前用户的记录引用 ("user:xxx")
fn user_ref(user: &CurrentUser) -> AppResult<RecordId> {
    user.id
        .parse()
        .map_err(|_| AppError::internal(format!("Invalid user reference: {}", user.id)))
}

/// GET /api/table-types - 获取所有桌位类型
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<TableType>>> {
    let repo = TableTypeRepository::new(state.db.clone());
    let types = repo.find_all().await?;
    Ok(Json(types))
}

/// GET /api/table-types/{id} - 获取单个桌位类型
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<TableType>> {
    let repo = TableTypeRepository::new(state.db.clone());
    let table_type = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Table type {} not found", id)))?;
    Ok(Json(table_type))
}

/// POST /api/table-types - 创建桌位类型
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<TableTypeCreate>,
) -> AppResult<Json<TableType>> {
    payload.validate()?;

    let repo = TableTypeRepository::new(state.db.clone());
    let table_type = repo.create(payload, user_ref(&user)?).await?;

    tracing::info!(name = %table_type.name, created_by = %user.username, "Table type created");
    Ok(Json(table_type))
}

/// PUT /api/table-types/{id} - 更新桌位类型 (记录更新人)
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<TableTypeUpdate>,
) -> AppResult<Json<TableType>> {
    payload.validate()?;

    let repo = TableTypeRepository::new(state.db.clone());
    let table_type = repo.update(&id, payload, user_ref(&user)?).await?;

    tracing::info!(name = %table_type.name, updated_by = %user.username, "Table type updated");
    Ok(Json(table_type))
}
