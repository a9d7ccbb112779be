//! Inventory API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{InventoryItem, InventoryItemCreate, InventoryItemUpdate};
use crate::db::repository::InventoryRepository;
use crate::utils::{AppError, AppResult};

/// GET /api/inventory - 获取所有在用库存项
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let repo = InventoryRepository::new(state.db.clone());
    let items = repo.find_all().await?;
    Ok(Json(items))
}

/// GET /api/inventory/low - 获取到达补货线的库存项
pub async fn list_low(State(state): State<ServerState>) -> AppResult<Json<Vec<InventoryItem>>> {
    let repo = InventoryRepository::new(state.db.clone());
    let items = repo.find_needing_restock().await?;
    Ok(Json(items))
}

/// GET /api/inventory/{id} - 获取单个库存项
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<InventoryItem>> {
    let repo = InventoryRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Inventory item {} not found", id)))?;
    Ok(Json(item))
}

/// POST /api/inventory - 创建库存项
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InventoryItemCreate>,
) -> AppResult<Json<InventoryItem>> {
    payload.validate()?;

    let repo = InventoryRepository::new(state.db.clone());
    let item = repo.create(payload).await?;

    tracing::info!(name = %item.name, "Inventory item created");
    Ok(Json(item))
}

/// PUT /api/inventory/{id} - 更新库存项
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<InventoryItemUpdate>,
) -> AppResult<Json<InventoryItem>> {
    payload.validate()?;

    let repo = InventoryRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await?;

    Ok(Json(item))
}

/// DELETE /api/inventory/{id} - 删除库存项
pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = InventoryRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;

    Ok(Json(result))
}
