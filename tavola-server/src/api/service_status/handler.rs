//! Service Status API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{ServiceStatus, ServiceStatusUpdate};
use crate::db::repository::ServiceStatusRepository;
use crate::utils::AppResult;

/// GET /api/service-status - 读取营业状态开关
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<ServiceStatus>> {
    let repo = ServiceStatusRepository::new(state.db.clone());
    let status = repo.get_or_create().await?;
    Ok(Json(status))
}

/// PUT /api/service-status - 更新营业状态开关 (部分更新)
pub async fn update(
    State(state): State<ServerState>,
    Json(payload): Json<ServiceStatusUpdate>,
) -> AppResult<Json<ServiceStatus>> {
    let repo = ServiceStatusRepository::new(state.db.clone());
    let status = repo.update(payload).await?;

    tracing::info!("Service status toggles updated");
    Ok(Json(status))
}
