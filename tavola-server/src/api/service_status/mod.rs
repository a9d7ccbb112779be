//! Service Status API Module

mod handler;

use axum::{
    Router, middleware,
    routing::{get, put},
};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Service status router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/service-status", routes())
}

fn routes() -> Router<ServerState> {
    // 读取路由：任何已登录用户可见
    let read_routes = Router::new().route("/", get(handler::get));

    // 写入路由：营业开关属于管理动作
    let write_routes = Router::new()
        .route("/", put(handler::update))
        .layer(middleware::from_fn(require_admin));

    read_routes.merge(write_routes)
}
