//! Authentication Routes
//!
//! 令牌签发由外部认证服务负责，这里只有当前用户查询接口。

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Build authentication router
/// - /api/auth/me: protected (auth middleware handled at Router level)
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/auth/me", get(handler::me))
}
