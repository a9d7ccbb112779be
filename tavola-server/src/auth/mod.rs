//! 认证模块
//!
//! JWT 校验与 Argon2 密码哈希。令牌由外部认证服务签发，
//! 本服务只负责校验并注入 [`CurrentUser`]。

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth};
