//! Shared helpers for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use tower::ServiceExt;

use tavola_server::db::DbService;
use tavola_server::db::repository::UserRepository;
use tavola_server::{
    AutoRestocker, Config, JwtConfig, JwtService, RestockRunner, ServerState, build_router,
};

pub const TEST_SECRET: &str = "cron-secret-for-tests";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "0123456789abcdef0123456789abcdef".to_string(),
        expiration_minutes: 60,
        issuer: "tavola-server".to_string(),
        audience: "tavola-clients".to_string(),
    }
}

pub fn test_config(cron_secret: Option<&str>) -> Config {
    Config {
        work_dir: "/tmp/tavola-test".to_string(),
        http_port: 0,
        environment: "test".to_string(),
        cron_secret: cron_secret.map(String::from),
        restock_timeout_ms: 2000,
        admin_username: "admin".to_string(),
        admin_password: "admin123".to_string(),
        jwt: test_jwt_config(),
    }
}

/// 内存数据库 + schema 初始化
pub async fn memory_db() -> Surreal<Db> {
    let db = Surreal::new::<Mem>(())
        .await
        .expect("Failed to open memory db");
    DbService::init(db).await.expect("Failed to init schema").db
}

/// 手动装配服务器状态 (测试入口)
pub fn state_from(config: Config, db: Surreal<Db>, restock: Arc<dyn RestockRunner>) -> ServerState {
    let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
    ServerState::new(config, db, jwt_service, restock)
}

/// 默认状态：内存数据库 + 真实补货任务
pub async fn test_state(cron_secret: Option<&str>) -> ServerState {
    let db = memory_db().await;
    let restock: Arc<dyn RestockRunner> = Arc::new(AutoRestocker::new(db.clone()));
    state_from(test_config(cron_secret), db, restock)
}

pub fn app(state: ServerState) -> Router {
    build_router(state)
}

/// 发送请求并解析 JSON 响应体
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
    };
    (status, value)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_header(uri: &str, name: &str, value: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(name, value)
        .body(Body::empty())
        .unwrap()
}

pub fn auth_get(uri: &str, token: &str) -> Request<Body> {
    get_with_header(uri, "authorization", &format!("Bearer {}", token))
}

pub fn auth_json(method: &str, uri: &str, token: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

/// 确保管理员存在并签出其令牌
pub async fn admin_token(state: &ServerState) -> String {
    let repo = UserRepository::new(state.db.clone());
    repo.ensure_admin(&state.config.admin_username, &state.config.admin_password)
        .await
        .expect("Failed to ensure admin user");
    let user = repo
        .find_by_username(&state.config.admin_username)
        .await
        .expect("Failed to load admin user")
        .expect("Admin user missing");
    let id = user.id.expect("Admin user has no id").to_string();
    state
        .jwt_service
        .generate_token(&id, &user.username, &user.role)
        .expect("Failed to generate admin token")
}

/// 创建一个普通员工并签出其令牌
pub async fn staff_token(state: &ServerState) -> String {
    let mut result = state
        .db
        .query(
            "CREATE user SET username = 'maria', hash_pass = 'unused', \
             role = 'staff', status = 'active', created_at = 0, updated_at = 0",
        )
        .await
        .expect("Failed to create staff user");
    let users: Vec<tavola_server::db::models::User> =
        result.take(0).expect("Failed to parse staff user");
    let id = users
        .first()
        .and_then(|u| u.id.clone())
        .expect("Staff user has no id")
        .to_string();
    state
        .jwt_service
        .generate_token(&id, "maria", "staff")
        .expect("Failed to generate staff token")
}
