//! Admin initialization endpoint: idempotency and failure containment.

mod common;

use std::sync::Arc;

use serde_json::json;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tavola_server::AutoRestocker;
use tavola_server::db::models::User;

use common::{app, get, memory_db, send, state_from, test_config};

#[tokio::test]
async fn test_init_is_idempotent() {
    let db = memory_db().await;
    let state = state_from(
        test_config(None),
        db.clone(),
        Arc::new(AutoRestocker::new(db.clone())),
    );
    let app = app(state);

    let (status, body) = send(&app, get("/api/init")).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"success": true, "message": "Initialization completed"})
    );

    // 第二次调用也成功，且不会创建第二个账号
    let (status, body) = send(&app, get("/api/init")).await;
    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"success": true, "message": "Initialization completed"})
    );

    let mut result = db.query("SELECT * FROM user").await.unwrap();
    let users: Vec<User> = result.take(0).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "admin");
    assert_eq!(users[0].role, "admin");
    assert_eq!(users[0].status, "active");
}

#[tokio::test]
async fn test_init_failure_returns_generic_message() {
    // 未选择 namespace 的裸连接：所有查询都会失败
    let broken_db = Surreal::new::<Mem>(()).await.unwrap();
    let state = state_from(
        test_config(None),
        broken_db.clone(),
        Arc::new(AutoRestocker::new(broken_db)),
    );
    let app = app(state);

    let (status, body) = send(&app, get("/api/init")).await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({"success": false, "message": "Initialization failed"})
    );
}
