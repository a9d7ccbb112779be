//! Current-user endpoint: field whitelist and token handling.

mod common;

use serde_json::json;

use common::{TEST_SECRET, admin_token, app, auth_get, get, send, test_state};

#[tokio::test]
async fn test_me_requires_token() {
    let state = test_state(Some(TEST_SECRET)).await;
    let app = app(state);

    let (status, body) = send(&app, get("/api/auth/me")).await;

    assert_eq!(status, 401);
    assert_eq!(body, json!({"success": false, "message": "Unauthorized"}));
}

#[tokio::test]
async fn test_me_rejects_garbage_token() {
    let state = test_state(Some(TEST_SECRET)).await;
    let app = app(state);

    let (status, body) = send(&app, auth_get("/api/auth/me", "not.a.jwt")).await;

    assert_eq!(status, 401);
    assert_eq!(body, json!({"success": false, "message": "Invalid token"}));
}

#[tokio::test]
async fn test_me_returns_whitelisted_fields_only() {
    let state = test_state(Some(TEST_SECRET)).await;
    let token = admin_token(&state).await;
    let app = app(state);

    let (status, body) = send(&app, auth_get("/api/auth/me", &token)).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], json!(true));

    let user = body["user"].as_object().expect("user is an object");

    // 存储的记录里有 hash_pass 等字段，响应里只能有这四个
    let mut keys: Vec<&str> = user.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(keys, ["id", "role", "status", "username"]);

    assert_eq!(user["username"], json!("admin"));
    assert_eq!(user["role"], json!("admin"));
    assert_eq!(user["status"], json!("active"));
    assert!(
        user["id"].as_str().unwrap().starts_with("user:"),
        "id should be a user record reference"
    );
}

#[tokio::test]
async fn test_me_rejects_token_for_missing_user() {
    let state = test_state(Some(TEST_SECRET)).await;
    let token = state
        .jwt_service
        .generate_token("user:ghost", "ghost", "staff")
        .unwrap();
    let app = app(state);

    let (status, body) = send(&app, auth_get("/api/auth/me", &token)).await;

    assert_eq!(status, 401);
    assert_eq!(body, json!({"success": false, "message": "Unauthorized"}));
}
