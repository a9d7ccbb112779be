//! Cron restock endpoint: access gate, pass-through relay, failure containment.

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;
use tavola_server::db::models::InventoryItemCreate;
use tavola_server::db::repository::InventoryRepository;
use tavola_server::{AppError, AutoRestocker, JobOutcome, RestockRunner};

use common::{
    TEST_SECRET, admin_token, app, auth_get, get, get_with_header, memory_db, send, state_from,
    test_config, test_state,
};

const CRON_HEADER: &str = "x-cron-auth-token";

/// 固定结果替身，记录调用次数
struct FixedRunner {
    outcome: JobOutcome,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl RestockRunner for FixedRunner {
    async fn run_cycle(&self) -> Result<JobOutcome, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.outcome.clone())
    }
}

struct PanicRunner;

#[async_trait]
impl RestockRunner for PanicRunner {
    async fn run_cycle(&self) -> Result<JobOutcome, AppError> {
        panic!("runner exploded");
    }
}

struct FailingRunner;

#[async_trait]
impl RestockRunner for FailingRunner {
    async fn run_cycle(&self) -> Result<JobOutcome, AppError> {
        Err(AppError::database("connection refused"))
    }
}

struct SlowRunner {
    delay: Duration,
}

#[async_trait]
impl RestockRunner for SlowRunner {
    async fn run_cycle(&self) -> Result<JobOutcome, AppError> {
        tokio::time::sleep(self.delay).await;
        Ok(JobOutcome::ok("slow cycle done"))
    }
}

fn outcome_from(value: serde_json::Value) -> JobOutcome {
    serde_json::from_value(value).expect("invalid outcome literal")
}

async fn gated_app_with_counter(
    outcome: JobOutcome,
    cron_secret: Option<&str>,
) -> (axum::Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let runner = Arc::new(FixedRunner {
        outcome,
        calls: calls.clone(),
    });
    let state = state_from(test_config(cron_secret), memory_db().await, runner);
    (app(state), calls)
}

#[tokio::test]
async fn test_gate_rejects_wrong_token() {
    let (app, calls) =
        gated_app_with_counter(JobOutcome::ok("should not run"), Some(TEST_SECRET)).await;

    let (status, body) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, "wrong-secret"),
    )
    .await;

    assert_eq!(status, 401);
    assert_eq!(body, json!({"success": false, "message": "Unauthorized"}));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_gate_rejects_missing_token() {
    let (app, calls) =
        gated_app_with_counter(JobOutcome::ok("should not run"), Some(TEST_SECRET)).await;

    let (status, body) = send(&app, get("/api/cron/restock")).await;

    assert_eq!(status, 401);
    assert_eq!(body, json!({"success": false, "message": "Unauthorized"}));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_gate_allows_matching_token() {
    let (app, calls) = gated_app_with_counter(
        outcome_from(json!({"success": true, "restocked": 0})),
        Some(TEST_SECRET),
    )
    .await;

    let (status, _) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_gate_is_bypassed_when_secret_unset() {
    let (app, calls) =
        gated_app_with_counter(outcome_from(json!({"success": true, "restocked": 0})), None).await;

    // 未配置密钥时任意 header 都放行
    let (status, _) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, "anything-at-all"),
    )
    .await;
    assert_eq!(status, 200);

    let (status, _) = send(&app, get("/api/cron/restock")).await;
    assert_eq!(status, 200);

    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_success_payload_passes_through_verbatim() {
    let expected = json!({"success": true, "restocked": 3});
    let (app, _) = gated_app_with_counter(outcome_from(expected.clone()), Some(TEST_SECRET)).await;

    let (status, body) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_failure_payload_passes_through_verbatim() {
    let expected = json!({"success": false, "message": "db unreachable"});
    let (app, _) = gated_app_with_counter(outcome_from(expected.clone()), Some(TEST_SECRET)).await;

    let (status, body) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn test_runner_panic_is_contained() {
    let state = state_from(
        test_config(Some(TEST_SECRET)),
        memory_db().await,
        Arc::new(PanicRunner),
    );
    let app = app(state);

    let (status, body) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    )
    .await;
    assert_eq!(status, 500);
    assert_eq!(body, json!({"success": false, "message": "Restock job failed"}));

    // 进程仍然存活，后续请求照常工作
    let (status, _) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    )
    .await;
    assert_eq!(status, 500);
}

#[tokio::test]
async fn test_runner_error_is_translated_to_generic_500() {
    let state = state_from(
        test_config(Some(TEST_SECRET)),
        memory_db().await,
        Arc::new(FailingRunner),
    );
    let app = app(state);

    let (status, body) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    )
    .await;

    assert_eq!(status, 500);
    // 原始错误只进日志，不外传
    assert_eq!(body, json!({"success": false, "message": "Restock job failed"}));
}

#[tokio::test]
async fn test_slow_runner_hits_timeout() {
    let mut config = test_config(Some(TEST_SECRET));
    config.restock_timeout_ms = 50;
    let state = state_from(
        config,
        memory_db().await,
        Arc::new(SlowRunner {
            delay: Duration::from_millis(500),
        }),
    );
    let app = app(state);

    let (status, body) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    )
    .await;

    assert_eq!(status, 500);
    assert_eq!(
        body,
        json!({"success": false, "message": "Restock job timed out"})
    );
}

#[tokio::test]
async fn test_concurrent_triggers_are_single_flight() {
    let state = state_from(
        test_config(Some(TEST_SECRET)),
        memory_db().await,
        Arc::new(SlowRunner {
            delay: Duration::from_millis(300),
        }),
    );
    let app = app(state);

    let first = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    );
    let second = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    );

    let ((status_a, body_a), (status_b, body_b)) = tokio::join!(first, second);

    let mut statuses = [status_a.as_u16(), status_b.as_u16()];
    statuses.sort();
    assert_eq!(statuses, [200, 409]);

    let busy_body = if status_a.as_u16() == 409 { body_a } else { body_b };
    assert_eq!(
        busy_body,
        json!({"success": false, "message": "Restock cycle already in progress"})
    );
}

#[tokio::test]
async fn test_end_to_end_restock_cycle() {
    let db = memory_db().await;
    let state = state_from(
        test_config(Some(TEST_SECRET)),
        db.clone(),
        Arc::new(AutoRestocker::new(db.clone())),
    );
    let app = app(state.clone());

    // 一个到达补货线的库存项
    let inventory = InventoryRepository::new(db);
    inventory
        .create(InventoryItemCreate {
            name: "tomatoes".to_string(),
            unit: Some("kg".to_string()),
            on_hand: Some(1),
            reorder_level: 4,
            par_level: 12,
            auto_restock: None,
        })
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        get_with_header("/api/cron/restock", CRON_HEADER, TEST_SECRET),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["restocked"], json!(1));

    // 补货记录可以通过认证接口查询
    let token = admin_token(&state).await;
    let (status, events) = send(&app, auth_get("/api/restock-events", &token)).await;
    assert_eq!(status, 200);
    let events = events.as_array().expect("events is an array");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["item_name"], json!("tomatoes"));
    assert_eq!(events[0]["restocked_quantity"], json!(11));
}

#[tokio::test]
async fn test_restock_events_require_auth() {
    let state = test_state(Some(TEST_SECRET)).await;
    let app = app(state);

    let (status, _) = send(&app, get("/api/restock-events")).await;
    assert_eq!(status, 401);
}
