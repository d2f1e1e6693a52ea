#![allow(dead_code)]
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use tuition_server::config::Config;
use tuition_server::state::AppState;
use tuition_server::router;

/// Build a router over a fresh in-memory database with the admin account
/// seeded. The single-connection pool keeps every statement on the same
/// in-memory instance.
pub async fn setup() -> (Router, Arc<AppState>) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    tuition_sqlite::db_init::init_database(&pool).await.unwrap();

    let config = Config {
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        sweep_interval_secs: 60,
        admin_username: "admin".to_string(),
        admin_password: "admin123".to_string(),
    };
    let state = AppState::from_pool(config, pool);
    state.accounts.ensure_admin("admin", "admin123").await.unwrap();

    (router(state.clone()), state)
}

/// Fire one request at the router and decode the JSON body (Null when
/// the response body is empty).
pub async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn login(router: &Router, username: &str, password: &str) -> String {
    let (status, body) = request(
        router,
        "POST",
        "/api/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub async fn register_student(
    router: &Router,
    admin_token: &str,
    name: &str,
    total_fee: i64,
    due_date: &str,
) -> Value {
    let (status, body) = request(
        router,
        "POST",
        "/api/admin/students",
        Some(admin_token),
        Some(json!({
            "name": name,
            "phone": "555-0100",
            "email": null,
            "course": "Mathematics",
            "total_fee": total_fee,
            "due_date": due_date,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}
