#![allow(dead_code)]

//! Test infrastructure for cr-server API tests

use cr_auth::{PasswordHasher, TokenService};
use cr_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-32-bytes!";
pub const TEST_PASSWORD: &str = "correct horse battery staple";

/// Lowest bcrypt cost keeps the suite fast
const TEST_BCRYPT_COST: u32 = 4;
const TEST_BODY_LIMIT: usize = 64 * 1024;

/// AppState over a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    let pool = cr_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(
        pool,
        TokenService::with_hs256(TEST_SECRET),
        PasswordHasher::new(TEST_BCRYPT_COST),
        TEST_BODY_LIMIT,
    )
}

pub async fn create_test_app() -> (Router, AppState) {
    let state = create_test_app_state().await;
    (build_router(state.clone()), state)
}

/// Send one request and return the status with the body parsed as JSON.
/// Plain-text bodies come back as a JSON string.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    (status, value)
}

/// Register an account and return its id and token
pub async fn register_user(app: &Router, name: &str, email: &str) -> (Uuid, String) {
    let (status, json) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "name": name, "email": email, "password": TEST_PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "register failed: {}", json);

    let id = Uuid::parse_str(json["_id"].as_str().unwrap()).unwrap();
    let token = json["token"].as_str().unwrap().to_string();
    (id, token)
}

/// Create a project through the API and return its id
pub async fn create_project(app: &Router, token: &str, title: &str) -> Uuid {
    let (status, json) = send(
        app,
        "POST",
        "/api/projects",
        Some(token),
        Some(json!({
            "title": title,
            "description": "A showcased project",
            "projectType": "Static",
            "thumbnail": "https://media.example.com/thumb.png",
            "technologies": ["Rust", "SQLite"],
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "create failed: {}", json);

    Uuid::parse_str(json["_id"].as_str().unwrap()).unwrap()
}
