use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

pub const ROOT_MESSAGE: &str = "Siit Coderelic API is running...";

/// GET / - Plain banner
pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

/// GET /health - Component status
pub async fn health(State(state): State<AppState>) -> Response {
    let database_ok = database_reachable(&state).await;

    let health = json!({
        "status": if database_ok { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": if database_ok { "operational" } else { "unreachable" },
            "auth": "operational",
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe; 503 until the database answers
pub async fn readiness(State(state): State<AppState>) -> Response {
    if database_reachable(&state).await {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response()
    }
}

async fn database_reachable(state: &AppState) -> bool {
    match cr_db::ping(&state.pool).await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database ping failed: {}", e);
            false
        }
    }
}
