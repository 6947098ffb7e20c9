use crate::{
    AppState, create_project, delete_project, get_profile, get_project, get_user_by_id, health,
    list_projects, login, my_projects, register, request_logging, update_profile, update_project,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints.
///
/// Protection is per handler: any handler taking an `AuthUser` rejects
/// requests without a valid bearer token before its body runs.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;

    Router::new()
        // Service endpoints
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Auth
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        // Users
        .route("/api/users/profile", get(get_profile).put(update_profile))
        .route("/api/users/{id}", get(get_user_by_id))
        // Projects
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/myprojects", get(my_projects))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_logging::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
