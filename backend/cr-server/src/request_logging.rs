use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use log::info;

/// Log every request as `METHOD path -> status (ms)`
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({}ms)",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}
