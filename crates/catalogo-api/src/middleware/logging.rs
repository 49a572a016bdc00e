//! Request logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{error, info};

/// Emits one log line per request with method, path, status, and latency.
///
/// Server errors log at error level so failed requests stand out without an
/// `EnvFilter` change; everything else, including 4xx responses a catalog
/// client can trigger at will, stays at info.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    if status.is_server_error() {
        error!(%method, path, status = status.as_u16(), duration_ms, "Request failed");
    } else {
        info!(%method, path, status = status.as_u16(), duration_ms, "Request completed");
    }

    response
}
