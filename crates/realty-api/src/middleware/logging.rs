//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

use super::request_id::request_id_of;

/// Logs request method, path, status, duration and request id.
///
/// Server errors are logged at `warn`; the controller has already logged
/// their cause.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request_id_of(request.headers()).unwrap_or("-").to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            method = %method,
            path = %uri.path(),
            status = status.as_u16(),
            duration_ms = duration.as_millis() as u64,
            request_id = %request_id,
            "HTTP request failed"
        );
    } else {
        info!(
            method = %method,
            path = %uri.path(),
            status = status.as_u16(),
            duration_ms = duration.as_millis() as u64,
            request_id = %request_id,
            "HTTP request"
        );
    }

    response
}
