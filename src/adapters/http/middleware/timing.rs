//! Request timing middleware.
//!
//! Records wall-clock execution time for every request and emits it as a
//! structured log event once the response is ready.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Axum middleware that logs the elapsed time of each request.
///
/// Apply with `axum::middleware::from_fn(track_execution_time)` on the
/// outermost router so the measurement covers the full handler stack.
pub async fn track_execution_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    tracing::debug!(
        %method,
        path,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        "request completed"
    );

    response
}
