use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, info_span, Instrument};

/// Per-request structured logging: every request runs inside a span carrying
/// method, route pattern and a fresh request id, and logs status + latency
/// on completion.
pub async fn observability_middleware(
    matched_path: Option<MatchedPath>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let route = matched_path
        .as_ref()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let start_time = Instant::now();

    let span = info_span!(
        "http_request",
        method = %method,
        uri = %uri,
        route = %route,
        request_id = %uuid::Uuid::new_v4(),
    );

    let response = next.run(request).instrument(span).await;

    let latency_ms = start_time.elapsed().as_millis() as u64;
    let status = response.status().as_u16();
    info!(%method, route, status, latency_ms, "request");

    response
}
