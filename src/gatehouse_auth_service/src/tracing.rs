use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tracing::Span;
use uuid::Uuid;

/// One span per request, tagged with a fresh request id so concurrent
/// request logs stay separable.
pub fn make_span_with_request_id(request: &Request<Body>) -> Span {
    let request_id = Uuid::new_v4();
    tracing::span!(
        tracing::Level::INFO,
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri(),
        version = ?request.version(),
    )
}

pub fn on_request(_request: &Request<Body>, _span: &Span) {
    tracing::event!(tracing::Level::INFO, "started processing request");
}

pub fn on_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    tracing::event!(
        tracing::Level::INFO,
        latency = ?latency,
        status = %response.status(),
        "finished processing request"
    );
}
