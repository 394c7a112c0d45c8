//! Layer factories for middleware

use axum::http::{header, HeaderValue};
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    set_header::SetResponseHeaderLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Tracing/logging middleware
///
/// Request-level fields (request id, operation) are attached by
/// `request_id_middleware`; this layer adds latency and status at DEBUG.
pub fn trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG))
}

/// Stamp `Access-Control-Allow-Origin` on every response.
///
/// `origin` is checked by `Config::validate`; an unparsable value falls back
/// to not emitting the header.
pub fn allow_origin(origin: &str) -> SetResponseHeaderLayer<Option<HeaderValue>> {
    let value = HeaderValue::from_str(origin).ok();
    if value.is_none() {
        tracing::warn!(origin = %origin, "Invalid allow_origin, CORS header disabled");
    }
    SetResponseHeaderLayer::overriding(header::ACCESS_CONTROL_ALLOW_ORIGIN, value)
}
