//! Metrics middleware - tracks HTTP request metrics

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let sanitized_path = crate::metrics::sanitize_path(req.uri().path());

    crate::metrics::HTTP_REQUESTS_IN_FLIGHT
        .with_label_values(&[&method, &sanitized_path])
        .inc();

    let response = next.run(req).await;

    let status = response.status().as_u16().to_string();

    crate::metrics::HTTP_REQUESTS_TOTAL
        .with_label_values(&[&method, &sanitized_path, &status])
        .inc();

    crate::metrics::HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[&method, &sanitized_path])
        .observe(start.elapsed().as_secs_f64());

    crate::metrics::HTTP_REQUESTS_IN_FLIGHT
        .with_label_values(&[&method, &sanitized_path])
        .dec();

    response
}
