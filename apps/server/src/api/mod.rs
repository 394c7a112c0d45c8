//! API layer - routes, handlers, and middleware

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;
    let allow_origin = state.config.server.allow_origin.clone();

    Router::new()
        // Health check
        .route("/health", get(handlers::misc::health_check))
        .route("/hello", get(handlers::misc::hello))
        // Favicon handler (returns 204 to prevent 404 logs)
        .route("/favicon.ico", get(favicon))
        // Metrics endpoint
        .merge(routes::metrics::metrics_routes())
        // Recipe API
        .nest("/api", routes::recipes::api_routes())
        // Add state
        .with_state(state)
        // Add middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(middleware::allow_origin(&allow_origin))
        .layer(middleware::trace())
        .layer(DefaultBodyLimit::max(max_body_size))
}

async fn favicon() -> impl IntoResponse {
    StatusCode::NO_CONTENT
}
