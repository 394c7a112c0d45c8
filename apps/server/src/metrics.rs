//! Metrics collection for the cookbook server
//!
//! Prometheus metrics registered in the default registry and exposed on
//! `/metrics`.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, register_int_gauge_vec,
    HistogramVec, IntCounterVec, IntGauge, IntGaugeVec,
};

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "cookbook_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "cookbook_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "cookbook_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Recipe Metrics

    /// Recipe operations by name and outcome
    pub static ref RECIPE_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "cookbook_recipe_operations_total",
        "Total number of recipe operations",
        &["operation", "status"]
    )
    .expect("Failed to register RECIPE_OPERATIONS_TOTAL");

    /// Summaries returned per list call
    pub static ref RECIPE_SEARCH_RESULTS: HistogramVec = register_histogram_vec!(
        "cookbook_recipe_search_results",
        "Number of summaries returned by a list call",
        &["has_filters"],
        vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0]
    )
    .expect("Failed to register RECIPE_SEARCH_RESULTS");

    // Database Metrics

    pub static ref DB_QUERY_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "cookbook_db_query_duration_seconds",
        "Database query duration in seconds",
        &["query_type"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 2.0, 5.0]
    )
    .expect("Failed to register DB_QUERY_DURATION_SECONDS");

    pub static ref DB_QUERY_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "cookbook_db_query_errors_total",
        "Total number of database query errors",
        &["query_type", "error_type"]
    )
    .expect("Failed to register DB_QUERY_ERRORS_TOTAL");

    pub static ref DB_CONNECTIONS_ACTIVE: IntGauge = register_int_gauge!(
        "cookbook_db_connections_active",
        "Number of active database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_ACTIVE");

    pub static ref DB_CONNECTIONS_IDLE: IntGauge = register_int_gauge!(
        "cookbook_db_connections_idle",
        "Number of idle database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_IDLE");
}

/// Collapse recipe ids so path labels stay low-cardinality.
pub fn sanitize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }

    let segments: Vec<&str> = trimmed.split('/').collect();
    match segments.as_slice() {
        ["", "api", "recipes", id] if *id != "summaries" => "/api/recipes/{id}".to_string(),
        ["", "api", ..] if segments.len() > 4 => segments[0..3].join("/"),
        _ => trimmed.to_string(),
    }
}

/// Name the recipe operation a request maps to, for logging.
pub fn extract_operation(method: &str, path: &str) -> Option<&'static str> {
    match (method, sanitize_path(path).as_str()) {
        ("GET", "/api/recipes/summaries") => Some("list_summaries"),
        ("POST", "/api/recipes") => Some("create"),
        ("GET", "/api/recipes/{id}") => Some("get"),
        ("PUT", "/api/recipes/{id}") => Some("replace"),
        ("PATCH", "/api/recipes/{id}") => Some("set_favorite"),
        ("DELETE", "/api/recipes/{id}") => Some("delete"),
        ("GET", "/api/users") => Some("list_users"),
        _ => None,
    }
}

/// Refresh pool gauges from the live pool.
pub fn update_db_connection_metrics(pool: &sqlx::PgPool) {
    let size = pool.size() as i64;
    let idle = pool.num_idle() as i64;
    DB_CONNECTIONS_ACTIVE.set(size - idle);
    DB_CONNECTIONS_IDLE.set(idle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("/api/recipes/123"), "/api/recipes/{id}");
        assert_eq!(sanitize_path("/api/recipes/123/"), "/api/recipes/{id}");
        assert_eq!(
            sanitize_path("/api/recipes/summaries"),
            "/api/recipes/summaries"
        );
        assert_eq!(sanitize_path("/api/recipes"), "/api/recipes");
        assert_eq!(sanitize_path("/api/recipes/1/a/b"), "/api/recipes");
        assert_eq!(sanitize_path("/health"), "/health");
        assert_eq!(sanitize_path("/"), "/");
    }

    #[test]
    fn test_extract_operation() {
        assert_eq!(
            extract_operation("GET", "/api/recipes/summaries"),
            Some("list_summaries")
        );
        assert_eq!(extract_operation("GET", "/api/recipes/7"), Some("get"));
        assert_eq!(extract_operation("PATCH", "/api/recipes/7"), Some("set_favorite"));
        assert_eq!(extract_operation("OPTIONS", "/api/recipes/7"), None);
        assert_eq!(extract_operation("GET", "/health"), None);
    }
}
