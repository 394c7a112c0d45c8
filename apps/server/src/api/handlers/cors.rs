//! CORS preflight handling
//!
//! Preflights are answered explicitly instead of by a blanket CORS layer so a
//! disallowed method or header yields 401. `Access-Control-Allow-Origin` itself
//! is added to every response by `middleware::allow_origin`.

use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

pub const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];
pub const ALLOWED_HEADERS: [&str; 2] = ["content-type", "accept"];

/// Outcome of validating a preflight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preflight {
    /// No `Access-Control-Request-Method`: plain 200.
    Bare,
    /// Requested method (and headers, if any) are allowed.
    Allowed,
    Rejected,
}

pub fn check_preflight(headers: &HeaderMap) -> Preflight {
    if !headers.contains_key(header::ORIGIN) {
        return Preflight::Rejected;
    }

    let Some(method) = headers.get(header::ACCESS_CONTROL_REQUEST_METHOD) else {
        return Preflight::Bare;
    };
    let method_allowed = method
        .to_str()
        .map(|m| ALLOWED_METHODS.contains(&m.trim()))
        .unwrap_or(false);
    if !method_allowed {
        return Preflight::Rejected;
    }

    if let Some(requested) = headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
        let Ok(requested) = requested.to_str() else {
            return Preflight::Rejected;
        };
        let all_allowed = requested
            .split(',')
            .map(|h| h.trim().to_ascii_lowercase())
            .all(|h| ALLOWED_HEADERS.contains(&h.as_str()));
        if !all_allowed {
            return Preflight::Rejected;
        }
    }

    Preflight::Allowed
}

/// `OPTIONS` on the recipe routes
pub async fn preflight(headers: HeaderMap) -> Response {
    match check_preflight(&headers) {
        Preflight::Rejected => {
            tracing::debug!("CORS preflight rejected");
            StatusCode::UNAUTHORIZED.into_response()
        }
        Preflight::Bare => StatusCode::OK.into_response(),
        Preflight::Allowed => (
            StatusCode::OK,
            [
                (
                    header::ACCESS_CONTROL_ALLOW_METHODS,
                    HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
                ),
                (
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    HeaderValue::from_static("content-type,accept"),
                ),
            ],
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(*v));
        }
        map
    }

    #[test]
    fn missing_origin_is_rejected() {
        let h = headers(&[("access-control-request-method", "GET")]);
        assert_eq!(check_preflight(&h), Preflight::Rejected);
    }

    #[test]
    fn origin_without_method_is_bare() {
        let h = headers(&[("origin", "http://localhost:8081")]);
        assert_eq!(check_preflight(&h), Preflight::Bare);
    }

    #[test]
    fn allowed_method_and_headers_pass() {
        let h = headers(&[
            ("origin", "http://localhost:8081"),
            ("access-control-request-method", "PUT"),
            ("access-control-request-headers", "Content-Type, ACCEPT"),
        ]);
        assert_eq!(check_preflight(&h), Preflight::Allowed);
    }

    #[test]
    fn disallowed_method_is_rejected() {
        let h = headers(&[
            ("origin", "http://localhost:8081"),
            ("access-control-request-method", "PATCH"),
        ]);
        assert_eq!(check_preflight(&h), Preflight::Rejected);
    }

    #[test]
    fn disallowed_header_is_rejected() {
        let h = headers(&[
            ("origin", "http://localhost:8081"),
            ("access-control-request-method", "POST"),
            ("access-control-request-headers", "content-type,x-api-key"),
        ]);
        assert_eq!(check_preflight(&h), Preflight::Rejected);
    }

    #[tokio::test]
    async fn allowed_preflight_lists_methods_and_headers() {
        let response = preflight(headers(&[
            ("origin", "http://localhost:8081"),
            ("access-control-request-method", "DELETE"),
        ]))
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET,POST,PUT,DELETE,OPTIONS"
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "content-type,accept"
        );
    }
}
