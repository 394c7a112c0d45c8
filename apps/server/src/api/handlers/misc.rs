//! Small informational endpoints

use crate::{state::AppState, Error, Result};
use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "cookbook-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn hello() -> &'static str {
    "Hello World!"
}

/// `GET /api/extractor/key` - key for the client-side recipe extractor
pub async fn extractor_key(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let key = state
        .config
        .extractor
        .api_key
        .clone()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| Error::NotFound("no extractor key configured".to_string()))?;
    Ok(Json(json!({ "key": key })))
}
