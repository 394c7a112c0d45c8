//! User handlers

use crate::{state::AppState, Result};
use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde_json::json;

/// `GET /api/users`
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.users.list_users().await?;
    Ok(Json(json!({ "users": users })))
}
