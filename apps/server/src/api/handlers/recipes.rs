//! Recipe handlers
//!
//! Every operation acts for the configured default user.

use crate::{
    api::extractors::{FavoriteQuery, JsonBody, ListQuery, RecipeIdPath},
    models::Recipe,
    state::AppState,
    Result,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

/// `GET /api/recipes/summaries`
pub async fn list_summaries(
    State(state): State<AppState>,
    ListQuery(request): ListQuery,
) -> Result<impl IntoResponse> {
    let user_id = state.config.recipes.default_user_id;
    let page = state.recipes.list_summaries(user_id, &request).await?;
    Ok(Json(page))
}

/// `GET /api/recipes/:id`
pub async fn get_recipe(
    State(state): State<AppState>,
    RecipeIdPath(id): RecipeIdPath,
) -> Result<impl IntoResponse> {
    let recipe = state.recipes.get_recipe(id).await?;
    Ok(Json(json!({ "recipe": recipe })))
}

/// `POST /api/recipes`
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(recipe): JsonBody<Recipe>,
) -> Result<impl IntoResponse> {
    tracing::debug!(title = %recipe.title, "Creating recipe");
    let user_id = state.config.recipes.default_user_id;
    let id = state.recipes.create_recipe(user_id, &recipe).await?;
    Ok(Json(json!({ "id": id })))
}

/// `PUT /api/recipes/:id`
pub async fn replace_recipe(
    State(state): State<AppState>,
    RecipeIdPath(id): RecipeIdPath,
    JsonBody(recipe): JsonBody<Recipe>,
) -> Result<impl IntoResponse> {
    state.recipes.replace_recipe(id, &recipe).await?;
    Ok(StatusCode::OK)
}

/// `PATCH /api/recipes/:id?favorite=bool`
pub async fn patch_recipe(
    State(state): State<AppState>,
    RecipeIdPath(id): RecipeIdPath,
    FavoriteQuery(favorite): FavoriteQuery,
) -> Result<impl IntoResponse> {
    state.recipes.set_favorite(id, favorite).await?;
    Ok(StatusCode::OK)
}

/// `DELETE /api/recipes/:id`
pub async fn delete_recipe(
    State(state): State<AppState>,
    RecipeIdPath(id): RecipeIdPath,
) -> Result<impl IntoResponse> {
    state.recipes.delete_recipe(id).await?;
    Ok(StatusCode::OK)
}
