//! Custom Axum extractors for the recipe API.
//!
//! Every rejection is a [`crate::Error`], so malformed requests get the same
//! `{"Code", "Message"}` body as any other client error.

use crate::{db::search::ListRequest, models::RecipeId, state::AppState, Error};
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Recipe id taken from the `:id` path segment. Only decimal digits are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeIdPath(pub RecipeId);

pub fn parse_recipe_id(raw: &str) -> Result<RecipeId, Error> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::BadRequest(format!("invalid recipe id '{raw}'")));
    }
    raw.parse()
        .map_err(|_| Error::BadRequest(format!("invalid recipe id '{raw}'")))
}

#[async_trait]
impl<S> FromRequestParts<S> for RecipeIdPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| Error::BadRequest(format!("invalid recipe id: {e}")))?;
        parse_recipe_id(&raw).map(RecipeIdPath)
    }
}

/// JSON request body with a 400 `ErrorBody` on any decode failure.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|e: JsonRejection| Error::BadRequest(e.body_text()))?;
        Ok(JsonBody(value))
    }
}

/// Ordered `(key, value)` pairs of the query string, percent-decoded.
pub fn query_items(raw_query: Option<&str>) -> Vec<(String, String)> {
    raw_query
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}

/// List-summaries query string, with defaults and limit clamp from config.
#[derive(Debug, Clone)]
pub struct ListQuery(pub ListRequest);

#[async_trait]
impl FromRequestParts<AppState> for ListQuery {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let items = query_items(parts.uri.query());
        let recipes = &state.config.recipes;
        ListRequest::from_items(&items, recipes.default_limit, recipes.max_limit).map(ListQuery)
    }
}

/// `?favorite=true|false` for the patch endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteQuery(pub bool);

pub fn parse_favorite(items: &[(String, String)]) -> Result<bool, Error> {
    let raw = items
        .iter()
        .rev()
        .find(|(k, _)| k == "favorite")
        .map(|(_, v)| v.as_str())
        .ok_or_else(|| Error::BadRequest("missing favorite query parameter".to_string()))?;

    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::BadRequest(format!("invalid favorite value '{raw}'"))),
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for FavoriteQuery
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_favorite(&query_items(parts.uri.query())).map(FavoriteQuery)
    }
}
