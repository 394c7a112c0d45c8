//! Recipe service
//!
//! Sits between the HTTP handlers and the [`RecipeStore`]:
//! - merges the request cursor into paging and enforces the limit bounds
//! - trims the over-fetched row and emits the next cursor
//! - counts operations by outcome

use crate::{
    db::search::{decode_cursor, next_cursor, ListRequest, Pagination},
    db::RecipeStore,
    metrics,
    models::{Recipe, RecipeId, RecipeSummary},
    Result,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// One page of summaries plus the cursor for the next one ("" when done).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryPage {
    pub summaries: Vec<RecipeSummary>,
    pub next_cursor: String,
}

pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
    max_limit: i64,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>, max_limit: i64) -> Self {
        Self { store, max_limit }
    }

    /// Resolve the effective page: cursor pairs win over query-string paging.
    fn effective_pagination(&self, request: &ListRequest) -> Result<Pagination> {
        let mut pagination = request.pagination;
        if let Some(cursor) = &request.cursor {
            let pairs = decode_cursor(cursor)?;
            pagination.merge_cursor(&pairs)?;
        }
        pagination.limit = pagination.limit.min(self.max_limit);
        pagination.validate(self.max_limit)?;
        Ok(pagination)
    }

    pub async fn list_summaries(&self, user_id: Uuid, request: &ListRequest) -> Result<SummaryPage> {
        let pagination = self.effective_pagination(request)?;

        let mut summaries = record(
            "list_summaries",
            self.store
                .list_summaries(user_id, &request.search, pagination)
                .await,
        )?;

        let next_cursor = next_cursor(summaries.len(), &pagination);
        summaries.truncate(pagination.limit as usize);

        let has_filters = !request.search.query.is_empty() || !request.search.tags.is_empty();
        metrics::RECIPE_SEARCH_RESULTS
            .with_label_values(&[if has_filters { "true" } else { "false" }])
            .observe(summaries.len() as f64);

        tracing::debug!(
            returned = summaries.len(),
            offset = pagination.offset,
            limit = pagination.limit,
            has_more = !next_cursor.is_empty(),
            "Listed recipe summaries"
        );

        Ok(SummaryPage {
            summaries,
            next_cursor,
        })
    }

    pub async fn get_recipe(&self, id: RecipeId) -> Result<Recipe> {
        record("get", self.store.get_recipe(id).await)
    }

    pub async fn create_recipe(&self, user_id: Uuid, recipe: &Recipe) -> Result<RecipeId> {
        record("create", self.store.create_recipe(user_id, recipe).await)
    }

    pub async fn replace_recipe(&self, id: RecipeId, recipe: &Recipe) -> Result<()> {
        record("replace", self.store.replace_recipe(id, recipe).await)
    }

    pub async fn set_favorite(&self, id: RecipeId, favorite: bool) -> Result<()> {
        record("set_favorite", self.store.set_favorite(id, favorite).await)
    }

    pub async fn delete_recipe(&self, id: RecipeId) -> Result<()> {
        record("delete", self.store.delete_recipe(id).await)
    }
}

fn record<T>(operation: &str, result: Result<T>) -> Result<T> {
    let status = if result.is_ok() { "success" } else { "error" };
    metrics::RECIPE_OPERATIONS_TOTAL
        .with_label_values(&[operation, status])
        .inc();
    result
}
