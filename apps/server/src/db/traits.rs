//! Storage traits for the recipe API
//!
//! Handlers and services talk to these traits; the PostgreSQL implementations
//! live in [`crate::db::recipes`] and [`crate::db::users`]. Tests substitute
//! in-memory implementations.

use crate::{
    db::search::{Pagination, SearchParameters},
    models::{Recipe, RecipeId, RecipeSummary, User},
    Result,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Recipe persistence.
///
/// Every method is scoped to a single statement or transaction and is
/// subject to the configured query timeout.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Fetch up to `pagination.limit + 1` summaries owned by `user_id`.
    ///
    /// The extra row is the "more results" signal; callers must not return it.
    async fn list_summaries(
        &self,
        user_id: Uuid,
        search: &SearchParameters,
        pagination: Pagination,
    ) -> Result<Vec<RecipeSummary>>;

    /// Read one recipe and mark it viewed.
    ///
    /// # Errors
    /// * `NotFound` - no row has this id
    /// * `Ambiguous` - more than one row came back
    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe>;

    /// Insert a recipe for `user_id`, creating missing tags. Returns the new id.
    async fn create_recipe(&self, user_id: Uuid, recipe: &Recipe) -> Result<RecipeId>;

    /// Replace every field except `id` and `favorite`.
    async fn replace_recipe(&self, id: RecipeId, recipe: &Recipe) -> Result<()>;

    async fn set_favorite(&self, id: RecipeId, favorite: bool) -> Result<()>;

    /// Delete a recipe. Deleting a missing id succeeds.
    async fn delete_recipe(&self, id: RecipeId) -> Result<()>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users ordered by email.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Insert the user unless a row with this id already exists.
    async fn ensure_user(&self, user: &User) -> Result<()>;
}
