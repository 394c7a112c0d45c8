//! PostgreSQL recipe store

use super::deadline::run_with_deadline;
use super::search::query_builder::{bind_all, TAG_NAMES_SQL};
use super::search::{Pagination, SearchParameters, SummaryQuery};
use super::tags::ensure_tag_ids;
use super::traits::RecipeStore;
use crate::{
    models::{IngredientSection, PrepInfo, Recipe, RecipeId, RecipeSummary},
    Error, Result,
};
use async_trait::async_trait;
use sqlx::{postgres::PgRow, types::Json, PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresRecipeStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PostgresRecipeStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    /// Stamp `last_viewed` under its own deadline, separate from the read.
    async fn touch_last_viewed(&self, id: RecipeId) -> Result<()> {
        run_with_deadline("touch_last_viewed", self.query_timeout, async {
            sqlx::query("UPDATE recipes SET last_viewed = now() WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await
    }

    fn summary_from_row(row: &PgRow) -> Result<RecipeSummary> {
        Ok(RecipeSummary {
            recipe_id: row.try_get("id")?,
            favorite: row.try_get("favorite")?,
            title: row.try_get("title")?,
            total_time: row.try_get("total_time")?,
            tags: row.try_get("tag_names")?,
            image_source: row.try_get("image_source")?,
        })
    }

    fn recipe_from_row(row: &PgRow) -> Result<Recipe> {
        let prep_info: Json<PrepInfo> = row.try_get("prep_info")?;
        let sections: Json<Vec<IngredientSection>> = row.try_get("ingredient_sections")?;

        Ok(Recipe {
            id: row.try_get("id")?,
            favorite: row.try_get("favorite")?,
            title: row.try_get("title")?,
            url: row.try_get("url")?,
            image_source: row.try_get("image_source")?,
            prep_info: prep_info.0,
            tags: row.try_get("tag_names")?,
            ingredient_sections: sections.0,
            directions: row.try_get("directions")?,
            notes: row.try_get("notes")?,
        })
    }
}

#[async_trait]
impl RecipeStore for PostgresRecipeStore {
    async fn list_summaries(
        &self,
        user_id: Uuid,
        search: &SearchParameters,
        pagination: Pagination,
    ) -> Result<Vec<RecipeSummary>> {
        let (sql, bind_values) = SummaryQuery::new(user_id, search, pagination).build_sql();
        tracing::debug!(sql = %sql, binds = bind_values.len(), "Listing recipe summaries");

        run_with_deadline("list_summaries", self.query_timeout, async {
            let rows = bind_all(sqlx::query(&sql), bind_values)
                .fetch_all(&self.pool)
                .await?;
            rows.iter().map(Self::summary_from_row).collect()
        })
        .await
    }

    async fn get_recipe(&self, id: RecipeId) -> Result<Recipe> {
        let sql = format!(
            "SELECT r.id, r.favorite, r.title, r.url, r.image_source, r.prep_info, \
             r.ingredient_sections, r.directions, r.notes, {TAG_NAMES_SQL} AS tag_names \
             FROM recipes r WHERE r.id = $1"
        );

        let recipe = run_with_deadline("get_recipe", self.query_timeout, async {
            let rows = sqlx::query(&sql).bind(id).fetch_all(&self.pool).await?;
            match rows.as_slice() {
                [] => Err(Error::NotFound(format!("recipe {id}"))),
                [row] => Self::recipe_from_row(row),
                _ => Err(Error::Ambiguous(format!(
                    "{} rows for recipe {id}",
                    rows.len()
                ))),
            }
        })
        .await?;

        // Best effort: a failed or stalled view stamp never fails the read
        if let Err(e) = self.touch_last_viewed(id).await {
            tracing::warn!(recipe_id = id, error = %e, "Failed to update last_viewed");
        }

        Ok(recipe)
    }

    async fn create_recipe(&self, user_id: Uuid, recipe: &Recipe) -> Result<RecipeId> {
        run_with_deadline("create_recipe", self.query_timeout, async {
            let mut tx = self.pool.begin().await?;

            let tag_ids = ensure_tag_ids(&mut tx, &recipe.tags).await?;

            let id: RecipeId = sqlx::query_scalar(
                r#"
                INSERT INTO recipes (
                    user_id, favorite, title, url, image_source, prep_info,
                    ingredient_sections, tags, directions, notes
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING id
                "#,
            )
            .bind(user_id)
            .bind(recipe.favorite)
            .bind(&recipe.title)
            .bind(&recipe.url)
            .bind(&recipe.image_source)
            .bind(Json(&recipe.prep_info))
            .bind(Json(&recipe.ingredient_sections))
            .bind(&tag_ids)
            .bind(&recipe.directions)
            .bind(&recipe.notes)
            .fetch_one(&mut *tx)
            .await?;

            tx.commit().await?;

            tracing::info!(recipe_id = id, tags = tag_ids.len(), "Recipe created");
            Ok(id)
        })
        .await
    }

    async fn replace_recipe(&self, id: RecipeId, recipe: &Recipe) -> Result<()> {
        run_with_deadline("replace_recipe", self.query_timeout, async {
            let mut tx = self.pool.begin().await?;

            let tag_ids = ensure_tag_ids(&mut tx, &recipe.tags).await?;

            let result = sqlx::query(
                r#"
                UPDATE recipes SET
                    title = $2,
                    url = $3,
                    image_source = $4,
                    prep_info = $5,
                    ingredient_sections = $6,
                    tags = $7,
                    directions = $8,
                    notes = $9,
                    modified = now()
                WHERE id = $1
                "#,
            )
            .bind(id)
            .bind(&recipe.title)
            .bind(&recipe.url)
            .bind(&recipe.image_source)
            .bind(Json(&recipe.prep_info))
            .bind(Json(&recipe.ingredient_sections))
            .bind(&tag_ids)
            .bind(&recipe.directions)
            .bind(&recipe.notes)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;

            tracing::info!(
                recipe_id = id,
                rows_affected = result.rows_affected(),
                "Recipe replaced"
            );
            Ok(())
        })
        .await
    }

    async fn set_favorite(&self, id: RecipeId, favorite: bool) -> Result<()> {
        run_with_deadline("set_favorite", self.query_timeout, async {
            sqlx::query("UPDATE recipes SET favorite = $2 WHERE id = $1")
                .bind(id)
                .bind(favorite)
                .execute(&self.pool)
                .await?;
            Ok(())
        })
        .await
    }

    async fn delete_recipe(&self, id: RecipeId) -> Result<()> {
        run_with_deadline("delete_recipe", self.query_timeout, async {
            let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await?;

            if result.rows_affected() == 0 {
                tracing::debug!(recipe_id = id, "Delete matched no rows");
            }
            Ok(())
        })
        .await
    }
}
