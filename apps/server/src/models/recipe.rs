//! Recipe read/write models
//!
//! Recipes are materialized per request from the `recipes` table; nothing here
//! is cached across requests. JSON field names are camelCase.

use serde::{Deserialize, Serialize};

/// Server-assigned recipe identity. Immutable once assigned.
pub type RecipeId = i64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrepInfo {
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    #[serde(rename = "yield")]
    pub yield_: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ingredient {
    pub quantity: f32,
    pub unit: String,
    /// Ingredient name
    pub ingredient: String,
    /// Free-text note ("finely chopped", "to taste", ...)
    pub other: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IngredientSection {
    pub header: String,
    pub ingredients: Vec<Ingredient>,
}

/// A full recipe
///
/// `tags` are exposed as names; storage keeps them as ordered tag ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub favorite: bool,
    pub title: String,
    pub url: String,
    pub image_source: String,
    pub prep_info: PrepInfo,
    pub tags: Vec<String>,
    pub ingredient_sections: Vec<IngredientSection>,
    pub directions: Vec<String>,
    pub notes: Vec<String>,
}

/// List-view projection of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeSummary {
    pub recipe_id: RecipeId,
    pub favorite: bool,
    pub title: String,
    pub total_time: String,
    pub tags: Vec<String>,
    pub image_source: String,
}
