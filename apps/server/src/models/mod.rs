//! Domain models for the cookbook server

pub mod recipe;
pub mod user;

pub use recipe::{Ingredient, IngredientSection, PrepInfo, Recipe, RecipeId, RecipeSummary};
pub use user::User;
