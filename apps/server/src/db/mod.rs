//! Database layer - stores, search query building and migrations

mod deadline;
pub mod recipes;
pub mod search;
pub mod tags;
pub mod traits;
pub mod users;

pub use recipes::PostgresRecipeStore;
pub use traits::{RecipeStore, UserStore};
pub use users::PostgresUserStore;

/// Migrations embedded from `apps/server/migrations`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
