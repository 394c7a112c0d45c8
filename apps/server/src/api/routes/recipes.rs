//! Recipe API Routes
//!
//! Mounted under `/api`. Trailing slashes are accepted by registering both
//! forms; no redirects are issued. Each recipe route also answers `OPTIONS`
//! preflights.

use crate::api::handlers::{cors, misc, recipes, users};
use crate::state::AppState;
use axum::{
    routing::{get, options},
    Router,
};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Users
        .route("/users", get(users::list_users))
        .route("/users/", get(users::list_users))
        // Extractor key
        .route("/extractor/key", get(misc::extractor_key))
        .route("/extractor/key/", get(misc::extractor_key))
        // Summaries (exact route before :id)
        .route(
            "/recipes/summaries",
            get(recipes::list_summaries).options(cors::preflight),
        )
        .route(
            "/recipes/summaries/",
            get(recipes::list_summaries).options(cors::preflight),
        )
        // Collection
        .route(
            "/recipes",
            options(cors::preflight).post(recipes::create_recipe),
        )
        .route(
            "/recipes/",
            options(cors::preflight).post(recipes::create_recipe),
        )
        // Single recipe
        .route(
            "/recipes/:id",
            get(recipes::get_recipe)
                .put(recipes::replace_recipe)
                .patch(recipes::patch_recipe)
                .delete(recipes::delete_recipe)
                .options(cors::preflight),
        )
        .route(
            "/recipes/:id/",
            get(recipes::get_recipe)
                .put(recipes::replace_recipe)
                .patch(recipes::patch_recipe)
                .delete(recipes::delete_recipe)
                .options(cors::preflight),
        )
}
