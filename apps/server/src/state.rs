//! Shared application state (the composition root)

use crate::{
    config::Config,
    db::{PostgresRecipeStore, PostgresUserStore, MIGRATOR},
    models::User,
    services::{RecipeService, UserService},
    Result,
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Executor;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db_pool: PgPool,
    pub recipes: Arc<RecipeService>,
    pub users: Arc<UserService>,
}

impl AppState {
    /// Connect, migrate and wire stores and services.
    pub async fn new(config: Config) -> Result<Self> {
        let db_pool = pool_options(&config)
            .connect(&config.database.url)
            .await
            .map_err(crate::Error::Database)?;

        tracing::info!(
            max_connections = config.database.pool_max_size,
            "Database pool connected"
        );

        if config.database.run_migrations {
            MIGRATOR.run(&db_pool).await?;
            tracing::info!("Database migrations applied");
        }

        let state = Self::from_pool(config, db_pool);

        let owner = User {
            id: state.config.recipes.default_user_id,
            email: state.config.recipes.default_user_email.clone(),
        };
        state.users.ensure_user(&owner).await?;
        tracing::info!(user_id = %owner.id, "Default recipe owner ready");

        Ok(state)
    }

    /// Wire stores and services over an existing pool without touching the database.
    pub fn from_pool(config: Config, db_pool: PgPool) -> Self {
        let query_timeout = config.database.query_timeout();
        let recipe_store = Arc::new(PostgresRecipeStore::new(db_pool.clone(), query_timeout));
        let user_store = Arc::new(PostgresUserStore::new(db_pool.clone(), query_timeout));

        Self {
            recipes: Arc::new(RecipeService::new(recipe_store, config.recipes.max_limit)),
            users: Arc::new(UserService::new(user_store)),
            config: Arc::new(config),
            db_pool,
        }
    }

    /// State whose pool connects on first use. Handlers that never reach the
    /// database can be exercised without a server.
    pub fn lazy(config: Config) -> Result<Self> {
        let db_pool = pool_options(&config)
            .connect_lazy(&config.database.url)
            .map_err(crate::Error::Database)?;
        Ok(Self::from_pool(config, db_pool))
    }
}

fn pool_options(config: &Config) -> PgPoolOptions {
    let statement_timeout_ms = config.database.statement_timeout_seconds * 1000;

    PgPoolOptions::new()
        .min_connections(config.database.pool_min_size)
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(Duration::from_secs(config.database.pool_timeout_seconds))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                conn.execute(format!("SET statement_timeout = {statement_timeout_ms}").as_str())
                    .await?;
                Ok(())
            })
        })
}
