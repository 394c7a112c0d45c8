use anyhow::Context as _;
use cookbook::Config;
use std::sync::Arc;
use tokio::sync::OnceCell;

static SHARED: OnceCell<Option<Arc<SharedTestResources>>> = OnceCell::const_new();

pub struct SharedTestResources {
    pub base_config: Config,
}

/// Shared test configuration, or `None` when no test database is configured.
///
/// The database comes from `COOKBOOK__DATABASE__TEST_DATABASE_URL` (or
/// `TEST_DATABASE_URL`); the regular database URL is never used by tests.
pub async fn shared() -> anyhow::Result<Option<Arc<SharedTestResources>>> {
    SHARED
        .get_or_try_init(|| async {
            cookbook::logging::init_simple_logging();

            let mut config = Config::load().context("load Config for tests")?;
            let test_url = config
                .database
                .test_database_url
                .clone()
                .or_else(|| std::env::var("TEST_DATABASE_URL").ok())
                .filter(|url| !url.trim().is_empty());

            let Some(url) = test_url else {
                return Ok(None);
            };
            config.database.url = url;

            // DB pool sizing for per-test pools (TestApp overrides per schema).
            config.database.pool_min_size = 0;
            config.database.pool_max_size = 5;
            config.database.pool_timeout_seconds = 30;
            config.database.query_timeout_ms = 10_000;

            Ok(Some(Arc::new(SharedTestResources {
                base_config: config,
            })))
        })
        .await
        .cloned()
}
