//! Shared construction of the data facade for the commands.

use trendboard_core::AppConfig;
use trendboard_store::{DataStore, FileStore};

/// Open the facade with whatever tiers the environment provides. The schema
/// is created right after connecting so a fresh database accepts writes on
/// the first run. A configured-but-unreachable database (or a failed schema
/// setup) degrades to the file tier with a warning, matching the server's
/// startup behavior.
pub(crate) async fn open_data_store(config: &AppConfig) -> DataStore {
    let pool = match config.database_url.as_deref() {
        None => None,
        Some(url) => {
            let pool_config = trendboard_db::PoolConfig::from_app_config(config);
            match trendboard_db::connect_pool(url, pool_config).await {
                Ok(pool) => match trendboard_db::ensure_schema(&pool).await {
                    Ok(()) => Some(pool),
                    Err(e) => {
                        tracing::warn!(error = %e, "schema setup failed; using file tier only");
                        None
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "database unavailable; using file tier only");
                    None
                }
            }
        }
    };

    DataStore::new(pool, FileStore::new(&config.data_dir))
}
