mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};
use trendboard_store::{DataStore, FileStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Arc::new(trendboard_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool = connect_relational_tier(&config).await;
    let store = DataStore::new(pool, FileStore::new(&config.data_dir));
    let ai = trendboard_ai::GeminiClient::new(
        &config.gemini_api_key,
        &config.ai_model,
        config.ai_request_timeout_secs,
    )?;

    let app = build_app(AppState {
        store: Arc::new(store),
        ai: Arc::new(ai),
    });

    tracing::info!(addr = %config.bind_addr, "starting server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Connect the relational tier when `DATABASE_URL` is configured.
///
/// Connection or schema failures downgrade to the file/fixture tiers with a
/// warning instead of aborting startup; the dashboard must come up even
/// without a database.
async fn connect_relational_tier(
    config: &trendboard_core::AppConfig,
) -> Option<sqlx::PgPool> {
    let pool_config = trendboard_db::PoolConfig::from_app_config(config);
    let url = config.database_url.as_deref()?;

    match trendboard_db::connect_pool(url, pool_config).await {
        Ok(pool) => match trendboard_db::ensure_schema(&pool).await {
            Ok(()) => Some(pool),
            Err(e) => {
                tracing::warn!(error = %e, "schema setup failed; running without database");
                None
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "database unavailable; running without database");
            None
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
