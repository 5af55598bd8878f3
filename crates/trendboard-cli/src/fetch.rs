//! The `fetch` command: collect from every source concurrently, persist the
//! combined collection, then generate and save a daily report.

use chrono::Utc;
use trendboard_core::{AppConfig, Trend};
use trendboard_sources::{exploding_topics, google_trends, reddit, SourceClient, SourceError};

use crate::{report, store};

pub(crate) async fn run(config: &AppConfig, geo: &str, subreddit: &str) -> anyhow::Result<()> {
    let store = store::open_data_store(config).await;
    let client = SourceClient::new(
        config.source_request_timeout_secs,
        &config.source_user_agent,
    )?;

    let (google, reddit, exploding) = tokio::join!(
        google_trends::fetch(&client, geo),
        reddit::fetch(&client, subreddit),
        fetch_exploding(&client, config),
    );

    let mut trends = Vec::new();
    trends.extend(collected("google_trends", google));
    trends.extend(collected("reddit", reddit));
    trends.extend(collected("exploding_topics", exploding));

    if trends.is_empty() {
        tracing::warn!("no trends collected from any source; nothing to save");
        return Ok(());
    }

    store.save_trends_data(&trends).await;
    println!("collected and saved {} trends", trends.len());

    let month = Utc::now().format("%B %Y").to_string();
    report::generate_and_save(config, &store, &month, &trends).await
}

async fn fetch_exploding(
    client: &SourceClient,
    config: &AppConfig,
) -> Result<Vec<Trend>, SourceError> {
    match config.exploding_topics_api_key.as_deref() {
        Some(key) => exploding_topics::fetch(client, key).await,
        None => {
            tracing::warn!("EXPLODING_TOPICS_API_KEY not set; skipping source");
            Ok(Vec::new())
        }
    }
}

/// A failed source contributes an empty list; the run continues with
/// whatever the other sources produced.
fn collected(source: &str, result: Result<Vec<Trend>, SourceError>) -> Vec<Trend> {
    match result {
        Ok(trends) => {
            tracing::info!(source, count = trends.len(), "source fetched");
            trends
        }
        Err(e) => {
            tracing::warn!(source, error = %e, "source fetch failed");
            Vec::new()
        }
    }
}
