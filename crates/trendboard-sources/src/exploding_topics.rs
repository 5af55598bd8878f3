//! Collector for the Exploding Topics weekly feed. Requires an API key; the
//! caller skips this source entirely when no key is configured.

use chrono::Utc;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use trendboard_core::types::{SourceType, Trend};

use crate::client::SourceClient;
use crate::error::SourceError;

const DEFAULT_BASE_URL: &str = "https://api.explodingtopics.com";
const SOURCE_NAME: &str = "exploding_topics";

/// Only the fastest risers are worth surfacing alongside the other sources.
const TOPIC_LIMIT: usize = 5;

/// The feed has been observed both as `{"topics": [...]}` and as a bare
/// array, so both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WeeklyTopicsResponse {
    Wrapped { topics: Vec<WeeklyTopic> },
    Bare(Vec<WeeklyTopic>),
}

#[derive(Debug, Deserialize)]
struct WeeklyTopic {
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    growth: Option<f64>,
    #[serde(default)]
    category: Option<String>,
}

/// Fetch this week's fastest-growing topics.
///
/// # Errors
///
/// Returns [`SourceError`] on network failure, non-2xx status, or an
/// unparseable body.
pub async fn fetch(client: &SourceClient, api_key: &str) -> Result<Vec<Trend>, SourceError> {
    fetch_from(client, DEFAULT_BASE_URL, api_key).await
}

/// Same as [`fetch`], against an explicit base URL (mock servers in tests).
pub async fn fetch_from(
    client: &SourceClient,
    base_url: &str,
    api_key: &str,
) -> Result<Vec<Trend>, SourceError> {
    let key = utf8_percent_encode(api_key, NON_ALPHANUMERIC);
    let url = format!(
        "{}/topics/weekly?api_key={key}",
        base_url.trim_end_matches('/')
    );

    let response: WeeklyTopicsResponse = client.get_json(&url, SOURCE_NAME).await?;
    let topics = match response {
        WeeklyTopicsResponse::Wrapped { topics } | WeeklyTopicsResponse::Bare(topics) => topics,
    };

    let now = Utc::now();
    Ok(topics
        .into_iter()
        .take(TOPIC_LIMIT)
        .filter_map(|t| {
            let name = t.topic.or(t.name)?;
            Some(Trend {
                id: format!("exploding-{}", slug(&name)),
                topic_name: name,
                source_url: t.url.unwrap_or_default(),
                popularity_metric: t
                    .growth
                    .map_or_else(|| "unknown".to_string(), |g| format!("{g}% growth")),
                category: t.category.unwrap_or_else(|| "General".to_string()),
                date_collected: now,
                source_type: SourceType::ExplodingTopics,
                source_details: None,
                sentiment_score: None,
            })
        })
        .collect())
}

fn slug(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_wrapped_and_bare_shapes() {
        let wrapped: WeeklyTopicsResponse =
            serde_json::from_str(r#"{"topics": [{"topic": "ai agents", "growth": 120.0}]}"#)
                .expect("parse wrapped");
        let bare: WeeklyTopicsResponse =
            serde_json::from_str(r#"[{"name": "ai agents", "growth": 120.0}]"#)
                .expect("parse bare");
        for shape in [wrapped, bare] {
            let topics = match shape {
                WeeklyTopicsResponse::Wrapped { topics } | WeeklyTopicsResponse::Bare(topics) => {
                    topics
                }
            };
            assert_eq!(topics.len(), 1);
        }
    }
}
