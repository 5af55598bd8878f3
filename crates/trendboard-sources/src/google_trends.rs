//! Collector for the Google Trends daily-trends endpoint.
//!
//! The endpoint answers with an XSSI guard prefix (`)]}',`) in front of the
//! JSON document, so the body is sliced from the first `{` before parsing.

use chrono::Utc;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use trendboard_core::types::{SourceType, Trend};

use crate::client::SourceClient;
use crate::error::SourceError;

const DEFAULT_BASE_URL: &str = "https://trends.google.com";
const SOURCE_NAME: &str = "google_trends";

#[derive(Debug, Deserialize)]
struct DailyTrendsResponse {
    default: DailyTrendsDefault,
}

#[derive(Debug, Deserialize)]
struct DailyTrendsDefault {
    #[serde(rename = "trendingSearchesDays", default)]
    trending_searches_days: Vec<TrendingSearchesDay>,
}

#[derive(Debug, Deserialize)]
struct TrendingSearchesDay {
    #[serde(rename = "trendingSearches", default)]
    trending_searches: Vec<TrendingSearch>,
}

#[derive(Debug, Deserialize)]
struct TrendingSearch {
    title: SearchTitle,
    #[serde(rename = "shareUrl", default)]
    share_url: Option<String>,
    #[serde(rename = "formattedTraffic", default)]
    formatted_traffic: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchTitle {
    query: String,
}

/// Fetch today's trending searches for a region.
///
/// # Errors
///
/// Returns [`SourceError`] on network failure, non-2xx status, or an
/// unparseable body.
pub async fn fetch(client: &SourceClient, geo: &str) -> Result<Vec<Trend>, SourceError> {
    fetch_from(client, DEFAULT_BASE_URL, geo).await
}

/// Same as [`fetch`], against an explicit base URL (mock servers in tests).
pub async fn fetch_from(
    client: &SourceClient,
    base_url: &str,
    geo: &str,
) -> Result<Vec<Trend>, SourceError> {
    let geo = utf8_percent_encode(geo, NON_ALPHANUMERIC);
    let url = format!(
        "{}/trends/api/dailytrends?hl=en-US&geo={geo}&ns=15",
        base_url.trim_end_matches('/')
    );

    let raw = client.get_text(&url, SOURCE_NAME).await?;
    let json = strip_xssi_prefix(&raw);
    let parsed: DailyTrendsResponse =
        serde_json::from_str(json).map_err(|e| SourceError::Deserialize {
            context: SOURCE_NAME.to_string(),
            source: e,
        })?;

    let now = Utc::now();
    let searches = parsed
        .default
        .trending_searches_days
        .into_iter()
        .next()
        .map(|day| day.trending_searches)
        .unwrap_or_default();

    Ok(searches
        .into_iter()
        .map(|s| Trend {
            id: format!("google-{}", slug(&s.title.query)),
            topic_name: s.title.query,
            source_url: s.share_url.unwrap_or_default(),
            popularity_metric: s
                .formatted_traffic
                .unwrap_or_else(|| "unknown".to_string()),
            category: "General".to_string(),
            date_collected: now,
            source_type: SourceType::GoogleTrends,
            source_details: None,
            sentiment_score: None,
        })
        .collect())
}

/// Drop everything before the first `{`. The endpoint prepends `)]}',` to
/// defeat cross-site script inclusion.
fn strip_xssi_prefix(raw: &str) -> &str {
    raw.find('{').map_or(raw, |idx| &raw[idx..])
}

fn slug(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_xssi_guard() {
        let raw = ")]}',\n{\"default\": {}}";
        assert_eq!(strip_xssi_prefix(raw), "{\"default\": {}}");
    }

    #[test]
    fn passes_unguarded_json_through() {
        assert_eq!(strip_xssi_prefix("{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn slug_joins_whitespace_with_dashes() {
        assert_eq!(slug("quantum  computing news"), "quantum-computing-news");
        assert_eq!(slug("single"), "single");
    }
}
