//! Collector for a subreddit's daily top posts.

use chrono::Utc;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use trendboard_core::types::{SourceType, Trend};

use crate::client::SourceClient;
use crate::error::SourceError;

const DEFAULT_BASE_URL: &str = "https://www.reddit.com";
const SOURCE_NAME: &str = "reddit";

/// Post count per fetch. The upstream caps `limit` well above this; five is
/// enough signal without drowning the other sources.
const POST_LIMIT: u32 = 5;

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: PostData,
}

#[derive(Debug, Deserialize)]
struct PostData {
    id: String,
    title: String,
    permalink: String,
    #[serde(default)]
    ups: i64,
    #[serde(default)]
    num_comments: i64,
}

/// Fetch the subreddit's top posts of the day.
///
/// # Errors
///
/// Returns [`SourceError`] on network failure, non-2xx status, or an
/// unparseable body.
pub async fn fetch(client: &SourceClient, subreddit: &str) -> Result<Vec<Trend>, SourceError> {
    fetch_from(client, DEFAULT_BASE_URL, subreddit).await
}

/// Same as [`fetch`], against an explicit base URL (mock servers in tests).
pub async fn fetch_from(
    client: &SourceClient,
    base_url: &str,
    subreddit: &str,
) -> Result<Vec<Trend>, SourceError> {
    let encoded = utf8_percent_encode(subreddit, NON_ALPHANUMERIC);
    let url = format!(
        "{}/r/{encoded}/top.json?limit={POST_LIMIT}&t=day",
        base_url.trim_end_matches('/')
    );

    let listing: Listing = client.get_json(&url, SOURCE_NAME).await?;
    let now = Utc::now();

    Ok(listing
        .data
        .children
        .into_iter()
        .map(|child| {
            let post = child.data;
            let mut details = serde_json::Map::new();
            details.insert("subreddit".to_string(), subreddit.into());
            details.insert("upvotes".to_string(), post.ups.into());
            details.insert("comments".to_string(), post.num_comments.into());

            Trend {
                id: format!("reddit-{}", post.id),
                topic_name: post.title,
                // Permalinks are site-relative; the canonical host is fixed
                // regardless of which mirror served the listing.
                source_url: format!("https://www.reddit.com{}", post.permalink),
                popularity_metric: format!("Upvotes {}", post.ups),
                category: "Reddit".to_string(),
                date_collected: now,
                source_type: SourceType::Reddit,
                source_details: Some(details),
                sentiment_score: None,
            }
        })
        .collect())
}
