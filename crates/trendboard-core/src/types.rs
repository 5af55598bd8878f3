//! Domain types shared across the workspace.
//!
//! `Trend` and `Report` are stored and served verbatim: records are created
//! by a collector or AI flow, persisted through the data facade, and never
//! mutated in place. Saves replace the whole collection.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Where a trend record was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    GoogleTrends,
    ExplodingTopics,
    BusinessNews,
    Reddit,
    Youtube,
    TwitterX,
    Linkedin,
}

impl SourceType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SourceType::GoogleTrends => "google_trends",
            SourceType::ExplodingTopics => "exploding_topics",
            SourceType::BusinessNews => "business_news",
            SourceType::Reddit => "reddit",
            SourceType::Youtube => "youtube",
            SourceType::TwitterX => "twitter_x",
            SourceType::Linkedin => "linkedin",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google_trends" => Ok(SourceType::GoogleTrends),
            "exploding_topics" => Ok(SourceType::ExplodingTopics),
            "business_news" => Ok(SourceType::BusinessNews),
            "reddit" => Ok(SourceType::Reddit),
            "youtube" => Ok(SourceType::Youtube),
            "twitter_x" => Ok(SourceType::TwitterX),
            "linkedin" => Ok(SourceType::Linkedin),
            other => Err(CoreError::UnknownSourceType(other.to_string())),
        }
    }
}

/// A single observed trending topic.
///
/// `source_details` is an open-ended map of source-specific fields (upvotes,
/// view counts, subreddit names). Its shape legitimately varies per source,
/// so it stays a JSON object rather than a fixed struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub id: String,
    pub topic_name: String,
    pub source_url: String,
    pub popularity_metric: String,
    pub category: String,
    pub date_collected: DateTime<Utc>,
    pub source_type: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<String>,
}

/// A generated monthly narrative. The markdown body is opaque to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub month: String,
    pub generated_at: DateTime<Utc>,
    pub report_markdown: String,
}
