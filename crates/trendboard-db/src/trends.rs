//! Trend table primitives: full-collection read and transactional replace.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use trendboard_core::Trend;

use crate::DbError;

#[derive(Debug, sqlx::FromRow)]
pub struct TrendRow {
    pub id: String,
    pub topic_name: String,
    pub source_url: String,
    pub popularity_metric: String,
    pub category: String,
    pub date_collected: DateTime<Utc>,
    pub source_type: String,
    pub source_details: Option<serde_json::Value>,
    pub sentiment_score: Option<String>,
}

impl TrendRow {
    /// Convert a stored row back into the domain type.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidSourceType`] if the stored `source_type`
    /// string no longer matches a known variant.
    pub fn into_trend(self) -> Result<Trend, DbError> {
        let source_type =
            self.source_type
                .parse()
                .map_err(|_| DbError::InvalidSourceType {
                    id: self.id.clone(),
                    value: self.source_type.clone(),
                })?;

        let source_details = match self.source_details {
            Some(serde_json::Value::Object(map)) => Some(map),
            _ => None,
        };

        Ok(Trend {
            id: self.id,
            topic_name: self.topic_name,
            source_url: self.source_url,
            popularity_metric: self.popularity_metric,
            category: self.category,
            date_collected: self.date_collected,
            source_type,
            source_details,
            sentiment_score: self.sentiment_score,
        })
    }
}

/// Fetch the full trends collection, newest first.
///
/// # Errors
///
/// Returns [`DbError`] on query failure or if a row holds an unknown
/// `source_type`.
pub async fn list_trends(pool: &PgPool) -> Result<Vec<Trend>, DbError> {
    let rows: Vec<TrendRow> = sqlx::query_as(
        "SELECT id, topic_name, source_url, popularity_metric, category, \
                date_collected, source_type, source_details, sentiment_score \
         FROM trends ORDER BY date_collected DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(TrendRow::into_trend).collect()
}

/// Replace the entire trends collection with `trends`.
///
/// The delete and inserts run inside one transaction, so concurrent readers
/// never observe an empty table mid-replace and a failed insert rolls the
/// whole replace back. Last committed writer wins.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any statement fails; nothing is applied in
/// that case.
pub async fn replace_trends(pool: &PgPool, trends: &[Trend]) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM trends").execute(&mut *tx).await?;

    for trend in trends {
        let details = trend
            .source_details
            .as_ref()
            .map(|m| serde_json::Value::Object(m.clone()));

        sqlx::query(
            "INSERT INTO trends (id, topic_name, source_url, popularity_metric, category, \
                                 date_collected, source_type, source_details, sentiment_score) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&trend.id)
        .bind(&trend.topic_name)
        .bind(&trend.source_url)
        .bind(&trend.popularity_metric)
        .bind(&trend.category)
        .bind(trend.date_collected)
        .bind(trend.source_type.as_str())
        .bind(details)
        .bind(&trend.sentiment_score)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_row() -> TrendRow {
        TrendRow {
            id: "reddit-xyz".to_string(),
            topic_name: "Sustainable Urban Farming".to_string(),
            source_url: "https://www.reddit.com/r/UrbanGardening/top".to_string(),
            popularity_metric: "Top Subreddit".to_string(),
            category: "Environment".to_string(),
            date_collected: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
            source_type: "reddit".to_string(),
            source_details: Some(serde_json::json!({ "subreddit": "UrbanGardening" })),
            sentiment_score: Some("Positive".to_string()),
        }
    }

    #[test]
    fn row_converts_to_trend() {
        let trend = sample_row().into_trend().expect("convert");
        assert_eq!(trend.source_type, trendboard_core::SourceType::Reddit);
        assert_eq!(
            trend.source_details.expect("details")["subreddit"],
            "UrbanGardening"
        );
    }

    #[test]
    fn row_with_unknown_source_type_errors() {
        let mut row = sample_row();
        row.source_type = "carrier_pigeon".to_string();
        let err = row.into_trend().unwrap_err();
        assert!(
            matches!(err, DbError::InvalidSourceType { ref value, .. } if value == "carrier_pigeon")
        );
    }

    #[test]
    fn non_object_details_become_none() {
        let mut row = sample_row();
        row.source_details = Some(serde_json::json!("not an object"));
        let trend = row.into_trend().expect("convert");
        assert!(trend.source_details.is_none());
    }
}
