//! The data facade: a uniform read/write API over an ordered chain of
//! storage tiers.
//!
//! Reads walk [`TIER_ORDER`] and take the first tier that yields data; every
//! tier failure is logged and swallowed, never surfaced to the caller. Writes
//! go to the relational store when configured and always mirror to the file
//! store, best effort. The caller of this facade cannot distinguish "no data
//! exists" from "the primary store errored and we fell back" — availability
//! is traded for freshness on purpose.

use sqlx::PgPool;
use trendboard_core::{Report, Trend};

use crate::file::FileStore;
use crate::fixtures;

/// One storage tier in the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Relational,
    File,
    Fixture,
}

/// Read precedence, tried front to back. The fixture tier always yields.
pub const TIER_ORDER: [Tier; 3] = [Tier::Relational, Tier::File, Tier::Fixture];

#[derive(Clone)]
pub struct DataStore {
    pool: Option<PgPool>,
    files: FileStore,
}

impl DataStore {
    #[must_use]
    pub fn new(pool: Option<PgPool>, files: FileStore) -> Self {
        Self { pool, files }
    }

    #[must_use]
    pub fn has_relational_tier(&self) -> bool {
        self.pool.is_some()
    }

    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Return the current trends collection from the first tier that has one.
    ///
    /// An empty-but-successful result falls through like an error does: an
    /// empty table or file means "no data yet", and the fixture tier exists
    /// precisely so first-run reads are never empty.
    pub async fn get_trends_data(&self) -> Vec<Trend> {
        for tier in TIER_ORDER {
            match tier {
                Tier::Relational => {
                    let Some(pool) = &self.pool else { continue };
                    match trendboard_db::list_trends(pool).await {
                        Ok(trends) if !trends.is_empty() => return trends,
                        Ok(_) => {}
                        Err(e) => {
                            tracing::warn!(error = %e, "trends: relational read failed, falling back");
                        }
                    }
                }
                Tier::File => match self.files.read_trends() {
                    Ok(trends) if !trends.is_empty() => return trends,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "trends: file read failed, falling back");
                    }
                },
                Tier::Fixture => return fixtures::fixture_trends(),
            }
        }
        Vec::new()
    }

    /// Return the current reports collection from the first tier that has one.
    pub async fn get_reports_data(&self) -> Vec<Report> {
        for tier in TIER_ORDER {
            match tier {
                Tier::Relational => {
                    let Some(pool) = &self.pool else { continue };
                    match trendboard_db::list_reports(pool).await {
                        Ok(reports) if !reports.is_empty() => return reports,
                        Ok(_) => {}
                        Err(e) => {
                            tracing::warn!(error = %e, "reports: relational read failed, falling back");
                        }
                    }
                }
                Tier::File => match self.files.read_reports() {
                    Ok(reports) if !reports.is_empty() => return reports,
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "reports: file read failed, falling back");
                    }
                },
                Tier::Fixture => return fixtures::fixture_reports(),
            }
        }
        Vec::new()
    }

    /// Look up one report by id across the tiers, in precedence order.
    pub async fn get_report_by_id(&self, id: &str) -> Option<Report> {
        if let Some(pool) = &self.pool {
            match trendboard_db::get_report_by_id(pool, id).await {
                Ok(Some(report)) => return Some(report),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "report lookup: relational read failed, falling back");
                }
            }
        }

        match self.files.read_reports() {
            Ok(reports) => {
                if let Some(report) = reports.into_iter().find(|r| r.id == id) {
                    return Some(report);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "report lookup: file read failed, falling back");
            }
        }

        fixtures::fixture_reports().into_iter().find(|r| r.id == id)
    }

    /// Persist the full trends collection, best effort.
    ///
    /// Tries the relational store when configured, and regardless of that
    /// outcome mirrors the collection to the file store so the file stays
    /// close to current. Failures at either target are logged, never
    /// returned.
    pub async fn save_trends_data(&self, trends: &[Trend]) {
        if let Some(pool) = &self.pool {
            if let Err(e) = trendboard_db::replace_trends(pool, trends).await {
                tracing::warn!(error = %e, "trends: relational save failed");
            }
        }

        if let Err(e) = self.files.write_trends(trends) {
            tracing::warn!(error = %e, "trends: file mirror failed");
        }
    }

    /// Persist the full reports collection, best effort.
    ///
    /// The relational tier has no bulk report write: each report is inserted
    /// individually (upsert on id). The file mirror replaces the whole file.
    pub async fn save_reports_data(&self, reports: &[Report]) {
        if let Some(pool) = &self.pool {
            for report in reports {
                if let Err(e) = trendboard_db::insert_report(pool, report).await {
                    tracing::warn!(error = %e, report_id = %report.id, "reports: relational save failed");
                }
            }
        }

        if let Err(e) = self.files.write_reports(reports) {
            tracing::warn!(error = %e, "reports: file mirror failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use trendboard_core::SourceType;

    fn file_only_store() -> (tempfile::TempDir, DataStore) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = DataStore::new(None, FileStore::new(dir.path().join("data")));
        (dir, store)
    }

    fn make_trend(id: &str) -> Trend {
        Trend {
            id: id.to_string(),
            topic_name: format!("Topic {id}"),
            source_url: format!("https://news.example.com/{id}"),
            popularity_metric: "High engagement".to_string(),
            category: "Marketing/Sales".to_string(),
            date_collected: Utc::now(),
            source_type: SourceType::BusinessNews,
            source_details: None,
            sentiment_score: None,
        }
    }

    #[test]
    fn tier_order_puts_relational_first_and_fixture_last() {
        assert_eq!(TIER_ORDER[0], Tier::Relational);
        assert_eq!(TIER_ORDER[2], Tier::Fixture);
    }

    #[tokio::test]
    async fn unconfigured_relational_and_no_file_yields_fixtures() {
        let (_dir, store) = file_only_store();
        let trends = store.get_trends_data().await;
        let fixture_ids: Vec<&str> = trends.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(fixture_ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[tokio::test]
    async fn file_contents_take_precedence_over_fixtures() {
        let (_dir, store) = file_only_store();
        let saved = vec![make_trend("file-a"), make_trend("file-b")];
        store.save_trends_data(&saved).await;

        let trends = store.get_trends_data().await;
        assert_eq!(trends, saved);
    }

    #[tokio::test]
    async fn save_then_get_round_trips_reports() {
        let (_dir, store) = file_only_store();
        let report = Report {
            id: "report-2025-07".to_string(),
            month: "July 2025".to_string(),
            generated_at: Utc::now(),
            report_markdown: "# 📊 Monthly Business Trends Report".to_string(),
        };
        store.save_reports_data(std::slice::from_ref(&report)).await;

        let reports = store.get_reports_data().await;
        assert_eq!(reports, vec![report]);
    }

    #[tokio::test]
    async fn empty_file_collection_falls_through_to_fixtures() {
        let (_dir, store) = file_only_store();
        store.save_trends_data(&[]).await;

        // The file now exists but holds an empty collection; the read must
        // keep falling through to the fixture tier.
        let trends = store.get_trends_data().await;
        assert_eq!(trends.len(), fixtures::fixture_trends().len());
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_fixtures_without_error() {
        let (_dir, store) = file_only_store();
        std::fs::create_dir_all(store.files.data_dir()).expect("mkdir");
        std::fs::write(store.files.data_dir().join("trends.json"), "{{{").expect("write");

        let trends = store.get_trends_data().await;
        assert_eq!(trends.len(), fixtures::fixture_trends().len());
    }

    #[tokio::test]
    async fn report_lookup_falls_back_to_fixture_set() {
        let (_dir, store) = file_only_store();
        let report = store.get_report_by_id("report-1").await.expect("fixture");
        assert_eq!(report.month, "July 2024");
    }

    #[tokio::test]
    async fn report_lookup_prefers_persisted_collection() {
        let (_dir, store) = file_only_store();
        let persisted = Report {
            id: "report-1".to_string(),
            month: "August 2025".to_string(),
            generated_at: Utc::now(),
            report_markdown: "# Persisted".to_string(),
        };
        store
            .save_reports_data(std::slice::from_ref(&persisted))
            .await;

        let report = store.get_report_by_id("report-1").await.expect("present");
        assert_eq!(report.month, "August 2025");
    }

    #[tokio::test]
    async fn unknown_report_id_is_none() {
        let (_dir, store) = file_only_store();
        assert!(store.get_report_by_id("no-such-report").await.is_none());
    }
}
