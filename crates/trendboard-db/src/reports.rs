//! Report table primitives. Reports are insert-only: bulk saves are a
//! sequence of single-row inserts, never a table replace.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use trendboard_core::Report;
use uuid::Uuid;

use crate::DbError;

#[derive(Debug, sqlx::FromRow)]
pub struct ReportRow {
    pub id: String,
    pub month: String,
    pub generated_at: DateTime<Utc>,
    pub report_markdown: String,
}

impl From<ReportRow> for Report {
    fn from(row: ReportRow) -> Self {
        Report {
            id: row.id,
            month: row.month,
            generated_at: row.generated_at,
            report_markdown: row.report_markdown,
        }
    }
}

/// Fetch all reports, newest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on query failure.
pub async fn list_reports(pool: &PgPool) -> Result<Vec<Report>, DbError> {
    let rows: Vec<ReportRow> = sqlx::query_as(
        "SELECT id, month, generated_at, report_markdown \
         FROM reports ORDER BY generated_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Report::from).collect())
}

/// Fetch a single report by id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on query failure. A missing row is `Ok(None)`,
/// not an error.
pub async fn get_report_by_id(pool: &PgPool, id: &str) -> Result<Option<Report>, DbError> {
    let row: Option<ReportRow> = sqlx::query_as(
        "SELECT id, month, generated_at, report_markdown FROM reports WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(Report::from))
}

/// Insert a single report row and return its stored identifier.
///
/// An empty incoming id gets a generated `UUIDv4`; a non-empty id is kept
/// as-is (identifiers are assigned at creation and never reassigned).
/// An upsert on id keeps re-saves of the same collection idempotent.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on insert failure.
pub async fn insert_report(pool: &PgPool, report: &Report) -> Result<String, DbError> {
    let id = if report.id.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        report.id.clone()
    };

    sqlx::query(
        "INSERT INTO reports (id, month, generated_at, report_markdown) \
         VALUES ($1, $2, $3, $4) \
         ON CONFLICT (id) DO UPDATE SET \
             month = EXCLUDED.month, \
             generated_at = EXCLUDED.generated_at, \
             report_markdown = EXCLUDED.report_markdown",
    )
    .bind(&id)
    .bind(&report.month)
    .bind(report.generated_at)
    .bind(&report.report_markdown)
    .execute(pool)
    .await?;

    Ok(id)
}
