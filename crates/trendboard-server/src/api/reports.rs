use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use trendboard_core::Report;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct ReportsResponse {
    reports: Vec<Report>,
}

#[derive(Debug, Serialize)]
pub(super) struct ReportResponse {
    report: Report,
}

/// `GET /api/reports` — all stored monthly reports.
pub(super) async fn list_reports(State(state): State<AppState>) -> Json<ReportsResponse> {
    Json(ReportsResponse {
        reports: state.store.get_reports_data().await,
    })
}

/// `GET /api/reports/{report_id}` — one report, or a 404 with the flat error
/// body.
pub(super) async fn get_report(
    State(state): State<AppState>,
    Path(report_id): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    match state.store.get_report_by_id(&report_id).await {
        Some(report) => Ok(Json(ReportResponse { report })),
        None => Err(ApiError::not_found("Report not found")),
    }
}
