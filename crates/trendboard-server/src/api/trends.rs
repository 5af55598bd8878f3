use axum::{extract::State, Json};
use serde::Serialize;
use trendboard_core::Trend;

use super::AppState;

#[derive(Debug, Serialize)]
pub(super) struct TrendsResponse {
    trends: Vec<Trend>,
}

/// `GET /api/trends` — the current trends collection, whichever storage tier
/// it came from.
pub(super) async fn list_trends(State(state): State<AppState>) -> Json<TrendsResponse> {
    Json(TrendsResponse {
        trends: state.store.get_trends_data().await,
    })
}
