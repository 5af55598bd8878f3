//! The AI flow routes. Request and response fields are camelCase on the
//! wire; validation failures answer 400 with the flat error body before the
//! model is ever called.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use trendboard_ai::flows;

use super::{map_ai_error, ApiError, AppState};

/// Shortest keyword worth sending to the model.
const MIN_KEYWORD_CHARS: usize = 3;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateIdeasRequest {
    #[serde(default)]
    topic_keyword: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateIdeasResponse {
    potential_trends: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AnalyzeIdeaRequest {
    #[serde(default)]
    trend_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AnalyzeTrendsRequest {
    #[serde(default)]
    trend_data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AnalysisResponse {
    analysis_markdown: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateReportRequest {
    #[serde(default)]
    month: String,
    #[serde(default)]
    analysis_markdown: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateReportResponse {
    report_markdown: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateProjectOutlineRequest {
    #[serde(default)]
    trend_name: String,
    #[serde(default)]
    analysis_markdown: String,
    #[serde(default)]
    edit_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct GenerateProjectOutlineResponse {
    target_audience: String,
    project_outline: String,
}

fn require<'a>(value: &'a str, field: &str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("{field} is required")));
    }
    Ok(trimmed)
}

/// `POST /api/ai/generate-ideas`
pub(super) async fn generate_ideas(
    State(state): State<AppState>,
    Json(request): Json<GenerateIdeasRequest>,
) -> Result<Json<GenerateIdeasResponse>, ApiError> {
    let keyword = require(&request.topic_keyword, "topicKeyword")?;
    if keyword.chars().count() < MIN_KEYWORD_CHARS {
        return Err(ApiError::bad_request(format!(
            "topicKeyword must be at least {MIN_KEYWORD_CHARS} characters"
        )));
    }

    let ideas = flows::generate_ideas(&state.ai, keyword)
        .await
        .map_err(|e| map_ai_error(&e))?;
    Ok(Json(GenerateIdeasResponse {
        potential_trends: ideas,
    }))
}

/// `POST /api/ai/analyze-idea`
pub(super) async fn analyze_idea(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeIdeaRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let trend_name = require(&request.trend_name, "trendName")?;

    let markdown = flows::analyze_idea(&state.ai, trend_name)
        .await
        .map_err(|e| map_ai_error(&e))?;
    Ok(Json(AnalysisResponse {
        analysis_markdown: markdown,
    }))
}

/// `POST /api/ai/analyze-trends`
pub(super) async fn analyze_trends(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTrendsRequest>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let trend_data = require(&request.trend_data, "trendData")?;

    let markdown = flows::analyze_trends(&state.ai, trend_data)
        .await
        .map_err(|e| map_ai_error(&e))?;
    Ok(Json(AnalysisResponse {
        analysis_markdown: markdown,
    }))
}

/// `POST /api/ai/generate-report`
pub(super) async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> Result<Json<GenerateReportResponse>, ApiError> {
    let month = require(&request.month, "month")?;
    let analysis = require(&request.analysis_markdown, "analysisMarkdown")?;

    let markdown = flows::generate_report(&state.ai, month, analysis)
        .await
        .map_err(|e| map_ai_error(&e))?;
    Ok(Json(GenerateReportResponse {
        report_markdown: markdown,
    }))
}

/// `POST /api/ai/generate-project-outline`
pub(super) async fn generate_project_outline(
    State(state): State<AppState>,
    Json(request): Json<GenerateProjectOutlineRequest>,
) -> Result<Json<GenerateProjectOutlineResponse>, ApiError> {
    let trend_name = require(&request.trend_name, "trendName")?;
    let analysis = require(&request.analysis_markdown, "analysisMarkdown")?;
    let edit_prompt = request
        .edit_prompt
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());

    let outline = flows::generate_project_outline(&state.ai, trend_name, analysis, edit_prompt)
        .await
        .map_err(|e| map_ai_error(&e))?;
    Ok(Json(GenerateProjectOutlineResponse {
        target_audience: outline.target_audience,
        project_outline: outline.project_outline,
    }))
}
