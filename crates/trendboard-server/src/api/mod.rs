mod ai;
mod reports;
mod trends;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::middleware::request_id;
use trendboard_ai::GeminiClient;
use trendboard_store::DataStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DataStore>,
    pub ai: Arc<GeminiClient>,
}

/// API error rendered as a flat `{ "error": "<message>" }` body. The status
/// code travels alongside rather than inside the body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Upstream AI failures are logged with detail and answered generically;
/// model error bodies are not forwarded to clients.
pub(super) fn map_ai_error(error: &trendboard_ai::AiError) -> ApiError {
    tracing::error!(error = %error, "AI generation failed");
    ApiError::internal("AI generation failed")
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    database: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/trends", get(trends::list_trends))
        .route("/api/reports", get(reports::list_reports))
        .route("/api/reports/{report_id}", get(reports::get_report))
        .route("/api/ai/generate-ideas", post(ai::generate_ideas))
        .route("/api/ai/analyze-idea", post(ai::analyze_idea))
        .route("/api/ai/analyze-trends", post(ai::analyze_trends))
        .route("/api/ai/generate-report", post(ai::generate_report))
        .route(
            "/api/ai/generate-project-outline",
            post(ai::generate_project_outline),
        )
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.pool() {
        None => (
            StatusCode::OK,
            Json(HealthData {
                status: "ok",
                database: "unconfigured",
            }),
        ),
        Some(pool) => match trendboard_db::health_check(pool).await {
            Ok(()) => (
                StatusCode::OK,
                Json(HealthData {
                    status: "ok",
                    database: "ok",
                }),
            ),
            Err(e) => {
                tracing::warn!(error = %e, "health check: database unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(HealthData {
                        status: "degraded",
                        database: "unavailable",
                    }),
                )
            }
        },
    }
}
