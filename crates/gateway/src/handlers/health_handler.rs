//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Visible categories in the catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies the catalog answers.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.categories.count_categories().await {
        Ok(count) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy".to_string(),
                categories: Some(count),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy".to_string(),
                categories: None,
                error: Some(e.user_message()),
            }),
        )
            .into_response(),
    }
}
