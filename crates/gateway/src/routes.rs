//! Route configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{category_routes, health_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Base path the category resource is mounted at
pub const CATEGORIES_PATH: &str = "/api/v1/categories";

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Category resource
        .nest(CATEGORIES_PATH, category_routes())
        .with_state(state)
}
