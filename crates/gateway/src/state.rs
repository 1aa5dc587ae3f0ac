//! Application state for dependency injection.

use std::sync::Arc;

use catalog_service_lib::service::CategoryService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryService>,
}

impl AppState {
    /// Create new app state.
    pub fn new(categories: Arc<dyn CategoryService>) -> Self {
        Self { categories }
    }
}
