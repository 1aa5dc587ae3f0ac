//! Catalog configuration.

use std::env;
use std::path::PathBuf;

/// Catalog configuration.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    /// JSON fixture the stores are seeded from; the bundled fixture when unset
    pub seed_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed_path: env::var("CATALOG_SEED_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}
