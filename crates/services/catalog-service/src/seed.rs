//! Seed data the stores are populated with at startup.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use common::{AppError, AppResult};
use domain::{Category, Product};

/// Fixture bundled with the crate
const BUILTIN_SEED: &str = include_str!("../fixtures/seed.json");

/// Initial contents of the category and product stores.
///
/// Uses the same camelCase field names as the HTTP API. Records keep the
/// identifiers they are given; `isDeleted` defaults to `false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl SeedData {
    /// The fixture bundled with the crate
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Parse seed data from a JSON document.
    ///
    /// A malformed document is an `Internal` error.
    pub fn from_json(json: &str) -> AppResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| AppError::internal(format!("Invalid seed data: {}", e)))
    }

    /// Read seed data from `path`, or fall back to the bundled fixture
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    AppError::internal(format!(
                        "Cannot read seed file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                Self::from_json(&json)
            }
            None => Self::builtin(),
        }
    }
}
