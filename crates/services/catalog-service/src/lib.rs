//! Catalog Service Library
//!
//! In-memory category and product stores with soft delete, and the
//! category use cases layered on top of them. The gateway embeds this
//! crate and builds one `Catalog` at startup.

pub mod config;
pub mod seed;
pub mod service;
pub mod slugs;
pub mod store;

use std::sync::Arc;

use tracing::info;

use common::AppResult;
use domain::{Category, Clock, Product, SystemClock};

use crate::config::CatalogConfig;
use crate::seed::SeedData;
use crate::service::{CategoryManager, CategoryService};
use crate::slugs::{SlugGenerator, Transliterator};
use crate::store::ResourceStore;

/// The process-wide stores and the service that works on them.
///
/// Built once and handed to whoever needs it; there is no global instance.
pub struct Catalog {
    pub categories: Arc<ResourceStore<Category>>,
    pub products: Arc<ResourceStore<Product>>,
    pub service: Arc<dyn CategoryService>,
}

impl Catalog {
    /// Build the stores from `seed` and wire the category service.
    pub fn from_seed(
        seed: SeedData,
        clock: Arc<dyn Clock>,
        slugs: Arc<dyn SlugGenerator>,
    ) -> AppResult<Self> {
        let categories = Arc::new(ResourceStore::with_records(seed.categories, clock.clone())?);
        let products = Arc::new(ResourceStore::with_records(seed.products, clock)?);
        let service = Arc::new(CategoryManager::new(
            categories.clone(),
            products.clone(),
            slugs,
        ));

        Ok(Self {
            categories,
            products,
            service,
        })
    }

    /// Load the configured seed and build the catalog with the system clock.
    pub async fn bootstrap(config: &CatalogConfig) -> AppResult<Self> {
        let seed = SeedData::load(config.seed_path.as_deref())?;
        let catalog = Self::from_seed(seed, Arc::new(SystemClock), Arc::new(Transliterator))?;

        let categories = catalog.categories.len().await;
        let products = catalog.products.len().await;
        info!(categories, products, "Catalog seeded");
        Ok(catalog)
    }
}
