//! Category service - Handles category-related business logic.
//!
//! SOLID (SRP): Handles category use cases only; products are read, never written.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppResult, OptionExt};
use domain::{
    Category, CategoryPatch, DomainError, NewCategory, Product, RecordId, MIN_NAME_LENGTH,
    SUBJECT_ID, SUBJECT_SLUG,
};

use crate::slugs::SlugGenerator;
use crate::store::{apply_partial_update, mark_deleted, ResourceStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Category service trait for dependency injection.
///
/// Reads only ever return visible (not soft-deleted) categories.
/// `update_category` and `delete_category` also reach soft-deleted ones.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// List visible categories whose name contains `name_filter`, ignoring case
    async fn list_categories(&self, name_filter: &str) -> AppResult<Vec<Category>>;

    /// Get visible category by slug
    async fn get_category_by_slug(&self, slug: &str) -> AppResult<Category>;

    /// Get visible category by ID
    async fn get_category(&self, id: RecordId) -> AppResult<Category>;

    /// List visible products of a visible category
    async fn list_category_products(&self, category_id: RecordId) -> AppResult<Vec<Product>>;

    /// Create a category, deriving its slug from the name
    async fn create_category(&self, new_category: NewCategory) -> AppResult<Category>;

    /// Merge `patch` into the category, soft-deleted or not
    async fn update_category(&self, id: RecordId, patch: CategoryPatch) -> AppResult<Category>;

    /// Soft delete the category (idempotent)
    async fn delete_category(&self, id: RecordId) -> AppResult<Category>;

    /// Number of visible categories
    async fn count_categories(&self) -> AppResult<usize>;
}

/// Concrete implementation of CategoryService over the two stores.
pub struct CategoryManager {
    categories: Arc<ResourceStore<Category>>,
    products: Arc<ResourceStore<Product>>,
    slugs: Arc<dyn SlugGenerator>,
}

impl CategoryManager {
    /// Create new category service instance
    pub fn new(
        categories: Arc<ResourceStore<Category>>,
        products: Arc<ResourceStore<Product>>,
        slugs: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            categories,
            products,
            slugs,
        }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn list_categories(&self, name_filter: &str) -> AppResult<Vec<Category>> {
        let categories = self
            .categories
            .list_visible(|category| category.name_contains(name_filter))
            .await;
        debug!(filter = name_filter, count = categories.len(), "Listed categories");
        Ok(categories)
    }

    async fn get_category_by_slug(&self, slug: &str) -> AppResult<Category> {
        self.categories
            .find_visible_by(|category| category.slug == slug)
            .await
            .ok_or_not_found(SUBJECT_SLUG)
    }

    async fn get_category(&self, id: RecordId) -> AppResult<Category> {
        self.categories
            .find_visible_by(|category| category.id == id)
            .await
            .ok_or_not_found(SUBJECT_ID)
    }

    async fn list_category_products(&self, category_id: RecordId) -> AppResult<Vec<Product>> {
        if self
            .categories
            .find_visible_by(|category| category.id == category_id)
            .await
            .is_none()
        {
            return Err(DomainError::CategoryNotFound.into());
        }

        let products = self
            .products
            .list_visible(|product| product.belongs_to(category_id))
            .await;
        debug!(category_id = %category_id, count = products.len(), "Listed category products");
        Ok(products)
    }

    async fn create_category(&self, new_category: NewCategory) -> AppResult<Category> {
        let NewCategory { name, image } = new_category;
        if name.trim().chars().count() < MIN_NAME_LENGTH {
            return Err(DomainError::validation("Category name is required").into());
        }

        let slug = self.slugs.slugify(&name);
        let category = self
            .categories
            .create_with(|id, now| Category::new(id, name, slug, image, now))
            .await?;

        info!(id = %category.id, slug = %category.slug, "Category created");
        Ok(category)
    }

    async fn update_category(&self, id: RecordId, patch: CategoryPatch) -> AppResult<Category> {
        let derived_slug = patch.name.as_deref().map(|name| self.slugs.slugify(name));

        // Soft-deleted categories stay editable: the lookup is find-any on purpose.
        let updated = self
            .categories
            .modify_any_by(
                |category| category.id == id,
                |category, now| {
                    // First merge every patch field, a caller slug included...
                    apply_partial_update(category, patch, now);
                    // ...then a patched name always re-derives the slug.
                    if let Some(slug) = derived_slug {
                        category.slug = slug;
                    }
                },
            )
            .await;

        match updated {
            Some(category) => {
                info!(id = %category.id, deleted = category.is_deleted, "Category updated");
                Ok(category)
            }
            None => {
                warn!(id = %id, "Update of unknown category");
                Err(DomainError::not_found(SUBJECT_ID).into())
            }
        }
    }

    async fn delete_category(&self, id: RecordId) -> AppResult<Category> {
        // Deleting an already deleted category succeeds again and only
        // refreshes updatedAt.
        let deleted = self
            .categories
            .modify_any_by(|category| category.id == id, mark_deleted)
            .await;

        match deleted {
            Some(category) => {
                info!(id = %category.id, "Category soft deleted");
                Ok(category)
            }
            None => {
                warn!(id = %id, "Delete of unknown category");
                Err(DomainError::not_found(SUBJECT_ID).into())
            }
        }
    }

    async fn count_categories(&self) -> AppResult<usize> {
        Ok(self.categories.count_visible().await)
    }
}
