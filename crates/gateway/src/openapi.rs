//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::category_handler::{CreateCategoryRequest, UpdateCategoryRequest};
use domain::{Category, CategoryRef, Product, RecordId};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::category_handler::list_categories,
        crate::handlers::category_handler::get_category_by_slug,
        crate::handlers::category_handler::list_category_products,
        crate::handlers::category_handler::get_category,
        crate::handlers::category_handler::create_category,
        crate::handlers::category_handler::update_category,
        crate::handlers::category_handler::delete_category,
    ),
    components(
        schemas(
            RecordId,
            Category,
            CategoryRef,
            Product,
            CreateCategoryRequest,
            UpdateCategoryRequest,
        )
    ),
    tags(
        (name = "Categories", description = "Category catalog endpoints"),
    )
)]
pub struct ApiDoc;
