//! Category handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppError, AppResult};
use domain::{Category, CategoryPatch, NewCategory, Product, RecordId, SUBJECT_ID};

use crate::extractors::{ValidatedJson, ValidatedPatch};
use crate::state::AppState;

/// Category list filter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryListQuery {
    /// Case-insensitive substring of the category name
    pub name: Option<String>,
}

/// Category creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    /// Display name, the slug is derived from it
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Danh Mục Test")]
    pub name: String,
    /// Image URL
    #[serde(default)]
    #[schema(example = "https://example.com/image.png")]
    pub image: String,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(request: CreateCategoryRequest) -> Self {
        Self {
            name: request.name,
            image: request.image,
        }
    }
}

/// Partial category update.
///
/// `id`, `creationAt`, `updatedAt` and `isDeleted` are not accepted and are
/// ignored when present. When `name` is given the slug is derived from it
/// and any `slug` in the same request is discarded. A missing body is an
/// empty patch that only refreshes `updatedAt`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[schema(example = "Danh Mục Test Update")]
    pub name: Option<String>,
    #[schema(example = "custom-slug")]
    pub slug: Option<String>,
    #[schema(example = "https://example.com/new.png")]
    pub image: Option<String>,
}

impl From<UpdateCategoryRequest> for CategoryPatch {
    fn from(request: UpdateCategoryRequest) -> Self {
        Self {
            name: request.name,
            slug: request.slug,
            image: request.image,
        }
    }
}

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route("/slug/:slug", get(get_category_by_slug))
        .route("/:id/products", get(list_category_products))
        .route(
            "/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// Path identifiers that do not parse can never match a stored record,
/// so they are reported with the caller's not-found error.
fn parse_id(raw: &str, not_found: AppError) -> AppResult<RecordId> {
    raw.parse().map_err(|_| not_found)
}

/// List categories
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    tag = "Categories",
    params(CategoryListQuery),
    responses(
        (status = 200, description = "Visible categories matching the filter", body = Vec<Category>)
    )
)]
pub async fn list_categories(
    State(state): State<AppState>,
    Query(query): Query<CategoryListQuery>,
) -> AppResult<Json<Vec<Category>>> {
    let filter = query.name.unwrap_or_default();
    let categories = state.categories.list_categories(&filter).await?;
    Ok(Json(categories))
}

/// Get category by slug
#[utoipa::path(
    get,
    path = "/api/v1/categories/slug/{slug}",
    tag = "Categories",
    params(
        ("slug" = String, Path, description = "Category slug")
    ),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Slug not found")
    )
)]
pub async fn get_category_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Category>> {
    let category = state.categories.get_category_by_slug(&slug).await?;
    Ok(Json(category))
}

/// List products of a category
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}/products",
    tag = "Categories",
    params(
        ("id" = u64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Visible products of the category", body = Vec<Product>),
        (status = 404, description = "Category not found")
    )
)]
pub async fn list_category_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Product>>> {
    let id = parse_id(&id, AppError::CategoryNotFound)?;
    let products = state.categories.list_category_products(id).await?;
    Ok(Json(products))
}

/// Get category by ID
#[utoipa::path(
    get,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(
        ("id" = u64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "ID not found")
    )
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&id, AppError::not_found(SUBJECT_ID))?;
    let category = state.categories.get_category(id).await?;
    Ok(Json(category))
}

/// Create category
#[utoipa::path(
    post,
    path = "/api/v1/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Category created", body = Category),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<Json<Category>> {
    let category = state.categories.create_category(payload.into()).await?;
    Ok(Json(category))
}

/// Update category (soft-deleted categories included)
#[utoipa::path(
    put,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(
        ("id" = u64, Path, description = "Category ID")
    ),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = Category),
        (status = 400, description = "Validation error"),
        (status = 404, description = "ID not found")
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedPatch(payload): ValidatedPatch<UpdateCategoryRequest>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&id, AppError::not_found(SUBJECT_ID))?;
    let category = state.categories.update_category(id, payload.into()).await?;
    Ok(Json(category))
}

/// Soft delete category (idempotent)
#[utoipa::path(
    delete,
    path = "/api/v1/categories/{id}",
    tag = "Categories",
    params(
        ("id" = u64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category soft deleted", body = Category),
        (status = 404, description = "ID not found")
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let id = parse_id(&id, AppError::not_found(SUBJECT_ID))?;
    let category = state.categories.delete_category(id).await?;
    Ok(Json(category))
}
