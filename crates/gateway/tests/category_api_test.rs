//! Integration tests for the category API.
//!
//! The router is driven in-process with `oneshot`, backed by a catalog
//! seeded from the bundled fixture.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use catalog_service_lib::seed::SeedData;
use catalog_service_lib::service::MockCategoryService;
use catalog_service_lib::slugs::Transliterator;
use catalog_service_lib::Catalog;
use common::AppError;
use domain::{Clock, SteppingClock};
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;

// =============================================================================
// Helpers
// =============================================================================

fn app() -> Router {
    let clock: Arc<dyn Clock> = Arc::new(SteppingClock::new(Utc::now(), Duration::milliseconds(5)));
    let catalog =
        Catalog::from_seed(SeedData::builtin().unwrap(), clock, Arc::new(Transliterator)).unwrap();
    create_router(AppState::new(catalog.service.clone()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create(app: &Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "name": name, "image": "https://example.com/image.png" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_list_returns_visible_categories() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/categories", None).await;

    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().unwrap();
    assert!(!categories.is_empty());
    assert!(categories.iter().all(|c| c["isDeleted"] == json!(false)));
    assert!(categories.iter().all(|c| c["slug"] != json!("sporting-goods")));
}

#[tokio::test]
async fn test_list_filters_by_name() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/categories?name=shoes", None).await;

    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["name"], "Shoes");
}

// =============================================================================
// Create / read
// =============================================================================

#[tokio::test]
async fn test_create_derives_slug_and_assigns_fields() {
    let app = app();

    let created = create(&app, "Danh Mục Test").await;

    assert_eq!(created["name"], "Danh Mục Test");
    assert_eq!(created["slug"], "danh-muc-test");
    assert_eq!(created["image"], "https://example.com/image.png");
    assert_eq!(created["isDeleted"], false);
    assert!(created["id"].as_u64().unwrap() > 7);
    assert_eq!(created["creationAt"], created["updatedAt"]);
}

#[tokio::test]
async fn test_get_by_id_and_slug() {
    let app = app();
    let created = create(&app, "Danh Mục Test").await;
    let id = created["id"].as_u64().unwrap();

    let (status, by_id) = send(&app, Method::GET, &format!("/api/v1/categories/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id, created);

    let (status, by_slug) =
        send(&app, Method::GET, "/api/v1/categories/slug/danh-muc-test", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_slug, created);
}

#[tokio::test]
async fn test_create_without_name_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "image": "https://example.com/image.png" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_with_empty_name_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "name": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Update / delete
// =============================================================================

#[tokio::test]
async fn test_update_renames_and_resyncs_slug() {
    let app = app();
    let created = create(&app, "Danh Mục Test").await;
    let uri = format!("/api/v1/categories/{}", created["id"]);

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "name": "Danh Mục Test Update", "isDeleted": true })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Danh Mục Test Update");
    assert_eq!(updated["slug"], "danh-muc-test-update");
    assert_eq!(updated["isDeleted"], false);
    assert_eq!(updated["creationAt"], created["creationAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);

    let (status, _) = send(&app, Method::GET, "/api/v1/categories/slug/danh-muc-test", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_without_body_only_refreshes_timestamp() {
    let app = app();
    let created = create(&app, "Danh Mục Test").await;
    let uri = format!("/api/v1/categories/{}", created["id"]);

    let (status, updated) = send(&app, Method::PUT, &uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["slug"], created["slug"]);
    assert_eq!(updated["image"], created["image"]);
    assert_eq!(updated["creationAt"], created["creationAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn test_update_with_malformed_json_is_rejected() {
    let app = app();
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/categories/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\":"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_hides_category_and_is_idempotent() {
    let app = app();
    let created = create(&app, "Temporary").await;
    let uri = format!("/api/v1/categories/{}", created["id"]);

    let (status, deleted) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["isDeleted"], true);

    let (status, again) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(again["isDeleted"], true);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (_, list) = send(&app, Method::GET, "/api/v1/categories?name=Temporary", None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = app();

    for uri in ["/api/v1/categories/10000", "/api/v1/categories/abc"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/categories/10000",
        Some(json!({ "name": "Nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/v1/categories/10000", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::GET, "/api/v1/categories/slug/no-such-slug", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Products
// =============================================================================

#[tokio::test]
async fn test_products_of_category() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/categories/7/products", None).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 3);
    assert!(products.iter().all(|p| p["category"]["id"] == json!(7)));
}

#[tokio::test]
async fn test_products_skip_deleted_products() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/v1/categories/2/products", None).await;

    assert_eq!(status, StatusCode::OK);
    let products = body.as_array().unwrap();
    assert!(products.iter().all(|p| p["isDeleted"] == json!(false)));
    assert!(products.iter().all(|p| p["id"] != json!(4)));
}

#[tokio::test]
async fn test_products_of_unknown_or_deleted_category() {
    let app = app();

    for uri in [
        "/api/v1/categories/10000/products",
        "/api/v1/categories/abc/products",
        "/api/v1/categories/6/products",
    ] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["error"]["code"], "CATEGORY_NOT_FOUND");
    }
}

// =============================================================================
// Health / mocked service
// =============================================================================

#[tokio::test]
async fn test_health_reports_visible_categories() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["categories"], 6);
}

#[tokio::test]
async fn test_service_errors_map_to_responses() {
    let mut service = MockCategoryService::new();
    service
        .expect_list_category_products()
        .returning(|_| Err(AppError::CategoryNotFound));
    service
        .expect_count_categories()
        .returning(|| Err(AppError::internal("store unavailable")));
    let app = create_router(AppState::new(Arc::new(service)));

    let (status, body) = send(&app, Method::GET, "/api/v1/categories/1/products", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "CATEGORY_NOT_FOUND");

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
}
