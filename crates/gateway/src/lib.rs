//! API Gateway Library
//!
//! This crate provides the HTTP REST API over the embedded category catalog.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing::info;

use catalog_service_lib::config::CatalogConfig;
use catalog_service_lib::Catalog;

use crate::config::GatewayConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the catalog once and serve the HTTP API until the process exits.
pub async fn run(
    config: GatewayConfig,
    catalog_config: CatalogConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    // The stores live for the whole process and are owned by the catalog
    let catalog = Catalog::bootstrap(&catalog_config).await?;

    // Create app state
    let state = AppState::new(catalog.service.clone());

    // Build router
    let app = create_router(state).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Gateway listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
