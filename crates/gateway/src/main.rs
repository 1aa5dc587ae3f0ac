//! API Gateway - HTTP REST API for the category catalog.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_service_lib::config::CatalogConfig;
use gateway_lib::config::GatewayConfig;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "HTTP API for the category catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address (overrides GATEWAY_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (overrides GATEWAY_PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Seed fixture path (overrides CATALOG_SEED_PATH)
        #[arg(long)]
        seed: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = GatewayConfig::from_env();
    let mut catalog_config = CatalogConfig::from_env();

    match cli.command {
        Commands::Serve { host, port, seed } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if seed.is_some() {
                catalog_config.seed_path = seed;
            }

            if let Err(e) = gateway_lib::run(config, catalog_config).await {
                tracing::error!("Gateway failed: {}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}
