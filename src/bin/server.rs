//! Spots HTTP Server Binary
//!
//! This is the main entry point for the open-classrooms REST API server.
//! It loads the configuration and catalog, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin spots-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `CATALOG_PATH`: Catalog JSON file (default: data/catalog.json)
//! - `TIMEZONE`: Campus IANA time zone (default: America/Chicago)
//! - `SPOTS_CONFIG`: Optional TOML config file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use spots_rust::config::AppConfig;
use spots_rust::http::{create_router, AppState};
use spots_rust::models::catalog::{load_catalog, CatalogStore};
use spots_rust::models::time::LocalClock;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Spots HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(timezone = %config.timezone, "Configuration loaded");

    // Load the catalog once; requests share the snapshot read-only
    let catalog = load_catalog(&config.catalog_path)?;
    info!(
        buildings = catalog.buildings.len(),
        checksum = %catalog.checksum,
        "Catalog loaded from {}",
        config.catalog_path.display()
    );

    let state = AppState::new(
        Arc::new(CatalogStore::new(catalog)),
        LocalClock::new(config.timezone),
        config.weekday_tags.clone(),
    );

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
