mod analytics;
mod catalog;
mod config;
mod engagement;
mod errors;
mod models;
mod profile;
mod recommendation;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{InternshipCatalog, JsonFileCatalog, StaticCatalog};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Internship API v{}", env!("CARGO_PKG_VERSION"));

    // Catalog: built-in postings unless CATALOG_PATH points at a JSON file
    let catalog: Arc<dyn InternshipCatalog> = match &config.catalog_path {
        Some(path) => Arc::new(JsonFileCatalog::load(path)?),
        None => Arc::new(StaticCatalog::new()),
    };
    info!(
        "Catalog initialized ({} active postings)",
        catalog.list_active().await?.len()
    );

    // Profiles and engagement live in memory until a database backend exists
    let state = AppState::in_memory(config.clone(), catalog);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS to the frontend origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
