//! Daleel-RS: A university catalog directory and search service
//!
//! This is the main entry point for the application.

use anyhow::Result;
use daleel_rs::{
    config::Settings,
    store::{CatalogStore, MemoryStore},
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    info!("Starting Daleel-RS v{}", daleel_rs::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!(
        "Loaded configuration for instance: {}",
        settings.general.instance_name
    );

    // Build the catalog store, seeded when a seed file is configured
    let store: Arc<dyn CatalogStore> = match settings.data.seed_path.as_ref() {
        Some(path) => {
            info!("Seeding catalog from: {}", path.display());
            Arc::new(
                MemoryStore::from_seed_file(path)
                    .await
                    .map_err(|e| anyhow::anyhow!("failed to seed catalog: {e}"))?,
            )
        }
        None => Arc::new(MemoryStore::new()),
    };

    // Create application state
    let state = AppState::new(settings.clone(), store);
    info!("Application state initialized");

    // Create router
    let app = create_router(state);

    // Bind address
    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    info!("Starting server on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check for settings file in various locations
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/daleel/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("daleel-rs/settings.yml"))
            .unwrap_or_default(),
    ];

    // Check environment variable first
    if let Ok(path) = std::env::var("DALEEL_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try each default path
    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
