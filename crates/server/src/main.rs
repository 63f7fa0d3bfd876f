use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_core::{
    create_favorites, load_config, validate_config, CatalogProvider, FavoritesStore,
    JsonFileStore, OmdbClient, SearchPaginator,
};
use marquee_server::{api::create_router, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine config path
    let config_path = std::env::var("MARQUEE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Favorites path: {:?}", config.favorites.path);

    // Catalog provider
    let provider: Arc<dyn CatalogProvider> = Arc::new(
        OmdbClient::new(config.catalog.omdb.clone()).context("Failed to create OMDb client")?,
    );
    info!("OMDb client initialized");

    let paginator = SearchPaginator::new(provider)
        .with_max_upstream_pages(config.search.max_upstream_pages);

    // Favorites
    let store: Arc<dyn FavoritesStore> = Arc::new(JsonFileStore::new(&config.favorites.path));
    let (favorites, favorites_writer) = create_favorites(store)
        .with_context(|| format!("Failed to load favorites from {:?}", config.favorites.path))?;

    // Spawn favorites writer task
    let writer_handle = tokio::spawn(favorites_writer.run());

    // Create app state and router
    let state = Arc::new(AppState::new(config.clone(), paginator, favorites));
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(config.server.host, config.server.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // The router (and with it the favorites set) is gone once serve returns,
    // which closes the writer's channel.
    info!("Server shutting down...");
    wait_for_writer(writer_handle).await;

    Ok(())
}

/// Wait for the favorites writer to drain. Returns false if it panicked.
async fn wait_for_writer(handle: JoinHandle<()>) -> bool {
    match handle.await {
        Ok(()) => {
            info!("Favorites writer stopped");
            true
        }
        Err(e) => {
            error!(
                "Favorites writer failed, last changes may not be saved: {}",
                e
            );
            false
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
