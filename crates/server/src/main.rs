use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinestream_core::{
    load_catalog, load_config, source_for, validate_config, Catalog, Config, HistoryBackend,
    HistoryStore, MemoryHistoryStore, SearchEngine, SqliteHistoryStore,
};
use cinestream_server::{api::create_router, state::AppState};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

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

    info!("CineStream v{}", VERSION);

    // Determine config path
    let config_path = std::env::var("CINESTREAM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("History backend: {:?}", config.history.backend);
    info!("Catalog source: {}", config.catalog.source);

    let history_store = create_history_store(&config)?;
    let catalog = Arc::new(create_catalog(&config).await);

    let engine = SearchEngine::new(catalog, history_store)
        .with_history_view_limit(config.search.history_view_limit);
    info!("Loaded {} history entries", engine.history().len());

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config, engine));

    // Create router
    let app = create_router(state);

    // Start server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

fn create_history_store(config: &Config) -> Result<Arc<dyn HistoryStore>> {
    match config.history.backend {
        HistoryBackend::Sqlite => {
            info!("Using SQLite history at {:?}", config.history.path);
            let store = SqliteHistoryStore::new(&config.history.path).with_context(|| {
                format!("Failed to open history database {:?}", config.history.path)
            })?;
            Ok(Arc::new(store))
        }
        HistoryBackend::Memory => {
            info!("Using in-memory history");
            Ok(Arc::new(MemoryHistoryStore::new()))
        }
    }
}

async fn create_catalog(config: &Config) -> Catalog {
    match source_for(&config.catalog.source, config.catalog.timeout()) {
        Ok(source) => load_catalog(source.as_ref()).await,
        Err(e) => {
            warn!("Invalid catalog source, using sample catalog: {}", e);
            Catalog::sample()
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
