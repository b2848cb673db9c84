use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidvault_core::{
    load_config, validate_config, Authenticator, FfmpegTool, JwtAuthenticator, MediaTool,
    S3ObjectStore, SqliteCatalog, VideoCatalog, VideoIngestor,
};

use vidvault_server::api::create_router;
use vidvault_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
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
    let config_path = std::env::var("VIDVAULT_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Database path: {:?}", config.database.path);
    info!("Storage bucket: {}", config.storage.bucket);

    // Create authenticator
    let authenticator: Arc<dyn Authenticator> =
        Arc::new(JwtAuthenticator::new(&config.auth.jwt_secret));
    info!("Using authenticator: {}", authenticator.method_name());

    // Create SQLite video catalog
    let catalog: Arc<dyn VideoCatalog> = Arc::new(
        SqliteCatalog::new(&config.database.path).context("Failed to create video catalog")?,
    );
    info!("Video catalog initialized");

    // Create media tool and check the binaries are reachable
    let media: Arc<dyn MediaTool> = Arc::new(FfmpegTool::new(config.media.clone()));
    if let Err(e) = media.validate().await {
        warn!("Media tool validation failed, uploads will not work: {}", e);
    }

    // Create object store
    let store = Arc::new(
        S3ObjectStore::new(&config.storage).context("Failed to create object store")?,
    );
    info!(
        "Object store initialized (bucket: {}, region: {})",
        config.storage.bucket, config.storage.region
    );

    // Create the ingestion pipeline
    let ingestor = Arc::new(VideoIngestor::new(
        media,
        store,
        Arc::clone(&catalog),
        config.ingest.clone(),
    ));

    // Create app state
    let state = Arc::new(AppState::new(
        config.clone(),
        authenticator,
        catalog,
        ingestor,
    ));

    // Create router
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

    info!("Server shut down");
    Ok(())
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
