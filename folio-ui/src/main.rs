//! folio-ui - project gallery service
//!
//! Loads one data document at start-up and serves the filterable gallery
//! page for it.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use folio_common::config::{self, TomlConfig};
use folio_common::loader::load_catalog;
use folio_ui::controller::GalleryController;
use folio_ui::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for folio-ui
#[derive(Parser, Debug)]
#[command(name = "folio-ui")]
#[command(about = "Filterable project gallery")]
#[command(version)]
struct Args {
    /// Data document: file path or http(s) URL
    #[arg(short, long)]
    data: Option<String>,

    /// Folder that relative media URLs resolve against
    #[arg(short, long, env = "FOLIO_SITE_ROOT")]
    site_root: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "FOLIO_PORT")]
    port: Option<u16>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let toml_config =
        TomlConfig::load(args.config.as_deref()).context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| toml_config.logging.level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting folio-ui v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let site_root = config::resolve_site_root(args.site_root.as_deref(), &toml_config);
    let source = config::resolve_data_source(
        args.data.as_deref(),
        config::DATA_ENV_VAR,
        &toml_config,
        &site_root,
    );
    info!("Site root: {}", site_root.display());
    info!("Data source: {}", source);

    // A failed load still serves the page, with the error message in place
    let catalog = load_catalog(&source).await;
    info!(
        "Catalog {} ({} records)",
        catalog.status(),
        catalog.records().len()
    );

    let controller = GalleryController::new(catalog, toml_config.vocabulary());
    let state = AppState::new(controller, toml_config.collapse_delay(), site_root)
        .context("Failed to compile page templates")?;
    let app = build_router(state);

    let host = args.host.unwrap_or(toml_config.host);
    let port = args.port.unwrap_or(toml_config.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("folio-ui listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
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
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
