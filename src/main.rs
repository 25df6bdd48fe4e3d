//! Vigil: an HTTP host-health probe daemon.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, builds the Axum router with the probe routes,
//! and starts the HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vigil::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use vigil::http::start_server;
use vigil::routes::create_router;

/// Vigil: host health probes over HTTP
#[derive(Parser, Debug)]
#[command(name = "vigil", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "vigil=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // A missing file at the default path means built-in defaults; a path the
    // operator passed explicitly must exist.
    let config = if args.config == DEFAULT_CONFIG_PATH && !Path::new(&args.config).exists() {
        AppConfig::default()
    } else {
        AppConfig::load(&args.config)?
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.http.host,
        port = config.http.port,
        tls = ?config.http.tls.mode,
        "Loaded configuration"
    );

    // Create router with all probe routes
    let app = create_router();

    // Start server; blocks until shutdown
    start_server(app, &config).await?;

    Ok(())
}
