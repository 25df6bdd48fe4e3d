//! HTTP/HTTPS server startup logic.
//!
//! Supports two TLS modes:
//! - Manual: operator-provided certificate files, hot-reloadable via SIGHUP
//! - None: plain HTTP

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;

use crate::config::{AppConfig, TlsMode};

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address: {0}")]
    Bind(String),

    #[error("Failed to load TLS configuration: {0}")]
    TlsConfig(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP/HTTPS server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid http.host or http.port: {e}")))?;

    let handle = Handle::new();

    match config.http.tls.mode {
        TlsMode::None => start_plain_server(app, addr, handle).await,
        TlsMode::Manual => {
            let (Some(cert_path), Some(key_path)) = (
                config.http.tls.cert_path.as_deref(),
                config.http.tls.key_path.as_deref(),
            ) else {
                return Err(ServerError::TlsConfig(
                    "manual TLS mode requires cert_path and key_path".to_string(),
                ));
            };
            start_manual_tls_server(app, addr, cert_path, key_path, handle).await
        }
    }
}

/// Start a plain HTTP server (no TLS).
async fn start_plain_server(
    app: Router,
    addr: SocketAddr,
    handle: Handle,
) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server (no TLS)");

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}

/// Start HTTPS server with operator-provided certificates.
async fn start_manual_tls_server(
    app: Router,
    addr: SocketAddr,
    cert_path: &str,
    key_path: &str,
    handle: Handle,
) -> Result<(), ServerError> {
    tracing::info!(%addr, cert = %cert_path, key = %key_path, "Starting HTTPS server (manual certs)");

    let rustls_config = RustlsConfig::from_pem_file(cert_path, key_path)
        .await
        .map_err(|e| ServerError::TlsConfig(format!("Failed to load certificates: {e}")))?;

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    // Setup SIGHUP handler for certificate reload
    shutdown::setup_reload_handler(
        rustls_config.clone(),
        cert_path.to_string(),
        key_path.to_string(),
    );

    axum_server::bind_rustls(addr, rustls_config)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}
