//! HTTP server module with TLS support.
//!
//! This module provides server startup in two modes:
//! - **None (default)**: Plain HTTP, for localhost scraping or a reverse proxy
//! - **Manual**: Operator-provided certificate and key files
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Certificate hot-reload via SIGHUP (manual mode)

mod server;
mod shutdown;

pub use server::start_server;
