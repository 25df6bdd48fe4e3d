//! HTTP route handlers for the health probes.
//!
//! One module per probe: liveness, disk, CPU, and RAM. Every probe response
//! is plaintext, newline-prefixed, and carries a no-store Cache-Control
//! header so scrapers always see a fresh reading.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod cpu;
pub mod disk;
pub mod health;
pub mod ram;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PROBE;
use crate::metrics::CapacityReading;
use crate::middleware::request_id_layer;

/// Severity label reported by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format the capacity status line shared by the disk and RAM probes.
///
/// The leading newline and the exact spacing are part of the response
/// contract.
pub(crate) fn format_capacity_line(severity: Severity, reading: &CapacityReading) -> String {
    format!(
        "\n{} - Free space: {}MB ({}GB) / {}MB ({}GB) | Used: {}%",
        severity,
        reading.used_mb(),
        reading.used_gb(),
        reading.total_mb(),
        reading.total_gb(),
        reading.used_percent_truncated(),
    )
}

/// Creates the Axum router with all probe routes and response headers.
pub fn create_router() -> Router {
    // Probes - never cached, each request reflects a point-in-time reading
    let probe_routes = Router::new()
        .route("/health", get(health::liveness))
        .route("/health/disk", get(disk::check))
        .route("/health/cpu", get(cpu::check))
        .route("/health/ram", get(ram::check))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(probe_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
