//! Vigil - host health probes over HTTP.
//!
//! A small daemon exposing four read-only endpoints that report host health:
//! a liveness probe plus disk, CPU, and memory checks. Each probe queries
//! operating-system statistics, grades them against fixed thresholds, and
//! answers with a plaintext status line and a status code reflecting
//! severity.

pub mod config;
pub mod http;
pub mod metrics;
pub mod middleware;
pub mod routes;
