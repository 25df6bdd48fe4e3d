//! Memory usage probe.
//!
//! Reads used and total virtual memory and grades the truncated used-percent
//! against fixed thresholds. Shares the capacity message format with the
//! disk probe.

use axum::http::StatusCode;
use tracing::instrument;

use super::{format_capacity_line, Severity};
use crate::config::{RAM_CRITICAL_PERCENT, RAM_WARNING_PERCENT};
use crate::metrics::{self, CapacityReading};

/// Memory usage handler.
#[instrument(name = "ram::check")]
pub async fn check() -> (StatusCode, String) {
    let reading = metrics::virtual_memory();
    respond(&reading)
}

fn respond(reading: &CapacityReading) -> (StatusCode, String) {
    let (severity, status) = evaluate(reading.used_percent_truncated());
    (status, format_capacity_line(severity, reading))
}

/// Grade the truncated used-percent.
///
/// Unlike the disk probe, the 90% warning cutoff is inclusive and CRITICAL
/// escalates to HTTP 500.
fn evaluate(used_percent: u64) -> (Severity, StatusCode) {
    if used_percent >= RAM_CRITICAL_PERCENT {
        (Severity::Critical, StatusCode::INTERNAL_SERVER_ERROR)
    } else if used_percent >= RAM_WARNING_PERCENT {
        (Severity::Warning, StatusCode::TOO_MANY_REQUESTS)
    } else {
        (Severity::Ok, StatusCode::OK)
    }
}
