//! CPU load probe.
//!
//! Reads the physical core count and the 1/5/15-minute load averages, then
//! grades the five-minute average against the core count.

use axum::http::StatusCode;
use tracing::instrument;

use super::Severity;
use crate::config::{LOAD_CRITICAL_HEADROOM, LOAD_WARNING_HEADROOM};
use crate::metrics::{self, LoadReading};

/// CPU load handler.
#[instrument(name = "cpu::check")]
pub async fn check() -> (StatusCode, String) {
    let cores = metrics::physical_core_count();
    let load = metrics::load_averages();
    respond(cores, &load)
}

fn respond(cores: usize, load: &LoadReading) -> (StatusCode, String) {
    let (severity, status) = evaluate(load.five, cores);
    // The "-Load" spacing is part of the response contract.
    let message = format!(
        "\n{} -Load average: {:.2}, {:.2}, {:.2} | Cores: {}",
        severity, load.one, load.five, load.fifteen, cores
    );
    (status, message)
}

/// Grade the five-minute load average against the core count.
///
/// A host within one core of saturation is CRITICAL, within two is WARNING.
/// A zero core count (failed query) makes both cutoffs negative, so any load
/// grades CRITICAL.
fn evaluate(load5: f64, cores: usize) -> (Severity, StatusCode) {
    let cores = cores as f64;
    if load5 >= cores - LOAD_CRITICAL_HEADROOM {
        (Severity::Critical, StatusCode::INTERNAL_SERVER_ERROR)
    } else if load5 >= cores - LOAD_WARNING_HEADROOM {
        (Severity::Warning, StatusCode::TOO_MANY_REQUESTS)
    } else {
        (Severity::Ok, StatusCode::OK)
    }
}
