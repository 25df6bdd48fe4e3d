//! Disk usage probe.
//!
//! Reads used and total space for the root filesystem and grades the
//! truncated used-percent against fixed thresholds.

use std::path::Path;

use axum::http::StatusCode;
use tracing::instrument;

use super::{format_capacity_line, Severity};
use crate::config::{DISK_CRITICAL_PERCENT, DISK_ROOT_PATH, DISK_WARNING_PERCENT};
use crate::metrics::{self, CapacityReading};

/// Disk usage handler.
#[instrument(name = "disk::check")]
pub async fn check() -> (StatusCode, String) {
    let reading = metrics::disk_usage(Path::new(DISK_ROOT_PATH));
    respond(&reading)
}

fn respond(reading: &CapacityReading) -> (StatusCode, String) {
    let (severity, status) = evaluate(reading.used_percent_truncated());
    (status, format_capacity_line(severity, reading))
}

/// Grade the truncated used-percent.
///
/// CRITICAL maps to HTTP 200, not 500; only the WARNING band uses a non-200
/// code. The 90% warning cutoff is exclusive: exactly 90% still grades OK.
fn evaluate(used_percent: u64) -> (Severity, StatusCode) {
    if used_percent >= DISK_CRITICAL_PERCENT {
        (Severity::Critical, StatusCode::OK)
    } else if used_percent > DISK_WARNING_PERCENT {
        (Severity::Warning, StatusCode::TOO_MANY_REQUESTS)
    } else {
        (Severity::Ok, StatusCode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GB;

    #[test]
    fn below_warning_band_is_ok() {
        for p in [0, 50, 89, 90] {
            let (severity, status) = evaluate(p);
            assert_eq!(severity, Severity::Ok, "percent {p}");
            assert_eq!(status, StatusCode::OK, "percent {p}");
        }
    }

    #[test]
    fn warning_band_returns_429() {
        for p in [91, 93, 94] {
            let (severity, status) = evaluate(p);
            assert_eq!(severity, Severity::Warning, "percent {p}");
            assert_eq!(status, StatusCode::TOO_MANY_REQUESTS, "percent {p}");
        }
    }

    #[test]
    fn critical_keeps_http_200() {
        for p in [95, 99, 100] {
            let (severity, status) = evaluate(p);
            assert_eq!(severity, Severity::Critical, "percent {p}");
            assert_eq!(status, StatusCode::OK, "percent {p}");
        }
    }

    #[test]
    fn nearly_full_disk_end_to_end() {
        // 96 GB used of 100 GB total: 96%, CRITICAL, still HTTP 200.
        let reading = CapacityReading::from_used_total(96 * GB, 100 * GB);
        let (status, body) = respond(&reading);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            "\nCRITICAL - Free space: 98304MB (96GB) / 102400MB (100GB) | Used: 96%"
        );
    }

    #[test]
    fn zero_reading_grades_ok() {
        // Failed metrics queries degrade to a zero-valued reading.
        let (status, body) = respond(&CapacityReading::default());
        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("\nOK"));
    }
}
