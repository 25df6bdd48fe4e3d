//! Host metrics source.
//!
//! Thin adapter over the `sysinfo` crate providing point-in-time readings of
//! disk usage, virtual memory usage, CPU core count, and system load averages.
//!
//! Query failures are never propagated: a filesystem that cannot be found or
//! an unavailable core count degrades to a zero-valued reading, and the probe
//! evaluates that reading as if it were real. Failures are logged at debug
//! level only.

use std::path::Path;

use sysinfo::{Disks, System};

use crate::config::{GB, MB};

/// Point-in-time usage of a capacity-bounded resource (disk or memory).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CapacityReading {
    pub used_bytes: u64,
    pub total_bytes: u64,
    pub used_percent: f64,
}

impl CapacityReading {
    /// Build a reading from used/total byte counts, deriving the used-percent.
    /// A zero total yields a zero percent rather than a NaN.
    pub fn from_used_total(used_bytes: u64, total_bytes: u64) -> Self {
        let used_percent = if total_bytes == 0 {
            0.0
        } else {
            used_bytes as f64 / total_bytes as f64 * 100.0
        };
        Self {
            used_bytes,
            total_bytes,
            used_percent,
        }
    }

    /// Used space in whole megabytes (truncating division).
    pub fn used_mb(&self) -> u64 {
        self.used_bytes / MB
    }

    /// Used space in whole gigabytes (truncating division).
    pub fn used_gb(&self) -> u64 {
        self.used_bytes / GB
    }

    /// Total space in whole megabytes (truncating division).
    pub fn total_mb(&self) -> u64 {
        self.total_bytes / MB
    }

    /// Total space in whole gigabytes (truncating division).
    pub fn total_gb(&self) -> u64 {
        self.total_bytes / GB
    }

    /// Used-percent truncated to an integer, as compared against thresholds.
    pub fn used_percent_truncated(&self) -> u64 {
        self.used_percent as u64
    }
}

/// System load averages over the trailing 1, 5, and 15 minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoadReading {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Usage of the filesystem mounted at `path`.
///
/// Scans the mounted disk list for an exact mount-point match. If no match is
/// found the reading is all zeroes.
pub fn disk_usage(path: &Path) -> CapacityReading {
    let disks = Disks::new_with_refreshed_list();
    for disk in disks.list() {
        if disk.mount_point() == path {
            let total = disk.total_space();
            let used = total.saturating_sub(disk.available_space());
            return CapacityReading::from_used_total(used, total);
        }
    }
    tracing::debug!(
        path = %path.display(),
        "no mounted filesystem matches probe path, reporting zero usage"
    );
    CapacityReading::default()
}

/// Current virtual memory usage of the host.
pub fn virtual_memory() -> CapacityReading {
    let mut system = System::new();
    system.refresh_memory();
    CapacityReading::from_used_total(system.used_memory(), system.total_memory())
}

/// System load averages. Zero on platforms that do not report them.
pub fn load_averages() -> LoadReading {
    let avg = System::load_average();
    LoadReading {
        one: avg.one,
        five: avg.five,
        fifteen: avg.fifteen,
    }
}

/// Physical core count, hyper-threaded siblings excluded.
///
/// Zero when the count cannot be determined; the CPU probe evaluates that
/// degenerate reading deterministically rather than failing.
pub fn physical_core_count() -> usize {
    let system = System::new();
    match system.physical_core_count() {
        Some(count) => count,
        None => {
            tracing::debug!("physical core count unavailable, reporting zero");
            0
        }
    }
}
