//! Liveness probe.
//!
//! Returns 200 OK whenever the process can answer HTTP at all. Used by
//! Kubernetes, systemd, and load balancers to verify the daemon is alive;
//! the resource probes under /health/* report actual host state.

/// Liveness handler.
///
/// The body is a newline-prefixed "OK", matching the format of the other
/// probes. It never varies with system state.
pub async fn liveness() -> &'static str {
    "\nOK"
}
