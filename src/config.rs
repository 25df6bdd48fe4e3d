//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines the fixed
//! operational constants: unit sizes, probe thresholds, the probed filesystem
//! root, logging defaults, and cache headers. `AppConfig` is the root
//! configuration struct containing all settings.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Unit Sizes
// =============================================================================
// Binary units; displayed MB/GB values use truncating integer division.

/// Bytes per kilobyte
pub const KB: u64 = 1024;
/// Bytes per megabyte
pub const MB: u64 = 1024 * KB;
/// Bytes per gigabyte
pub const GB: u64 = 1024 * MB;

// =============================================================================
// Probe Thresholds
// =============================================================================
// Fixed cutoffs; they are not configurable. Percent thresholds apply to the
// integer-truncated used-percent of the resource.

/// Disk used-percent at or above which the probe reports CRITICAL
pub const DISK_CRITICAL_PERCENT: u64 = 95;

/// Disk used-percent above which (strictly) the probe reports WARNING
pub const DISK_WARNING_PERCENT: u64 = 90;

/// Memory used-percent at or above which the probe reports CRITICAL
pub const RAM_CRITICAL_PERCENT: u64 = 95;

/// Memory used-percent at or above which the probe reports WARNING
pub const RAM_WARNING_PERCENT: u64 = 90;

/// CPU headroom: five-minute load at or above `cores - 1` is CRITICAL
pub const LOAD_CRITICAL_HEADROOM: f64 = 1.0;

/// CPU headroom: five-minute load at or above `cores - 2` is WARNING
pub const LOAD_WARNING_HEADROOM: f64 = 2.0;

// =============================================================================
// Probe Targets
// =============================================================================

/// Filesystem root probed by the disk endpoint
pub const DISK_ROOT_PATH: &str = "/";

// =============================================================================
// HTTP Response Headers
// =============================================================================

/// Probe responses must never be served from a cache
pub const CACHE_CONTROL_PROBE: &str = "no-store";

// =============================================================================
// Server Constants
// =============================================================================

/// Maximum time to wait for in-flight connections during graceful shutdown
pub const SHUTDOWN_GRACE_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Log target for this crate's own events
pub const LOG_TARGET: &str = "vigil";

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither --log-level nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{LOG_TARGET}=info");

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default bind host
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
    #[serde(default)]
    pub tls: TlsConfig,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            tls: TlsConfig::default(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }
}

/// TLS mode for the HTTP server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain HTTP (default; probes are typically scraped over localhost)
    #[default]
    None,
    /// Operator-provided certificate and key files
    Manual,
}

/// TLS configuration for the HTTP server
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    #[serde(default)]
    pub mode: TlsMode,
    /// Path to PEM certificate file (manual mode)
    pub cert_path: Option<String>,
    /// Path to PEM private key file (manual mode)
    pub key_path: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints that serde defaults cannot express.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.tls.mode == TlsMode::Manual
            && (self.http.tls.cert_path.is_none() || self.http.tls.key_path.is_none())
        {
            return Err(ConfigError::Validation(
                "TLS mode 'manual' requires both cert_path and key_path".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp config");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn empty_config_uses_defaults() {
        let file = write_config("");
        let config = AppConfig::load(file.path()).expect("load");
        assert_eq!(config.http.host, DEFAULT_HTTP_HOST);
        assert_eq!(config.http.port, DEFAULT_HTTP_PORT);
        assert_eq!(config.http.tls.mode, TlsMode::None);
        assert_eq!(config.logging.format, DEFAULT_LOG_FORMAT);
    }

    #[test]
    fn parses_http_section() {
        let file = write_config("[http]\nhost = \"127.0.0.1\"\nport = 9090\n");
        let config = AppConfig::load(file.path()).expect("load");
        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9090);
    }

    #[test]
    fn manual_tls_requires_cert_and_key() {
        let file = write_config("[http.tls]\nmode = \"manual\"\n");
        let err = AppConfig::load(file.path()).expect_err("should reject");
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn manual_tls_with_paths_is_accepted() {
        let file = write_config(
            "[http.tls]\nmode = \"manual\"\ncert_path = \"/etc/vigil/cert.pem\"\nkey_path = \"/etc/vigil/key.pem\"\n",
        );
        let config = AppConfig::load(file.path()).expect("load");
        assert_eq!(config.http.tls.mode, TlsMode::Manual);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppConfig::load("/nonexistent/vigil.toml").expect_err("should fail");
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
