//! TOML configuration file support.
//!
//! Instead of repeating the rig address on every command, it can be kept in a
//! config file:
//!
//! ```toml
//! # flocview.toml
//! [device]
//! base_url = "http://raspberrypi.local:8000"
//! poll_interval_ms = 1000
//! request_timeout_ms = 2000
//!
//! [display]
//! dose_unit = "ppm"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use flocview::dashboard::DEFAULT_DOSE_UNIT;
use flocview::device::DEFAULT_POLL_INTERVAL;

/// Rig address used when neither a flag nor the config file names one
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// HTTP timeout used when none is configured
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(2000);

/// Root configuration structure for flocview.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Rig connection settings.
    #[serde(default)]
    pub device: DeviceConfig,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Rig connection settings.
#[derive(Debug, Default, Deserialize)]
pub struct DeviceConfig {
    /// Base URL of the rig's HTTP server.
    pub base_url: Option<String>,

    /// Status polling interval in milliseconds.
    pub poll_interval_ms: Option<u64>,

    /// HTTP request timeout in milliseconds.
    pub request_timeout_ms: Option<u64>,
}

/// Display settings.
#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    /// Concentration unit appended to dose values.
    pub dose_unit: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Rig base URL, preferring `flag` over the file.
    pub fn base_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.device.base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Polling interval, preferring `flag_ms` over the file.
    pub fn poll_interval(&self, flag_ms: Option<u64>) -> Duration {
        flag_ms
            .or(self.device.poll_interval_ms)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_POLL_INTERVAL)
    }

    /// HTTP request timeout.
    pub fn request_timeout(&self) -> Duration {
        self.device
            .request_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }

    /// Dose unit.
    pub fn dose_unit(&self) -> &str {
        self.display.dose_unit.as_deref().unwrap_or(DEFAULT_DOSE_UNIT)
    }
}
