//! Endpoint and Cadence Configuration
//!
//! Telemetry endpoint settings persisted as TOML, plus the validated
//! streaming cadence.

use crate::constants::{DEFAULT_PERIOD_MS, MIN_PERIOD_MS};
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

/// Requested inter-sample push interval.
///
/// Sub-second cadence is rejected at construction, never clamped. The value
/// is immutable while a connection is active and takes effect only on the
/// next connection attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceConfig {
    period_ms: u64,
}

impl CadenceConfig {
    /// Validate and wrap a period in milliseconds
    pub fn new(period_ms: u64) -> Result<Self> {
        if period_ms < MIN_PERIOD_MS {
            return Err(Error::Invalid {
                message: format!("period {period_ms}ms is below the {MIN_PERIOD_MS}ms floor"),
            });
        }
        Ok(Self { period_ms })
    }

    /// Period in milliseconds
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }
}

impl Default for CadenceConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

/// Telemetry endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Telemetry server host
    pub host: String,
    /// Telemetry server port
    pub port: u16,
    /// Streaming period requested on start, in milliseconds
    pub period_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join("thermowatch.toml");
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

impl AppConfig {
    /// Load configuration from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        Ok(config)
    }

    /// Save configuration to the config file
    pub fn save(&self) -> Result<()> {
        let path = get_config_path()?;
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    /// Stream URL for the given cadence
    pub fn ws_url(&self, cadence: CadenceConfig) -> String {
        format!(
            "ws://{}:{}/ws?period={}",
            self.host,
            self.port,
            cadence.period_ms()
        )
    }
}
