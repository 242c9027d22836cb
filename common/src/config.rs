//! # Inventory Configuration
//!
//! The device inventory and run settings, loaded from a TOML file.
//!
//! ```toml
//! output = "interface_and_mac_info.xlsx"
//! workers = 3
//!
//! [[devices]]
//! host = "10.10.10.101"
//! username = "python"
//! password = "123"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::device::DeviceDescriptor;

pub const DEFAULT_CONFIG_PATH: &str = "ifreport.toml";
pub const DEFAULT_OUTPUT: &str = "interface_and_mac_info.xlsx";
pub const DEFAULT_WORKERS: usize = 3;
pub const DEFAULT_DELAY_FACTOR: u32 = 3;
pub const DEFAULT_BASE_COMMAND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("config does not list any devices")]
    NoDevices,
    #[error("worker count must be at least 1")]
    InvalidWorkers,
    #[error("delay factor must be at least 1")]
    InvalidDelayFactor,
}

/// How the SSH client verifies the device's host key.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostKeyCheck {
    /// Accept any host key.
    #[default]
    NoCheck,
    /// Verify against `~/.ssh/known_hosts`.
    DefaultKnownHosts,
    /// Verify against the given known_hosts file.
    KnownHosts(PathBuf),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Spreadsheet written at the end of the run. Overwritten if present.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Number of devices polled at the same time.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Multiplier applied to the base command timeout.
    ///
    /// Slow switches can take a long time to print large tables.
    #[serde(default = "default_delay_factor")]
    pub delay_factor: u32,

    #[serde(default = "default_base_command_timeout")]
    pub base_command_timeout_secs: u64,

    /// Upper bound for one whole device run. Unbounded when absent.
    #[serde(default)]
    pub device_timeout_secs: Option<u64>,

    #[serde(default)]
    pub host_key_check: HostKeyCheck,

    pub devices: Vec<DeviceDescriptor>,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_workers() -> usize {
    DEFAULT_WORKERS
}

fn default_delay_factor() -> u32 {
    DEFAULT_DELAY_FACTOR
}

fn default_base_command_timeout() -> u64 {
    DEFAULT_BASE_COMMAND_TIMEOUT_SECS
}

impl Config {
    /// Reads and validates the inventory at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw: String = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Config = Self::from_toml(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        debug!(
            path = %path.display(),
            devices = config.devices.len(),
            "loaded inventory"
        );
        Ok(config)
    }

    /// Parses and validates an inventory held in memory.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.devices.is_empty() {
            return Err(ConfigError::NoDevices);
        }
        if self.workers == 0 {
            return Err(ConfigError::InvalidWorkers);
        }
        if self.delay_factor == 0 {
            return Err(ConfigError::InvalidDelayFactor);
        }
        Ok(())
    }

    /// Response-delay tolerance for a single CLI command.
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.base_command_timeout_secs.saturating_mul(self.delay_factor as u64))
    }

    pub fn device_timeout(&self) -> Option<Duration> {
        self.device_timeout_secs.map(Duration::from_secs)
    }
}
