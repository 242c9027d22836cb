//! # Device Model
//!
//! Connection records for the switches in the inventory and the interface
//! records derived from their CLI output.

use std::fmt;

use serde::Deserialize;

pub const DEFAULT_SSH_PORT: u16 = 22;

/// The CLI syntax family a device speaks.
///
/// Decides which commands are sent and how their output is read.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// Huawei VRP (`display ...` commands).
    #[default]
    Huawei,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Huawei => write!(f, "huawei"),
        }
    }
}

/// Static connection and credential record for one device.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceDescriptor {
    /// Hostname or IP address. Also used as the "Device IP" column.
    pub host: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub dialect: Dialect,
}

fn default_port() -> u16 {
    DEFAULT_SSH_PORT
}

impl DeviceDescriptor {
    pub fn new(host: impl Into<String>, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            port: DEFAULT_SSH_PORT,
            dialect: Dialect::default(),
        }
    }
}

// Keeps passwords out of logs and panic messages.
impl fmt::Debug for DeviceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceDescriptor")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("port", &self.port)
            .field("dialect", &self.dialect)
            .finish()
    }
}

/// An interface reported as "up" by the device.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceRecord {
    /// Full interface name, e.g. `GigabitEthernet0/0/1`.
    pub name: String,
    /// Leading alphabetic run of the name, e.g. `GigabitEthernet`.
    pub kind: String,
}

impl InterfaceRecord {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
