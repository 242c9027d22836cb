//! The **port** through which a device report talks to a switch.
//!
//! High-level code depends only on [`Connector`] and [`Session`]. The SSH
//! adapter in [`ssh`] is the production implementation; tests plug in scripted
//! sessions instead.

use std::time::Duration;

use async_trait::async_trait;
use ifreport_common::device::DeviceDescriptor;
use thiserror::Error;

pub mod ssh;

pub use ssh::SshConnector;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Transport or authentication failure while opening the session.
    #[error("failed to connect to {host}:{port}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: BoxError,
    },
    #[error("command `{command}` failed")]
    Command {
        command: String,
        #[source]
        source: BoxError,
    },
    #[error("command `{command}` produced no response within {timeout:?}")]
    CommandTimeout { command: String, timeout: Duration },
    #[error("failed to close the session")]
    Disconnect(#[source] BoxError),
}

/// An authenticated command channel to one device.
#[async_trait]
pub trait Session: Send {
    /// Runs `command` and returns everything it printed.
    async fn send_command(&mut self, command: &str) -> Result<String, SessionError>;

    /// Closes the channel. Consumes the session so it cannot be reused.
    async fn disconnect(self: Box<Self>) -> Result<(), SessionError>;
}

/// Opens [`Session`]s from device descriptors.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, device: &DeviceDescriptor) -> Result<Box<dyn Session>, SessionError>;
}
