//! SSH sessions over `async-ssh2-tokio`.
//!
//! Every command runs on a fresh exec channel of one authenticated
//! connection, not on an interactive shell. Switch images that refuse exec
//! requests surface as [`SessionError::Command`].

use std::time::Duration;

use async_ssh2_tokio::{AuthMethod, Client, ServerCheckMethod};
use async_trait::async_trait;
use ifreport_common::config::{Config, HostKeyCheck};
use ifreport_common::device::DeviceDescriptor;
use tokio::time::timeout;
use tracing::{debug, trace};

use super::{Connector, Session, SessionError};

/// Opens password-authenticated SSH sessions.
pub struct SshConnector {
    host_key_check: HostKeyCheck,
    command_timeout: Duration,
}

impl SshConnector {
    pub fn new(host_key_check: HostKeyCheck, command_timeout: Duration) -> Self {
        Self {
            host_key_check,
            command_timeout,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.host_key_check.clone(), cfg.command_timeout())
    }

    fn server_check(&self) -> ServerCheckMethod {
        match &self.host_key_check {
            HostKeyCheck::NoCheck => ServerCheckMethod::NoCheck,
            HostKeyCheck::DefaultKnownHosts => ServerCheckMethod::DefaultKnownHostsFile,
            HostKeyCheck::KnownHosts(path) => {
                ServerCheckMethod::KnownHostsFile(path.to_string_lossy().into_owned())
            }
        }
    }
}

#[async_trait]
impl Connector for SshConnector {
    async fn connect(&self, device: &DeviceDescriptor) -> Result<Box<dyn Session>, SessionError> {
        debug!(host = %device.host, port = device.port, user = %device.username, "opening ssh session");

        let client: Client = Client::connect(
            (device.host.as_str(), device.port),
            &device.username,
            AuthMethod::with_password(&device.password),
            self.server_check(),
        )
        .await
        .map_err(|err| SessionError::Connect {
            host: device.host.clone(),
            port: device.port,
            source: Box::new(err),
        })?;

        Ok(Box::new(SshSession {
            client,
            command_timeout: self.command_timeout,
        }))
    }
}

struct SshSession {
    client: Client,
    command_timeout: Duration,
}

#[async_trait]
impl Session for SshSession {
    async fn send_command(&mut self, command: &str) -> Result<String, SessionError> {
        let result = timeout(self.command_timeout, self.client.execute(command))
            .await
            .map_err(|_elapsed| SessionError::CommandTimeout {
                command: command.to_string(),
                timeout: self.command_timeout,
            })?
            .map_err(|err| SessionError::Command {
                command: command.to_string(),
                source: Box::new(err),
            })?;

        if !result.stderr.is_empty() {
            debug!(command, stderr = %result.stderr.trim_end(), "command wrote to stderr");
        }
        trace!(command, bytes = result.stdout.len(), "command finished");

        Ok(result.stdout)
    }

    async fn disconnect(self: Box<Self>) -> Result<(), SessionError> {
        self.client
            .disconnect()
            .await
            .map_err(|err| SessionError::Disconnect(Box::new(err)))
    }
}
