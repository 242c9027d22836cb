//! A connector that replays recorded switch output instead of opening SSH sessions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ifreport_common::device::DeviceDescriptor;
use ifreport_core::{Connector, Session, SessionError};

pub const SYSNAME_CMD: &str = "display current-configuration | include sysname";
pub const BRIEF_CMD: &str = "display interface brief";

const ACCESS_BRIEF: &str = "\
PHY: Physical
*down: administratively down
(d): Dampening Suppressed
Interface                   PHY   Protocol  InUti OutUti   inErrors  outErrors
GigabitEthernet0/0/1        up    up           0%     0%          0          0
GigabitEthernet0/0/2        down  down         0%     0%          0          0
Eth-Trunk1                  up    up           0%     0%          0          0
NULL0                       up    up(s)        0%     0%          0          0
Vlanif1                     up    up           --     --          0          0
";

/// Recorded output of one switch.
#[derive(Clone, Default)]
pub struct Recording {
    outputs: HashMap<String, String>,
    delay: Duration,
}

impl Recording {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, command: impl Into<String>, output: impl Into<String>) -> Self {
        self.outputs.insert(command.into(), output.into());
        self
    }

    /// Every command takes this long to answer.
    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// A switch with one learned host on `GigabitEthernet0/0/1` and an up trunk.
    pub fn access_switch(name: &str, mac: &str, ip: &str) -> Self {
        Self::new()
            .on(SYSNAME_CMD, format!(" sysname {name}\n"))
            .on(BRIEF_CMD, ACCESS_BRIEF)
            .on(
                "display mac-address GigabitEthernet0/0/1",
                format!("{mac} 1  -  -  GE0/0/1  dynamic  0/-\nTotal matching items displayed = 1\n"),
            )
            .on(
                format!("display arp | include {mac}"),
                format!("{ip}    {mac}  20   D-0   GE0/0/1\n"),
            )
    }
}

#[derive(Default)]
pub struct ReplayConnector {
    recordings: HashMap<String, Recording>,
    unreachable: Vec<String>,
    pub open_sessions: Arc<AtomicUsize>,
    pub peak_sessions: Arc<AtomicUsize>,
    pub closed_sessions: Arc<AtomicUsize>,
}

impl ReplayConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn device(mut self, host: &str, recording: Recording) -> Self {
        self.recordings.insert(host.to_string(), recording);
        self
    }

    pub fn unreachable(mut self, host: &str) -> Self {
        self.unreachable.push(host.to_string());
        self
    }
}

#[async_trait]
impl Connector for ReplayConnector {
    async fn connect(&self, device: &DeviceDescriptor) -> Result<Box<dyn Session>, SessionError> {
        if self.unreachable.contains(&device.host) {
            return Err(SessionError::Connect {
                host: device.host.clone(),
                port: device.port,
                source: "no route to host".into(),
            });
        }

        let open: usize = self.open_sessions.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_sessions.fetch_max(open, Ordering::SeqCst);

        Ok(Box::new(ReplaySession {
            recording: self.recordings.get(&device.host).cloned().unwrap_or_default(),
            open_sessions: self.open_sessions.clone(),
            closed_sessions: self.closed_sessions.clone(),
        }))
    }
}

struct ReplaySession {
    recording: Recording,
    open_sessions: Arc<AtomicUsize>,
    closed_sessions: Arc<AtomicUsize>,
}

#[async_trait]
impl Session for ReplaySession {
    async fn send_command(&mut self, command: &str) -> Result<String, SessionError> {
        if !self.recording.delay.is_zero() {
            tokio::time::sleep(self.recording.delay).await;
        }
        Ok(self.recording.outputs.get(command).cloned().unwrap_or_default())
    }

    async fn disconnect(self: Box<Self>) -> Result<(), SessionError> {
        self.open_sessions.fetch_sub(1, Ordering::SeqCst);
        self.closed_sessions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub fn descriptors(hosts: &[&str]) -> Vec<DeviceDescriptor> {
    hosts
        .iter()
        .map(|host| DeviceDescriptor::new(*host, "python", "123"))
        .collect()
}
