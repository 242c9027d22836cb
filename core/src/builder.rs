//! # Device Report Builder
//!
//! Produces the [`ReportTable`] of a single device:
//!
//! 1. Opens a session through the [`Connector`].
//! 2. Reads the device name and the list of interfaces that are up.
//! 3. Resolves MAC and ARP entries for every physical Ethernet port.
//! 4. Closes the session, whether or not the previous steps succeeded.
//!
//! Missing MAC or ARP matches leave empty cells. A missing device name aborts
//! the device.
//!
//! An optional deadline bounds connecting and querying together. When it
//! passes, the open session is still closed before the timeout is reported.

use std::future::Future;
use std::time::Duration;

use ifreport_common::device::{DeviceDescriptor, InterfaceRecord};
use ifreport_common::report::{BindingRow, ReportTable};
use ifreport_protocols::{CommandSet, parse};
use tokio::time::Instant;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::error::ReportError;
use crate::session::{Connector, Session};

/// Builds the report of one device, giving up once `device_timeout` has passed.
pub async fn build_report(
    connector: &dyn Connector,
    device: &DeviceDescriptor,
    device_timeout: Option<Duration>,
) -> Result<ReportTable, ReportError> {
    let span = info_span!("device", host = %device.host);
    let started: Instant = Instant::now();
    let timed_out = |timeout: Duration| ReportError::DeviceTimeout {
        host: device.host.clone(),
        timeout,
    };

    async move {
        let mut session: Box<dyn Session> = bounded(started, device_timeout, connector.connect(device))
            .await
            .map_err(timed_out)?
            .map_err(|source| ReportError::session(&device.host, source))?;

        let result: Result<ReportTable, ReportError> =
            bounded(started, device_timeout, collect_rows(session.as_mut(), device))
                .await
                .unwrap_or_else(|timeout| Err(timed_out(timeout)));
        let closed = session.disconnect().await;

        match (result, closed) {
            (Ok(table), Ok(())) => {
                info!(rows = table.len(), "device report complete");
                Ok(table)
            }
            (Ok(table), Err(err)) => {
                warn!(error = %err, "report complete but the session did not close cleanly");
                Ok(table)
            }
            (Err(err), closed) => {
                if let Err(close_err) = closed {
                    warn!(error = %close_err, "failed to close session after error");
                }
                Err(err)
            }
        }
    }
    .instrument(span)
    .await
}

/// Awaits `fut` until `started + limit`. `Err` carries the limit that passed.
async fn bounded<F: Future>(
    started: Instant,
    limit: Option<Duration>,
    fut: F,
) -> Result<F::Output, Duration> {
    match limit {
        None => Ok(fut.await),
        Some(limit) => tokio::time::timeout_at(started + limit, fut)
            .await
            .map_err(|_elapsed| limit),
    }
}

async fn collect_rows(
    session: &mut dyn Session,
    device: &DeviceDescriptor,
) -> Result<ReportTable, ReportError> {
    let dialect = device.dialect;
    let host: &str = &device.host;

    let output: String = run(session, host, dialect.device_name_command()).await?;
    let device_name: String =
        parse::device_name(&output).ok_or_else(|| ReportError::MissingDeviceName {
            host: host.to_string(),
        })?;

    let output: String = run(session, host, dialect.interface_brief_command()).await?;
    let interfaces: Vec<InterfaceRecord> = parse::up_interfaces(&output, &dialect);
    debug!(device_name, count = interfaces.len(), "found up interfaces");

    let mut table: ReportTable = ReportTable::new();
    for interface in &interfaces {
        if interface.kind != dialect.ethernet_type() {
            table.push(BindingRow::placeholder(&device_name, host, &interface.name));
            continue;
        }

        // No learned MACs means no rows at all for this port.
        let output: String = run(session, host, &dialect.mac_table_command(&interface.name)).await?;
        for mac in parse::mac_addresses(&output) {
            let arp: String = run(session, host, &dialect.arp_by_mac_command(&mac)).await?;
            let ip: String = parse::first_ipv4(&arp);
            table.push(BindingRow::new(&device_name, host, &interface.name, mac, ip));
        }
    }

    Ok(table)
}

async fn run(session: &mut dyn Session, host: &str, command: &str) -> Result<String, ReportError> {
    debug!(command, "sending command");
    session
        .send_command(command)
        .await
        .map_err(|source| ReportError::session(host, source))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
