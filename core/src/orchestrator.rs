//! # Report Orchestrator
//!
//! Runs one [`build_report`] task per device on a bounded pool and merges the
//! results.
//!
//! **Ordering:** tables are merged in the order the devices were submitted,
//! never in the order they finished. All tasks are awaited before anything is
//! merged, so the merge only ever sees complete results.
//!
//! **Failure:** any device failure fails the whole run. When several devices
//! fail, the error of the earliest one in submission order is returned.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use ifreport_common::config::{Config, DEFAULT_WORKERS};
use ifreport_common::device::DeviceDescriptor;
use ifreport_common::report::ReportTable;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::builder::build_report;
use crate::error::ReportError;
use crate::session::Connector;

/// Invoked with the number of finished devices each time one finishes.
pub type ProgressCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub struct Orchestrator {
    connector: Arc<dyn Connector>,
    workers: usize,
    device_timeout: Option<Duration>,
    on_device_done: Option<ProgressCallback>,
}

impl Orchestrator {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            connector,
            workers: DEFAULT_WORKERS,
            device_timeout: None,
            on_device_done: None,
        }
    }

    pub fn from_config(connector: Arc<dyn Connector>, cfg: &Config) -> Self {
        Self::new(connector)
            .workers(cfg.workers)
            .device_timeout(cfg.device_timeout())
    }

    /// Pool width. Values below 1 are raised to 1.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn device_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.device_timeout = timeout;
        self
    }

    pub fn on_device_done(mut self, callback: ProgressCallback) -> Self {
        self.on_device_done = Some(callback);
        self
    }

    /// Builds every device's report and concatenates them in `devices` order.
    pub async fn run(&self, devices: &[DeviceDescriptor]) -> Result<ReportTable, ReportError> {
        let report: ReportTable = self.run_per_device(devices).await?.into_iter().collect();

        info!(rows = report.len(), "report run complete");
        Ok(report)
    }

    /// Builds every device's report, one table per entry of `devices`, in order.
    pub async fn run_per_device(
        &self,
        devices: &[DeviceDescriptor],
    ) -> Result<Vec<ReportTable>, ReportError> {
        info!(devices = devices.len(), workers = self.workers, "starting report run");

        let permits: Arc<Semaphore> = Arc::new(Semaphore::new(self.workers));
        let finished: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));

        let handles: Vec<JoinHandle<Result<ReportTable, ReportError>>> = devices
            .iter()
            .cloned()
            .map(|device| {
                let permits = permits.clone();
                let finished = finished.clone();
                let connector = self.connector.clone();
                let callback = self.on_device_done.clone();
                let device_timeout = self.device_timeout;

                tokio::spawn(async move {
                    let _permit = match permits.acquire_owned().await {
                        Ok(permit) => permit,
                        Err(_closed) => {
                            return Err(ReportError::Worker {
                                host: device.host.clone(),
                            });
                        }
                    };

                    let result = build_report(connector.as_ref(), &device, device_timeout).await;

                    let done: usize = finished.fetch_add(1, Ordering::SeqCst) + 1;
                    if let Some(cb) = callback {
                        cb(done);
                    }
                    result
                })
            })
            .collect();

        // Barrier: every task finishes before any result is inspected.
        let mut results: Vec<Result<ReportTable, ReportError>> = Vec::with_capacity(handles.len());
        for (device, handle) in devices.iter().zip(handles) {
            let result = handle.await.unwrap_or_else(|join_err| {
                error!(host = %device.host, error = %join_err, "worker task aborted");
                Err(ReportError::Worker {
                    host: device.host.clone(),
                })
            });
            results.push(result);
        }

        // Stops at the first error, so the earliest failing device wins.
        results.into_iter().collect()
    }
}
