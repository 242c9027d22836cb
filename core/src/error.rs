use std::time::Duration;

use thiserror::Error;

use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("device {host}: session failure")]
    Session {
        host: String,
        #[source]
        source: SessionError,
    },
    #[error("device {host}: no device name in the configuration output")]
    MissingDeviceName { host: String },
    #[error("device {host}: report did not finish within {timeout:?}")]
    DeviceTimeout { host: String, timeout: Duration },
    #[error("device {host}: worker task did not complete")]
    Worker { host: String },
    #[error("failed to write the report workbook")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}

impl ReportError {
    pub(crate) fn session(host: &str, source: SessionError) -> Self {
        ReportError::Session {
            host: host.to_string(),
            source,
        }
    }

    /// Host of the device the error belongs to, if any.
    pub fn host(&self) -> Option<&str> {
        match self {
            ReportError::Session { host, .. }
            | ReportError::MissingDeviceName { host }
            | ReportError::DeviceTimeout { host, .. }
            | ReportError::Worker { host } => Some(host),
            ReportError::Workbook(_) => None,
        }
    }
}
