//! Polls switches for their active interfaces and the MAC/IP bindings behind
//! them, and turns the results into a spreadsheet report.
//!
//! The entry points are [`Orchestrator::run`] for a whole inventory,
//! [`build_report`] for a single device, and [`workbook::write_report`] for
//! the output file.

pub mod builder;
pub mod error;
pub mod orchestrator;
pub mod session;
pub mod workbook;

pub use builder::build_report;
pub use error::ReportError;
pub use orchestrator::{Orchestrator, ProgressCallback};
pub use session::{Connector, Session, SessionError, SshConnector};
