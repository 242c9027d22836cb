//! Writes a [`ReportTable`] to an `.xlsx` workbook.
//!
//! One worksheet, one bold header row, then one row per binding. No index
//! column. An existing file at the target path is replaced.

use std::path::Path;

use ifreport_common::report::{COLUMNS, ReportTable};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::info;

use crate::error::ReportError;

pub const SHEET_NAME: &str = "Interfaces";

/// Builds the workbook in memory without touching the filesystem.
pub fn to_workbook(report: &ReportTable) -> Result<Workbook, XlsxError> {
    let mut workbook: Workbook = Workbook::new();
    let header: Format = Format::new().set_bold();

    let sheet: &mut Worksheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in (0u16..).zip(COLUMNS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }

    for (row, binding) in (1u32..).zip(report.iter()) {
        for (col, cell) in (0u16..).zip(binding.cells()) {
            sheet.write_string(row, col, cell)?;
        }
    }

    sheet.autofit();
    Ok(workbook)
}

/// Writes `report` to `path`, replacing any existing file.
pub fn write_report(report: &ReportTable, path: &Path) -> Result<(), ReportError> {
    let mut workbook: Workbook = to_workbook(report)?;
    workbook.save(path)?;

    info!(path = %path.display(), rows = report.len(), "report written");
    Ok(())
}
