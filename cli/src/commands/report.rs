use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use ifreport_common::config::Config;
use ifreport_common::report::ReportTable;
use ifreport_core::{Orchestrator, SshConnector, workbook};
use tracing::{Instrument, Span, info_span};

use crate::terminal::{colors, format, print, spinner};

pub async fn report(cfg: &Config, q_level: u8) -> anyhow::Result<()> {
    print::header("polling devices", q_level);

    let total: usize = cfg.devices.len();
    let span: Span = info_span!("report", indicatif.pb_show = true);
    spinner::attach(&span, total);

    let progress_span: Span = span.clone();
    let orchestrator: Orchestrator =
        Orchestrator::from_config(Arc::new(SshConnector::from_config(cfg)), cfg).on_device_done(
            Arc::new(move |done| spinner::report_progress(&progress_span, done, total)),
        );

    let start_time: Instant = Instant::now();
    let tables: Vec<ReportTable> = orchestrator
        .run_per_device(&cfg.devices)
        .instrument(span)
        .await
        .context("report run failed, no spreadsheet was written")?;
    let counts: Vec<format::Detail> = format::row_counts(&cfg.devices, &tables);
    let report: ReportTable = tables.into_iter().collect();

    workbook::write_report(&report, &cfg.output)
        .with_context(|| format!("could not write {}", cfg.output.display()))?;

    report_ends(cfg, &report, counts, start_time.elapsed(), q_level);
    Ok(())
}

fn report_ends(
    cfg: &Config,
    report: &ReportTable,
    counts: Vec<format::Detail>,
    total_time: Duration,
    q_level: u8,
) {
    print::header("report", q_level);

    if q_level < 2 {
        print::as_tree_one_level(counts);
    }

    let rows: ColoredString = format!("{} rows", report.len()).bold().green();
    let devices: ColoredString = format!("{} devices", cfg.devices.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Report Complete: {rows} from {devices} in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    match q_level {
        0 => {
            print::fat_separator();
            print::centerln(&output);
            print::print("");
        }
        _ => print::print_status(&output),
    }

    print::key_value("Output", cfg.output.display().to_string().color(colors::ACCENT));
}
