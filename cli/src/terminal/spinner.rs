use colored::*;
use indicatif::ProgressStyle;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

pub fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// Turns `span` into the run spinner. The span must carry `indicatif.pb_show`.
pub fn attach(span: &Span, total: usize) {
    span.pb_set_style(&style());
    report_progress(span, 0, total);
}

pub fn report_progress(span: &Span, done: usize, total: usize) {
    span.pb_set_message(&format!(
        "Polled {} of {} devices...",
        done.to_string().green().bold(),
        total.to_string().bold()
    ));
}
