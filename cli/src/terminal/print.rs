//! Console output. Everything goes through [`print`], so lines share the
//! indicatif writer with the spinner and obey the log filter.

use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

/// Events with this target are printed verbatim by the log formatter.
pub const PRINT_TARGET: &str = "ifreport::print";

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// `fill` repeated across the full output width.
fn rule(fill: &str) -> ColoredString {
    fill.repeat(TOTAL_WIDTH).color(colors::SEPARATOR)
}

/// `title` centred on a line of `fill`.
fn titled_rule(title: ColoredString, fill: &str) -> String {
    // Measured on the uncoloured text.
    let pad: usize = TOTAL_WIDTH.saturating_sub(UnicodeWidthStr::width(&*title));
    let left: usize = pad / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        title,
        fill.repeat(pad - left).color(colors::SEPARATOR)
    )
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title: String = format!("⟦ IFREPORT v{} ⟧", env!("CARGO_PKG_VERSION"));
    print(&titled_rule(title.bright_green().bold(), "═"));
}

/// Section heading, hidden from `-q` on.
pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&titled_rule(title.bright_green(), "─"));
}

pub fn fat_separator() {
    print(&rule("═").to_string());
}

pub fn centerln(msg: &str) {
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    print(&format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT)));
}

/// `> key: value`, used for the file the report went to.
pub fn key_value(key: &str, value: ColoredString) {
    print_status(format!(
        "{}{} {}",
        key.color(colors::PRIMARY),
        ":".color(colors::SEPARATOR),
        value
    ));
}

/// `[idx] name`, the head of one device entry.
pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Prints `details` as branches under the last [`tree_head`], keys padded with dots.
pub fn as_tree_one_level(details: Vec<(String, ColoredString)>) {
    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    let last: usize = details.len().saturating_sub(1);

    for (i, (key, value)) in details.into_iter().enumerate() {
        let branch: &str = if i == last { "└─" } else { "├─" };
        let dots: String = ".".repeat(key_width - key.len());
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn end_of_program(q_level: u8) {
    if q_level > 1 {
        return;
    }
    fat_separator();
}
