//! # CLI Output Parsers
//!
//! Pure functions from raw command output to records. Nothing in here talks to
//! a device, so every parser is tested against literal captures.
//!
//! A missing match degrades to an empty value rather than an error. The one
//! exception is the device name, which callers must treat as mandatory.

use std::sync::LazyLock;

use ifreport_common::device::InterfaceRecord;
use regex::Regex;
use tracing::trace;

use crate::dialect::CommandSet;

static MAC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?:
            [0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}       # 5489-98d2-1a3f
          | [0-9a-f]{4}\.[0-9a-f]{4}\.[0-9a-f]{4}     # 5489.98d2.1a3f
          | (?:[0-9a-f]{2}:){5}[0-9a-f]{2}            # 54:89:98:d2:1a:3f
          | (?:[0-9a-f]{2}-){5}[0-9a-f]{2}            # 54-89-98-d2-1a-3f
        )\b",
    )
    .expect("MAC pattern is valid")
});

static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:\d{1,3}\.){3}\d{1,3}\b").expect("IPv4 pattern is valid"));

const DEVICE_NAME_KEYWORD: &str = "sysname";

/// Extracts the configured device name from the `sysname` configuration line.
///
/// Falls back to the second token of the whole output when no line starts
/// with the keyword, and returns `None` when even that is missing.
pub fn device_name(output: &str) -> Option<String> {
    let from_line: Option<&str> = output.lines().find_map(|line| {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(DEVICE_NAME_KEYWORD) => tokens.next(),
            _ => None,
        }
    });

    from_line
        .or_else(|| output.split_whitespace().nth(1))
        .map(str::to_string)
}

/// Selects the interfaces reported as up from an interface brief listing.
///
/// A line is kept when, after the dialect's header lines, its lower-cased text
/// contains `up` and it does not start with a denied prefix. Output order
/// follows input order.
pub fn up_interfaces<D: CommandSet + ?Sized>(output: &str, dialect: &D) -> Vec<InterfaceRecord> {
    let denied: &[&str] = dialect.denied_prefixes();

    output
        .lines()
        .skip(dialect.header_lines())
        .filter(|line| line.to_lowercase().contains("up"))
        .filter(|line| {
            let is_denied: bool = denied.iter().any(|prefix| line.starts_with(prefix));
            if is_denied {
                trace!(line, "skipping denied interface line");
            }
            !is_denied
        })
        .filter_map(|line| line.split_whitespace().next())
        .map(|name| InterfaceRecord::new(name, interface_type(name)))
        .collect()
}

/// The first run of ASCII letters in an interface name.
///
/// `GigabitEthernet0/0/1` is a `GigabitEthernet`, `Eth-Trunk1` is an `Eth`.
pub fn interface_type(name: &str) -> &str {
    let start: Option<usize> = name.find(|c: char| c.is_ascii_alphabetic());
    match start {
        Some(start) => {
            let rest: &str = &name[start..];
            let len: usize = rest
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            &rest[..len]
        }
        None => "",
    }
}

/// Every hardware address in the output, in order of appearance, verbatim.
pub fn mac_addresses(output: &str) -> Vec<String> {
    MAC_RE
        .find_iter(output)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// The first dotted-quad IPv4 address in the output, or an empty string.
pub fn first_ipv4(output: &str) -> String {
    IPV4_RE
        .find(output)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
