//! Vendor CLI dialects spoken by the switches, and the parsers that turn
//! their loosely formatted text output into records.

pub mod dialect;
pub mod parse;

pub use dialect::CommandSet;
