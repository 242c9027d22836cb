//! Shared model and configuration for the `ifreport` workspace.
//!
//! Everything in here is plain data: descriptors for the switches we talk to,
//! the rows we extract from them, and the inventory file that lists them.

pub mod config;
pub mod device;
pub mod report;
