use colored::*;
use ifreport_common::config::Config;

use crate::terminal::{colors, format, print};

pub fn devices(cfg: &Config, q_level: u8) -> anyhow::Result<()> {
    print::header("inventory", q_level);

    for (idx, device) in cfg.devices.iter().enumerate() {
        print::tree_head(idx, &device.host);
        if q_level < 2 {
            print::as_tree_one_level(format::device_to_details(device));
        }
    }

    if q_level == 0 {
        print::fat_separator();
    }
    let summary: String = format!(
        "{} devices, polled {} at a time, report goes to {}",
        cfg.devices.len().to_string().bold(),
        cfg.workers.to_string().bold(),
        cfg.output.display().to_string().color(colors::ACCENT)
    );
    print::print_status(summary);
    Ok(())
}
