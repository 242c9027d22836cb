use crate::terminal::colors;
use colored::*;
use ifreport_common::device::DeviceDescriptor;
use ifreport_common::report::ReportTable;

pub type Detail = (String, ColoredString);

pub fn device_to_details(device: &DeviceDescriptor) -> Vec<Detail> {
    vec![
        ("Port".to_string(), device.port.to_string().color(colors::ACCENT)),
        ("User".to_string(), device.username.as_str().color(colors::TEXT_DEFAULT)),
        ("Dialect".to_string(), device.dialect.to_string().color(colors::TEXT_DEFAULT)),
    ]
}

/// Row counts of each inventory entry, paired with its own table.
pub fn row_counts(devices: &[DeviceDescriptor], tables: &[ReportTable]) -> Vec<Detail> {
    devices
        .iter()
        .zip(tables)
        .map(|(device, table)| {
            let bindings: usize = table.iter().filter(|row| !row.mac.is_empty()).count();
            let value: ColoredString = format!(
                "{} rows, {} with a MAC",
                table.len().to_string().color(colors::ACCENT),
                bindings.to_string().color(colors::MAC_ADDR)
            )
            .normal();
            (device.host.clone(), value)
        })
        .collect()
}
