use ifreport_common::device::Dialect;

/// Commands and listing conventions of a vendor CLI.
pub trait CommandSet {
    /// Prints the configuration line holding the device name.
    fn device_name_command(&self) -> &'static str;

    /// Prints one line per interface with its physical and protocol state.
    fn interface_brief_command(&self) -> &'static str;

    /// Prints the MAC address table entries learned on `interface`.
    fn mac_table_command(&self, interface: &str) -> String;

    /// Prints the ARP entries matching `mac`.
    fn arp_by_mac_command(&self, mac: &str) -> String;

    /// Full type name of physical Ethernet ports, the only ones with MAC lookups.
    fn ethernet_type(&self) -> &'static str;

    /// Header lines at the top of the interface brief listing.
    fn header_lines(&self) -> usize;

    /// Interface listing lines starting with one of these are never reported.
    fn denied_prefixes(&self) -> &'static [&'static str];
}

const HUAWEI_DENIED: &[&str] = &["Vlanif", "NULL0", "(d)"];

impl CommandSet for Dialect {
    fn device_name_command(&self) -> &'static str {
        match self {
            Dialect::Huawei => "display current-configuration | include sysname",
        }
    }

    fn interface_brief_command(&self) -> &'static str {
        match self {
            Dialect::Huawei => "display interface brief",
        }
    }

    fn mac_table_command(&self, interface: &str) -> String {
        match self {
            Dialect::Huawei => format!("display mac-address {interface}"),
        }
    }

    fn arp_by_mac_command(&self, mac: &str) -> String {
        match self {
            Dialect::Huawei => format!("display arp | include {mac}"),
        }
    }

    fn ethernet_type(&self) -> &'static str {
        match self {
            Dialect::Huawei => "GigabitEthernet",
        }
    }

    fn header_lines(&self) -> usize {
        match self {
            Dialect::Huawei => 2,
        }
    }

    fn denied_prefixes(&self) -> &'static [&'static str] {
        match self {
            Dialect::Huawei => HUAWEI_DENIED,
        }
    }
}
