//! # Report Model
//!
//! A report is a flat list of [`BindingRow`]s. Each device produces its own
//! [`ReportTable`]; the final report is the concatenation of those tables in
//! inventory order.

/// Column headers, in output order.
pub const COLUMNS: [&str; 5] = [
    "Device Name",
    "Device IP",
    "Interface Name",
    "MAC Address",
    "IP Address",
];

/// One (interface, MAC, IP) association, or an interface-only placeholder.
///
/// Missing values are empty strings, never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BindingRow {
    pub device_name: String,
    pub device_ip: String,
    pub interface: String,
    pub mac: String,
    pub ip: String,
}

impl BindingRow {
    pub fn new(
        device_name: impl Into<String>,
        device_ip: impl Into<String>,
        interface: impl Into<String>,
        mac: impl Into<String>,
        ip: impl Into<String>,
    ) -> Self {
        Self {
            device_name: device_name.into(),
            device_ip: device_ip.into(),
            interface: interface.into(),
            mac: mac.into(),
            ip: ip.into(),
        }
    }

    /// Row for an interface that carries no MAC/IP information.
    pub fn placeholder(
        device_name: impl Into<String>,
        device_ip: impl Into<String>,
        interface: impl Into<String>,
    ) -> Self {
        Self::new(device_name, device_ip, interface, String::new(), String::new())
    }

    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.device_name.as_str(),
            self.device_ip.as_str(),
            self.interface.as_str(),
            self.mac.as_str(),
            self.ip.as_str(),
        ]
    }
}

/// Ordered rows for one device, or for the whole run once concatenated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTable {
    rows: Vec<BindingRow>,
}

impl ReportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: BindingRow) {
        self.rows.push(row);
    }

    /// Moves every row of `other` to the end of this table.
    pub fn append(&mut self, other: ReportTable) {
        self.rows.extend(other.rows);
    }

    pub fn rows(&self) -> &[BindingRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BindingRow> {
        self.rows.iter()
    }
}

impl From<Vec<BindingRow>> for ReportTable {
    fn from(rows: Vec<BindingRow>) -> Self {
        Self { rows }
    }
}

/// Concatenates tables, keeping both the table order and each table's row order.
impl FromIterator<ReportTable> for ReportTable {
    fn from_iter<I: IntoIterator<Item = ReportTable>>(iter: I) -> Self {
        let mut merged: ReportTable = ReportTable::new();
        for table in iter {
            merged.append(table);
        }
        merged
    }
}
