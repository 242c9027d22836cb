#![cfg(test)]
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use calamine::{Reader, Xlsx, open_workbook};
use ifreport_common::config::Config;
use ifreport_common::report::{BindingRow, ReportTable};
use ifreport_core::{workbook, Orchestrator, ReportError, SessionError};

use crate::support::{descriptors, Recording, ReplayConnector, SYSNAME_CMD};

const HOSTS: [&str; 3] = ["10.10.10.101", "10.10.10.102", "10.10.10.100"];

fn three_switches() -> ReplayConnector {
    ReplayConnector::new()
        .device(HOSTS[0], Recording::access_switch("SW-101", "5489-98d2-0001", "192.168.1.11"))
        .device(HOSTS[1], Recording::access_switch("SW-102", "5489-98d2-0002", "192.168.1.12"))
        .device(HOSTS[2], Recording::access_switch("SW-100", "5489-98d2-0003", "192.168.1.10"))
}

/// Three switches, each with one learned host and one up trunk, give six rows
/// in inventory order.
#[tokio::test]
async fn three_devices_yield_six_rows_in_inventory_order() {
    let connector: ReplayConnector = three_switches();
    let closed = connector.closed_sessions.clone();
    let orchestrator: Orchestrator = Orchestrator::new(Arc::new(connector));

    let report: ReportTable = orchestrator.run(&descriptors(&HOSTS)).await.unwrap();

    let expected: Vec<BindingRow> = vec![
        BindingRow::new("SW-101", HOSTS[0], "GigabitEthernet0/0/1", "5489-98d2-0001", "192.168.1.11"),
        BindingRow::placeholder("SW-101", HOSTS[0], "Eth-Trunk1"),
        BindingRow::new("SW-102", HOSTS[1], "GigabitEthernet0/0/1", "5489-98d2-0002", "192.168.1.12"),
        BindingRow::placeholder("SW-102", HOSTS[1], "Eth-Trunk1"),
        BindingRow::new("SW-100", HOSTS[2], "GigabitEthernet0/0/1", "5489-98d2-0003", "192.168.1.10"),
        BindingRow::placeholder("SW-100", HOSTS[2], "Eth-Trunk1"),
    ];
    assert_eq!(report.rows(), expected.as_slice());
    assert_eq!(closed.load(Ordering::SeqCst), 3, "every session must be closed");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn slow_first_device_does_not_change_order() {
    let connector: ReplayConnector = ReplayConnector::new()
        .device(
            HOSTS[0],
            Recording::access_switch("SW-101", "5489-98d2-0001", "192.168.1.11")
                .slow(Duration::from_millis(50)),
        )
        .device(HOSTS[1], Recording::access_switch("SW-102", "5489-98d2-0002", "192.168.1.12"))
        .device(HOSTS[2], Recording::access_switch("SW-100", "5489-98d2-0003", "192.168.1.10"));
    let orchestrator: Orchestrator = Orchestrator::new(Arc::new(connector));

    let report: ReportTable = orchestrator.run(&descriptors(&HOSTS)).await.unwrap();

    let names: Vec<&str> = report.iter().map(|row| row.device_name.as_str()).collect();
    assert_eq!(names, vec!["SW-101", "SW-101", "SW-102", "SW-102", "SW-100", "SW-100"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn never_more_sessions_than_workers() {
    let hosts: Vec<String> = (1..=7).map(|i| format!("10.0.0.{i}")).collect();
    let host_refs: Vec<&str> = hosts.iter().map(String::as_str).collect();

    let connector: ReplayConnector = host_refs.iter().fold(ReplayConnector::new(), |c, host| {
        c.device(
            host,
            Recording::new()
                .on(SYSNAME_CMD, format!("sysname {host}"))
                .slow(Duration::from_millis(20)),
        )
    });
    let peak = connector.peak_sessions.clone();
    let orchestrator: Orchestrator = Orchestrator::new(Arc::new(connector)).workers(3);

    orchestrator.run(&descriptors(&host_refs)).await.unwrap();

    let peak: usize = peak.load(Ordering::SeqCst);
    assert!(peak <= 3, "pool width exceeded: {peak} sessions open at once");
    assert!(peak >= 1);
}

#[tokio::test]
async fn unreachable_device_aborts_the_whole_report() {
    let connector: ReplayConnector = ReplayConnector::new()
        .device(HOSTS[0], Recording::access_switch("SW-101", "5489-98d2-0001", "192.168.1.11"))
        .unreachable(HOSTS[1])
        .device(HOSTS[2], Recording::access_switch("SW-100", "5489-98d2-0003", "192.168.1.10"));
    let orchestrator: Orchestrator = Orchestrator::new(Arc::new(connector));

    let err: ReportError = orchestrator.run(&descriptors(&HOSTS)).await.unwrap_err();

    match err {
        ReportError::Session {
            host,
            source: SessionError::Connect { .. },
        } => assert_eq!(host, HOSTS[1]),
        other => panic!("expected a connection error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_arp_entry_leaves_ip_empty() {
    let recording: Recording = Recording::access_switch("SW-101", "5489-98d2-0001", "192.168.1.11")
        .on("display arp | include 5489-98d2-0001", "");
    let connector: ReplayConnector = ReplayConnector::new().device(HOSTS[0], recording);
    let orchestrator: Orchestrator = Orchestrator::new(Arc::new(connector));

    let report: ReportTable = orchestrator.run(&descriptors(&HOSTS[..1])).await.unwrap();

    assert_eq!(report.rows()[0].mac, "5489-98d2-0001");
    assert_eq!(report.rows()[0].ip, "");
}

#[tokio::test]
async fn report_from_inventory_is_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("interface_and_mac_info.xlsx");
    let raw: String = format!(
        r#"
        output = "{}"

        [[devices]]
        host = "{}"
        username = "python"
        password = "123"

        [[devices]]
        host = "{}"
        username = "python"
        password = "123"

        [[devices]]
        host = "{}"
        username = "python"
        password = "123"
        "#,
        output.display(),
        HOSTS[0],
        HOSTS[1],
        HOSTS[2]
    );
    let cfg: Config = Config::from_toml(&raw).unwrap();
    let orchestrator: Orchestrator = Orchestrator::from_config(Arc::new(three_switches()), &cfg);

    let report: ReportTable = orchestrator.run(&cfg.devices).await.unwrap();
    workbook::write_report(&report, &cfg.output).unwrap();

    let mut written: Xlsx<_> = open_workbook(&output).unwrap();
    let sheet = written.worksheet_range(workbook::SHEET_NAME).unwrap();
    assert_eq!(sheet.get_size(), (7, 5), "header plus six rows, five columns");

    let cells: Vec<Vec<String>> = sheet
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    assert_eq!(cells[0], ifreport_common::report::COLUMNS.to_vec());
    for (cells, row) in cells[1..].iter().zip(report.iter()) {
        assert_eq!(cells.as_slice(), row.cells().as_slice());
    }
}
