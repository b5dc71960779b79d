//! Integration tests for the MonitorService → ports pipeline.
//!
//! Drive whole runs against the mock adapters and check what reached each
//! port, and in which order.

use std::time::Duration;

use minewatch::app::events::AppEvent;
use minewatch::app::service::{MonitorPorts, MonitorService};
use minewatch::config::MonitorConfig;
use minewatch::error::Error;
use minewatch::safety::SafetyStatus;

use super::mock_ports::{
    EventLog, FakeClock, MemoryAlerts, MemoryHistory, RecordingReporter, ScriptedSensors,
};

struct Rig {
    sensors: ScriptedSensors,
    clock: FakeClock,
    alerts: MemoryAlerts,
    history: MemoryHistory,
    reporter: RecordingReporter,
    events: EventLog,
}

impl Rig {
    fn new(readings: &[(f64, f64, f64)]) -> Self {
        Self {
            sensors: ScriptedSensors::new(readings),
            clock: FakeClock::new(),
            alerts: MemoryAlerts::new(),
            history: MemoryHistory::new(),
            reporter: RecordingReporter::new(),
            events: EventLog::new(),
        }
    }

    fn ports(&mut self) -> MonitorPorts<'_> {
        MonitorPorts {
            sensors: &mut self.sensors,
            clock: &mut self.clock,
            alerts: &mut self.alerts,
            history: &mut self.history,
            reporter: &self.reporter,
            events: &mut self.events,
        }
    }
}

fn config(iterations: u32) -> MonitorConfig {
    MonitorConfig {
        iterations,
        interval_ms: 2000,
        ..MonitorConfig::default()
    }
}

// ── Run shape ────────────────────────────────────────────────

#[test]
fn run_executes_configured_cycles_with_pause_after_each() {
    let mut rig = Rig::new(&[(30.0, 100.0, 50.0)]);
    let mut service = MonitorService::new(&config(4));

    let summary = service.run(&mut rig.ports()).unwrap();

    assert_eq!(summary.cycles, 4);
    assert_eq!(rig.history.entries.len(), 4);
    assert_eq!(rig.clock.pauses, vec![Duration::from_secs(2); 4]);
}

#[test]
fn report_and_alert_save_happen_once_after_all_cycles() {
    let mut rig = Rig::new(&[(30.0, 100.0, 50.0), (60.0, 100.0, 50.0), (30.0, 100.0, 50.0)]);
    let mut service = MonitorService::new(&config(3));

    service.run(&mut rig.ports()).unwrap();

    assert_eq!(*rig.reporter.renders.borrow(), vec![3]);
    assert_eq!(rig.alerts.saves.get(), 1);

    let events = &rig.events.events;
    assert!(matches!(events.first(), Some(AppEvent::Started { iterations: 3 })));
    assert!(matches!(events.last(), Some(AppEvent::Finished(_))));
    let report_at = events
        .iter()
        .position(|e| matches!(e, AppEvent::ReportWritten(_)))
        .unwrap();
    let saved_at = events
        .iter()
        .position(|e| matches!(e, AppEvent::AlertsSaved { count: 1, .. }))
        .unwrap();
    let last_cycle_at = events
        .iter()
        .rposition(|e| matches!(e, AppEvent::Cycle(_)))
        .unwrap();
    assert!(last_cycle_at < report_at && report_at < saved_at);
}

// ── Alerts ───────────────────────────────────────────────────

#[test]
fn each_alert_status_raises_one_matching_alert() {
    let mut rig = Rig::new(&[
        (30.0, 100.0, 50.0),
        (55.0, 100.0, 50.0),
        (30.0, 250.0, 50.0),
        (30.0, 100.0, 10.0),
        (30.0, 100.0, 85.0),
    ]);
    let mut service = MonitorService::new(&config(5));
    service.run(&mut rig.ports()).unwrap();

    let messages: Vec<&str> = rig.alerts.records.iter().map(|a| a.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "ALERT: High Temperature",
            "ALERT: High Gas Levels",
            "ALERT: Unsafe Humidity",
            "ALERT: Unsafe Humidity",
        ]
    );

    // Alert timestamps are the timestamps of the cycles that raised them.
    let alert_cycles: Vec<&str> = rig
        .history
        .entries
        .iter()
        .filter(|e| e.status.is_alert())
        .map(|e| e.timestamp.as_str())
        .collect();
    let alert_stamps: Vec<&str> = rig
        .alerts
        .records
        .iter()
        .map(|a| a.timestamp.as_str())
        .collect();
    assert_eq!(alert_cycles, alert_stamps);

    let summary = service.summary();
    assert_eq!(summary.safe, 1);
    assert_eq!(summary.unsafe_humidity, 2);
}

#[test]
fn simultaneous_violations_raise_only_temperature_alert() {
    let mut rig = Rig::new(&[(55.0, 250.0, 10.0)]);
    let mut service = MonitorService::new(&config(1));

    let entry = service.run_cycle(&mut rig.ports()).unwrap();

    assert_eq!(entry.status, SafetyStatus::HighTemperature);
    assert_eq!(rig.alerts.records.len(), 1);
    assert_eq!(rig.alerts.records[0].message, "ALERT: High Temperature");
}

#[test]
fn safe_run_raises_no_alerts_but_still_saves() {
    let mut rig = Rig::new(&[(30.0, 100.0, 50.0)]);
    let mut service = MonitorService::new(&config(3));
    service.run(&mut rig.ports()).unwrap();

    assert!(rig.alerts.records.is_empty());
    assert_eq!(rig.alerts.saves.get(), 1);
    assert_eq!(service.status(), SafetyStatus::Safe);
}

// ── Status tracking ──────────────────────────────────────────

#[test]
fn status_change_events_only_on_transitions() {
    let mut rig = Rig::new(&[
        (60.0, 0.0, 50.0),
        (61.0, 0.0, 50.0),
        (30.0, 0.0, 50.0),
        (30.0, 0.0, 50.0),
    ]);
    let mut service = MonitorService::new(&config(4));
    service.run(&mut rig.ports()).unwrap();

    let changes: Vec<(SafetyStatus, SafetyStatus)> = rig
        .events
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::StatusChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
        .collect();
    assert_eq!(
        changes,
        [
            (SafetyStatus::Safe, SafetyStatus::HighTemperature),
            (SafetyStatus::HighTemperature, SafetyStatus::Safe),
        ]
    );
}

#[test]
fn history_entries_carry_the_sampled_reading() {
    let mut rig = Rig::new(&[(31.25, 199.99, 79.5)]);
    let mut service = MonitorService::new(&config(1));
    let entry = service.run_cycle(&mut rig.ports()).unwrap();

    assert_eq!(entry.reading.temperature_c, 31.25);
    assert_eq!(entry.reading.gas_ppm, 199.99);
    assert_eq!(entry.reading.humidity_pct, 79.5);
    assert_eq!(entry.timestamp, "2024-01-01 00:00:00");
    assert_eq!(rig.history.entries, vec![entry]);
}

// ── Failure propagation ──────────────────────────────────────

#[test]
fn history_failure_aborts_run_before_reporting() {
    let mut rig = Rig::new(&[(30.0, 100.0, 50.0)]);
    rig.history = MemoryHistory::failing_after(2);
    let mut service = MonitorService::new(&config(5));

    let result = service.run(&mut rig.ports());

    assert!(matches!(result, Err(Error::Io { .. })));
    assert_eq!(rig.history.entries.len(), 2);
    assert!(rig.reporter.renders.borrow().is_empty());
    assert_eq!(rig.alerts.saves.get(), 0);
}
