//! Mock adapters for integration tests.
//!
//! Every port records what the service asked of it so tests can assert on
//! the full call history without touching the filesystem or the clock.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Duration;

use minewatch::app::events::{AppEvent, HistoryEntry};
use minewatch::app::ports::{AlertPort, ClockPort, EventSink, HistoryPort, ReportPort, SensorPort};
use minewatch::error::{Error, Result};
use minewatch::safety::AlertRecord;
use minewatch::sensors::Reading;

// ── ScriptedSensors ───────────────────────────────────────────

/// Replays a fixed list of readings; repeats the last one when exhausted.
pub struct ScriptedSensors {
    readings: VecDeque<Reading>,
    last: Reading,
}

impl ScriptedSensors {
    pub fn new(readings: &[(f64, f64, f64)]) -> Self {
        Self {
            readings: readings
                .iter()
                .map(|&(t, g, h)| Reading::new(t, g, h))
                .collect(),
            last: Reading::new(30.0, 100.0, 50.0),
        }
    }
}

impl SensorPort for ScriptedSensors {
    fn read_all(&mut self) -> Reading {
        if let Some(r) = self.readings.pop_front() {
            self.last = r;
        }
        self.last
    }
}

// ── FakeClock ─────────────────────────────────────────────────

/// One-second-per-call timestamps; pauses are recorded, never slept.
#[derive(Default)]
pub struct FakeClock {
    ticks: u32,
    pub pauses: Vec<Duration>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClockPort for FakeClock {
    fn timestamp(&mut self) -> String {
        let ts = format!("2024-01-01 00:00:{:02}", self.ticks % 60);
        self.ticks += 1;
        ts
    }

    fn pause(&mut self, interval: Duration) {
        self.pauses.push(interval);
    }
}

// ── MemoryAlerts ──────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryAlerts {
    pub records: Vec<AlertRecord>,
    pub saves: Cell<usize>,
}

impl MemoryAlerts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AlertPort for MemoryAlerts {
    fn add_alert(&mut self, record: AlertRecord) {
        self.records.push(record);
    }

    fn alerts(&self) -> &[AlertRecord] {
        &self.records
    }

    fn save(&self) -> Result<PathBuf> {
        self.saves.set(self.saves.get() + 1);
        Ok(PathBuf::from("memory/alerts_log.txt"))
    }
}

// ── MemoryHistory ─────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryHistory {
    pub entries: Vec<HistoryEntry>,
    /// Fail every append once this many entries are stored.
    pub capacity: Option<usize>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: Some(capacity),
        }
    }
}

impl HistoryPort for MemoryHistory {
    fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        if self.capacity.is_some_and(|cap| self.entries.len() >= cap) {
            return Err(Error::io(
                "memory/sensor_log.csv",
                std::io::Error::other("disk full"),
            ));
        }
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

// ── RecordingReporter ─────────────────────────────────────────

#[derive(Default)]
pub struct RecordingReporter {
    /// Length of the history passed to each render call.
    pub renders: RefCell<Vec<usize>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportPort for RecordingReporter {
    fn render(&self, entries: &[HistoryEntry]) -> Result<PathBuf> {
        self.renders.borrow_mut().push(entries.len());
        Ok(PathBuf::from("memory/safety_report.png"))
    }
}

// ── EventLog ──────────────────────────────────────────────────

#[derive(Default)]
pub struct EventLog {
    pub events: Vec<AppEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
