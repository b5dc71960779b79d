//! Monitor service — the hexagonal core.
//!
//! [`MonitorService`] owns the safety evaluator and the run summary.  It
//! exposes a filesystem-agnostic API: all I/O flows through the port
//! traits bundled in [`MonitorPorts`], making the whole run testable with
//! mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐ ──▶ HistoryPort
//!   ClockPort ──▶ │     MonitorService     │ ──▶ AlertPort
//!                 │  Safety · RunSummary   │ ──▶ ReportPort
//!                 └────────────────────────┘ ──▶ EventSink
//! ```

use std::time::Duration;

use log::info;

use crate::config::MonitorConfig;
use crate::diagnostics::RunSummary;
use crate::error::Result;
use crate::safety::{AlertRecord, SafetyEvaluator, SafetyStatus};

use super::events::{AppEvent, HistoryEntry};
use super::ports::{AlertPort, ClockPort, EventSink, HistoryPort, ReportPort, SensorPort};

/// Borrowed adapters for one run.  Each field is a separate borrow so the
/// service can feed the history into the reporter while holding the rest.
pub struct MonitorPorts<'a> {
    pub sensors: &'a mut dyn SensorPort,
    pub clock: &'a mut dyn ClockPort,
    pub alerts: &'a mut dyn AlertPort,
    pub history: &'a mut dyn HistoryPort,
    pub reporter: &'a dyn ReportPort,
    pub events: &'a mut dyn EventSink,
}

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

/// Drives a fixed number of sample → evaluate → record cycles.
pub struct MonitorService {
    safety: SafetyEvaluator,
    summary: RunSummary,
    iterations: u32,
    interval: Duration,
}

impl MonitorService {
    pub fn new(config: &MonitorConfig) -> Self {
        Self {
            safety: SafetyEvaluator::new(),
            summary: RunSummary::new(),
            iterations: config.iterations,
            interval: config.interval(),
        }
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one cycle: read sensors → evaluate → append history.
    ///
    /// An alert, if any, reaches the alert port before the history entry is
    /// written.  History write failures propagate.
    pub fn run_cycle(&mut self, ports: &mut MonitorPorts<'_>) -> Result<HistoryEntry> {
        let reading = ports.sensors.read_all();
        let timestamp = ports.clock.timestamp();

        let previous = self.safety.status();
        let status = self.safety.evaluate(&reading, &timestamp, &mut *ports.alerts);

        if status.is_alert() {
            ports.events.emit(&AppEvent::AlertRaised(AlertRecord {
                timestamp: timestamp.clone(),
                message: status.as_str().to_owned(),
            }));
        }
        if status != previous {
            ports.events.emit(&AppEvent::StatusChanged {
                from: previous,
                to: status,
            });
        }

        let entry = HistoryEntry {
            timestamp,
            reading,
            status,
        };
        ports.history.append(entry.clone())?;
        self.summary.record(status);

        ports.events.emit(&AppEvent::Cycle(entry.clone()));
        Ok(entry)
    }

    // ── Full run ──────────────────────────────────────────────

    /// Run every configured cycle, pausing after each, then write the
    /// report and persist the alerts.
    pub fn run(&mut self, ports: &mut MonitorPorts<'_>) -> Result<RunSummary> {
        ports.events.emit(&AppEvent::Started {
            iterations: self.iterations,
        });
        info!(
            "MonitorService: {} cycles every {:?}",
            self.iterations, self.interval
        );

        for _ in 0..self.iterations {
            self.run_cycle(ports)?;
            ports.clock.pause(self.interval);
        }

        self.finish(ports)
    }

    /// Render the report from the accumulated history and persist alerts.
    pub fn finish(&mut self, ports: &mut MonitorPorts<'_>) -> Result<RunSummary> {
        let report = ports.reporter.render(ports.history.entries())?;
        ports.events.emit(&AppEvent::ReportWritten(report));

        let path = ports.alerts.save()?;
        ports.events.emit(&AppEvent::AlertsSaved {
            path,
            count: ports.alerts.alerts().len(),
        });

        ports.events.emit(&AppEvent::Finished(self.summary.clone()));
        Ok(self.summary.clone())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Status produced by the most recent cycle.
    pub fn status(&self) -> SafetyStatus {
        self.safety.status()
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }
}
