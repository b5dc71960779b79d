//! Console event sink adapter.
//!
//! Implements [`EventSink`] by writing the operator-facing lines to a
//! console writer (stdout by default) and structured records through the
//! `log` facade (stderr, via the subscriber installed in `main`).

use std::io::{self, Stdout, Write};
use std::path::Path;

use log::{debug, info};

use crate::app::events::{AppEvent, HistoryEntry};
use crate::app::ports::EventSink;

/// Console line printed after every cycle.
pub fn status_line(entry: &HistoryEntry) -> String {
    format!("Current Status: {}", entry.status)
}

/// Console line printed once the chart is on disk.
pub fn report_line(path: &Path) -> String {
    format!("Safety report generated: {}", path.display())
}

/// Adapter that prints status lines and logs every [`AppEvent`].
#[derive(Debug)]
pub struct LogEventSink<W: Write = Stdout> {
    out: W,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> LogEventSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, line: &str) {
        // Console errors are logged, never propagated.
        if let Err(e) = writeln!(self.out, "{line}") {
            debug!("console write failed: {e}");
        }
    }
}

impl<W: Write> EventSink for LogEventSink<W> {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { iterations } => {
                info!("START | iterations={}", iterations);
            }
            AppEvent::Cycle(entry) => {
                info!(
                    "CYCLE | {} | T={:.2}\u{00b0}C | gas={:.2}ppm | RH={:.2}% | {}",
                    entry.timestamp,
                    entry.reading.temperature_c,
                    entry.reading.gas_ppm,
                    entry.reading.humidity_pct,
                    entry.status,
                );
                self.print(&status_line(entry));
            }
            AppEvent::StatusChanged { from, to } => {
                info!("STATUS | {} -> {}", from, to);
            }
            AppEvent::AlertRaised(record) => {
                debug!("ALERT | {}", record);
            }
            AppEvent::ReportWritten(path) => {
                self.print(&report_line(path));
            }
            AppEvent::AlertsSaved { path, count } => {
                info!("ALERTS | saved {} to {}", count, path.display());
            }
            AppEvent::Finished(summary) => {
                info!("DONE | {}", summary);
            }
        }
    }
}
