//! Outbound application events.
//!
//! The [`MonitorService`](super::service::MonitorService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — print to the console, write to the
//! log, etc.

use std::path::PathBuf;

use crate::diagnostics::RunSummary;
use crate::safety::{AlertRecord, SafetyStatus};
use crate::sensors::Reading;

/// One durable record of a cycle's readings and resulting status.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub reading: Reading,
    pub status: SafetyStatus,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A run has started.
    Started { iterations: u32 },

    /// One evaluation cycle completed.
    Cycle(HistoryEntry),

    /// The status differs from the previous cycle's.
    StatusChanged {
        from: SafetyStatus,
        to: SafetyStatus,
    },

    /// A threshold rule fired.
    AlertRaised(AlertRecord),

    /// The history chart was written.
    ReportWritten(PathBuf),

    /// The alert list was persisted.
    AlertsSaved { path: PathBuf, count: usize },

    /// The run is complete.
    Finished(RunSummary),
}
