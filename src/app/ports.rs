//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensors, clock, alert and history files, chart renderer,
//! config store) implement these traits.  The
//! [`MonitorService`](super::service::MonitorService) reaches them through
//! [`MonitorPorts`](super::service::MonitorPorts), so the domain core never
//! touches the filesystem directly.

use std::path::PathBuf;
use std::time::Duration;

use crate::app::events::{AppEvent, HistoryEntry};
use crate::config::MonitorConfig;
use crate::error::Result;
use crate::safety::AlertRecord;
use crate::sensors::Reading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: sensors → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain one reading triple.
pub trait SensorPort {
    /// Sample every sensor once.  Sampling cannot fail.
    fn read_all(&mut self) -> Reading;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Wall-clock timestamps and the pacing delay between cycles.
pub trait ClockPort {
    /// Current local time as `YYYY-MM-DD HH:MM:SS`.
    fn timestamp(&mut self) -> String;

    /// Block for `interval` before the next cycle.
    fn pause(&mut self, interval: Duration);
}

// ───────────────────────────────────────────────────────────────
// Alert port
// ───────────────────────────────────────────────────────────────

/// Append-only store of raised alerts, persisted on demand.
pub trait AlertPort {
    fn add_alert(&mut self, record: AlertRecord);

    /// Every alert raised so far, oldest first.
    fn alerts(&self) -> &[AlertRecord];

    /// Rewrite durable storage with the full alert list.
    /// Returns where the alerts were written.
    fn save(&self) -> Result<PathBuf>;
}

// ───────────────────────────────────────────────────────────────
// History port
// ───────────────────────────────────────────────────────────────

/// Append-only per-cycle record, kept in memory for reporting.
pub trait HistoryPort {
    /// Durably append one entry.  Never truncates earlier data.
    fn append(&mut self, entry: HistoryEntry) -> Result<()>;

    /// Entries appended during this run, oldest first.
    fn entries(&self) -> &[HistoryEntry];
}

// ───────────────────────────────────────────────────────────────
// Report port
// ───────────────────────────────────────────────────────────────

/// Renders a run's history as a time-series chart.
pub trait ReportPort {
    /// Render `entries` and return the path of the produced image.
    fn render(&self, entries: &[HistoryEntry]) -> Result<PathBuf>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → console / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.  Adapters
/// decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads and persists monitor configuration.
///
/// Implementations MUST validate before persisting.  Out-of-range values
/// are rejected with [`ConfigError::ValidationFailed`], not clamped.
pub trait ConfigPort {
    /// Load configuration.  Returns [`MonitorConfig::default()`] if no
    /// stored config exists.
    fn load(&self) -> core::result::Result<MonitorConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &MonitorConfig) -> core::result::Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored config failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
