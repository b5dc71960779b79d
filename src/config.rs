//! Monitor configuration parameters
//!
//! Run length, pacing and output locations.  Safety limits and sensor
//! ranges are fixed in code and deliberately absent here.
//! Values can be overridden from a JSON file via
//! [`JsonConfigStore`](crate::adapters::config_store::JsonConfigStore).

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "MINEWATCH_CONFIG";

/// Core monitor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    // --- Run ---
    /// Number of evaluation cycles
    pub iterations: u32,
    /// Delay after each cycle (milliseconds)
    pub interval_ms: u64,
    /// Fixed sensor seed for a reproducible run; `None` draws from the OS
    pub seed: Option<u64>,

    // --- Outputs ---
    /// Per-cycle CSV history (appended)
    pub history_path: PathBuf,
    /// Alert list (rewritten at the end of a run)
    pub alerts_path: PathBuf,
    /// Chart image
    pub report_path: PathBuf,
    /// Chart width (pixels)
    pub report_width: u32,
    /// Chart height (pixels)
    pub report_height: u32,
}

impl MonitorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            // Run
            iterations: 5,
            interval_ms: 2000,
            seed: None,

            // Outputs
            history_path: PathBuf::from("sensor_log.csv"),
            alerts_path: PathBuf::from("alerts_log.txt"),
            report_path: PathBuf::from("safety_report.png"),
            report_width: 1200,
            report_height: 600,
        }
    }
}
