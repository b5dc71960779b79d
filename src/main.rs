//! MineWatch — Main Entry Point
//!
//! Runs a fixed monitoring session against simulated sensors.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SensorHub      SystemClock     FileAlertSink   CsvHistoryLog  │
//! │  (SensorPort)   (ClockPort)     (AlertPort)     (HistoryPort)  │
//! │  PngChartReporter  LogEventSink    JsonConfigStore             │
//! │  (ReportPort)      (EventSink)     (ConfigPort)                │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            MonitorService (pure logic)                 │    │
//! │  │  SafetyEvaluator · RunSummary                          │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::{Context, Result};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use minewatch::adapters::alert_file::FileAlertSink;
use minewatch::adapters::chart::PngChartReporter;
use minewatch::adapters::config_store::JsonConfigStore;
use minewatch::adapters::history_csv::CsvHistoryLog;
use minewatch::adapters::log_sink::LogEventSink;
use minewatch::adapters::time::SystemClock;
use minewatch::app::ports::ConfigPort;
use minewatch::app::service::{MonitorPorts, MonitorService};
use minewatch::config::{CONFIG_ENV, MonitorConfig};
use minewatch::sensors::SensorHub;

fn main() -> Result<()> {
    // ── 1. Logging (stderr; stdout carries the status lines) ──
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("MineWatch v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Load config (or defaults) ──────────────────────────
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => match JsonConfigStore::new(&path).load() {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config load failed ({}), using defaults", e);
                MonitorConfig::default()
            }
        },
        None => MonitorConfig::default(),
    };

    // ── 3. Build adapters ─────────────────────────────────────
    let mut sensors = match config.seed {
        Some(seed) => {
            info!("Sensors seeded with {}", seed);
            SensorHub::seeded(seed)
        }
        None => SensorHub::from_os_rng(),
    };
    let mut clock = SystemClock::new();
    let mut alerts = FileAlertSink::new(&config.alerts_path);
    let mut history = CsvHistoryLog::new(&config.history_path);
    let reporter =
        PngChartReporter::new(&config.report_path, config.report_width, config.report_height);
    let mut events = LogEventSink::new();

    // ── 4. Run ────────────────────────────────────────────────
    let mut service = MonitorService::new(&config);
    let mut ports = MonitorPorts {
        sensors: &mut sensors,
        clock: &mut clock,
        alerts: &mut alerts,
        history: &mut history,
        reporter: &reporter,
        events: &mut events,
    };
    service
        .run(&mut ports)
        .context("monitoring run aborted")?;

    Ok(())
}
