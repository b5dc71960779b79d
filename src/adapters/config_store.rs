//! JSON file configuration store.
//!
//! Implements [`ConfigPort`] over a single `serde_json` document.  A missing
//! file is not an error: the monitor runs with defaults, as on first boot.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;

use crate::adapters::chart::{MIN_HEIGHT, MIN_WIDTH};
use crate::app::ports::{ConfigError, ConfigPort};
use crate::config::MonitorConfig;

pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Validate every [`MonitorConfig`] field before it is used or persisted.
pub fn validate_config(cfg: &MonitorConfig) -> Result<(), ConfigError> {
    if !(1..=10_000).contains(&cfg.iterations) {
        return Err(ConfigError::ValidationFailed("iterations must be 1–10000"));
    }
    if cfg.interval_ms > 60_000 {
        return Err(ConfigError::ValidationFailed("interval_ms must be 0–60000"));
    }
    if cfg.history_path.as_os_str().is_empty()
        || cfg.alerts_path.as_os_str().is_empty()
        || cfg.report_path.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationFailed("output paths must not be empty"));
    }
    if !(MIN_WIDTH..=4000).contains(&cfg.report_width) {
        return Err(ConfigError::ValidationFailed("report_width must be 200–4000"));
    }
    if !(MIN_HEIGHT..=4000).contains(&cfg.report_height) {
        return Err(ConfigError::ValidationFailed("report_height must be 240–4000"));
    }
    Ok(())
}

impl ConfigPort for JsonConfigStore {
    fn load(&self) -> Result<MonitorConfig, ConfigError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "JsonConfigStore: {} not found, using defaults",
                    self.path.display()
                );
                return Ok(MonitorConfig::default());
            }
            Err(_) => return Err(ConfigError::IoError),
        };
        let cfg: MonitorConfig =
            serde_json::from_str(&text).map_err(|_| ConfigError::Corrupted)?;
        validate_config(&cfg)?;
        info!("JsonConfigStore: loaded config from {}", self.path.display());
        Ok(cfg)
    }

    fn save(&self, config: &MonitorConfig) -> Result<(), ConfigError> {
        validate_config(config)?;
        let json = serde_json::to_string_pretty(config).map_err(|_| ConfigError::IoError)?;
        fs::write(&self.path, json).map_err(|_| ConfigError::IoError)?;
        info!("JsonConfigStore: config saved to {}", self.path.display());
        Ok(())
    }
}
