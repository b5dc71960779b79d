//! Run diagnostics.
//!
//! [`RunSummary`] tallies how many cycles ended in each status.  The
//! orchestrator updates it every cycle and emits it when the run finishes.

use core::fmt;

use crate::safety::SafetyStatus;

/// Per-status cycle counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub cycles: u32,
    pub safe: u32,
    pub high_temperature: u32,
    pub high_gas: u32,
    pub unsafe_humidity: u32,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, status: SafetyStatus) {
        self.cycles = self.cycles.saturating_add(1);
        let slot = match status {
            SafetyStatus::Safe => &mut self.safe,
            SafetyStatus::HighTemperature => &mut self.high_temperature,
            SafetyStatus::HighGasLevels => &mut self.high_gas,
            SafetyStatus::UnsafeHumidity => &mut self.unsafe_humidity,
        };
        *slot = slot.saturating_add(1);
    }

    /// Number of cycles that raised an alert.
    pub fn alerts(&self) -> u32 {
        self.high_temperature + self.high_gas + self.unsafe_humidity
    }

    pub fn count(&self, status: SafetyStatus) -> u32 {
        match status {
            SafetyStatus::Safe => self.safe,
            SafetyStatus::HighTemperature => self.high_temperature,
            SafetyStatus::HighGasLevels => self.high_gas,
            SafetyStatus::UnsafeHumidity => self.unsafe_humidity,
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cycles={} safe={} alerts={} (temp={} gas={} humidity={})",
            self.cycles,
            self.safe,
            self.alerts(),
            self.high_temperature,
            self.high_gas,
            self.unsafe_humidity,
        )
    }
}
