//! Safety evaluation engine.
//!
//! Classifies one [`Reading`] against fixed limits and forwards an alert
//! when the result is not [`SafetyStatus::Safe`].
//!
//! ## Rule order
//!
//! Rules are checked top to bottom and the **first** match wins:
//!
//! 1. temperature above [`MAX_TEMPERATURE_C`]
//! 2. gas above [`MAX_GAS_PPM`]
//! 3. humidity outside [`MIN_HUMIDITY_PCT`]..=[`MAX_HUMIDITY_PCT`]
//!
//! A reading that breaks several limits at once therefore raises only the
//! highest-priority alert.  Limits are exclusive: a value sitting exactly
//! on a limit is safe.  Every cycle is classified from scratch; there is no
//! latching, hysteresis or debounce.

use core::fmt;

use log::warn;

use crate::app::ports::AlertPort;
use crate::sensors::Reading;

pub const MAX_TEMPERATURE_C: f64 = 50.0;
pub const MAX_GAS_PPM: f64 = 200.0;
pub const MIN_HUMIDITY_PCT: f64 = 20.0;
pub const MAX_HUMIDITY_PCT: f64 = 80.0;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Result of classifying one reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SafetyStatus {
    #[default]
    Safe,
    HighTemperature,
    HighGasLevels,
    UnsafeHumidity,
}

impl SafetyStatus {
    /// Label written to the history log and used as the alert message.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::HighTemperature => "ALERT: High Temperature",
            Self::HighGasLevels => "ALERT: High Gas Levels",
            Self::UnsafeHumidity => "ALERT: Unsafe Humidity",
        }
    }

    pub const fn is_alert(self) -> bool {
        !matches!(self, Self::Safe)
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timestamped alert, owned by the alert sink once raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRecord {
    pub timestamp: String,
    pub message: String,
}

impl fmt::Display for AlertRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.message)
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Apply the ordered threshold rules to one reading.
///
/// Accepts any value, including NaN and physically impossible readings.
/// NaN fails every comparison and so falls through to `Safe`.
pub fn classify(reading: &Reading) -> SafetyStatus {
    if reading.temperature_c > MAX_TEMPERATURE_C {
        SafetyStatus::HighTemperature
    } else if reading.gas_ppm > MAX_GAS_PPM {
        SafetyStatus::HighGasLevels
    } else if reading.humidity_pct < MIN_HUMIDITY_PCT || reading.humidity_pct > MAX_HUMIDITY_PCT
    {
        SafetyStatus::UnsafeHumidity
    } else {
        SafetyStatus::Safe
    }
}

// ---------------------------------------------------------------------------
// Evaluator
// ---------------------------------------------------------------------------

/// Holds the current status for a run.
#[derive(Debug, Default)]
pub struct SafetyEvaluator {
    status: SafetyStatus,
}

impl SafetyEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current status; `Safe` before the first evaluation.
    pub fn status(&self) -> SafetyStatus {
        self.status
    }

    /// Classify `reading`, replace the current status and, when it is an
    /// alert, hand exactly one [`AlertRecord`] to `alerts`.
    pub fn evaluate(
        &mut self,
        reading: &Reading,
        timestamp: &str,
        alerts: &mut dyn AlertPort,
    ) -> SafetyStatus {
        self.status = classify(reading);

        if self.status.is_alert() {
            warn!("SAFETY ALERT: {}", self.status);
            alerts.add_alert(AlertRecord {
                timestamp: timestamp.to_owned(),
                message: self.status.as_str().to_owned(),
            });
        }

        self.status
    }
}
