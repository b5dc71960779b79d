//! Sensor subsystem — simulated drivers and the aggregating [`SensorHub`].
//!
//! The hub owns one [`SimulatedSensor`] per [`SensorKind`] and produces a
//! [`Reading`] each cycle.  There is no hardware behind it: every value is a
//! uniform sample drawn from the kind's fixed range.

pub mod simulated;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::app::ports::SensorPort;
pub use simulated::{SensorKind, SimulatedSensor};

// ---------------------------------------------------------------------------
// Reading triple
// ---------------------------------------------------------------------------

/// One cycle's simultaneous temperature / gas / humidity sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    /// Ambient temperature (°C).
    pub temperature_c: f64,
    /// Gas concentration (ppm).
    pub gas_ppm: f64,
    /// Relative humidity (%).
    pub humidity_pct: f64,
}

impl Reading {
    pub const fn new(temperature_c: f64, gas_ppm: f64, humidity_pct: f64) -> Self {
        Self {
            temperature_c,
            gas_ppm,
            humidity_pct,
        }
    }
}

// ---------------------------------------------------------------------------
// SensorHub
// ---------------------------------------------------------------------------

/// Aggregates the three simulated sensors and their random source.
pub struct SensorHub<R = StdRng> {
    pub temperature: SimulatedSensor,
    pub gas: SimulatedSensor,
    pub humidity: SimulatedSensor,
    rng: R,
}

impl SensorHub<StdRng> {
    /// Hub seeded from the operating system; every run differs.
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Hub with a fixed seed; the same seed replays the same readings.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> SensorHub<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            temperature: SimulatedSensor::new("Temperature Sensor", SensorKind::Temperature),
            gas: SimulatedSensor::new("Gas Sensor", SensorKind::Gas),
            humidity: SimulatedSensor::new("Humidity Sensor", SensorKind::Humidity),
            rng,
        }
    }
}

impl<R: rand::Rng> SensorPort for SensorHub<R> {
    fn read_all(&mut self) -> Reading {
        let temperature_c = self.temperature.read(&mut self.rng);
        let gas_ppm = self.gas.read(&mut self.rng);
        let humidity_pct = self.humidity.read(&mut self.rng);
        for sensor in [&self.temperature, &self.gas, &self.humidity] {
            if let Some(value) = sensor.last_value() {
                log::debug!("{}: {} = {value:.2}", sensor.name(), sensor.kind());
            }
        }
        Reading {
            temperature_c,
            gas_ppm,
            humidity_pct,
        }
    }
}
