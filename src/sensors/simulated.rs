//! Simulated environmental sensor.
//!
//! A sensor is identified by its [`SensorKind`], which fixes the range its
//! samples are drawn from.  Only the most recent value is kept.

use core::fmt;

use rand::Rng;

/// The three environmental quantities a monitoring station samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    /// Ambient temperature, 25–75 °C.
    Temperature,
    /// Methane / combustible gas concentration, 0–300 ppm.
    Gas,
    /// Relative humidity, 10–90 %.
    Humidity,
}

impl SensorKind {
    pub const ALL: [Self; 3] = [Self::Temperature, Self::Gas, Self::Humidity];

    /// Inclusive `(low, high)` bounds of the simulated range.
    pub const fn bounds(self) -> (f64, f64) {
        match self {
            Self::Temperature => (25.0, 75.0),
            Self::Gas => (0.0, 300.0),
            Self::Humidity => (10.0, 90.0),
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Gas => write!(f, "gas level"),
            Self::Humidity => write!(f, "humidity"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulatedSensor {
    name: &'static str,
    kind: SensorKind,
    value: Option<f64>,
}

impl SimulatedSensor {
    pub fn new(name: &'static str, kind: SensorKind) -> Self {
        Self {
            name,
            kind,
            value: None,
        }
    }

    /// Draw a fresh sample uniformly from the kind's range.
    pub fn read(&mut self, rng: &mut impl Rng) -> f64 {
        let (low, high) = self.kind.bounds();
        let value = rng.random_range(low..=high);
        self.value = Some(value);
        value
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    /// Value of the last [`read`](Self::read), `None` before the first one.
    pub fn last_value(&self) -> Option<f64> {
        self.value
    }
}
