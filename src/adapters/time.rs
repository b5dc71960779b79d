//! System clock adapter.
//!
//! Local wall-clock timestamps from `chrono` and a blocking
//! `std::thread::sleep` for pacing between cycles.

use std::time::Duration;

use chrono::Local;

use crate::app::ports::ClockPort;

/// `strftime` pattern for every timestamp the monitor writes.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl ClockPort for SystemClock {
    fn timestamp(&mut self) -> String {
        Local::now().format(TIMESTAMP_FORMAT).to_string()
    }

    fn pause(&mut self, interval: Duration) {
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
}
