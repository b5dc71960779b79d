//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the orchestration rules for the monitor: sample,
//! evaluate, record, then report once the run is over.  All interaction
//! with sensors and files happens through **port traits** defined in
//! [`ports`], keeping this layer fully testable without touching disk.

pub mod events;
pub mod ports;
pub mod service;
