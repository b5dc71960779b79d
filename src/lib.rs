//! MineWatch coal-mine safety monitor library.
//!
//! Exposes the pure-logic modules and the file adapters for integration
//! testing.  The binary in `main.rs` wires them together for a fixed run.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod safety;
pub mod sensors;
