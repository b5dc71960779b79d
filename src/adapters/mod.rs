//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                  |
//! |----------------|--------------|------------------------------|
//! | `alert_file`   | AlertPort    | Alert text file (rewritten)  |
//! | `chart`        | ReportPort   | PNG image via `image`        |
//! | `config_store` | ConfigPort   | JSON config file             |
//! | `history_csv`  | HistoryPort  | CSV history file (appended)  |
//! | `log_sink`     | EventSink    | stdout + `log` facade        |
//! | `time`         | ClockPort    | Local wall clock, sleep      |
//!
//! The sensor side is [`SensorHub`](crate::sensors::SensorHub), which
//! implements `SensorPort` directly.

pub mod alert_file;
pub mod chart;
pub mod config_store;
pub mod history_csv;
pub mod log_sink;
pub mod time;
