//! CSV history log adapter.
//!
//! Each [`append`](HistoryPort::append) opens the file in append mode
//! (creating it if needed), writes one line and closes it again:
//!
//! ```text
//! 2024-01-01 12:00:00,31.42,118.07,55.90,SAFE
//! ```
//!
//! No header row.  Earlier lines are never touched.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::events::HistoryEntry;
use crate::app::ports::HistoryPort;
use crate::error::{Error, Result};

#[derive(Debug)]
pub struct CsvHistoryLog {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl CsvHistoryLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Format one history line, newline included.
pub fn format_line(entry: &HistoryEntry) -> String {
    format!(
        "{},{:.2},{:.2},{:.2},{}\n",
        entry.timestamp,
        entry.reading.temperature_c,
        entry.reading.gas_ppm,
        entry.reading.humidity_pct,
        entry.status,
    )
}

impl HistoryPort for CsvHistoryLog {
    fn append(&mut self, entry: HistoryEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        file.write_all(format_line(&entry).as_bytes())
            .map_err(|e| Error::io(&self.path, e))?;
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
