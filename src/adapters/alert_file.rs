//! File-backed alert sink.
//!
//! Alerts accumulate in memory and are echoed to stdout as they arrive.
//! [`save`](AlertPort::save) rewrites the whole file: one `[timestamp]
//! message` line per alert, joined with `\n`, no trailing newline.

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::ports::AlertPort;
use crate::error::{Error, Result};
use crate::safety::AlertRecord;

#[derive(Debug)]
pub struct FileAlertSink {
    path: PathBuf,
    alerts: Vec<AlertRecord>,
}

impl FileAlertSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            alerts: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn render(&self) -> String {
        self.alerts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl AlertPort for FileAlertSink {
    fn add_alert(&mut self, record: AlertRecord) {
        println!("{record}");
        self.alerts.push(record);
    }

    fn alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }

    fn save(&self) -> Result<PathBuf> {
        fs::write(&self.path, self.render()).map_err(|e| Error::io(&self.path, e))?;
        Ok(self.path.clone())
    }
}
