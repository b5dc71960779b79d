//! Unified error types for the MineWatch monitor.
//!
//! Every fallible operation in the crate funnels into [`Error`], keeping the
//! orchestrator's error handling uniform.  Nothing here is recoverable: a
//! failed write or render ends the run and the binary reports it.

use core::fmt;
use std::path::{Path, PathBuf};

use crate::app::ports::ConfigError;

// ---------------------------------------------------------------------------
// Top-level monitor error
// ---------------------------------------------------------------------------

/// Every fallible operation in the monitor funnels into this type.
#[derive(Debug)]
pub enum Error {
    /// A history, alert or config file could not be written or read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The safety report image could not be rendered or saved.
    Chart { path: PathBuf, reason: String },
    /// Configuration is invalid or could not be loaded.
    Config(ConfigError),
}

impl Error {
    /// Wrap an I/O failure together with the file it concerns.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io: {}: {source}", path.display()),
            Self::Chart { path, reason } => write!(f, "chart: {}: {reason}", path.display()),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Chart { .. } => None,
            Self::Config(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
