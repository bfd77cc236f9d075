//! Error handling for the application

use std::path::PathBuf;
use thiserror::Error;

/// Log scanning errors
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Log file {} not found", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to open {}: {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profit value {token:?} on line {line}")]
    MalformedProfit { line: usize, token: String },
}

impl ScanError {
    /// The log file is missing or could not be opened for reading.
    pub fn is_unreadable_file(&self) -> bool {
        matches!(self, ScanError::FileNotFound { .. } | ScanError::Open { .. })
    }
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Scan(#[from] ScanError),
}
