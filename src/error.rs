//! Error types for reading logs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a log from being read.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read log file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "no date for {}: pass --date, set parser.date or put YYYYMMDD in the file name",
        .path.display()
    )]
    NoDate { path: PathBuf },
}

impl ReadError {
    /// Get a static error code string for log fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "io",
            Self::NoDate { .. } => "no_date",
        }
    }
}
