//! crates/logging/src/error.rs
//!
//! Error types for logger construction.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for logger construction.
pub type LoggerResult<T> = Result<T, LoggerError>;

/// Errors that can occur while building a [`Logger`](crate::Logger).
///
/// Emission never returns an error; only explicit constructors do.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// The log file could not be opened for appending.
    #[error("failed to open log file '{}': {source}", path.display())]
    OpenLogFile {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl LoggerError {
    pub(crate) fn open_log_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::OpenLogFile {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn open_error_names_the_path() {
        let err = LoggerError::open_log_file(
            "/nonexistent/app.log",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );

        let rendered = err.to_string();
        assert!(rendered.contains("/nonexistent/app.log"));
        assert!(rendered.contains("no such directory"));
        assert!(err.source().is_some());
    }
}
