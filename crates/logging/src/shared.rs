//! crates/logging/src/shared.rs
//! Process-wide logger instance.
//!
//! The instance is created at most once. Whichever of [`shared`],
//! [`set_log_file_name`], or [`shared_with_config`] runs first decides the
//! file; later calls return the existing instance unchanged. The instance
//! lives for the rest of the process. Every line is flushed when written, so
//! nothing is lost because it is never dropped.

use std::path::Path;
use std::sync::OnceLock;

use crate::clock;
use crate::config::LoggerConfig;
use crate::logger::Logger;

static SHARED: OnceLock<Logger> = OnceLock::new();

/// Returns the shared logger, creating it with the dated default file name
/// on first use.
///
/// Never fails: when the file cannot be opened the logger runs without one
/// and reports the problem on standard error.
pub fn shared() -> &'static Logger {
    SHARED.get_or_init(|| Logger::open_best_effort(clock::default_log_file_name()))
}

/// Creates the shared logger writing to `path`, or returns the existing one.
///
/// When the instance already exists `path` is ignored.
pub fn set_log_file_name(path: impl AsRef<Path>) -> &'static Logger {
    SHARED.get_or_init(|| Logger::open_best_effort(path))
}

/// Creates the shared logger from `config`, or returns the existing one.
///
/// The configured level and sink mode are applied only when this call
/// creates the instance.
pub fn shared_with_config(config: &LoggerConfig) -> &'static Logger {
    SHARED.get_or_init(|| {
        let logger = match &config.file {
            Some(path) => Logger::open_best_effort(path),
            None => Logger::open_best_effort(clock::default_log_file_name()),
        };
        logger.apply(config);
        logger
    })
}

/// Returns the shared logger if it has been created, without creating it.
pub fn try_shared() -> Option<&'static Logger> {
    SHARED.get()
}
