//! crates/logging/src/config.rs
//! Startup configuration for a [`Logger`](crate::Logger).

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::levels::{LogLevel, ParseLevelError, ParseSinkModeError, SinkMode};

/// Environment variable holding the initial [`LogLevel`].
pub const LEVEL_ENV: &str = "FILELOG_LEVEL";
/// Environment variable holding the initial [`SinkMode`].
pub const SINK_ENV: &str = "FILELOG_SINK";
/// Environment variable holding the log file path.
pub const FILE_ENV: &str = "FILELOG_FILE";

/// Level, sink mode, and file location applied when a logger is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct LoggerConfig {
    /// Initial verbosity threshold.
    pub level: LogLevel,
    /// Initial sink selection.
    pub sink_mode: SinkMode,
    /// Log file path; `None` uses the dated default name.
    pub file: Option<PathBuf>,
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The level variable held an unrecognised value.
    #[error("invalid {variable}: {source}")]
    Level {
        /// Variable that was read.
        variable: &'static str,
        /// Parse failure.
        #[source]
        source: ParseLevelError,
    },
    /// The sink variable held an unrecognised value.
    #[error("invalid {variable}: {source}")]
    SinkMode {
        /// Variable that was read.
        variable: &'static str,
        /// Parse failure.
        #[source]
        source: ParseSinkModeError,
    },
}

impl LoggerConfig {
    /// Reads `FILELOG_LEVEL`, `FILELOG_SINK`, and `FILELOG_FILE`.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var_os(key).map(|value| value.to_string_lossy().into_owned()))
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(value) = present(LEVEL_ENV) {
            config.level = value.parse().map_err(|source| ConfigError::Level {
                variable: LEVEL_ENV,
                source,
            })?;
        }
        if let Some(value) = present(SINK_ENV) {
            config.sink_mode = value.parse().map_err(|source| ConfigError::SinkMode {
                variable: SINK_ENV,
                source,
            })?;
        }
        config.file = present(FILE_ENV).map(PathBuf::from);
        Ok(config)
    }

    /// Sets the level.
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the sink mode.
    #[must_use]
    pub const fn with_sink_mode(mut self, sink_mode: SinkMode) -> Self {
        self.sink_mode = sink_mode;
        self
    }

    /// Sets the log file path.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
}
