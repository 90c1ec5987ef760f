//! crates/logging/src/levels.rs
//! Log levels, sink modes, and the seven emission severities.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Verbosity threshold, ordered from least to most permissive.
///
/// A higher level lets more severities through the gate. Error, Alarm, and
/// Always are never gated by the level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum LogLevel {
    /// Only ungated severities are emitted.
    Disabled = 1,
    /// Info and below.
    Info = 2,
    /// Raw buffer dumps and below.
    Buffer = 3,
    /// Trace and below.
    #[default]
    Trace = 4,
    /// Debug and below.
    Debug = 5,
    /// Every severity.
    EnableAll = 6,
}

impl LogLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Disabled,
        Self::Info,
        Self::Buffer,
        Self::Trace,
        Self::Debug,
        Self::EnableAll,
    ];

    /// Least permissive level.
    pub const MIN: Self = Self::Disabled;

    /// Most permissive level.
    pub const MAX: Self = Self::EnableAll;

    /// Returns the numeric value (1 through 6).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the level for a numeric value, or `None` outside 1 through 6.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Disabled),
            2 => Some(Self::Info),
            3 => Some(Self::Buffer),
            4 => Some(Self::Trace),
            5 => Some(Self::Debug),
            6 => Some(Self::EnableAll),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Info => "info",
            Self::Buffer => "buffer",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::EnableAll => "enable-all",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string or number does not name a [`LogLevel`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown log level '{input}' (expected disabled, info, buffer, trace, debug, enable-all, or 1-6)")]
pub struct ParseLevelError {
    input: String,
}

impl ParseLevelError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::from_u8(value).ok_or_else(|| ParseLevelError {
                input: s.to_owned(),
            });
        }

        match trimmed.to_ascii_lowercase().replace('_', "-").as_str() {
            "disabled" | "disable" | "off" | "none" => Ok(Self::Disabled),
            "info" => Ok(Self::Info),
            "buffer" => Ok(Self::Buffer),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "enable-all" | "all" => Ok(Self::EnableAll),
            _ => Err(ParseLevelError {
                input: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ParseLevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| ParseLevelError {
            input: value.to_string(),
        })
    }
}

/// Which sinks receive emitted lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[repr(u8)]
pub enum SinkMode {
    /// No sink for gated output; ungated severities still reach the file.
    None = 1,
    /// Console only.
    Console = 2,
    /// Log file only.
    #[default]
    File = 3,
    /// Log file first, then console.
    FileAndConsole = 4,
}

impl SinkMode {
    /// Returns the numeric value (1 through 4).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the mode for a numeric value, or `None` outside 1 through 4.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::None),
            2 => Some(Self::Console),
            3 => Some(Self::File),
            4 => Some(Self::FileAndConsole),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Console => "console",
            Self::File => "file",
            Self::FileAndConsole => "file-and-console",
        }
    }
}

impl fmt::Display for SinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string or number does not name a [`SinkMode`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown sink mode '{input}' (expected none, console, file, file-and-console, or 1-4)")]
pub struct ParseSinkModeError {
    input: String,
}

impl ParseSinkModeError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for SinkMode {
    type Err = ParseSinkModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Self::from_u8(value).ok_or_else(|| ParseSinkModeError {
                input: s.to_owned(),
            });
        }

        match trimmed.to_ascii_lowercase().replace('_', "-").as_str() {
            "none" | "off" => Ok(Self::None),
            "console" => Ok(Self::Console),
            "file" => Ok(Self::File),
            "file-and-console" | "both" => Ok(Self::FileAndConsole),
            _ => Err(ParseSinkModeError {
                input: s.to_owned(),
            }),
        }
    }
}

impl TryFrom<u8> for SinkMode {
    type Error = ParseSinkModeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| ParseSinkModeError {
            input: value.to_string(),
        })
    }
}

/// One of the seven emission categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Severity {
    /// Failures; never gated.
    Error,
    /// Conditions needing attention; never gated.
    Alarm,
    /// Messages that must always be recorded; never gated.
    Always,
    /// Informational messages.
    Info,
    /// Raw payload written without timestamp or tag.
    Buffer,
    /// Execution tracing.
    Trace,
    /// Developer diagnostics.
    Debug,
}

impl Severity {
    /// All severities in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Error,
        Self::Alarm,
        Self::Always,
        Self::Info,
        Self::Buffer,
        Self::Trace,
        Self::Debug,
    ];

    /// Bracketed prefix placed before the message, `None` for [`Severity::Buffer`].
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Error => Some("[ERROR]"),
            Self::Alarm => Some("[ALARM]"),
            Self::Always => Some("[ALWAYS]"),
            Self::Info => Some("[INFO]"),
            Self::Buffer => None,
            Self::Trace => Some("[TRACE]"),
            Self::Debug => Some("[DEBUG]"),
        }
    }

    /// Minimum [`LogLevel`] required to emit, `None` for ungated severities.
    #[must_use]
    pub const fn threshold(self) -> Option<LogLevel> {
        match self {
            Self::Error | Self::Alarm | Self::Always => None,
            Self::Info => Some(LogLevel::Info),
            Self::Buffer => Some(LogLevel::Buffer),
            Self::Trace => Some(LogLevel::Trace),
            Self::Debug => Some(LogLevel::Debug),
        }
    }

    /// Whether the line carries a timestamp and tag.
    #[must_use]
    pub const fn is_decorated(self) -> bool {
        !matches!(self, Self::Buffer)
    }

    /// Whether `level` lets this severity through the gate.
    #[must_use]
    pub fn passes(self, level: LogLevel) -> bool {
        self.threshold().is_none_or(|threshold| level >= threshold)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Alarm => "alarm",
            Self::Always => "always",
            Self::Info => "info",
            Self::Buffer => "buffer",
            Self::Trace => "trace",
            Self::Debug => "debug",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_permissiveness() {
        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].as_u8() + 1, pair[1].as_u8());
        }
        assert_eq!(LogLevel::MIN.as_u8(), 1);
        assert_eq!(LogLevel::MAX.as_u8(), 6);
    }

    #[test]
    fn defaults_match_fresh_logger() {
        assert_eq!(LogLevel::default(), LogLevel::Trace);
        assert_eq!(SinkMode::default(), SinkMode::File);
    }

    #[test]
    fn level_parses_names_and_numbers() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!(" Enable_All ".parse::<LogLevel>(), Ok(LogLevel::EnableAll));
        assert_eq!("off".parse::<LogLevel>(), Ok(LogLevel::Disabled));
        assert_eq!("3".parse::<LogLevel>(), Ok(LogLevel::Buffer));
        assert_eq!(LogLevel::try_from(2), Ok(LogLevel::Info));

        let error = "7".parse::<LogLevel>().expect_err("out of range");
        assert_eq!(error.input(), "7");
        assert!("verbose".parse::<LogLevel>().is_err());
        assert!(LogLevel::try_from(0).is_err());
    }

    #[test]
    fn level_display_round_trips() {
        for level in LogLevel::ALL {
            assert_eq!(level.to_string().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn sink_mode_parses_names_and_numbers() {
        assert_eq!("console".parse::<SinkMode>(), Ok(SinkMode::Console));
        assert_eq!("BOTH".parse::<SinkMode>(), Ok(SinkMode::FileAndConsole));
        assert_eq!("file_and_console".parse::<SinkMode>(), Ok(SinkMode::FileAndConsole));
        assert_eq!("1".parse::<SinkMode>(), Ok(SinkMode::None));
        assert_eq!(SinkMode::try_from(3), Ok(SinkMode::File));

        let error = "syslog".parse::<SinkMode>().expect_err("unknown");
        assert!(error.to_string().contains("syslog"));
        assert!(SinkMode::try_from(5).is_err());
    }

    #[test]
    fn only_buffer_is_undecorated() {
        for severity in Severity::ALL {
            assert_eq!(severity.is_decorated(), severity.tag().is_some());
        }
        assert!(!Severity::Buffer.is_decorated());
    }

    #[test]
    fn ungated_severities_pass_every_level() {
        for severity in [Severity::Error, Severity::Alarm, Severity::Always] {
            for level in LogLevel::ALL {
                assert!(severity.passes(level), "{severity} must pass at {level}");
            }
        }
    }

    #[test]
    fn gated_severities_follow_threshold() {
        assert!(!Severity::Info.passes(LogLevel::Disabled));
        assert!(Severity::Info.passes(LogLevel::Info));
        assert!(!Severity::Buffer.passes(LogLevel::Info));
        assert!(Severity::Buffer.passes(LogLevel::Buffer));
        assert!(Severity::Trace.passes(LogLevel::Trace));
        assert!(!Severity::Debug.passes(LogLevel::Trace));
        assert!(Severity::Debug.passes(LogLevel::Debug));
        assert!(Severity::Debug.passes(LogLevel::EnableAll));
    }
}
