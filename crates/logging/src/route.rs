//! crates/logging/src/route.rs
//! Sink selection for one emission.

use crate::levels::{LogLevel, Severity, SinkMode};

/// Destinations chosen for a single line. The file is written before the
/// console when both are set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Append to the log file.
    pub file: bool,
    /// Write to the console.
    pub console: bool,
}

impl Route {
    /// No destination.
    pub const NONE: Self = Self {
        file: false,
        console: false,
    };

    /// Resolves the destinations for `severity` under the given settings.
    ///
    /// Ungated severities still reach the file under [`SinkMode::None`].
    #[must_use]
    pub fn resolve(severity: Severity, level: LogLevel, mode: SinkMode) -> Self {
        if !severity.passes(level) {
            return Self::NONE;
        }

        match mode {
            SinkMode::Console => Self {
                file: false,
                console: true,
            },
            SinkMode::File => Self {
                file: true,
                console: false,
            },
            SinkMode::FileAndConsole => Self {
                file: true,
                console: true,
            },
            SinkMode::None => Self {
                file: severity.threshold().is_none(),
                console: false,
            },
        }
    }

    /// Whether no destination is selected.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        !self.file && !self.console
    }
}
