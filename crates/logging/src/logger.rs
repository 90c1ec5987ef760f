//! crates/logging/src/logger.rs
//! The leveled logger: configuration, gating, formatting, and dispatch.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};

use logging_sink::{ConsoleSink, MakeWriter, SerializedSink, Stdout};

use crate::clock;
use crate::config::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};
use crate::fallback::{FallbackReporter, Stderr};
use crate::levels::{LogLevel, Severity, SinkMode};
use crate::route::Route;

/// Builds the text of one log line.
///
/// Decorated severities produce `"<timestamp>\t[TAG]: <message>"`;
/// [`Severity::Buffer`] produces the message unchanged.
#[must_use]
pub fn format_line(severity: Severity, message: &dyn fmt::Display, timestamp: &str) -> String {
    match severity.tag() {
        Some(tag) => format!("{timestamp}\t{tag}: {message}"),
        None => message.to_string(),
    }
}

/// Leveled logger writing to an append-only file, a console, or both.
///
/// File writes are serialized by an error-checking lock and flushed before
/// the lock is released. Console writes take no logger lock. Level and sink
/// mode are relaxed atomics; changes become visible to other threads without
/// ordering against emissions already in flight.
///
/// The writer types default to a [`File`], standard output, and standard
/// error for failure reports; tests substitute in-memory writers through
/// [`Logger::with_sinks`] and [`Logger::with_fallback`].
pub struct Logger<W = File, C = Stdout, R = Stderr> {
    file: Option<SerializedSink<W>>,
    console: ConsoleSink<C>,
    path: Option<PathBuf>,
    level: AtomicU8,
    sink_mode: AtomicU8,
    fallback: FallbackReporter<R>,
}

impl Logger {
    /// Opens `path` for appending and returns a logger with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::OpenLogFile`] when the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> LoggerResult<Self> {
        let path = path.as_ref();
        let sink =
            SerializedSink::open_append(path).map_err(|error| LoggerError::open_log_file(path, error))?;
        let mut logger = Self::with_sinks(Some(sink), ConsoleSink::stdout());
        logger.path = Some(path.to_path_buf());
        Ok(logger)
    }

    /// Opens the dated default file, e.g. `21_12_2021_logfile.log`, in the
    /// working directory.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::OpenLogFile`] when the file cannot be opened.
    pub fn open_default() -> LoggerResult<Self> {
        Self::open(clock::default_log_file_name())
    }

    /// Opens `path`, or keeps running without a file when that fails.
    ///
    /// The open failure is described on standard error, and later file
    /// writes are dropped and reported the same way.
    #[must_use]
    pub fn open_best_effort(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::open(path).unwrap_or_else(|error| {
            let logger = Self::with_sinks(None, ConsoleSink::stdout());
            logger.fallback.report("log file disabled", &error);
            logger
        })
    }

    /// Opens the configured file (or the dated default) and applies the
    /// configured level and sink mode.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::OpenLogFile`] when the file cannot be opened.
    pub fn from_config(config: &LoggerConfig) -> LoggerResult<Self> {
        let logger = match &config.file {
            Some(path) => Self::open(path)?,
            None => Self::open_default()?,
        };
        logger.apply(config);
        Ok(logger)
    }
}

impl<W, C> Logger<W, C> {
    /// Builds a logger from already constructed sinks.
    ///
    /// `file` may be `None`, in which case file output is dropped and
    /// reported on standard error.
    pub fn with_sinks(file: Option<SerializedSink<W>>, console: ConsoleSink<C>) -> Self {
        Self {
            file,
            console,
            path: None,
            level: AtomicU8::new(LogLevel::default().as_u8()),
            sink_mode: AtomicU8::new(SinkMode::default().as_u8()),
            fallback: FallbackReporter::stderr(),
        }
    }
}

impl<W, C, R> Logger<W, C, R> {
    /// Replaces the reporter that describes write failures.
    #[must_use]
    pub fn with_fallback<F>(self, fallback: FallbackReporter<F>) -> Logger<W, C, F> {
        Logger {
            file: self.file,
            console: self.console,
            path: self.path,
            level: self.level,
            sink_mode: self.sink_mode,
            fallback,
        }
    }

    /// Reporter receiving write failures.
    #[must_use]
    pub const fn fallback(&self) -> &FallbackReporter<R> {
        &self.fallback
    }

    /// Applies the level and sink mode of `config`. The file is unaffected.
    pub fn apply(&self, config: &LoggerConfig) {
        self.set_level(config.level);
        self.set_sink_mode(config.sink_mode);
    }

    /// Current verbosity threshold.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Replaces the verbosity threshold.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Lets every severity through.
    pub fn enable_all(&self) {
        self.set_level(LogLevel::EnableAll);
    }

    /// Suppresses every gated severity. Error, Alarm, and Always still pass.
    pub fn disable_all(&self) {
        self.set_level(LogLevel::Disabled);
    }

    /// Current sink selection.
    #[must_use]
    pub fn sink_mode(&self) -> SinkMode {
        SinkMode::from_u8(self.sink_mode.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Replaces the sink selection.
    pub fn set_sink_mode(&self, mode: SinkMode) {
        self.sink_mode.store(mode.as_u8(), Ordering::Relaxed);
    }

    /// Routes output to the console only.
    pub fn enable_console(&self) {
        self.set_sink_mode(SinkMode::Console);
    }

    /// Routes output to the file, then the console.
    pub fn enable_file_and_console(&self) {
        self.set_sink_mode(SinkMode::FileAndConsole);
    }

    /// Routes output to the file only.
    pub fn enable_file(&self) {
        self.set_sink_mode(SinkMode::File);
    }

    /// Path of the log file, when the logger was opened from one.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the log file is open.
    #[must_use]
    pub const fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Whether `severity` would currently reach any sink.
    #[must_use]
    pub fn would_emit(&self, severity: Severity) -> bool {
        !self.route(severity).is_empty()
    }

    fn route(&self, severity: Severity) -> Route {
        Route::resolve(severity, self.level(), self.sink_mode())
    }
}

impl<W, C, R> Logger<W, C, R>
where
    W: Write,
    C: MakeWriter,
    R: MakeWriter,
{
    /// Emits `message` with `severity`.
    ///
    /// Nothing is returned: write failures are reported on standard error.
    ///
    /// # Panics
    ///
    /// Panics when called while the same thread already holds the file lock,
    /// for example from inside [`Logger::with_file_writer`].
    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        let route = self.route(severity);
        if route.is_empty() {
            return;
        }

        let timestamp = if severity.is_decorated() {
            clock::current_timestamp()
        } else {
            String::new()
        };
        let line = format_line(severity, &message, &timestamp);

        if route.file {
            self.write_file(&line);
        }
        if route.console {
            self.write_console(&line);
        }
    }

    /// Emits an `[ERROR]` line. Never gated by the level.
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    /// Emits an `[ALARM]` line. Never gated by the level.
    pub fn alarm(&self, message: impl fmt::Display) {
        self.log(Severity::Alarm, message);
    }

    /// Emits an `[ALWAYS]` line. Never gated by the level.
    pub fn always(&self, message: impl fmt::Display) {
        self.log(Severity::Always, message);
    }

    /// Emits an `[INFO]` line when the level is at least [`LogLevel::Info`].
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    /// Emits `message` verbatim when the level is at least [`LogLevel::Buffer`].
    pub fn buffer(&self, message: impl fmt::Display) {
        self.log(Severity::Buffer, message);
    }

    /// Emits a `[TRACE]` line when the level is at least [`LogLevel::Trace`].
    pub fn trace(&self, message: impl fmt::Display) {
        self.log(Severity::Trace, message);
    }

    /// Emits a `[DEBUG]` line when the level is at least [`LogLevel::Debug`].
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    /// Runs `f` with the file writer while holding the file lock.
    ///
    /// Returns `None` when no file is open.
    ///
    /// # Panics
    ///
    /// Panics when the current thread already holds the file lock.
    pub fn with_file_writer<T>(&self, f: impl FnOnce(&mut W) -> T) -> Option<T> {
        let sink = self.file.as_ref()?;
        match sink.with_writer(f) {
            Ok(value) => Some(value),
            Err(error) => panic!("log file lock misuse: {error}"),
        }
    }

    fn write_file(&self, line: &str) {
        let Some(sink) = &self.file else {
            self.fallback.report("log file unavailable", &"line dropped");
            return;
        };

        match sink.write_line(line) {
            Ok(()) => {}
            Err(error) if error.is_reentrant() => panic!("log file lock misuse: {error}"),
            Err(error) => self.fallback.report("failed to write log file", &error),
        }
    }

    fn write_console(&self, line: &str) {
        if let Err(error) = self.console.write_line(line) {
            self.fallback.report("failed to write console", &error);
        }
    }
}

impl<W, C, R> fmt::Debug for Logger<W, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("path", &self.path)
            .field("has_file", &self.file.is_some())
            .field("level", &self.level())
            .field("sink_mode", &self.sink_mode())
            .finish_non_exhaustive()
    }
}
