#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled logger that writes finished lines to an
//! append-only log file, the console, or both. A process-wide instance is
//! available through [`shared`] and the `log_*!` macros; entry points and
//! tests can also build a [`Logger`] explicitly and pass it by reference.
//!
//! # Design
//!
//! Seven [`Severity`] values feed one emission path. Each severity is either
//! ungated ([`Severity::Error`], [`Severity::Alarm`], [`Severity::Always`])
//! or gated by the active [`LogLevel`]. The active [`SinkMode`] then picks
//! the destinations through [`Route::resolve`]. File writes go through a
//! [`SerializedSink`] whose error-checking lock orders every line; console
//! writes take no logger lock.
//!
//! # Invariants
//!
//! - Decorated lines read `DD.MM.YYYY HH:MM:SS<TAB>[TAG]: message`.
//! - [`Severity::Buffer`] lines are the message verbatim.
//! - When both sinks are selected the file write completes first.
//! - The shared instance is created once; the first file name wins.
//!
//! # Errors
//!
//! Emission never returns an error. Failed writes are described on standard
//! error by a capped [`FallbackReporter`]. Explicit constructors such as
//! [`Logger::open`] return [`LoggerError`].
//!
//! # Examples
//!
//! ```
//! use logging::{ConsoleSink, Logger, SerializedSink, Severity};
//!
//! let logger = Logger::with_sinks(
//!     Some(SerializedSink::new(Vec::new())),
//!     ConsoleSink::new(std::io::sink as fn() -> std::io::Sink),
//! );
//! logger.info("service started");
//! logger.debug("dropped at the default level");
//! assert!(!logger.would_emit(Severity::Debug));
//!
//! let text = logger
//!     .with_file_writer(|file| String::from_utf8(file.clone()).unwrap())
//!     .unwrap();
//! assert!(text.ends_with("\t[INFO]: service started\n"));
//! ```

#[macro_use]
mod macros;

pub mod clock;
mod config;
mod error;
mod fallback;
mod levels;
mod logger;
mod route;
mod shared;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{ConfigError, FILE_ENV, LEVEL_ENV, LoggerConfig, SINK_ENV};
pub use error::{LoggerError, LoggerResult};
pub use fallback::{FallbackReporter, MAX_FALLBACK_REPORTS, Stderr};
pub use levels::{LogLevel, ParseLevelError, ParseSinkModeError, Severity, SinkMode};
pub use logger::{Logger, format_line};
pub use logging_sink::{ConsoleSink, LockError, MakeWriter, SerializedSink, SinkError, Stdout};
pub use route::Route;
pub use shared::{set_log_file_name, shared, shared_with_config, try_shared};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{Emit, LoggerLayer, init_tracing, severity_for};
