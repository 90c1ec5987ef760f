//! crates/logging/src/tracing_bridge.rs
//! Bridge from the tracing crate into the leveled logger.
//!
//! [`LoggerLayer`] is a `tracing-subscriber` layer that turns every tracing
//! event into one log line, so code instrumented with the standard `error!`
//! through `trace!` macros ends up in the same file as direct logger calls.
//!
//! | tracing level | severity |
//! |---|---|
//! | `ERROR` | [`Severity::Error`] |
//! | `WARN` | [`Severity::Alarm`] |
//! | `INFO` | [`Severity::Info`] |
//! | `DEBUG` | [`Severity::Debug`] |
//! | `TRACE` | [`Severity::Trace`] |
//!
//! The logger's own level and sink mode still decide whether and where the
//! line is written.
//!
//! ```rust,ignore
//! logging::init_tracing(logging::shared())?;
//! tracing::warn!(peer = "10.0.0.7", "connection reset");
//! // 21.12.2021 20:20:00	[ALARM]: connection reset peer=10.0.0.7
//! ```

use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::Arc;

use logging_sink::MakeWriter;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::util::TryInitError;

use crate::levels::Severity;
use crate::logger::Logger;

/// Destination for bridged events.
pub trait Emit: Send + Sync {
    /// Writes `message` with `severity`.
    fn emit(&self, severity: Severity, message: &str);

    /// Whether `severity` would currently be written anywhere.
    fn would_emit(&self, severity: Severity) -> bool;
}

impl<W, C, R> Emit for Logger<W, C, R>
where
    W: Write + Send,
    C: MakeWriter,
    R: MakeWriter,
{
    fn emit(&self, severity: Severity, message: &str) {
        self.log(severity, message);
    }

    fn would_emit(&self, severity: Severity) -> bool {
        Self::would_emit(self, severity)
    }
}

impl<T: Emit + ?Sized> Emit for &T {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }

    fn would_emit(&self, severity: Severity) -> bool {
        (**self).would_emit(severity)
    }
}

impl<T: Emit + ?Sized> Emit for Arc<T> {
    fn emit(&self, severity: Severity, message: &str) {
        (**self).emit(severity, message);
    }

    fn would_emit(&self, severity: Severity) -> bool {
        (**self).would_emit(severity)
    }
}

/// Maps a tracing level to the severity it is logged with.
#[must_use]
pub const fn severity_for(level: Level) -> Severity {
    match level {
        Level::ERROR => Severity::Error,
        Level::WARN => Severity::Alarm,
        Level::INFO => Severity::Info,
        Level::DEBUG => Severity::Debug,
        Level::TRACE => Severity::Trace,
    }
}

/// A tracing layer that writes events through an [`Emit`] destination.
#[derive(Debug, Clone)]
pub struct LoggerLayer<E> {
    emitter: E,
}

impl<E> LoggerLayer<E> {
    /// Creates a layer writing to `emitter`.
    pub const fn new(emitter: E) -> Self {
        Self { emitter }
    }
}

impl<S, E> Layer<S> for LoggerLayer<E>
where
    S: Subscriber,
    E: Emit + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = severity_for(*event.metadata().level());
        if !self.emitter.would_emit(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.emitter.emit(severity, &visitor.finish());
    }
}

/// Collects the `message` field followed by the remaining fields as
/// `name=value` pairs.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, field: &Field, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={value}", field.name());
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_owned();
        } else {
            self.push_field(field, format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field, format_args!("{value:?}"));
        }
    }
}

/// Installs a global subscriber that forwards every event to `emitter`.
///
/// # Errors
///
/// Fails when a global subscriber has already been installed.
///
/// ```rust,ignore
/// logging::init_tracing(logging::shared())?;
/// tracing::info!("ready");
/// ```
pub fn init_tracing<E>(emitter: E) -> Result<(), TryInitError>
where
    E: Emit + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(LoggerLayer::new(emitter))
        .try_init()
}
