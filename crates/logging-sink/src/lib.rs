#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the write side of the `filelog` workspace: a
//! [`LineSink`] that streams finished log lines into any
//! [`std::io::Write`] implementor, a [`SerializedSink`] that puts a line sink
//! behind an error-checking lock for the shared log file, and a
//! [`ConsoleSink`] for unsynchronized console output.
//!
//! # Design
//!
//! Formatting happens before a sink is reached: sinks only ever see the final
//! text of a line. [`LineSink`] keeps a scratch buffer so the line and its
//! terminator reach the writer with one `write_all`. [`SerializedSink`] holds
//! its [`CheckedMutex`] for the write and the flush, which totally orders file
//! writes by lock acquisition. [`ConsoleSink`] takes no lock at all.
//!
//! # Invariants
//!
//! - A line written through [`SerializedSink::write_line`] is flushed before
//!   the lock is released.
//! - [`CheckedMutex`] never deadlocks on re-entrant acquisition; the second
//!   attempt from the owning thread fails with [`LockError::Reentrant`].
//! - Every record occupies exactly one newline-terminated line.
//!
//! # Errors
//!
//! Writes surface [`std::io::Error`] values from the underlying writer, wrapped
//! in [`SinkError`] when the lock is involved.
//!
//! # Examples
//!
//! ```
//! use logging_sink::SerializedSink;
//!
//! let sink = SerializedSink::new(Vec::new());
//! sink.write_line("01.02.2024 10:00:00\t[INFO]: started")?;
//! sink.write_line("raw bytes")?;
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "01.02.2024 10:00:00\t[INFO]: started\nraw bytes\n");
//! # Ok::<(), logging_sink::SinkError>(())
//! ```

mod console;
mod error;
mod lock;
mod serialized;
mod sink;

pub use console::{ConsoleSink, MakeWriter, Stdout};
pub use error::{LockError, SinkError};
pub use lock::{CheckedGuard, CheckedMutex};
pub use serialized::SerializedSink;
pub use sink::LineSink;
