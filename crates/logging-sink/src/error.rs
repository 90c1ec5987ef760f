//! crates/logging-sink/src/error.rs
//!
//! Error types for sink writes and lock acquisition.

use std::io;

use thiserror::Error;

/// Errors reported by [`CheckedMutex::lock`](crate::CheckedMutex::lock).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum LockError {
    /// The calling thread already holds the lock.
    #[error("lock is already held by the current thread")]
    Reentrant,
}

/// Errors that can occur while writing a line to a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying writer failed.
    #[error("I/O error: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
    /// The serialization lock could not be acquired.
    #[error("lock error: {0}")]
    Lock(
        #[from]
        #[source]
        LockError,
    ),
}

impl SinkError {
    /// Reports whether the error stems from re-entrant lock acquisition.
    #[must_use]
    pub const fn is_reentrant(&self) -> bool {
        matches!(self, Self::Lock(LockError::Reentrant))
    }
}
