//! crates/logging-sink/src/serialized.rs
//!
//! Lock-protected line sink shared by every thread that logs to a file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::SinkError;
use crate::lock::CheckedMutex;
use crate::sink::LineSink;

/// A [`LineSink`] behind a [`CheckedMutex`].
///
/// Every call to [`write_line`](Self::write_line) holds the lock while the
/// line and its terminator are written and flushed, so writes are totally
/// ordered by lock acquisition and lines never interleave.
#[derive(Debug)]
pub struct SerializedSink<W> {
    inner: CheckedMutex<LineSink<W>>,
}

impl<W> SerializedSink<W> {
    /// Wraps `writer` in a newline-terminated sink behind the lock.
    pub fn new(writer: W) -> Self {
        Self::from_sink(LineSink::new(writer))
    }

    /// Wraps an existing [`LineSink`].
    pub const fn from_sink(sink: LineSink<W>) -> Self {
        Self {
            inner: CheckedMutex::new(sink),
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner.into_inner().into_inner()
    }
}

impl SerializedSink<File> {
    /// Opens `path` for appending, creating it when missing.
    ///
    /// Existing content is never truncated.
    pub fn open_append(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W> SerializedSink<W>
where
    W: Write,
{
    /// Writes one line under the lock and flushes the writer before releasing it.
    pub fn write_line(&self, line: &str) -> Result<(), SinkError> {
        let mut sink = self.inner.lock()?;
        sink.write_line(line)?;
        sink.flush()?;
        Ok(())
    }

    /// Runs `f` with the locked writer.
    ///
    /// Used by callers that need to inspect the destination under the same
    /// ordering guarantee as [`write_line`](Self::write_line).
    pub fn with_writer<R>(&self, f: impl FnOnce(&mut W) -> R) -> Result<R, SinkError> {
        let mut sink = self.inner.lock()?;
        Ok(f(sink.get_mut()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn open_append_preserves_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("app.log");
        fs::write(&path, "earlier\n").expect("seed file");

        let sink = SerializedSink::open_append(&path).expect("open succeeds");
        sink.write_line("later").expect("write succeeds");
        drop(sink);

        assert_eq!(fs::read_to_string(&path).expect("read"), "earlier\nlater\n");
    }

    #[test]
    fn open_append_creates_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fresh.log");

        let sink = SerializedSink::open_append(&path).expect("open succeeds");
        sink.write_line("first").expect("write succeeds");

        assert_eq!(fs::read_to_string(&path).expect("read"), "first\n");
    }

    #[test]
    fn open_append_reports_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("app.log");

        let error = SerializedSink::open_append(&path).expect_err("directory is absent");
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn concurrent_lines_never_interleave() {
        let sink = Arc::new(SerializedSink::new(Vec::new()));
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for seq in 0..50 {
                        sink.write_line(&format!("worker-{worker}-line-{seq}"))
                            .expect("write succeeds");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("thread completes");
        }

        let sink = Arc::into_inner(sink).expect("all clones dropped");
        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 400);
        for worker in 0..8 {
            for seq in 0..50 {
                let marker = format!("worker-{worker}-line-{seq}");
                assert_eq!(lines.iter().filter(|line| **line == marker).count(), 1);
            }
        }
    }

    #[test]
    fn writing_from_inside_the_lock_is_reentrant() {
        let sink = SerializedSink::new(Vec::new());
        let nested = sink
            .with_writer(|_| sink.write_line("nested"))
            .expect("outer lock succeeds");

        let error = nested.expect_err("inner write must fail");
        assert!(error.is_reentrant());
    }
}
