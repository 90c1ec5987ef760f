//! crates/logging-sink/src/console.rs
//!
//! Unsynchronized console output.
//!
//! Console writes take no logger lock. Each line is assembled with its
//! terminator and handed to a freshly made writer in one `write_all`, which
//! for standard output means the stream's own per-call lock is the only
//! serialization.

use std::io::{self, Write};

/// Produces the writer a [`ConsoleSink`] writes each line to.
///
/// Implemented for any `Fn() -> W` closure or function, so
/// [`io::stdout`] and [`io::stderr`] can be used directly.
pub trait MakeWriter: Send + Sync {
    /// Writer handed out for a single line.
    type Writer: Write;

    /// Returns a writer for the next line.
    fn make_writer(&self) -> Self::Writer;
}

impl<F, W> MakeWriter for F
where
    F: Fn() -> W + Send + Sync,
    W: Write,
{
    type Writer = W;

    fn make_writer(&self) -> W {
        self()
    }
}

/// Standard-output factory used by [`ConsoleSink::stdout`].
pub type Stdout = fn() -> io::Stdout;

/// Console destination for finished log lines.
#[derive(Clone, Debug)]
pub struct ConsoleSink<M = Stdout> {
    make_writer: M,
}

impl ConsoleSink {
    /// Creates a sink writing to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout as Stdout)
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<M> ConsoleSink<M> {
    /// Creates a sink that obtains a writer from `make_writer` for every line.
    pub const fn new(make_writer: M) -> Self {
        Self { make_writer }
    }
}

impl<M> ConsoleSink<M>
where
    M: MakeWriter,
{
    /// Writes `line` followed by a newline and flushes the writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut buffer = String::with_capacity(line.len() + 1);
        buffer.push_str(line);
        buffer.push('\n');

        let mut writer = self.make_writer.make_writer();
        writer.write_all(buffer.as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Writer that appends into a shared buffer.
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("buffer lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_line_appends_newline() {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&buffer);
        let sink = ConsoleSink::new(move || SharedBuffer(Arc::clone(&captured)));

        sink.write_line("01.02.2024 10:00:00\t[ERROR]: boom")
            .expect("write succeeds");
        sink.write_line("raw").expect("write succeeds");

        let output = buffer.lock().expect("buffer lock").clone();
        assert_eq!(output, b"01.02.2024 10:00:00\t[ERROR]: boom\nraw\n".to_vec());
    }

    #[test]
    fn write_errors_are_returned() {
        let sink = ConsoleSink::new(|| FailingWriter);
        let error = sink.write_line("lost").expect_err("writer fails");
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn stdout_sink_accepts_lines() {
        ConsoleSink::stdout()
            .write_line("console sink smoke test")
            .expect("stdout is writable under the test harness");
    }
}
