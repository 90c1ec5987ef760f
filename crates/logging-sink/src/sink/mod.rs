//! crates/logging-sink/src/sink/mod.rs
//! Newline-terminated line sink over any writer.

use std::fmt;

mod writing;

/// Writes finished log lines, each followed by `\n`, into an
/// [`std::io::Write`] target.
///
/// The sink owns the writer together with a reusable scratch buffer. Each
/// call to [`write_line`](Self::write_line) assembles the line and its
/// terminator in the scratch buffer and hands it to the writer with a single
/// `write_all`, so appenders sharing a file descriptor never observe a record
/// split from its newline.
///
/// ```
/// use logging_sink::LineSink;
///
/// let mut sink = LineSink::new(Vec::new());
/// sink.write_line("first")?;
/// sink.write_line("second")?;
///
/// assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct LineSink<W> {
    writer: W,
    scratch: Vec<u8>,
}

impl<W> LineSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            scratch: Vec::new(),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Default for LineSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W> fmt::Debug for LineSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineSink")
            .field("writer", &self.writer)
            .finish_non_exhaustive()
    }
}
