//! crates/logging-sink/src/sink/writing.rs
//! Line assembly and flushing for [`LineSink`].

use super::LineSink;
use std::io::{self, Write};

impl<W> LineSink<W>
where
    W: Write,
{
    /// Writes `line` followed by a newline in one `write_all`.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.scratch.clear();
        self.scratch.reserve(line.len() + 1);
        self.scratch.extend_from_slice(line.as_bytes());
        self.scratch.push(b'\n');
        self.writer.write_all(&self.scratch)
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
