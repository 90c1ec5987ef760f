//! crates/logging/src/fallback.rs
//! Capped reporting of the logger's own failures.
//!
//! Emission never fails from the caller's point of view. When a sink write or
//! the log file open fails, the failure is described on standard error
//! instead. Reports stop after [`MAX_FALLBACK_REPORTS`] so a permanently
//! broken sink cannot flood the terminal; one notice marks the cut-off.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use logging_sink::MakeWriter;

/// Number of failures described before further reports are suppressed.
pub const MAX_FALLBACK_REPORTS: usize = 8;

/// Standard-error factory used by [`FallbackReporter::stderr`].
pub type Stderr = fn() -> io::Stderr;

/// Writes capped failure reports to a secondary stream.
pub struct FallbackReporter<M = Stderr> {
    make_writer: M,
    reported: AtomicUsize,
}

impl FallbackReporter {
    /// Creates a reporter writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr as Stderr)
    }
}

impl Default for FallbackReporter {
    fn default() -> Self {
        Self::stderr()
    }
}

impl<M> FallbackReporter<M> {
    /// Creates a reporter writing through `make_writer`.
    pub const fn new(make_writer: M) -> Self {
        Self {
            make_writer,
            reported: AtomicUsize::new(0),
        }
    }

    /// Number of failures seen so far, including suppressed ones.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.reported.load(Ordering::Relaxed)
    }
}

impl<M> FallbackReporter<M>
where
    M: MakeWriter,
{
    /// Records a failure, describing it unless the cap has been reached.
    pub fn report(&self, context: &str, error: &dyn fmt::Display) {
        let seen = self.reported.fetch_add(1, Ordering::Relaxed);
        let mut writer = self.make_writer.make_writer();
        // The reporter is the last resort; its own write failures are dropped.
        let _ = match seen {
            n if n < MAX_FALLBACK_REPORTS => writeln!(writer, "filelog: {context}: {error}"),
            MAX_FALLBACK_REPORTS => writeln!(
                writer,
                "filelog: further logging failures suppressed after {MAX_FALLBACK_REPORTS} reports"
            ),
            _ => Ok(()),
        };
    }
}

impl<M> fmt::Debug for FallbackReporter<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackReporter")
            .field("failures", &self.failures())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("capture lock").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capturing() -> (FallbackReporter<impl MakeWriter>, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let handle = Arc::clone(&buffer);
        (FallbackReporter::new(move || Capture(Arc::clone(&handle))), buffer)
    }

    fn text(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().expect("capture lock").clone()).expect("utf-8")
    }

    #[test]
    fn report_names_context_and_error() {
        let (reporter, buffer) = capturing();
        reporter.report("failed to write log file", &"disk full");

        assert_eq!(text(&buffer), "filelog: failed to write log file: disk full\n");
        assert_eq!(reporter.failures(), 1);
    }

    #[test]
    fn reports_stop_after_cap_with_one_notice() {
        let (reporter, buffer) = capturing();
        for attempt in 0..(MAX_FALLBACK_REPORTS + 5) {
            reporter.report("write", &attempt);
        }

        let output = text(&buffer);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), MAX_FALLBACK_REPORTS + 1);
        assert!(lines.last().expect("notice").contains("suppressed"));
        assert_eq!(reporter.failures(), MAX_FALLBACK_REPORTS + 5);
    }

    #[test]
    fn debug_shows_failure_count() {
        let reporter = FallbackReporter::stderr();
        assert!(format!("{reporter:?}").contains("failures: 0"));
    }
}
