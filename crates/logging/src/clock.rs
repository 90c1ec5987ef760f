//! crates/logging/src/clock.rs
//! Local date and timestamp strings for log file names and line prefixes.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// `DD.MM.YYYY`, used for the generated log file name.
pub(crate) const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[day padding:zero].[month padding:zero].[year]");

/// `DD.MM.YYYY HH:MM:SS`, prefixed to every decorated line.
pub(crate) const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[day padding:zero].[month padding:zero].[year] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Suffix appended to the date when generating the default file name.
pub const DEFAULT_FILE_SUFFIX: &str = "_logfile.log";

/// Current local time, falling back to UTC when the local offset is unknown.
fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn render(moment: OffsetDateTime, format: &[FormatItem<'_>]) -> String {
    // The descriptions contain only numeric components, which always format.
    moment.format(format).unwrap_or_default()
}

/// Formats `moment` as `DD.MM.YYYY`.
#[must_use]
pub fn format_date(moment: OffsetDateTime) -> String {
    render(moment, DATE_FORMAT)
}

/// Formats `moment` as `DD.MM.YYYY HH:MM:SS`.
#[must_use]
pub fn format_timestamp(moment: OffsetDateTime) -> String {
    render(moment, TIMESTAMP_FORMAT)
}

/// Returns the current local date as `DD.MM.YYYY`.
#[must_use]
pub fn current_date() -> String {
    format_date(now())
}

/// Returns the current local date and time as `DD.MM.YYYY HH:MM:SS`.
#[must_use]
pub fn current_timestamp() -> String {
    format_timestamp(now())
}

/// Builds the log file name for `date`: separators become `_` and
/// [`DEFAULT_FILE_SUFFIX`] is appended.
#[must_use]
pub fn log_file_name_for(date: &str) -> String {
    let mut name: String = date
        .chars()
        .map(|ch| if ch == '.' || ch == ':' { '_' } else { ch })
        .collect();
    name.push_str(DEFAULT_FILE_SUFFIX);
    name
}

/// Returns the default log file name for today, e.g. `21_12_2021_logfile.log`.
#[must_use]
pub fn default_log_file_name() -> String {
    log_file_name_for(&current_date())
}
