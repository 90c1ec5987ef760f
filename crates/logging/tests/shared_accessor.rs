//! Integration tests for the process-wide logger.
//!
//! All tests in this binary share one instance, so they run serially and
//! seed it through the same fixture.

use std::fs;
use std::path::PathBuf;
use std::ptr;
use std::sync::OnceLock;

use logging::{LogLevel, Logger, SinkMode, log_alarm, log_buffer, log_file, log_info};
use serial_test::serial;
use tempfile::TempDir;

static DIR: OnceLock<TempDir> = OnceLock::new();

fn first_path() -> PathBuf {
    DIR.get_or_init(|| tempfile::tempdir().unwrap())
        .path()
        .join("first.log")
}

fn second_path() -> PathBuf {
    DIR.get_or_init(|| tempfile::tempdir().unwrap())
        .path()
        .join("second.log")
}

fn seeded() -> &'static Logger {
    let logger = logging::set_log_file_name(first_path());
    logger.set_level(LogLevel::Trace);
    logger.set_sink_mode(SinkMode::File);
    logger
}

/// The first file name wins; later names are ignored.
#[test]
#[serial]
fn first_file_name_wins() {
    let first = seeded();
    let second = logging::set_log_file_name(second_path());

    assert!(ptr::eq(first, second));
    assert_eq!(second.file_path(), Some(first_path().as_path()));
    assert!(!second_path().exists());
}

/// Every accessor returns the same instance once it exists.
#[test]
#[serial]
fn accessors_share_one_instance() {
    let logger = seeded();

    assert!(ptr::eq(logger, logging::shared()));
    assert!(ptr::eq(logger, logging::try_shared().unwrap()));
    assert!(ptr::eq(logger, log_file!(second_path())));
    assert!(ptr::eq(
        logger,
        logging::shared_with_config(&logging::LoggerConfig::default().with_level(LogLevel::Debug))
    ));
    assert_eq!(logger.level(), LogLevel::Trace);
}

/// Macros without an explicit logger write to the shared file.
#[test]
#[serial]
fn macros_write_to_shared_file() {
    let logger = seeded();
    let before = fs::read_to_string(first_path()).unwrap_or_default();

    log_alarm!("shared alarm {}", 1);
    log_info!("shared info");
    log_buffer!("shared buffer");

    let after = fs::read_to_string(first_path()).unwrap();
    let added: Vec<_> = after[before.len()..].lines().collect();
    assert_eq!(added.len(), 3);
    assert!(added[0].ends_with("\t[ALARM]: shared alarm 1"));
    assert!(added[1].ends_with("\t[INFO]: shared info"));
    assert_eq!(added[2], "shared buffer");
    assert!(logger.has_file());
}

/// Settings changed through one reference are seen through another.
#[test]
#[serial]
fn configuration_is_shared() {
    let logger = seeded();
    logging::shared().disable_all();

    assert_eq!(logger.level(), LogLevel::Disabled);
    let before = fs::read_to_string(first_path()).unwrap_or_default();
    log_info!("dropped");
    let after = fs::read_to_string(first_path()).unwrap_or_default();
    assert_eq!(before, after);
}
