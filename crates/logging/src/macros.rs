//! crates/logging/src/macros.rs
//! Format-string emission macros.
//!
//! Each macro formats its arguments lazily with [`format_args!`] and routes
//! the result to the shared logger, or to an explicit one given with a
//! leading `logger: <expr>,`.

/// Emit an `[ERROR]` line.
///
/// # Example
/// ```ignore
/// log_error!("failed to read {}", path.display());
/// log_error!(logger: &logger, "exit code {code}");
/// ```
#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::shared().error(::std::format_args!($($arg)+))
    };
}

/// Emit an `[ALARM]` line.
#[macro_export]
macro_rules! log_alarm {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.alarm(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::shared().alarm(::std::format_args!($($arg)+))
    };
}

/// Emit an `[ALWAYS]` line.
#[macro_export]
macro_rules! log_always {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.always(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::shared().always(::std::format_args!($($arg)+))
    };
}

/// Emit an `[INFO]` line.
#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::shared().info(::std::format_args!($($arg)+))
    };
}

/// Emit an undecorated buffer line.
///
/// # Example
/// ```ignore
/// log_buffer!("####### start #######");
/// ```
#[macro_export]
macro_rules! log_buffer {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.buffer(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::shared().buffer(::std::format_args!($($arg)+))
    };
}

/// Emit a `[TRACE]` line.
#[macro_export]
macro_rules! log_trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.trace(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::shared().trace(::std::format_args!($($arg)+))
    };
}

/// Emit a `[DEBUG]` line.
#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::shared().debug(::std::format_args!($($arg)+))
    };
}

/// Seed the shared logger's file name and return the shared logger.
///
/// Has no effect on the file once the shared logger exists.
#[macro_export]
macro_rules! log_file {
    ($path:expr) => {
        $crate::set_log_file_name($path)
    };
}
