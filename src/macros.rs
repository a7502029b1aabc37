//! Logging macros over the process-wide logger.
//!
//! Each severity has two forms:
//!
//! - `info!(a, b, c)` takes any number of displayable values and writes
//!   them back to back, like a print of the value list;
//! - `infof!("fmt", args..)` takes a format string, like `format!`.
//!
//! Both capture the caller's location for `file:line` output.
//!
//! # Examples
//!
//! ```
//! use logz::{info, infof};
//!
//! let port = 8080;
//! info!("Server listening on port ", port);
//! infof!("Server listening on port {}", port);
//! ```

/// Log displayable values at an explicit level.
///
/// ```
/// use logz::{log, LogLevel};
/// log!(LogLevel::Info, "Simple message");
/// log!(LogLevel::Error, "Error code: ", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($value:expr),+ $(,)?) => {
        $crate::global::log(
            $level,
            $crate::Concat(&[$(&$value as &dyn ::std::fmt::Display),+]),
        )
    };
}

/// Log a formatted message at an explicit level.
///
/// ```
/// use logz::{logf, LogLevel};
/// logf!(LogLevel::Warning, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! logf {
    ($level:expr, $($arg:tt)+) => {
        $crate::global::logf($level, ::std::format_args!($($arg)+))
    };
}

/// Log values at Trace.
#[macro_export]
macro_rules! trace {
    ($($value:expr),+ $(,)?) => {
        $crate::log!($crate::LogLevel::Trace, $($value),+)
    };
}

/// Log a formatted message at Trace.
#[macro_export]
macro_rules! tracef {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log values at Info.
#[macro_export]
macro_rules! info {
    ($($value:expr),+ $(,)?) => {
        $crate::log!($crate::LogLevel::Info, $($value),+)
    };
}

/// Log a formatted message at Info.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Info, $($arg)+)
    };
}

/// Log values at Warning.
#[macro_export]
macro_rules! warning {
    ($($value:expr),+ $(,)?) => {
        $crate::log!($crate::LogLevel::Warning, $($value),+)
    };
}

/// Log a formatted message at Warning.
#[macro_export]
macro_rules! warningf {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log values at Error.
#[macro_export]
macro_rules! error {
    ($($value:expr),+ $(,)?) => {
        $crate::log!($crate::LogLevel::Error, $($value),+)
    };
}

/// Log a formatted message at Error.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::logf!($crate::LogLevel::Error, $($arg)+)
    };
}

/// Log values at Critical, then terminate the process.
///
/// **Does not return once the logger is initialized.**
#[macro_export]
macro_rules! critical {
    ($($value:expr),+ $(,)?) => {
        $crate::global::critical(
            $crate::Concat(&[$(&$value as &dyn ::std::fmt::Display),+]),
        )
    };
}

/// Log a formatted message at Critical, then terminate the process.
///
/// **Does not return once the logger is initialized.**
#[macro_export]
macro_rules! criticalf {
    ($($arg:tt)+) => {
        $crate::global::criticalf(::std::format_args!($($arg)+))
    };
}
