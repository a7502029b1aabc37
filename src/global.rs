//! Process-wide logger
//!
//! Free functions over a single lazily created [`Logger`]. The usual shape
//! of a program is:
//!
//! ```no_run
//! use logz::destinations::FileDestination;
//! use logz::LogLevel;
//! use std::sync::Arc;
//!
//! fn main() -> logz::Result<()> {
//!     let out = Arc::new(FileDestination::new("app.log")?);
//!     logz::init(out, LogLevel::Info, LogLevel::Trace, LogLevel::Error, true)?;
//!
//!     logz::run(|| {
//!         logz::info!("listening on port ", 8080);
//!         logz::tracef!("{} workers", 4);
//!     })
//! }
//! ```
//!
//! Initialization is not synchronised with emission beyond the logger's own
//! locking: call `init` before spawning threads that log and `close` after
//! they finish.

use crate::core::{FatalPayload, LogLevel, Logger, LoggerConfig, LoggerMetrics, Result, SharedDestination};
use std::fmt;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created uninitialized on first use
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// See [`Logger::init`]
pub fn init(
    out: SharedDestination,
    stdout_level: LogLevel,
    output_level: LogLevel,
    stack_level: LogLevel,
    include_location: bool,
) -> Result<()> {
    logger().init(out, stdout_level, output_level, stack_level, include_location)
}

/// See [`Logger::init_with_config`]
pub fn init_with_config(out: SharedDestination, config: &LoggerConfig) -> Result<()> {
    logger().init_with_config(out, config)
}

/// See [`Logger::close`]
#[track_caller]
pub fn close() -> Result<()> {
    logger().close()
}

/// See [`Logger::run`]
#[track_caller]
pub fn run<F, R>(f: F) -> Result<R>
where
    F: FnOnce() -> R,
{
    logger().run(f)
}

pub fn record_fatal(payload: FatalPayload) {
    logger().record_fatal(payload);
}

pub fn is_initialized() -> bool {
    logger().is_initialized()
}

/// See [`Logger::get_log_level`]
pub fn get_log_level(name: &str) -> LogLevel {
    logger().get_log_level(name)
}

pub fn metrics() -> &'static LoggerMetrics {
    logger().metrics()
}

pub fn flush() -> Result<()> {
    logger().flush()
}

#[track_caller]
pub fn log(level: LogLevel, message: impl fmt::Display) {
    logger().log(level, message);
}

#[track_caller]
pub fn logf(level: LogLevel, args: fmt::Arguments<'_>) {
    logger().logf(level, args);
}

#[track_caller]
pub fn trace(message: impl fmt::Display) {
    logger().trace(message);
}

#[track_caller]
pub fn tracef(args: fmt::Arguments<'_>) {
    logger().tracef(args);
}

#[track_caller]
pub fn info(message: impl fmt::Display) {
    logger().info(message);
}

#[track_caller]
pub fn infof(args: fmt::Arguments<'_>) {
    logger().infof(args);
}

#[track_caller]
pub fn warning(message: impl fmt::Display) {
    logger().warning(message);
}

#[track_caller]
pub fn warningf(args: fmt::Arguments<'_>) {
    logger().warningf(args);
}

#[track_caller]
pub fn error(message: impl fmt::Display) {
    logger().error(message);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    logger().errorf(args);
}

/// Log at Critical and terminate the process. Returns only when the logger
/// is not initialized.
#[track_caller]
pub fn critical(message: impl fmt::Display) {
    logger().critical(message);
}

/// Formatted variant of [`critical`]
#[track_caller]
pub fn criticalf(args: fmt::Arguments<'_>) {
    logger().criticalf(args);
}
