//! Capability trait for code that logs through an injected logger

use super::log_level::LogLevel;
use super::logger::Logger;
use std::fmt;

/// The logging surface a component needs, without tying it to the global
/// instance.
///
/// # Example
///
/// ```
/// use logz::destinations::MemoryDestination;
/// use logz::{Emitter, LogLevel, Logger};
/// use std::sync::Arc;
///
/// fn process(items: &[u32], log: &dyn Emitter) {
///     log.info(&format_args!("processing {} items", items.len()));
/// }
///
/// let out = Arc::new(MemoryDestination::new());
/// let logger = Logger::new();
/// logger
///     .init(out.clone(), LogLevel::Critical, LogLevel::Trace, LogLevel::Critical, false)
///     .unwrap();
///
/// process(&[1, 2, 3], &logger);
/// assert!(out.contents().contains("processing 3 items"));
/// ```
pub trait Emitter: Send + Sync {
    #[track_caller]
    fn log(&self, level: LogLevel, message: &dyn fmt::Display);

    /// Log at Critical and terminate the process, unless the logger is not
    /// initialized.
    #[track_caller]
    fn critical(&self, message: &dyn fmt::Display);

    #[track_caller]
    fn trace(&self, message: &dyn fmt::Display) {
        self.log(LogLevel::Trace, message);
    }

    #[track_caller]
    fn info(&self, message: &dyn fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[track_caller]
    fn warning(&self, message: &dyn fmt::Display) {
        self.log(LogLevel::Warning, message);
    }

    #[track_caller]
    fn error(&self, message: &dyn fmt::Display) {
        self.log(LogLevel::Error, message);
    }
}

impl Emitter for Logger {
    #[track_caller]
    fn log(&self, level: LogLevel, message: &dyn fmt::Display) {
        Logger::log(self, level, message);
    }

    #[track_caller]
    fn critical(&self, message: &dyn fmt::Display) {
        Logger::critical(self, message);
    }
}
