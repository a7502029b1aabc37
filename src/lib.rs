//! # Logz
//!
//! A process-wide leveled logger.
//!
//! ## Features
//!
//! - **Five severities**: trace, info, warning, error and critical, totally ordered
//! - **Split routing**: independent cutoffs for standard output and for a
//!   configured output, resolved once at `init`
//! - **Fan-out destinations**: one record broadcast to many sinks, a failing
//!   sink never affects the others or the caller
//! - **Stack dumps**: a stack trace appended to the configured output at or
//!   above a chosen severity
//! - **Caller location**: optional `file:line` of the code that logged
//!
//! `critical`/`criticalf` terminate the process after logging, unless the
//! logger has not been initialized.
//!
//! ```
//! use logz::destinations::MemoryDestination;
//! use logz::LogLevel;
//! use std::sync::Arc;
//!
//! let out = Arc::new(MemoryDestination::new());
//! logz::init(out.clone(), LogLevel::Error, LogLevel::Info, LogLevel::Critical, false).unwrap();
//!
//! logz::info!("cache warmed in ", 12, "ms");
//! logz::tracef!("dropped {}", "noise");
//!
//! assert!(out.contents().contains(" INFO| cache warmed in 12ms"));
//! assert!(!out.contents().contains("noise"));
//! logz::close().unwrap();
//! ```

pub mod core;
pub mod destinations;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Concat, Destination, Emitter, FormatterConfig, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, LoggerMetrics, Result, SharedDestination, TimestampFormat,
    };
    pub use crate::destinations::{compose, FanOutWriter, MemoryDestination, StdoutDestination};
}

pub use crate::core::{
    same_destination, Concat, Destination, Emitter, FatalPayload, FormatterConfig, LogLevel,
    Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Route, RoutingTable,
    SharedDestination, Target, Thresholds, TimestampFormat, CRITICAL_EXIT_CODE,
};
pub use crate::destinations::{compose, FanOutWriter};
pub use crate::global::{
    close, critical, criticalf, error, errorf, flush, get_log_level, info, infof, init,
    init_with_config, is_initialized, log, logf, logger, metrics, record_fatal, run, trace,
    tracef, warning, warningf,
};
