//! Core logger types and traits

pub mod config;
pub mod destination;
pub mod emitter;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod metrics;
pub mod router;
pub mod timestamp;

pub use config::LoggerConfig;
pub use destination::{same_destination, Destination, SharedDestination};
pub use emitter::Emitter;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{FatalPayload, Logger, LoggerBuilder, CRITICAL_EXIT_CODE};
pub use message::Concat;
pub use metrics::LoggerMetrics;
pub use router::{Route, RoutingTable, Target, Thresholds};
pub use timestamp::{FormatterConfig, TimestampFormat};
