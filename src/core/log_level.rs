//! Log level definitions

use super::error::LoggerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// Levels are totally ordered (`Trace < Info < Warning < Error < Critical`)
/// and every threshold comparison in the logger is `level >= cutoff`.
///
/// In configuration files levels are written with the same literals that
/// [`FromStr`] accepts, `Critical` being spelled `fatal`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum LogLevel {
    #[default]
    #[serde(rename = "trace")]
    Trace = 0,
    #[serde(rename = "info", alias = "information")]
    Info = 1,
    #[serde(rename = "warning", alias = "warn")]
    Warning = 2,
    #[serde(rename = "error")]
    Error = 3,
    #[serde(rename = "fatal")]
    Critical = 4,
}

impl LogLevel {
    /// All levels, least severe first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "FATAL",
        }
    }

    /// Fixed-width prefix written in front of every line of this level.
    pub fn prefix(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE|",
            LogLevel::Info => " INFO|",
            LogLevel::Warning => " WARN|",
            LogLevel::Error => "ERROR|",
            LogLevel::Critical => "FATAL|",
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// Strict, case-sensitive parsing of the recognised level names.
///
/// Use [`Logger::get_log_level`](crate::Logger::get_log_level) for the lenient
/// variant that falls back to `Trace`.
impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trace" => Ok(LogLevel::Trace),
            "info" | "information" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Critical),
            _ => Err(LoggerError::invalid_level(s)),
        }
    }
}
