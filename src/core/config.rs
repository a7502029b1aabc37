//! Logger configuration

use super::error::Result;
use super::log_level::LogLevel;
use super::router::Thresholds;
use super::timestamp::FormatterConfig;
use serde::{Deserialize, Serialize};

/// Everything `init` needs besides the output destination.
///
/// # Example
///
/// ```
/// use logz::{LogLevel, LoggerConfig};
///
/// let config = LoggerConfig::from_json_str(r#"{
///     "stdout_level": "info",
///     "output_level": "warn",
///     "stack_level": "error",
///     "include_location": true
/// }"#).unwrap();
///
/// assert_eq!(config.output_level, LogLevel::Warning);
/// assert!(config.include_location);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Cutoff for standard output
    pub stdout_level: LogLevel,
    /// Cutoff for the configured output
    pub output_level: LogLevel,
    /// Cutoff for stack dumps
    pub stack_level: LogLevel,
    /// Include the caller's `file:line` in every line
    pub include_location: bool,
    pub formatter: FormatterConfig,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            stdout_level: LogLevel::Info,
            output_level: LogLevel::Trace,
            stack_level: LogLevel::Critical,
            include_location: false,
            formatter: FormatterConfig::default(),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_stdout_level(mut self, level: LogLevel) -> Self {
        self.stdout_level = level;
        self
    }

    #[must_use]
    pub fn with_output_level(mut self, level: LogLevel) -> Self {
        self.output_level = level;
        self
    }

    #[must_use]
    pub fn with_stack_level(mut self, level: LogLevel) -> Self {
        self.stack_level = level;
        self
    }

    #[must_use]
    pub fn with_include_location(mut self, include: bool) -> Self {
        self.include_location = include;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.stdout_level, self.output_level, self.stack_level)
    }

    /// Formatter with the location flag applied
    pub fn effective_formatter(&self) -> FormatterConfig {
        self.formatter
            .clone()
            .with_include_file_location(self.include_location)
    }
}
