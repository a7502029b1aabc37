//! Timestamp and line formatting
//!
//! Provides the timestamp formats and the per-line formatter used by every
//! routed destination.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::panic::Location;
use std::path::Path;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use logz::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Standard;
/// let timestamp = format.format(&Utc::now());
/// // Output: "2025/01/08 10:30:45"
/// assert_eq!(timestamp.len(), 19);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second: `2025/01/08 10:30:45`
    #[default]
    Standard,

    /// Standard with microseconds: `2025/01/08 10:30:45.123456`
    StandardMicros,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use logz::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Standard => datetime.format("%Y/%m/%d %H:%M:%S").to_string(),
            TimestampFormat::StandardMicros => {
                datetime.format("%Y/%m/%d %H:%M:%S%.6f").to_string()
            }
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// How a record is rendered into a line
///
/// # Examples
///
/// ```
/// use logz::{FormatterConfig, TimestampFormat};
///
/// let config = FormatterConfig::new()
///     .with_timestamp_format(TimestampFormat::Iso8601)
///     .with_include_file_location(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    /// Timestamp format, `None` to omit the timestamp
    pub timestamp_format: Option<TimestampFormat>,
    /// Whether to include the caller's `file:line`
    pub include_file_location: bool,
    /// Keep only the base name of the caller's file
    pub short_file_names: bool,
    /// Escape `\n`, `\r` and `\t` inside messages
    pub escape_control_chars: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timestamp_format: Some(TimestampFormat::default()),
            include_file_location: false,
            short_file_names: true,
            escape_control_chars: false,
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Drop the timestamp from every line
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    #[must_use]
    pub fn with_include_file_location(mut self, include: bool) -> Self {
        self.include_file_location = include;
        self
    }

    #[must_use]
    pub fn with_short_file_names(mut self, short: bool) -> Self {
        self.short_file_names = short;
        self
    }

    #[must_use]
    pub fn with_escape_control_chars(mut self, escape: bool) -> Self {
        self.escape_control_chars = escape;
        self
    }

    /// Render one line: `<timestamp> <prefix><file:line: ><message>\n`
    pub fn render(
        &self,
        now: &DateTime<Utc>,
        prefix: &str,
        location: Option<&Location<'_>>,
        message: &str,
    ) -> String {
        let mut line = String::with_capacity(32 + prefix.len() + message.len());

        if let Some(ref format) = self.timestamp_format {
            line.push_str(&format.format(now));
            line.push(' ');
        }
        line.push_str(prefix);

        match location {
            Some(location) if self.include_file_location => {
                let _ = write!(line, "{}:{}: ", self.file_name(location), location.line());
            }
            _ => line.push(' '),
        }

        if self.escape_control_chars {
            line.push_str(&escape(message));
        } else {
            line.push_str(message);
        }

        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    fn file_name<'a>(&self, location: &'a Location<'a>) -> &'a str {
        let file = location.file();
        if !self.short_file_names {
            return file;
        }
        Path::new(file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(file)
    }
}

fn escape(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
