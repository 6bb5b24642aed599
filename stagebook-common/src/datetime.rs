//! Date parsing and display presets
//!
//! Show start times are stored as timestamps and only turned into text at
//! render time. Two named presets exist, both in a fixed English locale:
//!
//! | Preset | Example |
//! |--------|---------|
//! | `full` | `Tuesday May, 21, 2019 at 9:30PM` |
//! | `medium` | `Tue May 21, 2019 9:30PM` |

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Accepted naive date/time layouts, tried in order
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const FULL_PATTERN: &str = "%A %B, %-d, %Y at %-I:%M%p";
const MEDIUM_PATTERN: &str = "%a %b %d, %Y %-I:%M%p";

/// Named display preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// Weekday, month, day, year and time
    Full,
    /// Abbreviated weekday and month, day, year and time
    #[default]
    Medium,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            DateFormat::Full => FULL_PATTERN,
            DateFormat::Medium => MEDIUM_PATTERN,
        }
    }
}

impl FromStr for DateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(DateFormat::Full),
            "medium" => Ok(DateFormat::Medium),
            other => Err(Error::InvalidInput(format!("Unknown date format: {}", other))),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Full => write!(f, "full"),
            DateFormat::Medium => write!(f, "medium"),
        }
    }
}

/// Parse a date/time value as submitted by a form or read back as text
///
/// RFC 3339 values keep their wall-clock time; the offset is dropped.
/// A bare date parses as midnight.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::InvalidInput("Empty date/time".to_string()));
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_local());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    Err(Error::InvalidInput(format!("Unrecognized date/time: {}", value)))
}

/// Render an already-parsed value with a preset
pub fn render_datetime(value: &NaiveDateTime, format: DateFormat) -> String {
    value.format(format.pattern()).to_string()
}

/// Parse `value`, then render it with a preset
pub fn format_datetime(value: &str, format: DateFormat) -> Result<String> {
    parse_datetime(value).map(|parsed| render_datetime(&parsed, format))
}

/// Value for an HTML `datetime-local` input
pub fn to_input_value(value: &NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M").to_string()
}

/// Current local time truncated to whole seconds
///
/// Stored timestamps carry no sub-second part, so comparisons against "now"
/// use the same precision.
pub fn now_local() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
