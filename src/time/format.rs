//! Pattern-driven timestamp parsing and rendering.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::error::{Error, Result};
use crate::time::timestamp::Timestamp;

/// Failure to parse a string against a timestamp pattern.
///
/// Raised both for text that does not match the pattern's shape and for text
/// that names an impossible calendar value (day 31 in a 30-day month, hour
/// 25, and so on). Parsing is strict: the whole input must be consumed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{text}' does not match the date/time pattern '{pattern}'")]
pub struct ParseTimestampError {
    pub text: String,
    pub pattern: String,
}

/// Bidirectional conversion between timestamps and strings.
///
/// The pattern is supplied once at construction, validated eagerly, and
/// reused for every call. Patterns use strftime syntax (`%d/%m/%Y`,
/// `%H:%M:%S`, ...). A formatter may hold a combined date-and-time pattern
/// or a date-only/time-only pattern; parsing requires the pattern to
/// determine a full date and time, while formatting works with any pattern.
#[derive(Debug, Clone)]
pub struct TimestampFormatter {
    pattern: String,
}

impl TimestampFormatter {
    /// Creates a formatter for the given strftime pattern.
    ///
    /// Fails with [`Error::InvalidPattern`] when the pattern itself is
    /// malformed, so a bad configuration is rejected before any data is read.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let malformed = StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        if malformed {
            return Err(Error::InvalidPattern { pattern });
        }
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parses a formatted string into a timestamp.
    pub fn parse(&self, text: &str) -> std::result::Result<Timestamp, ParseTimestampError> {
        NaiveDateTime::parse_from_str(text, &self.pattern)
            .map(Timestamp::from_naive)
            .map_err(|_| ParseTimestampError {
                text: text.to_string(),
                pattern: self.pattern.clone(),
            })
    }

    /// Formats a timestamp into a string following the pattern.
    pub fn format(&self, timestamp: Timestamp) -> String {
        timestamp.as_naive().format(&self.pattern).to_string()
    }
}
