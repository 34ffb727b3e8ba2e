//! Error types for the record ingestion and aggregation pipeline.

use thiserror::Error;

use crate::time::format::ParseTimestampError;
use crate::time::timestamp::{Timestamp, Unit};

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading, aggregating, or writing data.
///
/// Every data error carries the 1-based line number it originated from and,
/// where applicable, the 1-based column and the offending text, so callers
/// can report the exact location of the problem. Malformed input is terminal
/// for the current run; none of these conditions are retried.
#[derive(Error, Debug)]
pub enum Error {
    /// A row's field count disagrees with the count established by the first
    /// non-blank row of the file.
    #[error("row {line} has {actual} columns, but {expected} were expected")]
    RowSize {
        line: u64,
        expected: usize,
        actual: usize,
    },

    /// A row is too short to contain the date/time columns plus at least one
    /// value column.
    #[error("row {line} must have at least {required} values, but has only {actual}")]
    ShortRecord {
        line: u64,
        required: usize,
        actual: usize,
    },

    /// A timestamp field does not match the configured date/time pattern, or
    /// names an impossible calendar date.
    #[error("row {line}: {source}")]
    InvalidTimestamp {
        line: u64,
        source: ParseTimestampError,
    },

    /// A non-ignored field is not parseable as a floating-point value.
    #[error("expected a number in column {column} of row {line}, but got '{text}' instead")]
    NotANumber {
        line: u64,
        column: usize,
        text: String,
    },

    /// A value vector of the wrong length was supplied. This is a caller
    /// contract violation, not a data error.
    #[error("expected an entry with {expected} values, but got {actual}")]
    Arity { expected: usize, actual: usize },

    /// A record's timestamp predates the preceding record's timestamp.
    /// Input must be ordered by non-decreasing timestamp.
    #[error("row {line}: timestamp {current} predates the preceding record's timestamp {previous}")]
    OutOfOrder {
        line: u64,
        previous: Timestamp,
        current: Timestamp,
    },

    /// A date/time pattern could not be compiled.
    #[error("invalid date/time pattern '{pattern}'")]
    InvalidPattern { pattern: String },

    /// A period that never advances the aggregation window.
    #[error("period of {length} {unit} does not advance the aggregation window")]
    InvalidPeriod { length: i32, unit: Unit },

    /// A header-label input had no label row.
    #[error("header input has no label row")]
    MissingHeaders,

    /// The header names row and the unit tags row disagree on column count.
    #[error("the header names row has {names} columns, but the unit tags row has {units}")]
    HeaderUnits { names: usize, units: usize },

    /// I/O error from the underlying source or sink.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
