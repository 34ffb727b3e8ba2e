//! Naive calendar time for bucketing observations.
//!
//! Timestamps here carry no timezone or UTC offset: a value read from a file
//! is bucketed exactly as written. The module provides the timestamp value
//! type with calendar-aware truncation and period addition, the period
//! definition, and the pattern-driven formatter used to parse and render
//! timestamps.

pub mod format;
pub mod period;
pub mod timestamp;

#[cfg(test)]
mod timestamp_tests;

pub use format::{ParseTimestampError, TimestampFormatter};
pub use period::Period;
pub use timestamp::{Timestamp, Unit};
