//! Naive date-time values and their calendar arithmetic.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::time::period::Period;

/// A calendar granularity used to truncate timestamps and size periods.
///
/// The enumeration is closed: every unit carries its own truncation rule,
/// implemented as a plain `match` in [`Timestamp::truncated_to`] so the
/// calendar-rollover logic stays in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        })
    }
}

/// An ordered naive date-time with second precision.
///
/// A `Timestamp` has no timezone or UTC offset and no sub-second component.
/// Values are immutable: truncation and period addition return new instances.
/// The total order over (year, month, day, hour, minute, second) is the basis
/// for all window assignment.
///
/// # Examples
///
/// ```
/// use chronostat::time::{Timestamp, Unit};
///
/// let ts = Timestamp::new(2016, 6, 12, 12, 12, 12).unwrap();
/// assert_eq!(
///     ts.truncated_to(Unit::Months),
///     Timestamp::new(2016, 6, 1, 0, 0, 0).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Creates a timestamp from explicit calendar fields.
    ///
    /// Returns `None` when any field is out of range or the day does not
    /// exist in the given month and year.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)?;
        Some(Self(NaiveDateTime::new(date, time)))
    }

    /// Wraps a chrono value, discarding any sub-second component.
    pub(crate) fn from_naive(inner: NaiveDateTime) -> Self {
        Self(inner.with_nanosecond(0).unwrap_or(inner))
    }

    pub(crate) fn as_naive(self) -> NaiveDateTime {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn second(self) -> u32 {
        self.0.second()
    }

    /// Returns a copy of this timestamp rounded down to the start of the
    /// given calendar unit.
    ///
    /// Fields smaller than the unit are set to their zero value; day and
    /// month truncate to 1. Truncating an already-truncated timestamp is a
    /// no-op.
    pub fn truncated_to(self, unit: Unit) -> Self {
        let date = self.0.date();
        match unit {
            Unit::Years => {
                let january_first = NaiveDate::from_ymd_opt(date.year(), 1, 1)
                    .expect("January 1st exists in every year");
                Self(january_first.and_time(NaiveTime::MIN))
            }
            Unit::Months => {
                let first_of_month = date.with_day(1).expect("day 1 exists in every month");
                Self(first_of_month.and_time(NaiveTime::MIN))
            }
            Unit::Days => Self(date.and_time(NaiveTime::MIN)),
            Unit::Hours => {
                let time = NaiveTime::from_hms_opt(self.hour(), 0, 0)
                    .expect("hour-of-day is already in range");
                Self(date.and_time(time))
            }
            Unit::Minutes => {
                let time = NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
                    .expect("hour and minute are already in range");
                Self(date.and_time(time))
            }
            Unit::Seconds => self,
        }
    }

    /// Returns a copy of this timestamp with the given period added.
    ///
    /// Month and year additions that land on a day-of-month the target month
    /// does not have clamp to the last valid day (January 30th plus one month
    /// is February 29th in a leap year, February 28th otherwise). Negative
    /// lengths move backwards.
    ///
    /// # Panics
    ///
    /// Panics if the result falls outside the representable date range,
    /// roughly 262,000 years either side of the common era.
    pub fn plus(self, period: Period) -> Self {
        self.checked_plus(period)
            .expect("timestamp arithmetic overflowed the representable date range")
    }

    /// Checked variant of [`Timestamp::plus`].
    pub fn checked_plus(self, period: Period) -> Option<Self> {
        let length = period.length();
        let shifted = match period.unit() {
            Unit::Years => self.shifted_by_months(length.checked_mul(12)?)?,
            Unit::Months => self.shifted_by_months(length)?,
            Unit::Days => self.0.checked_add_signed(Duration::days(i64::from(length)))?,
            Unit::Hours => self.0.checked_add_signed(Duration::hours(i64::from(length)))?,
            Unit::Minutes => self
                .0
                .checked_add_signed(Duration::minutes(i64::from(length)))?,
            Unit::Seconds => self
                .0
                .checked_add_signed(Duration::seconds(i64::from(length)))?,
        };
        Some(Self(shifted))
    }

    fn shifted_by_months(self, months: i32) -> Option<NaiveDateTime> {
        if months >= 0 {
            self.0.checked_add_months(chrono::Months::new(months as u32))
        } else {
            self.0.checked_sub_months(chrono::Months::new(months.unsigned_abs()))
        }
    }

    /// Checks whether this timestamp is strictly earlier than another.
    pub fn predates(self, other: Timestamp) -> bool {
        self < other
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}
