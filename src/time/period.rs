//! Fixed-length calendar periods.

use serde::{Deserialize, Serialize};

use crate::time::timestamp::Unit;

/// A signed length in a calendar unit.
///
/// A period has no inherent relationship to any timestamp until it is
/// applied through [`Timestamp::truncated_to`](crate::time::Timestamp::truncated_to)
/// and [`Timestamp::plus`](crate::time::Timestamp::plus).
///
/// # Examples
///
/// ```
/// use chronostat::time::{Period, Unit};
///
/// let period = Period::of(5, Unit::Minutes);
/// assert_eq!(period.length(), 5);
/// assert_eq!(period.unit(), Unit::Minutes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    length: i32,
    unit: Unit,
}

impl Period {
    /// Creates a period of the given length in the given unit.
    pub fn of(length: i32, unit: Unit) -> Self {
        Self { length, unit }
    }

    pub fn length(self) -> i32 {
        self.length
    }

    pub fn unit(self) -> Unit {
        self.unit
    }
}
