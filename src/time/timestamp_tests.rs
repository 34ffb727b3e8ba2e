#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::time::period::Period;
    use crate::time::timestamp::{Timestamp, Unit};

    fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Timestamp {
        Timestamp::new(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn test_truncate_to_years_zeroes_month_day_and_time() {
        assert_eq!(
            ts(2016, 6, 12, 12, 12, 12).truncated_to(Unit::Years),
            ts(2016, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_truncate_to_months_zeroes_day_and_time() {
        assert_eq!(
            ts(2016, 6, 12, 12, 12, 12).truncated_to(Unit::Months),
            ts(2016, 6, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_truncate_to_days_zeroes_time() {
        assert_eq!(
            ts(2016, 6, 12, 12, 12, 12).truncated_to(Unit::Days),
            ts(2016, 6, 12, 0, 0, 0)
        );
    }

    #[test]
    fn test_truncate_to_hours_zeroes_minutes_and_seconds() {
        assert_eq!(
            ts(2016, 6, 12, 12, 12, 12).truncated_to(Unit::Hours),
            ts(2016, 6, 12, 12, 0, 0)
        );
    }

    #[test]
    fn test_truncate_to_minutes_zeroes_seconds() {
        assert_eq!(
            ts(2016, 6, 12, 12, 12, 12).truncated_to(Unit::Minutes),
            ts(2016, 6, 12, 12, 12, 0)
        );
    }

    #[test]
    fn test_truncate_to_seconds_is_identity() {
        assert_eq!(
            ts(2016, 6, 12, 12, 12, 12).truncated_to(Unit::Seconds),
            ts(2016, 6, 12, 12, 12, 12)
        );
    }

    #[test]
    fn test_plus_one_year() {
        let shifted = ts(2016, 10, 10, 10, 10, 10).plus(Period::of(1, Unit::Years));
        assert_eq!(shifted, ts(2017, 10, 10, 10, 10, 10));
    }

    #[test]
    fn test_plus_one_month() {
        let shifted = ts(2016, 10, 10, 10, 10, 10).plus(Period::of(1, Unit::Months));
        assert_eq!(shifted, ts(2016, 11, 10, 10, 10, 10));
    }

    #[test]
    fn test_plus_three_months_rolls_into_next_year() {
        let shifted = ts(2016, 10, 10, 10, 10, 10).plus(Period::of(3, Unit::Months));
        assert_eq!(shifted, ts(2017, 1, 10, 10, 10, 10));
    }

    #[test]
    fn test_plus_one_month_clamps_to_leap_day() {
        let shifted = ts(2016, 1, 30, 10, 10, 10).plus(Period::of(1, Unit::Months));
        assert_eq!(shifted, ts(2016, 2, 29, 10, 10, 10));
    }

    #[test]
    fn test_plus_one_month_clamps_to_february_28_outside_leap_years() {
        let shifted = ts(2015, 1, 31, 10, 10, 10).plus(Period::of(1, Unit::Months));
        assert_eq!(shifted, ts(2015, 2, 28, 10, 10, 10));
    }

    #[test]
    fn test_plus_one_year_from_leap_day_clamps() {
        let shifted = ts(2016, 2, 29, 0, 0, 0).plus(Period::of(1, Unit::Years));
        assert_eq!(shifted, ts(2017, 2, 28, 0, 0, 0));
    }

    #[test]
    fn test_plus_seconds_carries_across_midnight() {
        let shifted = ts(2016, 12, 31, 23, 59, 59).plus(Period::of(1, Unit::Seconds));
        assert_eq!(shifted, ts(2017, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_plus_days_crosses_month_boundary() {
        let shifted = ts(2016, 2, 28, 6, 0, 0).plus(Period::of(2, Unit::Days));
        assert_eq!(shifted, ts(2016, 3, 1, 6, 0, 0));
    }

    #[test]
    fn test_plus_negative_length_moves_backwards() {
        let shifted = ts(2016, 3, 31, 12, 0, 0).plus(Period::of(-1, Unit::Months));
        assert_eq!(shifted, ts(2016, 2, 29, 12, 0, 0));
    }

    #[test]
    fn test_predates_is_strict() {
        let earlier = ts(2016, 10, 10, 10, 10, 0);
        let later = ts(2016, 10, 10, 10, 10, 1);

        assert!(earlier.predates(later));
        assert!(!later.predates(earlier));
        assert!(!earlier.predates(earlier));
    }

    #[test]
    fn test_order_is_lexicographic_over_fields() {
        assert!(ts(2015, 12, 31, 23, 59, 59) < ts(2016, 1, 1, 0, 0, 0));
        assert!(ts(2016, 1, 2, 0, 0, 0) > ts(2016, 1, 1, 23, 59, 59));
    }

    #[test]
    fn test_new_rejects_impossible_dates() {
        assert!(Timestamp::new(2015, 2, 29, 0, 0, 0).is_none());
        assert!(Timestamp::new(2016, 13, 1, 0, 0, 0).is_none());
        assert!(Timestamp::new(2016, 1, 1, 24, 0, 0).is_none());
    }

    proptest! {
        #[test]
        fn truncation_is_idempotent(
            year in 1970i32..2100,
            month in 1u32..=12,
            day in 1u32..=31,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
            unit in prop_oneof![
                Just(Unit::Years), Just(Unit::Months), Just(Unit::Days),
                Just(Unit::Hours), Just(Unit::Minutes), Just(Unit::Seconds),
            ],
        ) {
            let timestamp = match Timestamp::new(year, month, day, hour, minute, second) {
                Some(timestamp) => timestamp,
                None => return Ok(()),
            };
            let truncated = timestamp.truncated_to(unit);

            prop_assert_eq!(truncated.truncated_to(unit), truncated);
            prop_assert!(truncated <= timestamp);
        }

        #[test]
        fn one_unit_after_a_truncated_timestamp_is_strictly_later(
            year in 1970i32..2100,
            month in 1u32..=12,
            day in 1u32..=31,
            hour in 0u32..24,
            minute in 0u32..60,
            second in 0u32..60,
            unit in prop_oneof![
                Just(Unit::Years), Just(Unit::Months), Just(Unit::Days),
                Just(Unit::Hours), Just(Unit::Minutes), Just(Unit::Seconds),
            ],
        ) {
            let timestamp = match Timestamp::new(year, month, day, hour, minute, second) {
                Some(timestamp) => timestamp,
                None => return Ok(()),
            };
            let start = timestamp.truncated_to(unit);
            let next = start.plus(Period::of(1, unit));

            prop_assert!(start.predates(next));
            prop_assert!(timestamp.predates(next));
            prop_assert_eq!(next.truncated_to(unit), next);
        }
    }
}
