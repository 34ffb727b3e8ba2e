#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::core::domain::{DataRecord, Separator};
    use crate::error::Error;
    use crate::io::reader::{ColumnLayout, DataRecordReader};
    use crate::parsing::record_parser::RecordParser;
    use crate::time::timestamp::Timestamp;

    fn reader(data: &'static str, layout: ColumnLayout) -> DataRecordReader<&'static [u8]> {
        DataRecordReader::new(RecordParser::new(data.as_bytes()), layout).unwrap()
    }

    fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Timestamp {
        Timestamp::new(year, month, day, hour, minute, second).unwrap()
    }

    #[test]
    fn test_read_date_and_time_in_first_columns_with_two_values() {
        let mut reader = reader("09/08/2016, 11:22:01, 176, 186\n", ColumnLayout::default());

        assert_eq!(
            reader.read().unwrap(),
            Some(DataRecord::new(ts(2016, 8, 9, 11, 22, 1), vec![176.0, 186.0]))
        );
        assert_eq!(reader.read().unwrap(), None);
    }

    #[test]
    fn test_record_with_only_date_and_time_columns_is_too_short() {
        let mut reader = reader("09/08/2016, 11:22:01\n", ColumnLayout::default());

        match reader.read() {
            Err(Error::ShortRecord {
                line,
                required,
                actual,
            }) => {
                assert_eq!(line, 1);
                assert_eq!(required, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected a short record error, got {:?}", other),
        }
    }

    #[test]
    fn test_record_missing_the_date_column_is_too_short() {
        let layout = ColumnLayout {
            date_column: 10,
            ..ColumnLayout::default()
        };
        let mut reader = reader("11:22:01, 123.0\n", layout);

        match reader.read() {
            Err(Error::ShortRecord { required, actual, .. }) => {
                assert_eq!(required, 11);
                assert_eq!(actual, 2);
            }
            other => panic!("expected a short record error, got {:?}", other),
        }
    }

    #[test]
    fn test_combined_column_with_tab_separator() {
        let layout = ColumnLayout {
            date_column: 0,
            time_column: 0,
            separator: Separator::Tab,
            ..ColumnLayout::default()
        };
        let mut reader = reader("09/08/2016\t11:22:01, 176\n", layout);

        assert_eq!(
            reader.read().unwrap(),
            Some(DataRecord::new(ts(2016, 8, 9, 11, 22, 1), vec![176.0]))
        );
    }

    #[test]
    fn test_unparseable_date_reports_the_line() {
        let mut reader = reader("09-08-2016, 11:22:01, 176\n", ColumnLayout::default());

        match reader.read() {
            Err(Error::InvalidTimestamp { line, source }) => {
                assert_eq!(line, 1);
                assert_eq!(source.text, "09-08-2016 11:22:01");
            }
            other => panic!("expected an invalid timestamp error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_value_reports_column_and_text() {
        let mut reader = reader("09/08/2016, 11:22:01, A\n", ColumnLayout::default());

        match reader.read() {
            Err(Error::NotANumber { line, column, text }) => {
                assert_eq!(line, 1);
                assert_eq!(column, 3);
                assert_eq!(text, "A");
            }
            other => panic!("expected a not-a-number error, got {:?}", other),
        }
    }

    #[test]
    fn test_time_column_before_date_column() {
        let layout = ColumnLayout {
            date_column: 1,
            time_column: 0,
            ..ColumnLayout::default()
        };
        let mut reader = reader("11:22:01, 09/08/2016, 176\n", layout);

        assert_eq!(
            reader.read().unwrap(),
            Some(DataRecord::new(ts(2016, 8, 9, 11, 22, 1), vec![176.0]))
        );
    }

    #[test]
    fn test_combined_column_with_time_before_date() {
        let layout = ColumnLayout {
            date_column: 0,
            time_column: 0,
            time_before_date: true,
            ..ColumnLayout::default()
        };
        let mut reader = reader("11:22:01 09/08/2016, 176\n", layout);

        assert_eq!(
            reader.read().unwrap(),
            Some(DataRecord::new(ts(2016, 8, 9, 11, 22, 1), vec![176.0]))
        );
    }

    #[test]
    fn test_date_and_time_in_the_middle_of_the_record() {
        let layout = ColumnLayout {
            date_column: 1,
            time_column: 2,
            ..ColumnLayout::default()
        };
        let mut reader = reader("176, 09/08/2016, 11:22:01, 123\n", layout);

        assert_eq!(
            reader.read().unwrap(),
            Some(DataRecord::new(ts(2016, 8, 9, 11, 22, 1), vec![176.0, 123.0]))
        );
    }

    #[test]
    fn test_ignored_columns_are_excluded_from_the_values() {
        let layout = ColumnLayout {
            date_column: 0,
            time_column: 0,
            separator: Separator::Space,
            ignored_columns: BTreeSet::from([1]),
            ..ColumnLayout::default()
        };
        let mut reader = reader("09/08/2016 11:22:01, 176, 123, 142\n", layout);

        assert_eq!(
            reader.read().unwrap(),
            Some(DataRecord::new(ts(2016, 8, 9, 11, 22, 1), vec![123.0, 142.0]))
        );
    }

    #[test]
    fn test_out_of_order_timestamps_are_rejected() {
        let data = "09/08/2016, 11:22:01, 176\n09/08/2016, 11:22:00, 177\n";
        let mut reader = reader(data, ColumnLayout::default());

        reader.read().unwrap();

        match reader.read() {
            Err(Error::OutOfOrder {
                line,
                previous,
                current,
            }) => {
                assert_eq!(line, 2);
                assert_eq!(previous, ts(2016, 8, 9, 11, 22, 1));
                assert_eq!(current, ts(2016, 8, 9, 11, 22, 0));
            }
            other => panic!("expected an out-of-order error, got {:?}", other),
        }
    }

    #[test]
    fn test_equal_timestamps_are_allowed() {
        let data = "09/08/2016, 11:22:01, 176\n09/08/2016, 11:22:01, 177\n";
        let mut reader = reader(data, ColumnLayout::default());

        assert!(reader.read().unwrap().is_some());
        assert!(reader.read().unwrap().is_some());
    }

    #[test]
    fn test_end_of_input_is_repeatable() {
        let mut reader = reader("09/08/2016, 11:22:01, 176\n", ColumnLayout::default());

        reader.read().unwrap();
        assert_eq!(reader.read().unwrap(), None);
        assert_eq!(reader.read().unwrap(), None);
    }

    #[test]
    fn test_bad_pattern_in_the_layout_is_rejected_at_construction() {
        let layout = ColumnLayout {
            date_pattern: "%d/%m/%Q".to_string(),
            ..ColumnLayout::default()
        };

        let result = DataRecordReader::new(RecordParser::new("".as_bytes()), layout);
        assert!(matches!(result, Err(Error::InvalidPattern { .. })));
    }
}
