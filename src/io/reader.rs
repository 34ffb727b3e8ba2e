//! Conversion of raw rows into timestamped data records.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::domain::{DataRecord, Separator};
use crate::error::{Error, Result};
use crate::parsing::record_parser::RecordParser;
use crate::time::format::TimestampFormatter;
use crate::time::timestamp::Timestamp;

/// Column layout of an input file.
///
/// Column indices are zero-based. When `date_column` equals `time_column`,
/// the date and time live in one combined field joined by `separator`, with
/// `time_before_date` selecting their order. Date and time columns are
/// always excluded from the value vector, in addition to any explicitly
/// ignored columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub date_column: usize,
    pub time_column: usize,
    pub date_pattern: String,
    pub time_pattern: String,
    pub separator: Separator,
    pub time_before_date: bool,
    pub ignored_columns: BTreeSet<usize>,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            date_column: 0,
            time_column: 1,
            date_pattern: "%d/%m/%Y".to_string(),
            time_pattern: "%H:%M:%S".to_string(),
            separator: Separator::default(),
            time_before_date: false,
            ignored_columns: BTreeSet::new(),
        }
    }
}

impl ColumnLayout {
    /// Whether the date and time share a single column.
    pub fn combined(&self) -> bool {
        self.date_column == self.time_column
    }

    /// The pattern matching the timestamp text assembled by the reader.
    pub fn timestamp_pattern(&self) -> String {
        if self.combined() {
            if self.time_before_date {
                format!(
                    "{}{}{}",
                    self.time_pattern,
                    self.separator.as_str(),
                    self.date_pattern
                )
            } else {
                format!(
                    "{}{}{}",
                    self.date_pattern,
                    self.separator.as_str(),
                    self.time_pattern
                )
            }
        } else {
            format!("{} {}", self.date_pattern, self.time_pattern)
        }
    }

    /// The smallest row that can hold the timestamp column(s) plus at least
    /// one value column.
    pub(crate) fn minimum_columns(&self) -> usize {
        if self.combined() {
            (self.date_column + 1).max(2)
        } else {
            3.max(self.date_column + 1).max(self.time_column + 1)
        }
    }
}

/// Reads [`DataRecord`]s from a raw record stream under a column layout.
///
/// The reader enforces that input timestamps are non-decreasing: a record
/// whose timestamp predates its predecessor's fails with
/// [`Error::OutOfOrder`]. Equal timestamps are allowed.
pub struct DataRecordReader<R> {
    parser: RecordParser<R>,
    layout: ColumnLayout,
    formatter: TimestampFormatter,
    excluded_columns: BTreeSet<usize>,
    last_timestamp: Option<Timestamp>,
}

impl DataRecordReader<BufReader<File>> {
    /// Opens a file with the default field delimiter and the given layout.
    pub fn open(path: impl AsRef<Path>, layout: ColumnLayout) -> Result<Self> {
        Self::new(RecordParser::open(path)?, layout)
    }
}

impl<R: BufRead> DataRecordReader<R> {
    /// Creates a reader over an existing parser.
    ///
    /// The combined timestamp pattern is compiled here, so a bad layout is
    /// rejected before any data is read.
    pub fn new(parser: RecordParser<R>, layout: ColumnLayout) -> Result<Self> {
        let formatter = TimestampFormatter::new(layout.timestamp_pattern())?;

        let mut excluded_columns = layout.ignored_columns.clone();
        excluded_columns.insert(layout.date_column);
        excluded_columns.insert(layout.time_column);

        Ok(Self {
            parser,
            layout,
            formatter,
            excluded_columns,
            last_timestamp: None,
        })
    }

    /// Reads the next data record, or returns `Ok(None)` at end of input.
    pub fn read(&mut self) -> Result<Option<DataRecord>> {
        let record = match self.parser.next_record()? {
            Some(record) => record,
            None => return Ok(None),
        };
        let line = record.line();

        let required = self.layout.minimum_columns();
        if record.len() < required {
            return Err(Error::ShortRecord {
                line,
                required,
                actual: record.len(),
            });
        }

        let fields = record.values();
        let timestamp_text = if self.layout.combined() {
            fields[self.layout.date_column].clone()
        } else {
            format!(
                "{} {}",
                fields[self.layout.date_column], fields[self.layout.time_column]
            )
        };

        let timestamp = self
            .formatter
            .parse(&timestamp_text)
            .map_err(|source| Error::InvalidTimestamp { line, source })?;

        if let Some(previous) = self.last_timestamp {
            if timestamp.predates(previous) {
                return Err(Error::OutOfOrder {
                    line,
                    previous,
                    current: timestamp,
                });
            }
        }
        self.last_timestamp = Some(timestamp);

        let mut values = Vec::with_capacity(fields.len().saturating_sub(self.excluded_columns.len()));
        for (index, text) in fields.iter().enumerate() {
            if self.excluded_columns.contains(&index) {
                continue;
            }
            let value: f64 = text.parse().map_err(|_| Error::NotANumber {
                line,
                column: index + 1,
                text: text.clone(),
            })?;
            values.push(value);
        }

        Ok(Some(DataRecord::new(timestamp, values)))
    }
}
