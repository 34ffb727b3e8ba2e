//! Domain models for timestamped observations and their column labels.

use serde::{Deserialize, Serialize};

use crate::time::timestamp::Timestamp;

/// The literal used to join a date and a time that share a single column.
///
/// Applies both when splitting a combined input field and when rendering the
/// combined output field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    None,
    Comma,
    #[default]
    Space,
    Semicolon,
    Tab,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Comma => ",",
            Separator::Space => " ",
            Separator::Semicolon => ";",
            Separator::Tab => "\t",
        }
    }
}

/// One ingested observation: a timestamp plus an ordered vector of values.
///
/// The value vector holds every non-ignored, non-date/time column of the
/// source row, in file order. Its length is fixed for an entire file by the
/// reader configuration. Records are immutable and compare structurally.
///
/// # Examples
///
/// ```
/// use chronostat::core::domain::DataRecord;
/// use chronostat::time::Timestamp;
///
/// let when = Timestamp::new(2016, 10, 10, 10, 10, 0).unwrap();
/// let record = DataRecord::new(when, vec![176.0, 186.0]);
///
/// assert_eq!(record.timestamp(), when);
/// assert_eq!(record.values(), &[176.0, 186.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataRecord {
    timestamp: Timestamp,
    values: Vec<f64>,
}

impl DataRecord {
    pub fn new(timestamp: Timestamp, values: Vec<f64>) -> Self {
        Self { timestamp, values }
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// The data values in file order, excluding date/time and ignored columns.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Column labels read from a header-label file.
///
/// Data labels appear in file order and exclude ignored columns as well as
/// the date and time columns, whose labels are carried separately. When date
/// and time share a column, both labels are the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headers {
    data_labels: Vec<String>,
    date_label: String,
    time_label: String,
}

impl Headers {
    pub fn new(data_labels: Vec<String>, date_label: String, time_label: String) -> Self {
        Self {
            data_labels,
            date_label,
            time_label,
        }
    }

    pub fn data_labels(&self) -> &[String] {
        &self.data_labels
    }

    pub fn into_data_labels(self) -> Vec<String> {
        self.data_labels
    }

    pub fn date_label(&self) -> &str {
        &self.date_label
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }
}
