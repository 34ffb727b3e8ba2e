//! Rendering aggregated windows as delimited output rows.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::domain::Separator;
use crate::error::{Error, Result};
use crate::time::format::TimestampFormatter;
use crate::time::timestamp::Timestamp;

const OUTPUT_DELIMITER: char = ',';
const DATE_LABEL: &str = "Date";
const TIME_LABEL: &str = "Time";
const COUNT_LABEL: &str = "Count";
const MEAN_SUFFIX: &str = "Avg";
const DEVIATION_SUFFIX: &str = "StdDev";

/// Date/time arrangement of the output rows.
///
/// Mirrors the input configuration: the same patterns, the same
/// combined-or-split behavior, and the same ordering flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    pub date_pattern: String,
    pub time_pattern: String,
    pub same_column: bool,
    pub separator: Separator,
    pub time_before_date: bool,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            date_pattern: "%d/%m/%Y".to_string(),
            time_pattern: "%H:%M:%S".to_string(),
            same_column: false,
            separator: Separator::default(),
            time_before_date: false,
        }
    }
}

/// Writes one row per aggregation window.
///
/// Each row carries the window start (date and time arranged per the
/// layout), the sample count, and a mean/standard-deviation pair per value
/// series. When series labels are supplied at construction, a label row is
/// written first, naming each series as `"<label> - Avg"` and
/// `"<label> - StdDev"`. Fields containing the output delimiter, a quote, or
/// a line break are quoted with doubled inner quotes; the combined date and
/// time joined by a comma separator is the canonical case.
pub struct SummaryWriter<W> {
    out: W,
    layout: OutputLayout,
    date_formatter: TimestampFormatter,
    time_formatter: TimestampFormatter,
    series_count: Option<usize>,
}

impl SummaryWriter<BufWriter<File>> {
    /// Creates the output file and writes rows without a label row.
    pub fn create(path: impl AsRef<Path>, layout: OutputLayout) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(BufWriter::new(file), layout)
    }
}

impl<W: Write> SummaryWriter<W> {
    /// Creates a writer with no label row.
    ///
    /// The series count is fixed by the first written window.
    pub fn new(out: W, layout: OutputLayout) -> Result<Self> {
        let date_formatter = TimestampFormatter::new(layout.date_pattern.clone())?;
        let time_formatter = TimestampFormatter::new(layout.time_pattern.clone())?;

        Ok(Self {
            out,
            layout,
            date_formatter,
            time_formatter,
            series_count: None,
        })
    }

    /// Creates a writer and writes the label row immediately.
    ///
    /// Every subsequent [`write`](SummaryWriter::write) must supply exactly
    /// one mean and one standard deviation per label.
    pub fn with_labels(out: W, layout: OutputLayout, labels: &[String]) -> Result<Self> {
        let mut writer = Self::new(out, layout)?;
        writer.write_label_row(labels)?;
        writer.series_count = Some(labels.len());
        Ok(writer)
    }

    fn write_label_row(&mut self, labels: &[String]) -> Result<()> {
        let mut fields = Vec::with_capacity(3 + labels.len() * 2);
        if self.layout.time_before_date {
            fields.push(TIME_LABEL.to_string());
            fields.push(DATE_LABEL.to_string());
        } else {
            fields.push(DATE_LABEL.to_string());
            fields.push(TIME_LABEL.to_string());
        }
        fields.push(COUNT_LABEL.to_string());
        for label in labels {
            fields.push(format!("{} - {}", label, MEAN_SUFFIX));
            fields.push(format!("{} - {}", label, DEVIATION_SUFFIX));
        }
        self.write_row(&fields)
    }

    /// Writes one window row.
    ///
    /// Means and standard deviations must be in series order and match the
    /// established series count; otherwise the call fails with
    /// [`Error::Arity`]. NaN values render as `NaN`.
    pub fn write(
        &mut self,
        timestamp: Timestamp,
        count: u64,
        means: &[f64],
        standard_deviations: &[f64],
    ) -> Result<()> {
        let expected = *self.series_count.get_or_insert(means.len());
        if means.len() != expected {
            return Err(Error::Arity {
                expected,
                actual: means.len(),
            });
        }
        if standard_deviations.len() != expected {
            return Err(Error::Arity {
                expected,
                actual: standard_deviations.len(),
            });
        }

        let date = self.date_formatter.format(timestamp);
        let time = self.time_formatter.format(timestamp);

        let mut fields = Vec::with_capacity(3 + expected * 2);
        if self.layout.same_column {
            let (first, second) = if self.layout.time_before_date {
                (time, date)
            } else {
                (date, time)
            };
            fields.push(format!("{}{}{}", first, self.layout.separator.as_str(), second));
        } else if self.layout.time_before_date {
            fields.push(time);
            fields.push(date);
        } else {
            fields.push(date);
            fields.push(time);
        }
        fields.push(count.to_string());
        for (mean, deviation) in means.iter().zip(standard_deviations) {
            fields.push(mean.to_string());
            fields.push(deviation.to_string());
        }

        self.write_row(&fields)
    }

    fn write_row(&mut self, fields: &[String]) -> Result<()> {
        for (index, field) in fields.iter().enumerate() {
            if index > 0 {
                write!(self.out, "{}", OUTPUT_DELIMITER)?;
            }
            write!(self.out, "{}", quoted(field))?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn quoted(field: &str) -> Cow<'_, str> {
    let needs_quoting = field
        .chars()
        .any(|c| c == OUTPUT_DELIMITER || c == '"' || c == '\n' || c == '\r');
    if needs_quoting {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
