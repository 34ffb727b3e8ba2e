//! Reading column labels for the output summary.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::domain::Headers;
use crate::error::{Error, Result};
use crate::io::reader::ColumnLayout;
use crate::parsing::headers_parser::HeadersParser;

/// Reads a header-label file under the same column layout as the data file.
///
/// The labels at the date and time columns are extracted separately, labels
/// at ignored columns are dropped, and the remaining labels become the data
/// labels in file order.
pub struct HeadersReader<R> {
    parser: HeadersParser<R>,
    date_column: usize,
    time_column: usize,
    ignored_columns: BTreeSet<usize>,
}

impl HeadersReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>, layout: &ColumnLayout) -> Result<Self> {
        Ok(Self::new(HeadersParser::open(path)?, layout))
    }
}

impl<R: BufRead> HeadersReader<R> {
    pub fn new(parser: HeadersParser<R>, layout: &ColumnLayout) -> Self {
        Self {
            parser,
            date_column: layout.date_column,
            time_column: layout.time_column,
            ignored_columns: layout.ignored_columns.clone(),
        }
    }

    /// Reads the headers. The input is fully consumed by a single call.
    pub fn read(&mut self) -> Result<Headers> {
        let labels = self.parser.parse()?;

        let required = self.date_column.max(self.time_column) + 1;
        if labels.len() < required {
            return Err(Error::ShortRecord {
                line: 1,
                required,
                actual: labels.len(),
            });
        }

        let date_label = labels[self.date_column].clone();
        let time_label = labels[self.time_column].clone();

        let date_column = self.date_column;
        let time_column = self.time_column;
        let data_labels = labels
            .into_iter()
            .enumerate()
            .filter(|(index, _)| {
                *index != date_column
                    && *index != time_column
                    && !self.ignored_columns.contains(index)
            })
            .map(|(_, label)| label)
            .collect();

        Ok(Headers::new(data_labels, date_label, time_label))
    }
}
