//! Column-label parsing for header files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::parsing::record_parser::RecordParser;

/// Parses a header-label file into a list of column labels.
///
/// The first non-blank record carries the label names. An optional second
/// record carries unit tags, which are appended to their label as
/// `"Label (unit)"`; empty tags leave the label unchanged. Both records must
/// have the same column count.
pub struct HeadersParser<R> {
    parser: RecordParser<R>,
}

impl HeadersParser<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(RecordParser::open(path)?))
    }
}

impl<R: BufRead> HeadersParser<R> {
    pub fn new(parser: RecordParser<R>) -> Self {
        Self { parser }
    }

    pub fn from_reader(reader: R) -> Self {
        Self::new(RecordParser::new(reader))
    }

    /// Parses the labels. The input is fully consumed by a single call.
    pub fn parse(&mut self) -> Result<Vec<String>> {
        let names = self.parser.next_record()?.ok_or(Error::MissingHeaders)?;
        let mut labels: Vec<String> = names.values().to_vec();

        match self.parser.next_record() {
            Ok(Some(units)) => {
                for (label, unit) in labels.iter_mut().zip(units.values()) {
                    if !unit.is_empty() {
                        *label = format!("{} ({})", label, unit);
                    }
                }
            }
            Ok(None) => {}
            Err(Error::RowSize { actual, .. }) => {
                return Err(Error::HeaderUnits {
                    names: labels.len(),
                    units: actual,
                });
            }
            Err(err) => return Err(err),
        }

        Ok(labels)
    }
}
