//! Line-oriented record parsing with column-count enforcement.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Default field delimiter for input files.
pub const DEFAULT_FIELD_DELIMITER: char = ',';

/// One row of an input file: trimmed string fields plus the 1-based physical
/// line number the row was found at.
///
/// Every record produced by one parser (after the first) has the same field
/// count as the first. Equality is structural over both the fields and the
/// line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
    line: u64,
}

impl Record {
    pub fn new(values: Vec<String>, line: u64) -> Self {
        Self { values, line }
    }

    /// The field at the given zero-based column index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The 1-based physical line number the row was read from.
    pub fn line(&self) -> u64 {
        self.line
    }
}

/// Splits a character stream into [`Record`]s, one per non-blank line.
///
/// Fields are split on a single delimiter character and trimmed. Blank lines
/// (a single empty or whitespace-only field) are silently skipped and do not
/// count toward first-record determination. The first non-blank row fixes
/// the expected column count for the rest of the stream; any later row with
/// a different count fails with [`Error::RowSize`]. Parsing is strictly
/// forward-only.
pub struct RecordParser<R> {
    reader: R,
    delimiter: char,
    line: u64,
    expected_columns: Option<usize>,
    buffer: String,
}

impl RecordParser<BufReader<File>> {
    /// Opens a file for parsing with the default delimiter.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordParser<R> {
    pub fn new(reader: R) -> Self {
        Self::with_delimiter(reader, DEFAULT_FIELD_DELIMITER)
    }

    pub fn with_delimiter(reader: R, delimiter: char) -> Self {
        Self {
            reader,
            delimiter,
            line: 0,
            expected_columns: None,
            buffer: String::new(),
        }
    }

    /// The column count established by the first non-blank row, if any row
    /// has been read yet.
    pub fn expected_columns(&self) -> Option<usize> {
        self.expected_columns
    }

    /// Parses the next non-blank row, or returns `Ok(None)` at end of input.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            let row = self
                .buffer
                .trim_end_matches(|c| c == '\n' || c == '\r');
            if row.trim().is_empty() {
                continue;
            }

            let values: Vec<String> = row
                .split(self.delimiter)
                .map(|field| field.trim().to_string())
                .collect();

            match self.expected_columns {
                None => self.expected_columns = Some(values.len()),
                Some(expected) if values.len() != expected => {
                    return Err(Error::RowSize {
                        line: self.line,
                        expected,
                        actual: values.len(),
                    });
                }
                Some(_) => {}
            }

            return Ok(Some(Record::new(values, self.line)));
        }
    }
}
