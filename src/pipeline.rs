//! The end-to-end file processing pipeline.
//!
//! This is the layer a host application drives: it opens the input file,
//! optionally reads a header-label file, and streams every record through
//! the aggregation engine into the output file. Each run owns its reader and
//! writer pair exclusively and holds no state between runs.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::mpsc::Sender;

use anyhow::{Context, Result};
use log::info;

use crate::config::RunConfig;
use crate::io::headers_reader::HeadersReader;
use crate::io::reader::DataRecordReader;
use crate::io::writer::SummaryWriter;
use crate::parsing::headers_parser::HeadersParser;
use crate::parsing::record_parser::RecordParser;
use crate::stats::generator::{Progress, RunReport, StatisticsGenerator};

/// Runs the full ingestion and aggregation pipeline over files.
pub struct Pipeline {
    config: RunConfig,
}

impl Pipeline {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Processes `input` into `output`.
    ///
    /// When a headers path is given, its labels name the output series and a
    /// label row is written; otherwise the output carries data rows only.
    pub fn run(&self, input: &Path, headers: Option<&Path>, output: &Path) -> Result<RunReport> {
        self.run_inner(input, headers, output, None)
    }

    /// Same as [`run`](Pipeline::run), reporting window transitions on the
    /// given channel.
    pub fn run_with_progress(
        &self,
        input: &Path,
        headers: Option<&Path>,
        output: &Path,
        progress: Sender<Progress>,
    ) -> Result<RunReport> {
        self.run_inner(input, headers, output, Some(progress))
    }

    fn run_inner(
        &self,
        input: &Path,
        headers: Option<&Path>,
        output: &Path,
        progress: Option<Sender<Progress>>,
    ) -> Result<RunReport> {
        info!("processing {} into {}", input.display(), output.display());

        let labels = match headers {
            Some(path) => Some(self.read_labels(path).with_context(|| {
                format!("failed to read header labels from {}", path.display())
            })?),
            None => None,
        };

        let file = File::open(input)
            .with_context(|| format!("failed to open input file {}", input.display()))?;
        let parser = RecordParser::with_delimiter(BufReader::new(file), self.config.delimiter);
        let mut reader = DataRecordReader::new(parser, self.config.input.clone())
            .context("invalid input column layout")?;

        let out = File::create(output)
            .with_context(|| format!("failed to create output file {}", output.display()))?;
        let mut writer = match &labels {
            Some(labels) => {
                SummaryWriter::with_labels(BufWriter::new(out), self.config.output.clone(), labels)
            }
            None => SummaryWriter::new(BufWriter::new(out), self.config.output.clone()),
        }
        .context("invalid output layout")?;

        let generator = match progress {
            Some(sender) => StatisticsGenerator::with_progress(self.config.period, sender),
            None => StatisticsGenerator::new(self.config.period),
        };

        let report = generator
            .run(&mut reader, &mut writer)
            .with_context(|| format!("failed to process {}", input.display()))?;
        writer.flush().context("failed to flush the output file")?;

        info!(
            "wrote {} windows from {} records",
            report.windows, report.records
        );
        Ok(report)
    }

    fn read_labels(&self, path: &Path) -> crate::error::Result<Vec<String>> {
        let file = File::open(path)?;
        let parser = RecordParser::with_delimiter(BufReader::new(file), self.config.delimiter);
        let mut reader = HeadersReader::new(HeadersParser::new(parser), &self.config.input);
        Ok(reader.read()?.into_data_labels())
    }
}
