//! Time-bucketed statistical summaries for timestamped delimited text data.
//!
//! This crate is the computational engine behind a desktop file-conversion
//! tool. It reads delimited rows of timestamped numeric observations, groups
//! them into consecutive calendar-aligned windows of a fixed period, and
//! writes one summary row per window: the sample count plus the mean and
//! standard deviation of every value series.
//!
//! # Components
//!
//! - [`parsing`]: line-oriented record parsing with column-count enforcement
//! - [`time`]: naive calendar timestamps, periods, and pattern formatting
//! - [`core`]: the domain values shared across the pipeline
//! - [`io`]: typed record readers, header-label readers, and the summary writer
//! - [`stats`]: incremental per-series statistics and the windowing generator
//! - [`pipeline`]: the end-to-end file-to-file runner
//!
//! # Example
//!
//! ```
//! use chronostat::io::reader::{ColumnLayout, DataRecordReader};
//! use chronostat::io::writer::{OutputLayout, SummaryWriter};
//! use chronostat::parsing::record_parser::RecordParser;
//! use chronostat::stats::generator::StatisticsGenerator;
//! use chronostat::time::{Period, Unit};
//!
//! # fn main() -> chronostat::Result<()> {
//! let data = "10/10/2016, 10:10:00, 5.5\n10/10/2016, 10:10:02, 4.5\n";
//!
//! let parser = RecordParser::new(data.as_bytes());
//! let mut reader = DataRecordReader::new(parser, ColumnLayout::default())?;
//! let mut writer = SummaryWriter::new(Vec::new(), OutputLayout::default())?;
//!
//! let generator = StatisticsGenerator::new(Period::of(5, Unit::Seconds));
//! let report = generator.run(&mut reader, &mut writer)?;
//! assert_eq!(report.windows, 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod pipeline;
pub mod stats;
pub mod time;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use pipeline::Pipeline;
