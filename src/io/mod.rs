//! Typed readers and writers over the raw record parsers.
//!
//! This layer turns parsed rows into domain values and renders aggregated
//! windows back out. Column layouts are plain configuration structs with
//! defaults, validated when the reader or writer is constructed.
//!
//! # Components
//!
//! - [`reader`]: converts raw rows into [`DataRecord`](crate::core::domain::DataRecord)s
//!   under a configured column layout
//! - [`headers_reader`]: reads a header-label file into [`Headers`](crate::core::domain::Headers)
//! - [`writer`]: writes one summary row per aggregation window

pub mod headers_reader;
pub mod reader;
pub mod writer;

#[cfg(test)]
mod reader_tests;

pub use headers_reader::HeadersReader;
pub use reader::{ColumnLayout, DataRecordReader};
pub use writer::{OutputLayout, SummaryWriter};
