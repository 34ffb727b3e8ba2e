//! Parsers for delimited input files.
//!
//! Parsing here is deliberately simple: one row per line, fields split on a
//! single configurable delimiter character and trimmed of surrounding
//! whitespace. There is no quoting or escaping on the input side.
//!
//! # Parsers
//!
//! - [`record_parser`]: rows of trimmed string fields with column-count
//!   enforcement
//! - [`headers_parser`]: column labels with optional unit tags

pub mod headers_parser;
pub mod record_parser;


pub use headers_parser::HeadersParser;
pub use record_parser::{Record, RecordParser};
