//! Core domain values shared across the ingestion and aggregation pipeline.

pub mod domain;

pub use domain::{DataRecord, Headers, Separator};
