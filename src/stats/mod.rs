//! Incremental statistics and the period-bucketing engine.
//!
//! # Components
//!
//! - [`group`]: running count/mean/standard-deviation accumulators, one per
//!   value series, with no sample retention
//! - [`generator`]: the single-pass loop that assigns ordered records to
//!   consecutive calendar windows and flushes one summary row per window

pub mod generator;
pub mod group;


pub use generator::{Progress, RunReport, StatisticsGenerator};
pub use group::GroupStatistics;
