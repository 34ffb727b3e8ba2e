//! Running statistics over parallel value series.

use crate::error::{Error, Result};

/// One running accumulator, updated with Welford's method so floating-point
/// error does not grow with the sample count.
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    count: u64,
    mean: f64,
    squared_deviations: f64,
}

impl Accumulator {
    fn add(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.squared_deviations += delta * (value - self.mean);
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    fn standard_deviation(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            1 => 0.0,
            n => (self.squared_deviations / (n - 1) as f64).sqrt(),
        }
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Running count, mean, and standard deviation for a fixed number of value
/// series.
///
/// Entries are always supplied fully, one value per series, so the sample
/// count is shared across all series. No raw samples are retained; only the
/// incremental state needed to derive the statistics. The standard deviation
/// uses the sample formulation (n - 1 denominator): it is 0 for a single
/// sample and NaN when the accumulator is empty, as is the mean.
pub struct GroupStatistics {
    series: Vec<Accumulator>,
}

impl GroupStatistics {
    /// Creates statistics for `series_count` parallel series.
    pub fn new(series_count: usize) -> Self {
        Self {
            series: vec![Accumulator::default(); series_count],
        }
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Adds one value per series, in series order.
    ///
    /// Fails with [`Error::Arity`] when the entry length does not match the
    /// series count; the accumulators are untouched in that case.
    pub fn add_entry(&mut self, values: &[f64]) -> Result<()> {
        if values.len() != self.series.len() {
            return Err(Error::Arity {
                expected: self.series.len(),
                actual: values.len(),
            });
        }

        for (accumulator, value) in self.series.iter_mut().zip(values) {
            accumulator.add(*value);
        }
        Ok(())
    }

    /// The number of entries added since construction or the last clear.
    pub fn count(&self) -> u64 {
        self.series.first().map_or(0, |accumulator| accumulator.count)
    }

    /// Snapshot of the means, in series order. NaN while empty.
    pub fn means(&self) -> Vec<f64> {
        self.series.iter().map(Accumulator::mean).collect()
    }

    /// Snapshot of the sample standard deviations, in series order. NaN
    /// while empty.
    pub fn standard_deviations(&self) -> Vec<f64> {
        self.series
            .iter()
            .map(Accumulator::standard_deviation)
            .collect()
    }

    /// Resets every accumulator without changing the series count.
    pub fn clear(&mut self) {
        for accumulator in &mut self.series {
            accumulator.clear();
        }
    }
}
