//! The engine that groups ordered records into calendar windows.

use std::io::{BufRead, Write};
use std::sync::mpsc::Sender;

use log::debug;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::io::reader::DataRecordReader;
use crate::io::writer::SummaryWriter;
use crate::stats::group::GroupStatistics;
use crate::time::period::Period;
use crate::time::timestamp::Timestamp;

/// Progress notification emitted while a run advances.
///
/// `Window` fires once per window entered, before the window is populated,
/// carrying the half-open interval `[start, end)`. `Finished` fires once
/// after the last window has been flushed. Consumers subscribe by passing
/// the sending half of a channel to
/// [`StatisticsGenerator::with_progress`]; sends are best-effort and a
/// dropped receiver never fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Progress {
    Window { start: Timestamp, end: Timestamp },
    Finished,
}

/// Counters describing a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Records successfully read and accumulated.
    pub records: u64,
    /// Summary rows written, including zero-count windows.
    pub windows: u64,
}

/// Single-pass aggregation of an ordered record stream into consecutive
/// period windows.
///
/// A generator is a plain value constructed fresh for every run; it keeps no
/// state between runs. The first record's timestamp, truncated to the
/// period's unit, anchors the first window; each window spans
/// `[start, start + period)`. Every elapsed window is flushed, including
/// empty ones, which carry a zero count and NaN statistics. The final,
/// possibly partial window is flushed only when it holds at least one
/// record.
pub struct StatisticsGenerator {
    period: Period,
    progress: Option<Sender<Progress>>,
}

impl StatisticsGenerator {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            progress: None,
        }
    }

    /// Creates a generator that reports window transitions on the given
    /// channel.
    pub fn with_progress(period: Period, progress: Sender<Progress>) -> Self {
        Self {
            period,
            progress: Some(progress),
        }
    }

    /// Drives the full pipeline: reads every record, assigns it to its
    /// window, and writes one summary row per elapsed window.
    ///
    /// Failure of the reader or the writer aborts the run immediately; no
    /// partial row is written for the window being processed. Output already
    /// flushed for earlier windows remains valid.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: &mut DataRecordReader<R>,
        writer: &mut SummaryWriter<W>,
    ) -> Result<RunReport> {
        let mut report = RunReport::default();

        let mut record = match reader.read()? {
            Some(record) => record,
            None => {
                self.notify(Progress::Finished);
                return Ok(report);
            }
        };

        let mut statistics = GroupStatistics::new(record.values().len());
        let mut window_start = record.timestamp().truncated_to(self.period.unit());
        let mut window_end = window_start.plus(self.period);
        if !window_start.predates(window_end) {
            return Err(Error::InvalidPeriod {
                length: self.period.length(),
                unit: self.period.unit(),
            });
        }
        self.enter_window(window_start, window_end);

        loop {
            // Flush every window the current record has already passed.
            while !record.timestamp().predates(window_end) {
                Self::flush_window(writer, window_start, &mut statistics, &mut report)?;
                window_start = window_end;
                window_end = window_start.plus(self.period);
                self.enter_window(window_start, window_end);
            }

            statistics.add_entry(record.values())?;
            report.records += 1;

            match reader.read()? {
                Some(next) => record = next,
                None => break,
            }
        }

        if statistics.count() > 0 {
            Self::flush_window(writer, window_start, &mut statistics, &mut report)?;
        }

        self.notify(Progress::Finished);
        Ok(report)
    }

    fn flush_window<W: Write>(
        writer: &mut SummaryWriter<W>,
        start: Timestamp,
        statistics: &mut GroupStatistics,
        report: &mut RunReport,
    ) -> Result<()> {
        writer.write(
            start,
            statistics.count(),
            &statistics.means(),
            &statistics.standard_deviations(),
        )?;
        statistics.clear();
        report.windows += 1;
        Ok(())
    }

    fn enter_window(&self, start: Timestamp, end: Timestamp) {
        debug!("aggregating window [{}, {})", start, end);
        self.notify(Progress::Window { start, end });
    }

    fn notify(&self, event: Progress) {
        if let Some(sender) = &self.progress {
            let _ = sender.send(event);
        }
    }
}
