//! Whole-second bucketing of forwarder events

use super::counters::{CounterSet, Row};
use super::event::EventTag;
use super::line::{FilterReason, LineError, LineFilter, LogLine};
use super::table::Table;
use crate::error::{LogstatError, Result};
use crate::input::InputLine;
use serde::Deserialize;
use tracing::{debug, trace, warn};

/// What to do with a line that passed the filters but cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the run with the offending location
    #[default]
    Strict,
    /// Log a warning and carry on
    Lenient,
}

/// Line accounting for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines_read: u64,
    pub lines_filtered: u64,
    pub lines_skipped: u64,
    pub events_accepted: u64,
    pub events_counted: u64,
}

/// Accumulates events into one row per second of simulation time.
///
/// The current bucket closes when an event is at least one second past its
/// label. The label then advances by exactly one, so a quiet stretch of
/// several seconds collapses into a single transition instead of a run of
/// empty rows.
#[derive(Debug)]
pub struct LogAggregator {
    bucket: u64,
    counters: CounterSet,
    table: Table,
    filter: LineFilter,
    policy: MalformedPolicy,
    stats: RunStats,
}

impl LogAggregator {
    pub fn new() -> Self {
        Self {
            bucket: 0,
            counters: CounterSet::new(),
            table: Table::new(),
            filter: LineFilter::default(),
            policy: MalformedPolicy::default(),
            stats: RunStats::default(),
        }
    }

    pub fn with_filter(mut self, filter: LineFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_policy(mut self, policy: MalformedPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn current_bucket(&self) -> u64 {
        self.bucket
    }

    pub fn counters(&self) -> &CounterSet {
        &self.counters
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Feeds one raw line.
    ///
    /// The line is fully read before any state changes, so an `Err` leaves
    /// the aggregator exactly as it was.
    pub fn parse_line(&mut self, line: &str) -> std::result::Result<(), LineError> {
        self.stats.lines_read += 1;

        if let Some(reason) = self.filter.exclusion(line) {
            self.stats.lines_filtered += 1;
            if reason != FilterReason::NoTimestamp {
                trace!("Filtered ({:?}): {}", reason, line);
            }
            return Ok(());
        }

        let tokens = LogLine::tokenize(line);
        let time = tokens.timestamp()?;
        let event = tokens.event()?;
        let counter = match EventTag::from_event_field(event) {
            Some(tag) => tag.counter(&tokens)?,
            None => None,
        };

        self.stats.events_accepted += 1;
        if time - self.bucket as f64 >= 1.0 {
            self.close_bucket();
        }
        if let Some(counter) = counter {
            self.counters.increment(counter);
            self.stats.events_counted += 1;
        }
        Ok(())
    }

    /// Feeds a located line, applying the malformed-line policy
    pub fn consume(&mut self, line: &InputLine) -> Result<()> {
        match self.parse_line(&line.text) {
            Ok(()) => Ok(()),
            Err(e) => match self.policy {
                MalformedPolicy::Strict => Err(LogstatError::Parse {
                    file: line.source.to_string(),
                    line: line.number,
                    reason: e.to_string(),
                }),
                MalformedPolicy::Lenient => {
                    warn!("Skipping {}:{}: {}", line.source, line.number, e);
                    self.stats.lines_skipped += 1;
                    Ok(())
                }
            },
        }
    }

    /// Flushes the open bucket, however short, and hands back the table
    pub fn finalize(mut self) -> Table {
        self.close_bucket();
        self.table
    }

    /// Feeds every line, then finalizes
    pub fn run<I, S>(self, lines: I) -> Result<Table>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let located = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| Ok(InputLine::new("<input>", i + 1, text.as_ref())));
        self.run_lines(located).map(|(table, _)| table)
    }

    /// Like [`run`](Self::run) over lines that carry their origin and may fail to read
    pub fn run_lines<I>(mut self, lines: I) -> Result<(Table, RunStats)>
    where
        I: IntoIterator<Item = Result<InputLine>>,
    {
        for line in lines {
            self.consume(&line?)?;
        }
        let stats = self.stats;
        Ok((self.finalize(), stats))
    }

    fn close_bucket(&mut self) {
        debug!(
            "Closing bucket {} ({} events)",
            self.bucket,
            self.counters.total()
        );
        self.table.push(Row {
            bucket: self.bucket,
            counts: self.counters,
        });
        self.counters.reset();
        self.bucket += 1;
    }
}

impl Default for LogAggregator {
    fn default() -> Self {
        Self::new()
    }
}
