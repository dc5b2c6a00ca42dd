//! ndnSIM log aggregation
//!
//! Turns forwarder and consumer log records into a table with one row per
//! second of simulation time:
//! - [`LogLine`] and [`LineFilter`] decide which lines count and where their fields are
//! - [`EventTag`] maps a record to the [`Counter`] it increments
//! - [`LogAggregator`] buckets the counts and builds the [`Table`]

pub mod aggregator;
pub mod counters;
pub mod event;
pub mod line;
pub mod table;

pub use aggregator::{LogAggregator, MalformedPolicy, RunStats};
pub use counters::{Counter, CounterSet, Row};
pub use event::EventTag;
pub use line::{FilterReason, LineError, LineFilter, LogLine};
pub use table::{Table, HEADER};
