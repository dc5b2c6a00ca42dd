//! Binned output table and its renderings

use super::counters::{Counter, CounterSet, Row};
use crate::error::{LogstatError, Result};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const COLUMN_COUNT: usize = Counter::COUNT + 1;

/// Column headers, numbered the way gnuplot `using` clauses refer to them
pub const HEADER: [&str; COLUMN_COUNT] = [
    "Time(1)",
    "inInterests(2)",
    "satisfiedInterests(3)",
    "unsatisfiedInterests(4)",
    "contentStoreMisses(5)",
    "contentStoreHits(6)",
    "outNacks(7)",
    "inDatas(8)",
    "outDatas(9)",
    "unsolicitedDatas(10)",
    "timeoutInterests(11)",
];

/// Header plus one row per closed bucket, in bucket order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &'static [&'static str; COLUMN_COUNT] {
        &HEADER
    }

    pub fn push(&mut self, row: Row) {
        debug_assert!(
            self.rows
                .last()
                .map_or(row.bucket == 0, |last| row.bucket == last.bucket + 1),
            "buckets must be consecutive"
        );
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows, header excluded
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-counter sums over every bucket
    pub fn totals(&self) -> CounterSet {
        let mut totals = CounterSet::new();
        for row in &self.rows {
            totals += &row.counts;
        }
        totals
    }

    /// Writes the table as tab-terminated fields, one line per row
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for column in HEADER {
            write!(out, "{}\t", column)?;
        }
        writeln!(out)?;

        for row in &self.rows {
            write!(out, "{}\t", row.bucket)?;
            for value in row.counts.values() {
                write!(out, "{}\t", value)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn to_tsv(&self) -> String {
        let mut buf = Vec::new();
        // writing into a Vec cannot fail
        let _ = self.write_tsv(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| LogstatError::io(path, e))?;
        let mut out = BufWriter::new(file);
        self.write_tsv(&mut out)
            .and_then(|_| out.flush())
            .map_err(|e| LogstatError::io(path, e))
    }
}

/// Column-aligned rendering for the terminal
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = HEADER.join("  ");
        writeln!(f, "{}", header)?;
        for row in &self.rows {
            write!(f, "{:>width$}", row.bucket, width = HEADER[0].len())?;
            for (value, column) in row.counts.values().iter().zip(&HEADER[1..]) {
                write!(f, "  {:>width$}", value, width = column.len())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
