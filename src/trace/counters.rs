//! Per-bucket event counters

use std::ops::AddAssign;

/// One column of the output table after the time label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    InInterests,
    SatisfiedInterests,
    UnsatisfiedInterests,
    ContentStoreMisses,
    ContentStoreHits,
    OutNacks,
    InDatas,
    OutDatas,
    UnsolicitedDatas,
    TimeoutInterests,
}

impl Counter {
    pub const COUNT: usize = 10;

    /// All counters in column order
    pub const ALL: [Counter; Counter::COUNT] = [
        Counter::InInterests,
        Counter::SatisfiedInterests,
        Counter::UnsatisfiedInterests,
        Counter::ContentStoreMisses,
        Counter::ContentStoreHits,
        Counter::OutNacks,
        Counter::InDatas,
        Counter::OutDatas,
        Counter::UnsolicitedDatas,
        Counter::TimeoutInterests,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Counter::InInterests => "inInterests",
            Counter::SatisfiedInterests => "satisfiedInterests",
            Counter::UnsatisfiedInterests => "unsatisfiedInterests",
            Counter::ContentStoreMisses => "contentStoreMisses",
            Counter::ContentStoreHits => "contentStoreHits",
            Counter::OutNacks => "outNacks",
            Counter::InDatas => "inDatas",
            Counter::OutDatas => "outDatas",
            Counter::UnsolicitedDatas => "unsolicitedDatas",
            Counter::TimeoutInterests => "timeoutInterests",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// The ten counters of one time bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CounterSet {
    values: [u64; Counter::COUNT],
}

impl CounterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, counter: Counter) {
        self.values[counter.index()] += 1;
    }

    pub fn get(&self, counter: Counter) -> u64 {
        self.values[counter.index()]
    }

    pub fn reset(&mut self) {
        self.values = [0; Counter::COUNT];
    }

    /// Values in column order
    pub fn values(&self) -> &[u64; Counter::COUNT] {
        &self.values
    }

    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|&v| v == 0)
    }
}

impl AddAssign<&CounterSet> for CounterSet {
    fn add_assign(&mut self, other: &CounterSet) {
        for (mine, theirs) in self.values.iter_mut().zip(other.values.iter()) {
            *mine += theirs;
        }
    }
}

/// A closed bucket: its whole-second label and final counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub bucket: u64,
    pub counts: CounterSet,
}
