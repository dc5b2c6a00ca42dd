//! Token-level view of a single simulator log line
//!
//! ndnSIM writes `NS_LOG` records as whitespace separated tokens:
//!
//! ```text
//! +1.234000000s 3 nfd.Forwarder:onIncomingInterest(): [DEBUG] onIncomingInterest in=(257,0) interest=/prefix/seq=7
//! ```
//!
//! Only a handful of token positions matter; they are named below and every
//! accessor checks the position exists before handing the token out.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Lines without this leading marker are banners or continuation output
pub const TIMESTAMP_MARKER: char = '+';

pub const TIME_TOKEN: usize = 0;
pub const NODE_TOKEN: usize = 1;
pub const EVENT_TOKEN: usize = 2;
/// Face the Data arrived on, for `onIncomingData`
pub const INGRESS_FACE_TOKEN: usize = 5;
/// Outcome word of `onInterestFinalize`
pub const FINALIZE_STATE_TOKEN: usize = 6;

/// NFD management traffic namespace
pub const DEFAULT_MANAGEMENT_PREFIX: &str = "/localhost/nfd/";

/// Application, internal and "all" faces
pub const DEFAULT_EXCLUDED_FACES: [i64; 5] = [258, 256, 2, 1, -1];

static DEFAULT_FILTER: Lazy<LineFilter> = Lazy::new(|| {
    LineFilter::new(DEFAULT_MANAGEMENT_PREFIX, &DEFAULT_EXCLUDED_FACES)
        .expect("default face pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("missing {field} (token {index})")]
    MissingToken { index: usize, field: &'static str },

    #[error("invalid timestamp '{0}'")]
    BadTimestamp(String),
}

/// Why a line was left out of the traffic statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterReason {
    NoTimestamp,
    Management,
    InternalFace,
}

/// Decides which raw lines take part in aggregation
#[derive(Debug, Clone)]
pub struct LineFilter {
    management_prefix: String,
    face_pattern: Option<Regex>,
}

impl LineFilter {
    pub fn new(management_prefix: impl Into<String>, excluded_faces: &[i64]) -> Result<Self, regex::Error> {
        let face_pattern = if excluded_faces.is_empty() {
            None
        } else {
            let faces = excluded_faces
                .iter()
                .map(|face| regex::escape(&face.to_string()))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(r"(?:in|out)=\((?:{}),", faces))?)
        };

        Ok(Self {
            management_prefix: management_prefix.into(),
            face_pattern,
        })
    }

    /// Returns the reason the line is excluded, or `None` if it should be parsed
    pub fn exclusion(&self, line: &str) -> Option<FilterReason> {
        if !line.starts_with(TIMESTAMP_MARKER) {
            return Some(FilterReason::NoTimestamp);
        }
        if !self.management_prefix.is_empty() && line.contains(&self.management_prefix) {
            return Some(FilterReason::Management);
        }
        if self
            .face_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(line))
        {
            return Some(FilterReason::InternalFace);
        }
        None
    }
}

impl Default for LineFilter {
    fn default() -> Self {
        DEFAULT_FILTER.clone()
    }
}

/// A log line split into tokens
#[derive(Debug, Clone)]
pub struct LogLine<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> LogLine<'a> {
    pub fn tokenize(line: &'a str) -> Self {
        Self {
            tokens: line.split_whitespace().collect(),
        }
    }

    pub fn token(&self, index: usize, field: &'static str) -> Result<&'a str, LineError> {
        self.tokens
            .get(index)
            .copied()
            .ok_or(LineError::MissingToken { index, field })
    }

    /// Simulation time in seconds, from a token shaped like `+1.25s`
    pub fn timestamp(&self) -> Result<f64, LineError> {
        let raw = self.token(TIME_TOKEN, "timestamp")?;
        let mut chars = raw.chars();
        chars.next();
        chars.next_back();
        let time: f64 = chars
            .as_str()
            .parse()
            .map_err(|_| LineError::BadTimestamp(raw.to_string()))?;
        if !time.is_finite() || time < 0.0 {
            return Err(LineError::BadTimestamp(raw.to_string()));
        }
        Ok(time)
    }

    pub fn node(&self) -> Result<&'a str, LineError> {
        self.token(NODE_TOKEN, "node id")
    }

    pub fn event(&self) -> Result<&'a str, LineError> {
        self.token(EVENT_TOKEN, "event name")
    }
}
