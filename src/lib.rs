//! # ndn-logstat
//!
//! Turns the `NS_LOG` output of an ndnSIM simulation into a tab-separated
//! table with one row per second of simulation time, ready for gnuplot.
//!
//! ## Usage
//!
//! ```bash
//! ndn-logstat [--log PATH] [--output PATH] [--lenient] [INPUT]...
//! ```
//!
//! ## Modules
//!
//! - `app` - Logging setup, fatal error handling and the end-to-end run
//! - `cli` - Command-line argument structures
//! - `config` - Layered run configuration (flags, environment, TOML file)
//! - `error` - Error type and exit codes
//! - `input` - Input resolution and multi-file line reading
//! - `trace` - Line parsing, event classification and per-second bucketing
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod trace;


pub use error::{LogstatError, Result};
pub use trace::{LogAggregator, Table};
