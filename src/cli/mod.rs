//! CLI argument parsing
//!
//! This module defines the command-line surface and how it maps onto the
//! run configuration.

pub mod args;

pub use args::Cli;
