//! Application module
//!
//! This module contains application-level functionality including:
//! - Verbosity and working directory handling
//! - Logging setup
//! - Fatal error reporting
//! - The end-to-end run

pub mod config;
pub mod error_handling;
pub mod logging;
pub mod runtime;

// Re-export main application functions
pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
pub use runtime::{execute, render_report, RunReport};
