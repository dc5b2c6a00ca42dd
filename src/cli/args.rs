//! CLI argument structures

use crate::config::Overrides;
use clap::Parser;
use std::path::PathBuf;

/// Bin ndnSIM forwarder logs into a per-second table for plotting
#[derive(Parser, Debug)]
#[command(name = "ndn-logstat")]
#[command(about = "ndn-logstat - Bin ndnSIM forwarder logs into per-second tables", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log files to read when the default log does not exist ("-" for stdin)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Default log file, read in preference to INPUT
    #[arg(short = 'l', long = "log", value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Where to write the tab-separated table
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output_path: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip malformed lines with a warning instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Do not print the table to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Print per-counter totals after the run
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            log_path: self.log_path.clone(),
            output_path: self.output_path.clone(),
            lenient: self.lenient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["ndn-logstat"]).unwrap();
        assert!(cli.inputs.is_empty());
        assert!(cli.log_path.is_none());
        assert!(!cli.lenient);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_inputs_and_flags() {
        let cli = Cli::try_parse_from([
            "ndn-logstat",
            "-vv",
            "--lenient",
            "-o",
            "table.dat",
            "a.log",
            "b.log",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.inputs, vec![PathBuf::from("a.log"), PathBuf::from("b.log")]);

        let overrides = cli.overrides();
        assert!(overrides.lenient);
        assert_eq!(overrides.output_path, Some(PathBuf::from("table.dat")));
        assert!(overrides.log_path.is_none());
    }

    #[test]
    fn test_dash_is_accepted_as_input() {
        let cli = Cli::try_parse_from(["ndn-logstat", "-"]).unwrap();
        assert_eq!(cli.inputs, vec![PathBuf::from("-")]);
    }
}
