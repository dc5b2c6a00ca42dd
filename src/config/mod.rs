//! Run configuration
//!
//! Settings come from three layers, highest precedence first: command-line
//! overrides, `NDN_LOGSTAT_*` environment variables, and an optional TOML
//! file. Anything left unset falls back to the built-in defaults.

use crate::error::{LogstatError, Result};
use crate::trace::line::{DEFAULT_EXCLUDED_FACES, DEFAULT_MANAGEMENT_PREFIX};
use crate::trace::{LineFilter, LogAggregator, MalformedPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "ndn-logstat.toml";

pub const DEFAULT_LOG_PATH: &str = "../../results/logfile.log";
pub const DEFAULT_OUTPUT_PATH: &str = "../../results/data.dat";

pub const ENV_LOG_PATH: &str = "NDN_LOGSTAT_LOG";
pub const ENV_OUTPUT_PATH: &str = "NDN_LOGSTAT_OUTPUT";

/// Contents of the TOML configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub log_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub malformed: Option<MalformedPolicy>,
    pub excluded_faces: Option<Vec<i64>>,
    pub management_prefix: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LogstatError::io(path, e))?;
        Self::parse(&content)
            .map_err(|e| LogstatError::config(format!("{}: {}", path.display(), e)))
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the explicit file, or the default one if it exists
    pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::load(path);
        }

        let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            debug!("Loading config from {}", candidate.display());
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_LOG_PATH).filter(|v| !v.is_empty()) {
            self.log_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(ENV_OUTPUT_PATH).filter(|v| !v.is_empty()) {
            self.output_path = Some(PathBuf::from(path));
        }
    }
}

/// Command-line values that take precedence over every other layer
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub log_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub lenient: bool,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub log_path: PathBuf,
    pub output_path: PathBuf,
    pub policy: MalformedPolicy,
    pub excluded_faces: Vec<i64>,
    pub management_prefix: String,
}

impl RunConfig {
    pub fn resolve(file: FileConfig, overrides: &Overrides) -> Self {
        let defaults = Self::default();
        let policy = if overrides.lenient {
            MalformedPolicy::Lenient
        } else {
            file.malformed.unwrap_or(defaults.policy)
        };

        Self {
            log_path: overrides
                .log_path
                .clone()
                .or(file.log_path)
                .unwrap_or(defaults.log_path),
            output_path: overrides
                .output_path
                .clone()
                .or(file.output_path)
                .unwrap_or(defaults.output_path),
            policy,
            excluded_faces: file.excluded_faces.unwrap_or(defaults.excluded_faces),
            management_prefix: file.management_prefix.unwrap_or(defaults.management_prefix),
        }
    }

    pub fn line_filter(&self) -> Result<LineFilter> {
        LineFilter::new(self.management_prefix.clone(), &self.excluded_faces)
            .map_err(|e| LogstatError::config(format!("invalid face filter: {}", e)))
    }

    pub fn aggregator(&self) -> Result<LogAggregator> {
        Ok(LogAggregator::new()
            .with_filter(self.line_filter()?)
            .with_policy(self.policy))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            policy: MalformedPolicy::Strict,
            excluded_faces: DEFAULT_EXCLUDED_FACES.to_vec(),
            management_prefix: DEFAULT_MANAGEMENT_PREFIX.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
