//! Common test utilities and helpers

#![allow(dead_code)]

use anyhow::Result;
use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Directory the binary runs in; the default log lives at `../../results/`
pub const RUN_DIR: &str = "sim/scripts";

pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture_text(name: &str) -> String {
    fs::read_to_string(fixture(name)).unwrap()
}

/// One incoming Interest record on a network face
pub fn interest_line(time: f64) -> String {
    format!(
        "+{time:.9}s 1 nfd.Forwarder:onIncomingInterest(): [DEBUG] onIncomingInterest in=(257,0) interest=/prefix"
    )
}

/// Test context builder for setting up test environments
pub struct TestContextBuilder {
    temp_dir: TempDir,
    with_results_dir: bool,
    initial_files: Vec<(PathBuf, String)>,
}

impl TestContextBuilder {
    /// Create a new test context builder
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
            with_results_dir: false,
            initial_files: Vec::new(),
        })
    }

    /// Create the `results/` directory the default paths point into
    pub fn with_results_dir(mut self) -> Self {
        self.with_results_dir = true;
        self
    }

    /// Place a log at the default input path
    pub fn with_default_log(self, content: &str) -> Self {
        self.with_results_dir()
            .with_file("results/logfile.log", content)
    }

    /// Add an initial file, relative to the context root
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        self.initial_files
            .push((path.as_ref().to_path_buf(), content.to_string()));
        self
    }

    /// Build the test context
    pub fn build(self) -> Result<TestContext> {
        let path = self.temp_dir.path();
        fs::create_dir_all(path.join(RUN_DIR))?;

        if self.with_results_dir {
            fs::create_dir_all(path.join("results"))?;
        }

        for (file_path, content) in self.initial_files {
            let full_path = path.join(file_path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(full_path, content)?;
        }

        Ok(TestContext {
            temp_dir: self.temp_dir,
        })
    }
}

/// Test context that manages temporary directories and cleanup
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    /// Get the path to the test directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Directory the binary is started in
    pub fn run_dir(&self) -> PathBuf {
        self.path().join(RUN_DIR)
    }

    /// Read a file from the test directory
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let full_path = self.temp_dir.path().join(path);
        Ok(fs::read_to_string(full_path)?)
    }

    /// Check if a file exists
    pub fn file_exists(&self, path: impl AsRef<Path>) -> bool {
        self.temp_dir.path().join(path).exists()
    }

    /// The binary, started in [`run_dir`](Self::run_dir) with a clean environment
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("ndn-logstat").unwrap();
        cmd.current_dir(self.run_dir())
            .env_remove("NDN_LOGSTAT_LOG")
            .env_remove("NDN_LOGSTAT_OUTPUT");
        cmd
    }
}
