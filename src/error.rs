use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by a log aggregation run
#[derive(Error, Debug)]
pub enum LogstatError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("No input log found (tried: {})", display_paths(.paths))]
    InputNotFound { paths: Vec<PathBuf> },

    #[error("IO error at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line} in {file}: {reason}")]
    Parse {
        file: String,
        line: usize,
        reason: String,
    },
}

impl LogstatError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } => 2,
            Self::InputNotFound { .. } => 3,
            Self::Io { .. } => 4,
            Self::Parse { .. } => 5,
        }
    }

    /// Short message suitable for end users
    pub fn user_message(&self) -> String {
        match self {
            Self::Config { message } => format!("Configuration problem: {}", message),
            Self::InputNotFound { paths } if paths.is_empty() => {
                "No input log found and no input files were given".to_string()
            }
            Self::InputNotFound { paths } => {
                format!("No input log found (tried: {})", display_paths(paths))
            }
            Self::Io { path, source } => format!("Cannot access {}: {}", path.display(), source),
            Self::Parse { file, line, reason } => {
                format!("{}:{}: {} (rerun with --lenient to skip)", file, line, reason)
            }
        }
    }

    /// Full message including the source chain
    pub fn developer_message(&self) -> String {
        use std::error::Error as _;

        let mut message = format!("{:#}", self);
        let mut source = self.source();
        while let Some(cause) = source {
            message.push_str(&format!("\n  caused by: {}", cause));
            source = cause.source();
        }
        message
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LogstatError>;
