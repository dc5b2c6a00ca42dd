//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// For `LogstatError` the user message is always shown and the developer
/// message with its source chain only in verbose mode. Other errors print
/// their message (and chain when verbose) and exit with 1.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);
    eprintln!("{}", fatal_message(&error, verbose));
    std::process::exit(exit_code(&error))
}

/// Exit code for a top-level error
pub fn exit_code(error: &anyhow::Error) -> i32 {
    use crate::error::LogstatError;

    error
        .downcast_ref::<LogstatError>()
        .map_or(1, LogstatError::exit_code)
}

fn fatal_message(error: &anyhow::Error, verbose: u8) -> String {
    use crate::error::LogstatError;

    if let Some(logstat_err) = error.downcast_ref::<LogstatError>() {
        let mut message = format!("Error: {}", logstat_err.user_message());
        if verbose >= 1 {
            message.push_str(&format!(
                "\n\nContext Chain:\n{}",
                logstat_err.developer_message()
            ));
        }
        message
    } else {
        let mut message = format!("Error: {error}");
        if verbose >= 1 {
            message.push_str("\n\nError chain:");
            for (i, cause) in error.chain().enumerate() {
                message.push_str(&format!("\n  {}: {}", i, cause));
            }
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogstatError;

    #[test]
    fn test_exit_code_from_logstat_error() {
        let err = anyhow::Error::new(LogstatError::InputNotFound { paths: vec![] });
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn test_exit_code_for_other_errors() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn test_verbose_message_includes_chain() {
        let err = anyhow::Error::new(LogstatError::io(
            "data.dat",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        ));
        let quiet = fatal_message(&err, 0);
        let verbose = fatal_message(&err, 1);

        assert!(quiet.starts_with("Error: Cannot access data.dat"));
        assert!(!quiet.contains("Context Chain"));
        assert!(verbose.contains("caused by: denied"));
    }

    #[test]
    fn test_plain_error_chain() {
        let err = anyhow::anyhow!("root").context("outer");
        let verbose = fatal_message(&err, 1);
        assert!(verbose.contains("0: outer"));
        assert!(verbose.contains("1: root"));
    }
}
