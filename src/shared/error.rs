use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow wrapper scripts to distinguish a rejected project id
/// from other failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Inventory collected and summary persisted
    Success = 0,
    /// The project id failed syntactic validation; nothing was executed
    InvalidScope = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, file I/O, summary persistence, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error returned from the application
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<InventoryError>() {
            Some(InventoryError::InvalidScope { .. }) => ExitCode::InvalidScope,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidScope => write!(f, "Invalid Scope (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the inventory engine.
///
/// Only `InvalidScope` aborts a run. The command and cache variants are
/// built so their messages can be logged; the runner and cache recover
/// from them locally and never return them to callers.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Invalid project id: '{scope}'\nReason: {reason}\n\n💡 Hint: GCP project ids are 6-30 characters of lowercase letters, digits and hyphens, start with a letter and do not end with a hyphen")]
    InvalidScope { scope: String, reason: String },

    #[error("Command failed: {command}\nDetails: {stderr}")]
    CommandFailed { command: String, stderr: String },

    #[error("Command produced output that is not valid JSON: {command}\nDetails: {details}")]
    MalformedOutput { command: String, details: String },

    #[error("Failed to read cache entry: {path}\nDetails: {details}")]
    CacheReadError { path: PathBuf, details: String },

    #[error("Failed to write cache entry: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the cache directory is writable")]
    CacheWriteError { path: PathBuf, details: String },

    #[error("Failed to write inventory summary: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    SummaryWriteError { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}
