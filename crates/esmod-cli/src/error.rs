//! Error handling for the esmod CLI.
//!
//! `CliError` is what commands return. Library errors convert into it via
//! `#[from]`, and `main` turns it into a miette report.
//!
//! # Example
//!
//! ```rust,no_run
//! use esmod_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .context("Failed to read the codemod input")
//! }
//! ```

mod report;

pub use report::cli_error_to_miette;

use esmod_core::CodemodError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Selector resolution or codemod failures
    #[error(transparent)]
    Codemod(#[from] CodemodError),

    /// Configuration loading and validation failures
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Create the file or drop --config to use esmod.toml", .0.display())]
    NotFound(PathBuf),

    /// The layered configuration could not be deserialized
    #[error("Invalid configuration: {message}\n\nHint: Check esmod.toml syntax and ESMOD_* environment variables")]
    Invalid { message: String },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{msg}: {err}"))
        })
    }
}
