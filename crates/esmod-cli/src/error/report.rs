//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        // Keeps the diagnostic code and the codemod listing in `help`
        CliError::Codemod(e) => Report::new(e),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        other => miette::miette!("{}", other),
    }
}
