//! esmod CLI - codemods for ECMAScript module imports.
//!
//! The binary parses arguments ([`cli`]), layers configuration
//! ([`config`]), installs logging ([`logger`]), runs one codemod over a
//! directory ([`commands`]) and prints the change report ([`ui`]). Failures
//! are [`error::CliError`]s, rendered through miette in `main`.
//!
//! # Example
//!
//! ```rust,no_run
//! use clap::Parser;
//! use esmod_cli::{cli::Cli, commands, logger};
//!
//! let args = Cli::parse_from(["esmod", "--type", "merge-duplicate-imports", "src"]);
//! logger::init_logger(args.verbose, args.quiet, args.no_color);
//! let report = commands::run_execute(args)?;
//! println!("{} file(s) changed", report.file_count);
//! # Ok::<(), esmod_cli::CliError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
