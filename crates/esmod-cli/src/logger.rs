//! Logging infrastructure for the esmod CLI.
//!
//! The library crates log through `tracing`: every rewritten file at info
//! level, skipped and unchanged files at debug, unreadable files as warnings
//! and failed writes as errors. This module installs the subscriber that
//! renders those events on stderr, keeping stdout free for the summary.
//!
//! # Example
//!
//! ```rust,no_run
//! use esmod_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Starting run");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "esmod_core=debug,esmod_edit=debug,esmod_cli=debug";
const QUIET_FILTER: &str = "esmod_core=error,esmod_edit=error,esmod_cli=error";
const DEFAULT_FILTER: &str = "esmod_core=info,esmod_edit=info,esmod_cli=info";

/// Pick the filter for the given flags.
///
/// The level is determined in this order:
/// 1. `--verbose`: DEBUG for esmod crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for esmod crates
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at startup, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize the tracing subscriber with a custom filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
