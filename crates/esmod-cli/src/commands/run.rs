//! The codemod run: resolve, walk, report.

use crate::cli::Cli;
use crate::config::EsmodConfig;
use crate::error::{Result, ResultExt};
use crate::ui;
use esmod_core::{ChangeReport, NativeRuntime, Walker};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Execute a run described by parsed command-line arguments.
pub fn execute(args: Cli) -> Result<ChangeReport> {
    let root = resolve_root(&args.directory)?;

    let config = EsmodConfig::load(args.config.as_deref(), args.codemod.as_deref())?;
    config.validate()?;

    // Fails before any file is read
    let rule = esmod_core::resolve(&config.codemod)?;
    debug!(codemod = rule.name(), root = %root.display(), "starting run");

    let runtime = NativeRuntime::new();
    let report = Walker::new(&runtime, rule.as_ref(), &config.options).walk(&root);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        ui::print_summary(&report);
    }
    Ok(report)
}

/// Resolve `directory` against the current directory
fn resolve_root(directory: &Path) -> Result<PathBuf> {
    let root = if directory.is_absolute() {
        directory.to_path_buf()
    } else {
        std::env::current_dir()
            .context("Failed to read the current directory")?
            .join(directory)
    };

    std::fs::metadata(&root).with_path(&root)?;
    Ok(root)
}
