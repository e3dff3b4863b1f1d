//! Command-line interface definition for esmod.
//!
//! `esmod [OPTIONS] <DIRECTORY>` applies one codemod to every eligible file
//! under the directory and prints what changed.


use clap::Parser;
use std::path::PathBuf;

const CODEMODS_HELP: &str = "\
Codemods:
  convert-to-.js-imports   Add .js to relative imports and type attributes to JSON imports
  remove-.js-imports       Strip .js from relative imports
  merge-duplicate-imports  Merge imports of the same module
  merge-mui-icons          Import icons by name from the icon library root
  react-query-v5-migrate   Rewrite data hooks to the single-object signature";

/// esmod - codemods for ECMAScript module imports
#[derive(Parser, Debug)]
#[command(
    name = "esmod",
    version,
    about = "Codemods for ECMAScript module imports",
    long_about = "esmod rewrites JavaScript and TypeScript sources in place.\n\
                  It touches only the import declarations and calls a codemod targets,\n\
                  leaving every other byte of the file as written.",
    after_help = CODEMODS_HELP
)]
pub struct Cli {
    /// Directory to rewrite (a single file works too)
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Codemod to apply [default: convert-to-.js-imports]
    #[arg(short = 't', long = "type", value_name = "CODEMOD")]
    pub codemod: Option<String>,

    /// Path to an esmod.toml (or .json/.yaml) configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the change report as JSON instead of the text summary
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Also logs every file the codemod leaves unchanged.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
