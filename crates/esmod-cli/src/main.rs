//! esmod - rewrite import declarations across a source tree.
//!
//! Parses arguments, initializes logging and colors, runs the selected
//! codemod and reports errors through miette.

use clap::Parser;
use esmod_cli::{cli, commands, error, logger, ui};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    commands::run_execute(args)
        .map(|_| ())
        .map_err(error::cli_error_to_miette)
}
