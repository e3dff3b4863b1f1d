//! Parsing source text with OXC
//!
//! The source type (JavaScript, TypeScript, JSX, TSX) follows the file
//! extension. Any diagnostic makes the parse fail: rules only ever see
//! programs OXC accepted without complaint.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{EditError, Result};

/// A program that parsed cleanly, borrowing its allocator and text
pub struct ParsedProgram<'a> {
    program: Program<'a>,
    source_text: &'a str,
}

impl<'a> ParsedProgram<'a> {
    pub fn ast(&self) -> &Program<'a> {
        &self.program
    }

    pub fn source_text(&self) -> &'a str {
        self.source_text
    }
}

/// Parse `source` as the content of `path`
///
/// Unknown extensions are parsed as ES modules.
pub fn parse<'a>(allocator: &'a Allocator, path: &Path, source: &'a str) -> Result<ParsedProgram<'a>> {
    let source_type = SourceType::from_path(path).unwrap_or(SourceType::mjs());
    let result = Parser::new(allocator, source, source_type).parse();

    let context = path.display().to_string();
    if result.panicked {
        return Err(EditError::parse_failed(context, "parser aborted"));
    }
    if !result.errors.is_empty() {
        let reason = result
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return Err(EditError::parse_failed(context, reason));
    }

    Ok(ParsedProgram {
        program: result.program,
        source_text: source,
    })
}
