//! Error types for the edit surface

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while parsing or editing a source file
#[derive(Error, Debug, Diagnostic)]
pub enum EditError {
    /// The source text could not be parsed into a valid program
    #[error("Parse failed: {context} - {reason}")]
    #[diagnostic(code(esmod::edit::parse_failed))]
    ParseFailed { context: String, reason: String },

    /// Two edits touch the same range of source text
    #[error("Overlapping edits at {first_start}..{first_end} and {second_start}..{second_end}")]
    #[diagnostic(
        code(esmod::edit::overlapping_edits),
        help("Each node may only be rewritten once per edit set")
    )]
    OverlappingEdits {
        first_start: u32,
        first_end: u32,
        second_start: u32,
        second_end: u32,
    },

    /// An edit points past the end of the source text
    #[error("Edit range {start}..{end} is outside of the source text (length {len})")]
    #[diagnostic(code(esmod::edit::out_of_bounds))]
    EditOutOfBounds { start: u32, end: u32, len: usize },
}

impl EditError {
    pub fn parse_failed(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            context: context.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for edit surface operations
pub type Result<T> = std::result::Result<T, EditError>;
