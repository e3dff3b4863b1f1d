//! Error types for the codemod engine

use std::path::PathBuf;

use esmod_edit::EditError;
use miette::Diagnostic;
use thiserror::Error;

use crate::runtime::RuntimeError;

/// Errors raised while resolving or applying a codemod
#[derive(Error, Debug, Diagnostic)]
pub enum CodemodError {
    /// The file could not be handed back as a valid parse handle
    ///
    /// Covers missing, unreadable, non-UTF-8 and unparseable files. The walker
    /// logs these and moves on.
    #[error("Cannot load '{}': {reason}", path.display())]
    #[diagnostic(code(esmod::core::file_not_found))]
    FileNotFound { path: PathBuf, reason: String },

    /// The selector token names no registered transform
    #[error("Unsupported codemod '{selector}'")]
    #[diagnostic(
        code(esmod::core::unsupported_selector),
        help("Available codemods:\n{}", available.join("\n"))
    )]
    UnsupportedSelector {
        selector: String,
        available: Vec<String>,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Edit(#[from] EditError),

    #[error(transparent)]
    #[diagnostic(code(esmod::core::runtime))]
    Runtime(#[from] RuntimeError),
}

impl CodemodError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::FileNotFound {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for codemod operations
pub type Result<T> = std::result::Result<T, CodemodError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_selector_lists_available_names() {
        let err = CodemodError::UnsupportedSelector {
            selector: "nope".into(),
            available: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "Unsupported codemod 'nope'");
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert_eq!(help, "Available codemods:\na\nb");
    }

    #[test]
    fn file_not_found_names_the_path() {
        let err = CodemodError::file_not_found("src/a.ts", "stream did not contain valid UTF-8");
        assert!(err.to_string().contains("src/a.ts"));
        assert!(err.to_string().contains("UTF-8"));
    }
}
