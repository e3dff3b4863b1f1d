//! Source file handle
//!
//! A [`SourceFile`] owns the text of one file and re-parses it on demand.
//! Queries return owned snapshots, edits are applied as text splices, and the
//! next query sees the updated text. This lets a rule work in several phases
//! without holding an arena-allocated AST across mutations.

use std::path::{Path, PathBuf};

use oxc_allocator::Allocator;
use oxc_span::Span;

use crate::edit::SourceEdits;
use crate::error::Result;
use crate::parser::{ParsedProgram, parse};
use crate::query::{
    CallSite, ImportBinding, collect_calls, collect_imports, collect_member_properties,
};

/// A loaded, parseable source file
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    original: String,
    text: String,
}

impl SourceFile {
    /// Wrap `text` as the content of `path`
    ///
    /// # Errors
    ///
    /// Returns [`crate::EditError::ParseFailed`] when the text is not a valid program
    /// for the source type implied by the path's extension.
    pub fn from_source(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        let file = Self {
            path: path.into(),
            original: text.clone(),
            text,
        };
        file.inspect(|_| ())?;
        Ok(file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current text, including any applied edits
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the current text differs from what was loaded
    pub fn is_modified(&self) -> bool {
        self.text != self.original
    }

    /// Parse the current text and hand the program to `f`
    pub fn inspect<R>(&self, f: impl for<'a> FnOnce(&ParsedProgram<'a>) -> R) -> Result<R> {
        let allocator = Allocator::default();
        let parsed = parse(&allocator, &self.path, &self.text)?;
        Ok(f(&parsed))
    }

    /// Top-level import declarations in source order
    pub fn imports(&self) -> Result<Vec<ImportBinding>> {
        self.inspect(|parsed| collect_imports(parsed.ast(), parsed.source_text()))
    }

    /// Calls whose callee is exactly one of `callees`
    pub fn calls_to(&self, callees: &[&str]) -> Result<Vec<CallSite>> {
        self.inspect(|parsed| collect_calls(parsed.ast(), parsed.source_text(), callees))
    }

    /// Property-name spans of every static member access named `property`
    pub fn member_properties(&self, property: &str) -> Result<Vec<Span>> {
        self.inspect(|parsed| collect_member_properties(parsed.ast(), property))
    }

    /// Splice `edits` into the current text
    pub fn apply(&mut self, edits: &SourceEdits) -> Result<()> {
        if edits.is_empty() {
            return Ok(());
        }
        self.text = edits.apply(&self.text)?;
        Ok(())
    }

    /// Consume the handle, returning the current text
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_source() {
        let err = SourceFile::from_source("src/bad.ts", "import { from 'x'").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("src/bad.ts"), "{msg}");
    }

    #[test]
    fn tracks_modification() {
        let mut file = SourceFile::from_source("a.ts", "import a from './a';").unwrap();
        assert!(!file.is_modified());

        let import = file.imports().unwrap().remove(0);
        let mut edits = SourceEdits::new();
        edits.replace(import.source.span, "'./b'");
        file.apply(&edits).unwrap();

        assert!(file.is_modified());
        assert_eq!(file.text(), "import a from './b';");
        assert_eq!(file.imports().unwrap()[0].source.value, "./b");
    }

    #[test]
    fn parses_tsx_by_extension() {
        let file = SourceFile::from_source("App.tsx", "const x = <div>{1 as number}</div>;");
        assert!(file.is_ok());
    }
}
