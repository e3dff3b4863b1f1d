//! Span-based text edits
//!
//! Rules never reprint a whole program. They record replacements against the
//! spans the parser reported, and [`SourceEdits::apply`] splices them into the
//! original text, so every byte outside a touched node survives unchanged.

use crate::error::{EditError, Result};
use oxc_span::Span;

/// A single replacement of `span` with `text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: Span,
    pub text: String,
}

/// An ordered set of non-overlapping edits against one source text
#[derive(Debug, Clone, Default)]
pub struct SourceEdits {
    edits: Vec<TextEdit>,
}

impl SourceEdits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text covered by `span`
    pub fn replace(&mut self, span: Span, text: impl Into<String>) {
        self.edits.push(TextEdit {
            span,
            text: text.into(),
        });
    }

    /// Insert `text` at byte offset `at`
    pub fn insert(&mut self, at: u32, text: impl Into<String>) {
        self.replace(Span::new(at, at), text);
    }

    /// Delete the text covered by `span`
    pub fn remove(&mut self, span: Span) {
        self.replace(span, String::new());
    }

    /// Delete a whole statement, together with its line when nothing else lives on it.
    ///
    /// When the statement shares its line with other code only the horizontal
    /// whitespace separating it from its neighbour is swallowed.
    pub fn remove_statement(&mut self, span: Span, source: &str) {
        let bytes = source.as_bytes();
        let len = bytes.len();
        let is_blank = |b: u8| b == b' ' || b == b'\t';

        let mut after = (span.end as usize).min(len);
        while after < len && is_blank(bytes[after]) {
            after += 1;
        }
        let mut before = (span.start as usize).min(len);
        while before > 0 && is_blank(bytes[before - 1]) {
            before -= 1;
        }

        let ends_line = after == len || bytes[after] == b'\n' || bytes[after] == b'\r';
        let starts_line = before == 0 || bytes[before - 1] == b'\n';

        let (start, end) = if starts_line && ends_line {
            let mut end = after;
            if end < len && bytes[end] == b'\r' {
                end += 1;
            }
            if end < len && bytes[end] == b'\n' {
                end += 1;
            }
            (before, end)
        } else if ends_line {
            (before, after)
        } else {
            (span.start as usize, after)
        };

        self.remove(Span::new(start as u32, end as u32));
    }

    /// Delete several statements at once
    ///
    /// Statements separated only by spaces or tabs are removed as one run, so
    /// neighbours on a shared line never claim the same whitespace.
    pub fn remove_statements(&mut self, spans: impl IntoIterator<Item = Span>, source: &str) {
        let mut spans: Vec<Span> = spans.into_iter().collect();
        spans.sort_by_key(|span| span.start);

        let mut runs: Vec<Span> = Vec::new();
        for span in spans {
            match runs.last_mut() {
                Some(run) if only_blanks_between(source, *run, span) => run.end = span.end,
                _ => runs.push(span),
            }
        }
        for run in runs {
            self.remove_statement(run, source);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Splice all edits into `source`
    ///
    /// # Errors
    ///
    /// Fails when two edits overlap or an edit lies outside of `source`.
    pub fn apply(&self, source: &str) -> Result<String> {
        let mut sorted: Vec<&TextEdit> = self.edits.iter().collect();
        sorted.sort_by_key(|edit| (edit.span.start, edit.span.end));

        for edit in &sorted {
            let (start, end) = (edit.span.start as usize, edit.span.end as usize);
            if start > end
                || end > source.len()
                || !source.is_char_boundary(start)
                || !source.is_char_boundary(end)
            {
                return Err(EditError::EditOutOfBounds {
                    start: edit.span.start,
                    end: edit.span.end,
                    len: source.len(),
                });
            }
        }

        for pair in sorted.windows(2) {
            let (first, second) = (pair[0].span, pair[1].span);
            if first.end > second.start {
                return Err(EditError::OverlappingEdits {
                    first_start: first.start,
                    first_end: first.end,
                    second_start: second.start,
                    second_end: second.end,
                });
            }
        }

        let mut out = String::with_capacity(source.len());
        let mut cursor = 0usize;
        for edit in sorted {
            out.push_str(&source[cursor..edit.span.start as usize]);
            out.push_str(&edit.text);
            cursor = edit.span.end as usize;
        }
        out.push_str(&source[cursor..]);
        Ok(out)
    }
}

fn only_blanks_between(source: &str, left: Span, right: Span) -> bool {
    left.end <= right.start
        && source
            .get(left.end as usize..right.start as usize)
            .is_some_and(|gap| gap.bytes().all(|b| b == b' ' || b == b'\t'))
}

/// Slice the text covered by `span`
pub fn span_text(source: &str, span: Span) -> &str {
    &source[span.start as usize..span.end as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span_of(source: &str, needle: &str) -> Span {
        let start = source.find(needle).unwrap() as u32;
        Span::new(start, start + needle.len() as u32)
    }

    #[test]
    fn applies_edits_out_of_order() {
        let source = "let a = 1; let b = 2;";
        let mut edits = SourceEdits::new();
        edits.replace(span_of(source, "2"), "20");
        edits.replace(span_of(source, "1"), "10");
        assert_eq!(edits.apply(source).unwrap(), "let a = 10; let b = 20;");
    }

    #[test]
    fn inserts_at_offset() {
        let source = "import a from './a';";
        let mut edits = SourceEdits::new();
        edits.insert(18, ".js");
        assert_eq!(edits.apply(source).unwrap(), "import a from './a.js';");
    }

    #[test]
    fn rejects_overlapping_edits() {
        let source = "abcdef";
        let mut edits = SourceEdits::new();
        edits.replace(Span::new(0, 4), "x");
        edits.replace(Span::new(2, 6), "y");
        assert!(matches!(
            edits.apply(source),
            Err(EditError::OverlappingEdits { .. })
        ));
    }

    #[test]
    fn rejects_out_of_bounds_edits() {
        let mut edits = SourceEdits::new();
        edits.replace(Span::new(2, 10), "x");
        assert!(matches!(
            edits.apply("abc"),
            Err(EditError::EditOutOfBounds { .. })
        ));
    }

    #[test]
    fn remove_statement_drops_its_line() {
        let source = "import a from './a';\nimport b from './b';\nfoo();\n";
        let mut edits = SourceEdits::new();
        edits.remove_statement(span_of(source, "import b from './b';"), source);
        assert_eq!(edits.apply(source).unwrap(), "import a from './a';\nfoo();\n");
    }

    #[test]
    fn remove_statement_keeps_shared_line_content() {
        let source = "import a from './a'; import b from './b';";
        let mut edits = SourceEdits::new();
        edits.remove_statement(span_of(source, "import b from './b';"), source);
        assert_eq!(edits.apply(source).unwrap(), "import a from './a';");
    }

    #[test]
    fn remove_statement_followed_by_code() {
        let source = "import b from './b'; foo();";
        let mut edits = SourceEdits::new();
        edits.remove_statement(span_of(source, "import b from './b';"), source);
        assert_eq!(edits.apply(source).unwrap(), "foo();");
    }

    #[test]
    fn removes_runs_of_statements_on_one_line() {
        let source = "import a from './a'; import b from './a'; import c from './a';\n";
        let mut edits = SourceEdits::new();
        edits.remove_statements(
            [
                span_of(source, "import c from './a';"),
                span_of(source, "import b from './a';"),
            ],
            source,
        );
        assert_eq!(edits.apply(source).unwrap(), "import a from './a';\n");
    }

    #[test]
    fn removes_separate_runs_independently() {
        let source = "import a from './a'; keep(); import b from './b'; import c from './c'; more();";
        let mut edits = SourceEdits::new();
        edits.remove_statements(
            [
                span_of(source, "import a from './a';"),
                span_of(source, "import b from './b';"),
                span_of(source, "import c from './c';"),
            ],
            source,
        );
        assert_eq!(edits.apply(source).unwrap(), "keep(); more();");
    }
}
