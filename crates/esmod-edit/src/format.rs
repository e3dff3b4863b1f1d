//! Formatting conventions for text emitted into an existing file

/// Quote style for string literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteStyle {
    /// Single quotes: `'hello'`
    Single,
    /// Double quotes: `"hello"`
    #[default]
    Double,
}

impl QuoteStyle {
    /// Detect the quote style of a raw string literal (including its quotes)
    pub fn detect(raw: &str) -> Self {
        if raw.starts_with('\'') {
            QuoteStyle::Single
        } else {
            QuoteStyle::Double
        }
    }

    /// The quote character itself
    pub fn as_char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }

    /// Render `value` as a string literal in this style
    pub fn quote(self, value: &str) -> String {
        let q = self.as_char();
        let mut out = String::with_capacity(value.len() + 2);
        out.push(q);
        for ch in value.chars() {
            if ch == q || ch == '\\' {
                out.push('\\');
            }
            out.push(ch);
        }
        out.push(q);
        out
    }
}
