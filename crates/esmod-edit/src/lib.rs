//! Concrete-syntax-preserving edit surface for JavaScript/TypeScript sources
//!
//! This crate parses files with OXC, exposes owned snapshots of the nodes a
//! codemod inspects (import declarations, identifier calls, member accesses)
//! and applies span-based text edits, so formatting outside touched nodes is
//! left exactly as written.
//!
//! # Examples
//!
//! ```rust
//! use esmod_edit::{SourceEdits, SourceFile};
//!
//! let mut file = SourceFile::from_source("a.ts", "import a from './a';\n")?;
//! let specifier = file.imports()?[0].source.span;
//!
//! let mut edits = SourceEdits::new();
//! edits.insert(specifier.end - 1, ".js");
//! file.apply(&edits)?;
//!
//! assert_eq!(file.text(), "import a from './a.js';\n");
//! # Ok::<(), esmod_edit::EditError>(())
//! ```

mod edit;
mod error;
mod format;
mod parser;
pub mod query;
mod source;

pub use edit::{SourceEdits, TextEdit, span_text};
pub use error::{EditError, Result};
pub use format::QuoteStyle;
pub use parser::{ParsedProgram, parse};
pub use query::{
    AttributeEntry, CallArgument, CallSite, ImportAttributes, ImportBinding, ModuleSpecifier,
    NamedImport, ObjectMember, ObjectMemberKind,
};
pub use source::SourceFile;

// Re-export commonly used OXC types for convenience
pub use oxc_allocator::Allocator;
pub use oxc_span::Span;
