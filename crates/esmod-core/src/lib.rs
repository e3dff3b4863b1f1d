//! Codemod engine for ECMAScript module syntax
//!
//! A [`TransformRule`] rewrites one parsed file and returns a
//! [`ChangeReport`]; the [`Walker`] applies a rule to every eligible file
//! under a directory, persists changed files through a [`Runtime`] and folds
//! the per-file reports into a total.
//!
//! # Examples
//!
//! ```rust
//! use esmod_core::{CodemodOptions, MemoryRuntime, run};
//! use std::path::Path;
//!
//! let runtime = MemoryRuntime::new()
//!     .with_file("/app/src/main.ts", "import { a } from './a';\nimport b from './a';\n");
//!
//! let report = run(
//!     &runtime,
//!     "merge-duplicate-imports",
//!     Path::new("/app"),
//!     &CodemodOptions::default(),
//! )?;
//!
//! assert_eq!(report.file_count, 1);
//! assert_eq!(report.count("duplicateImportsMerged"), 2);
//! assert_eq!(
//!     runtime.text("/app/src/main.ts").as_deref(),
//!     Some("import b, { a } from './a';\n")
//! );
//! # Ok::<(), esmod_core::CodemodError>(())
//! ```

pub mod error;
pub mod options;
pub mod registry;
pub mod report;
pub mod rules;
pub mod runtime;
pub mod specifier;
pub mod walker;

pub use error::{CodemodError, Result};
pub use options::CodemodOptions;
pub use registry::{CodemodKind, resolve};
pub use report::{ChangeReport, Counter};
pub use rules::TransformRule;
pub use runtime::{FileMetadata, NativeRuntime, Runtime, RuntimeError, RuntimeResult};
pub use specifier::{ModuleReference, SpecifierKind, classify};
pub use walker::{Walker, run};

#[cfg(any(test, feature = "test-utils"))]
pub use runtime::MemoryRuntime;
