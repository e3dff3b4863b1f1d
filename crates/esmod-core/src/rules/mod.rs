//! Transform rules
//!
//! Every rule implements [`TransformRule`]: it mutates one [`SourceFile`] in
//! memory and reports what it changed. Persisting the result is the walker's
//! job.

mod data_hooks;
mod extensions;
mod icons;
mod merge;

pub use data_hooks::DataHookCallMigrator;
pub use extensions::{ImportExtensionNormalizer, ImportExtensionStripper};
pub use icons::IconImportSplitter;
pub use merge::DuplicateImportMerger;

use esmod_edit::SourceFile;

use crate::error::Result;
use crate::options::CodemodOptions;
use crate::report::ChangeReport;

/// A structural rewrite applied to one file at a time
pub trait TransformRule: Send + Sync + std::fmt::Debug {
    /// Selector token of the rule
    fn name(&self) -> &'static str;

    /// Rewrite `file` in place
    ///
    /// A file the rule leaves alone yields an all-zero report.
    fn apply(&self, file: &mut SourceFile, options: &CodemodOptions) -> Result<ChangeReport>;
}
