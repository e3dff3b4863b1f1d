//! Directory traversal and report aggregation

use std::path::Path;

use esmod_edit::SourceFile;
use tracing::{debug, error, info, warn};

use crate::error::{CodemodError, Result};
use crate::options::CodemodOptions;
use crate::report::ChangeReport;
use crate::rules::TransformRule;
use crate::runtime::Runtime;

/// Applies one rule to every eligible file under a root
///
/// Traversal is depth-first with entries visited in name order. Files that
/// cannot be loaded, or that the rule fails on, are logged and contribute
/// nothing; they never stop the walk.
#[derive(Debug)]
pub struct Walker<'a, R: Runtime + ?Sized> {
    runtime: &'a R,
    rule: &'a dyn TransformRule,
    options: &'a CodemodOptions,
}

impl<'a, R: Runtime + ?Sized> Walker<'a, R> {
    pub fn new(runtime: &'a R, rule: &'a dyn TransformRule, options: &'a CodemodOptions) -> Self {
        Self {
            runtime,
            rule,
            options,
        }
    }

    /// Walk `root`, which may be a directory or a single file
    pub fn walk(&self, root: &Path) -> ChangeReport {
        let mut total = ChangeReport::new();
        if !self.runtime.exists(root) {
            warn!(root = %root.display(), "nothing to walk");
            return total;
        }
        self.visit(root, &mut total);
        total
    }

    fn visit(&self, path: &Path, total: &mut ChangeReport) {
        let metadata = match self.runtime.metadata(path) {
            Ok(metadata) => metadata,
            Err(err) => {
                warn!(path = %path.display(), "{err}");
                return;
            }
        };

        if metadata.is_dir {
            let mut entries = match self.runtime.read_dir(path) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), "{err}");
                    return;
                }
            };
            entries.sort();
            for entry in entries {
                self.visit(&path.join(entry), total);
            }
        } else if metadata.is_file && self.options.is_source_file(path) {
            total.fold(self.process(path));
        }
    }

    /// Load, transform and persist one file
    pub fn process(&self, path: &Path) -> ChangeReport {
        let mut file = match self.load(path) {
            Ok(file) => file,
            Err(err) => {
                warn!("{err}");
                return ChangeReport::new();
            }
        };

        let report = match self.rule.apply(&mut file, self.options) {
            Ok(report) => report,
            Err(err) => {
                warn!(path = %path.display(), codemod = self.rule.name(), "{err}");
                return ChangeReport::new();
            }
        };
        if report.is_empty() {
            debug!(path = %path.display(), "unchanged");
            return ChangeReport::new();
        }

        if let Err(err) = self.runtime.write_file(path, file.text().as_bytes()) {
            error!(path = %path.display(), "failed to write: {err}");
            return ChangeReport::new();
        }
        info!("✏ {}", path.display());
        report
    }

    fn load(&self, path: &Path) -> Result<SourceFile> {
        let bytes = self
            .runtime
            .read_file(path)
            .map_err(|err| CodemodError::file_not_found(path, err))?;
        let text =
            String::from_utf8(bytes).map_err(|err| CodemodError::file_not_found(path, err))?;
        SourceFile::from_source(path, text).map_err(|err| CodemodError::file_not_found(path, err))
    }
}

/// Resolve `selector` and walk `root` with it
///
/// # Errors
///
/// Only an unknown selector is fatal, and it is reported before any file is
/// read.
pub fn run<R: Runtime + ?Sized>(
    runtime: &R,
    selector: &str,
    root: &Path,
    options: &CodemodOptions,
) -> Result<ChangeReport> {
    let rule = crate::registry::resolve(selector)?;
    Ok(Walker::new(runtime, rule.as_ref(), options).walk(root))
}
