//! Selector tokens and the rules they name

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::{CodemodError, Result};
use crate::rules::{
    DataHookCallMigrator, DuplicateImportMerger, IconImportSplitter, ImportExtensionNormalizer,
    ImportExtensionStripper, TransformRule,
};

/// The closed set of codemods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CodemodKind {
    #[default]
    ConvertToJsImports,
    RemoveJsImports,
    MergeDuplicateImports,
    MergeMuiIcons,
    ReactQueryV5Migrate,
}

impl CodemodKind {
    pub const ALL: [CodemodKind; 5] = [
        CodemodKind::ConvertToJsImports,
        CodemodKind::RemoveJsImports,
        CodemodKind::MergeDuplicateImports,
        CodemodKind::MergeMuiIcons,
        CodemodKind::ReactQueryV5Migrate,
    ];

    /// Selector token
    pub const fn as_str(self) -> &'static str {
        match self {
            CodemodKind::ConvertToJsImports => "convert-to-.js-imports",
            CodemodKind::RemoveJsImports => "remove-.js-imports",
            CodemodKind::MergeDuplicateImports => "merge-duplicate-imports",
            CodemodKind::MergeMuiIcons => "merge-mui-icons",
            CodemodKind::ReactQueryV5Migrate => "react-query-v5-migrate",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CodemodKind::ConvertToJsImports => {
                "Add .js to relative imports and type attributes to JSON imports"
            }
            CodemodKind::RemoveJsImports => "Strip .js from relative imports",
            CodemodKind::MergeDuplicateImports => "Merge imports of the same module",
            CodemodKind::MergeMuiIcons => "Import icons by name from the icon library root",
            CodemodKind::ReactQueryV5Migrate => "Rewrite data hooks to the single-object signature",
        }
    }

    /// Every selector token, in registry order
    pub fn available() -> Vec<String> {
        Self::ALL.iter().map(|kind| kind.as_str().to_string()).collect()
    }

    pub fn rule(self) -> Box<dyn TransformRule> {
        match self {
            CodemodKind::ConvertToJsImports => Box::new(ImportExtensionNormalizer),
            CodemodKind::RemoveJsImports => Box::new(ImportExtensionStripper),
            CodemodKind::MergeDuplicateImports => Box::new(DuplicateImportMerger),
            CodemodKind::MergeMuiIcons => Box::new(IconImportSplitter),
            CodemodKind::ReactQueryV5Migrate => Box::new(DataHookCallMigrator),
        }
    }
}

impl fmt::Display for CodemodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodemodKind {
    type Err = CodemodError;

    fn from_str(selector: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == selector)
            .ok_or_else(|| CodemodError::UnsupportedSelector {
                selector: selector.to_string(),
                available: Self::available(),
            })
    }
}

/// Resolve a selector token to its rule
///
/// # Errors
///
/// [`CodemodError::UnsupportedSelector`] listing every valid token.
pub fn resolve(selector: &str) -> Result<Box<dyn TransformRule>> {
    let kind: CodemodKind = selector.parse()?;
    debug!(codemod = %kind, "resolved codemod");
    Ok(kind.rule())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_token() {
        for kind in CodemodKind::ALL {
            assert_eq!(kind.as_str().parse::<CodemodKind>().unwrap(), kind);
            assert_eq!(kind.rule().name(), kind.as_str());
        }
    }

    #[test]
    fn default_is_the_normalizer() {
        assert_eq!(resolve("convert-to-.js-imports").unwrap().name(), CodemodKind::default().as_str());
    }

    #[test]
    fn unknown_selector_lists_available() {
        let err = resolve("nope").unwrap_err();
        match err {
            CodemodError::UnsupportedSelector {
                selector,
                available,
            } => {
                assert_eq!(selector, "nope");
                assert_eq!(available.len(), 5);
                assert!(available.contains(&"merge-mui-icons".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
