//! Tunables shared by the rules and the walker

use std::path::Path;

use serde::{Deserialize, Serialize};

pub fn default_ignored_extensions() -> Vec<String> {
    vec![".svg".into(), ".png".into(), ".css".into()]
}

pub fn default_source_extensions() -> Vec<String> {
    vec!["ts".into(), "tsx".into()]
}

pub fn default_icon_library() -> String {
    "@mui/icons-material".to_string()
}

pub fn default_query_module() -> String {
    "@tanstack/react-query".to_string()
}

/// Options for one codemod run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodemodOptions {
    /// Specifier suffixes that mark non-code assets
    #[serde(default = "default_ignored_extensions")]
    pub ignored_extensions: Vec<String>,

    /// File extensions (without the dot) the walker hands to a rule
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,

    /// Package whose per-icon default imports get folded into named imports
    #[serde(default = "default_icon_library")]
    pub icon_library: String,

    /// Package exporting the data-fetching hooks
    #[serde(default = "default_query_module")]
    pub query_module: String,
}

impl Default for CodemodOptions {
    fn default() -> Self {
        Self {
            ignored_extensions: default_ignored_extensions(),
            source_extensions: default_source_extensions(),
            icon_library: default_icon_library(),
            query_module: default_query_module(),
        }
    }
}

impl CodemodOptions {
    /// Whether `path` carries one of the source extensions
    pub fn is_source_file(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.source_extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.') == ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = CodemodOptions::default();
        assert_eq!(options.ignored_extensions, [".svg", ".png", ".css"]);
        assert_eq!(options.icon_library, "@mui/icons-material");
        assert_eq!(options.query_module, "@tanstack/react-query");
    }

    #[test]
    fn eligibility_by_extension() {
        let options = CodemodOptions::default();
        assert!(options.is_source_file(Path::new("src/a.ts")));
        assert!(options.is_source_file(Path::new("App.tsx")));
        assert!(!options.is_source_file(Path::new("index.js")));
        assert!(!options.is_source_file(Path::new("types.d.mts")));
        assert!(!options.is_source_file(Path::new("Makefile")));

        let dotted = CodemodOptions {
            source_extensions: vec![".js".into()],
            ..CodemodOptions::default()
        };
        assert!(dotted.is_source_file(Path::new("index.js")));
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let options: CodemodOptions =
            serde_json::from_str(r#"{ "iconLibrary": "@acme/icons" }"#).unwrap();
        assert_eq!(options.icon_library, "@acme/icons");
        assert_eq!(options.source_extensions, ["ts", "tsx"]);
    }
}
