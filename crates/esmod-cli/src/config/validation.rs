use crate::config::EsmodConfig;
use crate::error::{ConfigError, Result};

fn invalid(field: &str, value: impl Into<String>, hint: impl Into<String>) -> crate::error::CliError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.into(),
        hint: hint.into(),
    }
    .into()
}

impl EsmodConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        let options = &self.options;

        if options.source_extensions.is_empty() {
            return Err(invalid(
                "sourceExtensions",
                "[]",
                "List at least one extension, e.g. [\"ts\", \"tsx\"]",
            ));
        }
        for ext in &options.source_extensions {
            if ext.trim_start_matches('.').is_empty() || ext.contains(['/', '\\']) {
                return Err(invalid(
                    "sourceExtensions",
                    ext.as_str(),
                    "Use bare extensions such as \"ts\" without path separators",
                ));
            }
        }

        for ext in &options.ignored_extensions {
            if ext.is_empty() || ext.contains(['/', '\\']) {
                return Err(invalid(
                    "ignoredExtensions",
                    ext.as_str(),
                    "Use suffixes such as \".svg\" without path separators",
                ));
            }
        }

        if options.icon_library.trim_end_matches('/').is_empty() {
            return Err(invalid(
                "iconLibrary",
                options.icon_library.as_str(),
                "Name the icon package, e.g. \"@mui/icons-material\"",
            ));
        }
        if options.query_module.is_empty() {
            return Err(invalid(
                "queryModule",
                "\"\"",
                "Name the data-fetching package, e.g. \"@tanstack/react-query\"",
            ));
        }

        Ok(())
    }
}
