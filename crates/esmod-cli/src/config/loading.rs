use crate::config::{CONFIG_FILE, ENV_PREFIX, EsmodConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized, Toml, Yaml},
};
use std::path::Path;

impl EsmodConfig {
    /// Load configuration from every source.
    /// Priority: `--type` > environment variables > config file > defaults
    pub fn load(config_path: Option<&Path>, codemod: Option<&str>) -> Result<Self> {
        Self::figment(config_path, codemod)?
            .extract()
            .map_err(|e| ConfigError::Invalid {
                message: e.to_string(),
            })
            .map_err(Into::into)
    }

    fn figment(config_path: Option<&Path>, codemod: Option<&str>) -> Result<Figment> {
        let mut figment = Figment::new().merge(Serialized::defaults(EsmodConfig::default()));

        match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => figment = merge_file(figment, path),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    figment = merge_file(figment, default_path);
                }
            }
        }

        // ESMOD_ICON_LIBRARY -> iconLibrary
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .map(|key| env_key_to_field(key.as_str()).into())
                .lowercase(false),
        );

        if let Some(codemod) = codemod {
            figment = figment.merge(Serialized::default("codemod", codemod));
        }
        Ok(figment)
    }
}

fn merge_file(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}

/// `SOURCE_EXTENSIONS` to `sourceExtensions`
pub(crate) fn env_key_to_field(key: &str) -> String {
    let mut field = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = !field.is_empty();
        } else if upper_next {
            field.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            field.push(c.to_ascii_lowercase());
        }
    }
    field
}
