//! Layered configuration for a codemod run.
//!
//! Sources, lowest priority first: built-in defaults, `esmod.toml` in the
//! current directory (or the file passed with `--config`), `ESMOD_*`
//! environment variables, and finally the `--type` flag.

mod defaults;
mod loading;
mod validation;

pub use defaults::*;

use esmod_core::CodemodOptions;
use serde::{Deserialize, Serialize};

/// Everything one invocation needs besides the target directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EsmodConfig {
    /// Selector token of the codemod to apply
    #[serde(default = "crate::config::defaults::default_codemod")]
    pub codemod: String,

    #[serde(flatten)]
    pub options: CodemodOptions,
}

impl Default for EsmodConfig {
    fn default() -> Self {
        Self {
            codemod: default_codemod(),
            options: CodemodOptions::default(),
        }
    }
}
