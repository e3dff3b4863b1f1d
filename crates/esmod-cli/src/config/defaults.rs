use esmod_core::CodemodKind;

pub const CONFIG_FILE: &str = "esmod.toml";

pub const ENV_PREFIX: &str = "ESMOD_";

pub fn default_codemod() -> String {
    CodemodKind::default().as_str().to_string()
}
