//! Module specifier classification.
//!
//! Classification is purely syntactic: no `..` normalization and no lookup
//! against the filesystem.

/// What a module specifier points at, as far as the codemods care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecifierKind {
    /// `./a`, `../b/c`
    Relative,
    /// A package import such as `react` or `@scope/pkg/sub`
    Bare,
    /// A relative `.json` import
    JsonResource,
    /// A relative import of a non-code asset whose extension must never change
    IgnoredAsset,
}

/// A specifier together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReference {
    pub specifier: String,
    pub kind: SpecifierKind,
}

/// Classify `specifier`.
///
/// Precedence: a specifier not starting with `.` is [`SpecifierKind::Bare`];
/// then a suffix from `ignored_extensions` makes it
/// [`SpecifierKind::IgnoredAsset`]; then a `.json` suffix makes it
/// [`SpecifierKind::JsonResource`]; anything else is
/// [`SpecifierKind::Relative`].
///
/// # Examples
///
/// ```
/// use esmod_core::specifier::{classify, SpecifierKind};
///
/// let ignored = [".svg".to_string()];
/// assert_eq!(classify("react", &ignored).kind, SpecifierKind::Bare);
/// assert_eq!(classify("./logo.svg", &ignored).kind, SpecifierKind::IgnoredAsset);
/// assert_eq!(classify("../data.json", &ignored).kind, SpecifierKind::JsonResource);
/// assert_eq!(classify("./util", &ignored).kind, SpecifierKind::Relative);
/// ```
pub fn classify(specifier: &str, ignored_extensions: &[String]) -> ModuleReference {
    let kind = if !specifier.starts_with('.') {
        SpecifierKind::Bare
    } else if ignored_extensions
        .iter()
        .any(|ext| specifier.ends_with(ext.as_str()))
    {
        SpecifierKind::IgnoredAsset
    } else if specifier.ends_with(".json") {
        SpecifierKind::JsonResource
    } else {
        SpecifierKind::Relative
    };

    ModuleReference {
        specifier: specifier.to_string(),
        kind,
    }
}
