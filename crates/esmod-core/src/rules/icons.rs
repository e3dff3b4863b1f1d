//! Folding per-icon default imports into named imports of the library root

use esmod_edit::{ImportBinding, NamedImport, SourceEdits, SourceFile, Span, span_text};

use crate::error::Result;
use crate::options::CodemodOptions;
use crate::report::ChangeReport;
use crate::rules::TransformRule;

pub const MUI_ICON_IMPORTS: &str = "muiIconImports";

/// Rewrites `import Add from '<root>/Add'` to `import { Add } from '<root>'`
#[derive(Debug, Clone, Copy, Default)]
pub struct IconImportSplitter;

impl TransformRule for IconImportSplitter {
    fn name(&self) -> &'static str {
        "merge-mui-icons"
    }

    fn apply(&self, file: &mut SourceFile, options: &CodemodOptions) -> Result<ChangeReport> {
        let root = options.icon_library.trim_end_matches('/');
        let mut edits = SourceEdits::new();
        let mut rewritten = 0;

        for import in file.imports()? {
            if let Some(replacement) = split_icon_import(&import, root, file.text()) {
                edits.replace(import.span, replacement);
                rewritten += 1;
            }
        }

        file.apply(&edits)?;
        Ok(ChangeReport::for_file([(MUI_ICON_IMPORTS, rewritten)]))
    }
}

fn split_icon_import(import: &ImportBinding, root: &str, source: &str) -> Option<String> {
    let icon = import
        .source
        .value
        .strip_prefix(root)?
        .strip_prefix('/')
        .filter(|name| is_identifier(name))?;
    let local = import.default.as_deref()?;
    if import.namespace.is_some() {
        return None;
    }

    let mut bindings = vec![NamedImport {
        imported: icon.to_string(),
        imported_text: icon.to_string(),
        alias: (local != icon).then(|| local.to_string()),
        type_only: false,
    }];
    bindings.extend(import.named.iter().cloned());
    let rendered: Vec<String> = bindings
        .iter()
        .map(|binding| binding.render(binding.type_only && !import.type_only))
        .collect();

    let keyword = if import.type_only { "import type" } else { "import" };
    let tail = span_text(source, Span::new(import.source.span.end, import.span.end));
    Some(format!(
        "{keyword} {{ {} }} from {}{tail}",
        rendered.join(", "),
        import.source.quote.quote(root),
    ))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
