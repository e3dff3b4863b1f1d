//! Adding and stripping `.js` suffixes on relative import specifiers

use esmod_edit::{ImportBinding, SourceEdits, SourceFile, Span, span_text};

use crate::error::Result;
use crate::options::CodemodOptions;
use crate::report::ChangeReport;
use crate::rules::TransformRule;
use crate::specifier::{SpecifierKind, classify};

pub const JS_IMPORTS: &str = "jsImports";
pub const JSON_IMPORTS: &str = "jsonImports";
pub const REMOVE_JS_IMPORTS: &str = "removeJsImports";

/// Makes relative imports fully specified
///
/// `./a` becomes `./a.js`, and `./data.json` gains a
/// `with { type: 'json' }` clause. Running it twice changes nothing the
/// second time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportExtensionNormalizer;

impl TransformRule for ImportExtensionNormalizer {
    fn name(&self) -> &'static str {
        "convert-to-.js-imports"
    }

    fn apply(&self, file: &mut SourceFile, options: &CodemodOptions) -> Result<ChangeReport> {
        let mut edits = SourceEdits::new();
        let mut js_imports = 0;
        let mut json_imports = 0;

        for import in file.imports()? {
            let reference = classify(&import.source.value, &options.ignored_extensions);
            match reference.kind {
                SpecifierKind::Relative if !reference.specifier.ends_with(".js") => {
                    // Before the closing quote
                    edits.insert(import.source.span.end - 1, ".js");
                    js_imports += 1;
                }
                SpecifierKind::JsonResource => {
                    if add_json_attribute(&mut edits, &import, file.text()) {
                        json_imports += 1;
                    }
                }
                _ => {}
            }
        }

        file.apply(&edits)?;
        Ok(ChangeReport::for_file([
            (JS_IMPORTS, js_imports),
            (JSON_IMPORTS, json_imports),
        ]))
    }
}

/// Record the edit asserting `type: 'json'` on `import`, if one is needed
fn add_json_attribute(edits: &mut SourceEdits, import: &ImportBinding, source: &str) -> bool {
    let entry = format!("type: {}", import.source.quote.quote("json"));

    let Some(attributes) = &import.attributes else {
        edits.insert(import.source.span.end, format!(" with {{ {entry} }}"));
        return true;
    };
    if attributes.get("type").is_some() {
        // Already json, or a conflicting type we must not override
        return false;
    }

    match attributes.entries.first() {
        Some(first) => edits.insert(first.span.start, format!("{entry}, ")),
        None => {
            let tail = span_text(source, Span::new(import.source.span.end, import.span.end));
            let Some(brace) = tail.find('{') else {
                return false;
            };
            edits.insert(
                import.source.span.end + brace as u32 + 1,
                format!(" {entry} "),
            );
        }
    }
    true
}

/// Removes the `.js` suffix from relative import specifiers
///
/// Import attributes are never touched, so stripping after normalizing
/// keeps any `with { type: 'json' }` clause.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportExtensionStripper;

impl TransformRule for ImportExtensionStripper {
    fn name(&self) -> &'static str {
        "remove-.js-imports"
    }

    fn apply(&self, file: &mut SourceFile, options: &CodemodOptions) -> Result<ChangeReport> {
        let mut edits = SourceEdits::new();
        let mut removed = 0;

        for import in file.imports()? {
            let reference = classify(&import.source.value, &options.ignored_extensions);
            if reference.kind != SpecifierKind::Relative || !reference.specifier.ends_with(".js") {
                continue;
            }
            let span = import.source.span;
            let suffix = Span::new(span.end - 4, span.end - 1);
            // Escaped specifiers do not end in a literal `.js`
            if span_text(file.text(), suffix) != ".js" {
                continue;
            }
            edits.remove(suffix);
            removed += 1;
        }

        file.apply(&edits)?;
        Ok(ChangeReport::for_file([(REMOVE_JS_IMPORTS, removed)]))
    }
}
