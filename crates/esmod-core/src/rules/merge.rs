//! Collapsing duplicate import declarations of the same module

use esmod_edit::{ImportBinding, NamedImport, SourceEdits, SourceFile, Span, span_text};
use indexmap::{IndexMap, IndexSet};

use crate::error::Result;
use crate::options::CodemodOptions;
use crate::report::ChangeReport;
use crate::rules::TransformRule;

pub const DUPLICATE_IMPORTS_MERGED: &str = "duplicateImportsMerged";

/// Merges every group of imports sharing a specifier into at most two
/// declarations: one for the namespace binding and one for the default and
/// named bindings
///
/// Groups are keyed by the literal specifier text. Within a group the first
/// default binding wins and the last namespace binding wins. Named bindings
/// are deduplicated on `(imported, local, type_only)` and keep their first-seen
/// order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateImportMerger;

impl TransformRule for DuplicateImportMerger {
    fn name(&self) -> &'static str {
        "merge-duplicate-imports"
    }

    fn apply(&self, file: &mut SourceFile, _options: &CodemodOptions) -> Result<ChangeReport> {
        let imports = file.imports()?;

        let mut groups: IndexMap<&str, Vec<&ImportBinding>> = IndexMap::new();
        for import in &imports {
            groups.entry(import.source.value.as_str()).or_default().push(import);
        }

        let mut edits = SourceEdits::new();
        let mut duplicates = Vec::new();
        let mut merged = 0;
        for group in groups.values().filter(|group| group.len() > 1) {
            if is_canonical(group) || has_type_only_default(group) {
                continue;
            }
            let replacement = MergedImport::collect(group, file.text()).render();
            edits.replace(group[0].span, replacement);
            duplicates.extend(group[1..].iter().map(|duplicate| duplicate.span));
            merged += group.len() as u32;
        }
        // Duplicates of different groups may share a line
        edits.remove_statements(duplicates, file.text());

        file.apply(&edits)?;
        Ok(ChangeReport::for_file([(DUPLICATE_IMPORTS_MERGED, merged)]))
    }
}

/// A namespace declaration next to a default/named declaration is already
/// the merged shape
fn is_canonical(group: &[&ImportBinding]) -> bool {
    let [first, second] = group else {
        return false;
    };
    let only_namespace = |import: &ImportBinding| {
        import.namespace.is_some() && import.default.is_none() && import.named.is_empty()
    };
    let only_bindings = |import: &ImportBinding| {
        import.namespace.is_none() && (import.default.is_some() || !import.named.is_empty())
    };
    (only_namespace(first) && only_bindings(second)) || (only_bindings(first) && only_namespace(second))
}

/// `import type D from` cannot share a declaration with value bindings
fn has_type_only_default(group: &[&ImportBinding]) -> bool {
    group
        .iter()
        .any(|import| import.type_only && import.default.is_some())
}

struct MergedImport {
    specifier: String,
    default: Option<String>,
    named: IndexSet<NamedImport>,
    /// Local name, and whether it came from `import type * as`
    namespace: Option<(String, bool)>,
    attributes: Option<String>,
    semicolon: bool,
}

impl MergedImport {
    fn collect(group: &[&ImportBinding], source: &str) -> Self {
        let first = group[0];
        let mut merged = Self {
            specifier: first.source.quote.quote(&first.source.value),
            default: None,
            named: IndexSet::new(),
            namespace: None,
            attributes: None,
            semicolon: first.has_semicolon,
        };

        for import in group {
            if merged.default.is_none() {
                merged.default = import.default.clone();
            }
            for named in &import.named {
                merged.named.insert(NamedImport {
                    type_only: named.type_only || import.type_only,
                    ..named.clone()
                });
            }
            if let Some(namespace) = &import.namespace {
                merged.namespace = Some((namespace.clone(), import.type_only));
            }
            if merged.attributes.is_none() && import.attributes.is_some() {
                merged.attributes = Some(attribute_clause(import, source));
            }
        }
        merged
    }

    fn render(&self) -> String {
        let terminator = if self.semicolon { ";" } else { "" };
        let from = match &self.attributes {
            Some(clause) => format!("from {} {clause}{terminator}", self.specifier),
            None => format!("from {}{terminator}", self.specifier),
        };

        let mut declarations = Vec::new();
        if let Some((namespace, type_only)) = &self.namespace {
            let keyword = if *type_only { "import type" } else { "import" };
            declarations.push(format!("{keyword} * as {namespace} {from}"));
        }

        let all_types =
            self.default.is_none() && !self.named.is_empty() && self.named.iter().all(|n| n.type_only);
        let named = (!self.named.is_empty()).then(|| {
            let bindings: Vec<String> = self
                .named
                .iter()
                .map(|binding| binding.render(binding.type_only && !all_types))
                .collect();
            format!("{{ {} }}", bindings.join(", "))
        });
        let keyword = if all_types { "import type" } else { "import" };
        match (&self.default, named) {
            (Some(default), Some(named)) => {
                declarations.push(format!("{keyword} {default}, {named} {from}"))
            }
            (Some(default), None) => declarations.push(format!("{keyword} {default} {from}")),
            (None, Some(named)) => declarations.push(format!("{keyword} {named} {from}")),
            (None, None) => {}
        }

        if declarations.is_empty() {
            // Every declaration in the group was a bare side-effect import
            let specifier = &self.specifier;
            let attributes = self
                .attributes
                .as_ref()
                .map(|clause| format!(" {clause}"))
                .unwrap_or_default();
            declarations.push(format!("import {specifier}{attributes}{terminator}"));
        }
        declarations.join("\n")
    }
}

/// Verbatim text of the attribute clause, keyword included
fn attribute_clause(import: &ImportBinding, source: &str) -> String {
    let tail = span_text(source, Span::new(import.source.span.end, import.span.end));
    let tail = tail.trim();
    tail.strip_suffix(';').unwrap_or(tail).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    #[test]
    fn merges_default_and_named() {
        let (out, report) = run(
            &DuplicateImportMerger,
            "import a from \"./a\"; import { b } from \"./a\";",
        );
        assert_eq!(out, "import a, { b } from \"./a\";");
        assert_eq!(report.count(DUPLICATE_IMPORTS_MERGED), 2);
        assert_eq!(report.file_count, 1);
    }

    #[test]
    fn merges_into_first_position_and_drops_emptied_lines() {
        let code = "import { a } from './m';\nimport React from 'react';\nimport { b as c, a } from './m';\n\nconsole.log(a, c, React);\n";
        let (out, report) = run(&DuplicateImportMerger, code);
        assert_eq!(
            out,
            "import { a, b as c } from './m';\nimport React from 'react';\n\nconsole.log(a, c, React);\n"
        );
        assert_eq!(report.count(DUPLICATE_IMPORTS_MERGED), 2);
    }

    #[test]
    fn first_default_wins() {
        let code = "import first from './m';\nimport second from './m';\n";
        let (out, _) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import first from './m';\n");
    }

    #[test]
    fn namespace_gets_its_own_declaration() {
        let code = "import * as ns from './m';\nimport d from './m';\nimport { x } from './m';\n";
        let (out, report) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import * as ns from './m';\nimport d, { x } from './m';\n");
        assert_eq!(report.count(DUPLICATE_IMPORTS_MERGED), 3);

        let (again, report) = run(&DuplicateImportMerger, &out);
        assert_eq!(again, out);
        assert!(report.is_empty());
    }

    #[test]
    fn declaration_level_type_moves_onto_bindings() {
        let code = "import type { A } from './t';\nimport { B, type A } from './t';\n";
        let (out, _) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import { type A, B } from './t';\n");
    }

    #[test]
    fn keeps_aliases_of_the_same_export() {
        let code = "import { a } from './m';\nimport { a as b } from './m';\n";
        let (out, _) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import { a, a as b } from './m';\n");
    }

    #[test]
    fn all_type_only_group_stays_type_only() {
        let code = "import type { A } from './t';\nimport { type B } from './t';\n";
        let (out, _) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import type { A, B } from './t';\n");
    }

    #[test]
    fn side_effect_imports_collapse() {
        let code = "import './polyfill';\nimport './polyfill';\n";
        let (out, report) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import './polyfill';\n");
        assert_eq!(report.count(DUPLICATE_IMPORTS_MERGED), 2);
    }

    #[test]
    fn carries_attributes() {
        let code = "import data from './d.json' with { type: 'json' };\nimport { x } from './d.json' with { type: 'json' };\n";
        let (out, _) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import data, { x } from './d.json' with { type: 'json' };\n");
    }

    #[test]
    fn merges_a_group_written_on_one_line() {
        let code = "import a from './a'; import { b } from './a'; import { c } from './a';\n";
        let (out, report) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import a, { b, c } from './a';\n");
        assert_eq!(report.count(DUPLICATE_IMPORTS_MERGED), 3);
    }

    #[test]
    fn merges_interleaved_groups_on_one_line() {
        let code = "import a from './a'; import b from './b'; import { c } from './a'; import { d } from './b';";
        let (out, report) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import a, { c } from './a'; import b, { d } from './b';");
        assert_eq!(report.count(DUPLICATE_IMPORTS_MERGED), 4);
    }

    #[test]
    fn keeps_code_sharing_a_line_with_duplicates() {
        let code = "import { a } from './a'; init(); import { b } from './a'; run(a, b);\n";
        let (out, _) = run(&DuplicateImportMerger, code);
        assert_eq!(out, "import { a, b } from './a'; init(); run(a, b);\n");
    }

    #[test]
    fn singletons_are_untouched() {
        let code = "import a from './a';\nimport { b } from './b';\n";
        let (out, report) = run(&DuplicateImportMerger, code);
        assert_eq!(out, code);
        assert!(report.is_empty());
    }

    #[test]
    fn named_set_is_order_independent() {
        let forward = "import { a } from './m';\nimport { b } from './m';\n";
        let backward = "import { b } from './m';\nimport { a } from './m';\n";
        let (one, _) = run(&DuplicateImportMerger, forward);
        let (two, _) = run(&DuplicateImportMerger, backward);
        assert_eq!(one, "import { a, b } from './m';\n");
        assert_eq!(two, "import { b, a } from './m';\n");
    }
}
