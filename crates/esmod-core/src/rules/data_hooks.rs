//! Migrating positional data-fetching hook calls to the single-object form
//!
//! ```text
//! useQuery(['todos'], fetchTodos, { staleTime })
//!   -> useQuery({ queryKey: ['todos'], queryFn: fetchTodos, staleTime })
//! useMutation(save, opts)
//!   -> useMutation({ mutationFn: save, ...opts })
//! ```
//!
//! Afterwards every `.isLoading` member access in the file is renamed to
//! `.isPending`, whatever object it is read from.

use esmod_edit::{CallArgument, SourceEdits, SourceFile, Span};
use tracing::debug;

use crate::error::Result;
use crate::options::CodemodOptions;
use crate::report::ChangeReport;
use crate::rules::TransformRule;

pub const USE_QUERIES: &str = "useQueries";
pub const USE_MUTATIONS: &str = "useMutations";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hook {
    Query,
    Mutation,
}

impl Hook {
    fn from_export(name: &str) -> Option<Self> {
        match name {
            "useQuery" | "useInfiniteQuery" => Some(Hook::Query),
            "useMutation" => Some(Hook::Mutation),
            _ => None,
        }
    }

    /// Keys given to the leading positional arguments
    fn keys(self) -> &'static [&'static str] {
        match self {
            Hook::Query => &["queryKey", "queryFn"],
            Hook::Mutation => &["mutationFn"],
        }
    }

    /// Positional arguments, optionally followed by one options argument
    fn accepts(self, args: &[CallArgument]) -> bool {
        let positional = self.keys().len();
        if !(positional..=positional + 1).contains(&args.len())
            || args.iter().any(CallArgument::is_spread)
        {
            return false;
        }
        // Already in object form
        !(self == Hook::Mutation && args[0].is_object_literal())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DataHookCallMigrator;

impl TransformRule for DataHookCallMigrator {
    fn name(&self) -> &'static str {
        "react-query-v5-migrate"
    }

    fn apply(&self, file: &mut SourceFile, options: &CodemodOptions) -> Result<ChangeReport> {
        let hooks: Vec<(String, Hook)> = file
            .imports()?
            .into_iter()
            .filter(|import| import.source.value == options.query_module && !import.type_only)
            .flat_map(|import| import.named)
            .filter(|named| !named.type_only)
            .filter_map(|named| {
                let hook = Hook::from_export(&named.imported)?;
                Some((named.local().to_string(), hook))
            })
            .collect();
        if hooks.is_empty() {
            return Ok(ChangeReport::new());
        }

        let callees: Vec<&str> = hooks.iter().map(|(local, _)| local.as_str()).collect();
        let mut edits = SourceEdits::new();
        let mut rewritten: Vec<Span> = Vec::new();
        let mut queries = 0;
        let mut mutations = 0;

        for call in file.calls_to(&callees)? {
            // Nested inside a call rewritten above; picked up by the next run
            if rewritten
                .iter()
                .any(|outer| outer.start <= call.span.start && call.span.end <= outer.end)
            {
                continue;
            }
            let Some(hook) = hooks
                .iter()
                .find(|(local, _)| *local == call.callee)
                .map(|(_, hook)| *hook)
            else {
                continue;
            };
            if !hook.accepts(&call.arguments) {
                debug!(callee = %call.callee, "leaving call untouched");
                continue;
            }
            wrap_arguments(&call.arguments, hook.keys(), file.text(), &mut edits);
            rewritten.push(call.span);
            match hook {
                Hook::Query => queries += 1,
                Hook::Mutation => mutations += 1,
            }
        }

        if queries + mutations == 0 {
            return Ok(ChangeReport::new());
        }
        file.apply(&edits)?;

        let mut renames = SourceEdits::new();
        for span in file.member_properties("isLoading")? {
            renames.replace(span, "isPending");
        }
        file.apply(&renames)?;

        Ok(ChangeReport::for_file([
            (USE_QUERIES, queries),
            (USE_MUTATIONS, mutations),
        ]))
    }
}

/// Fold the arguments into one object literal
///
/// Only insertions and brace removals are recorded, so comments and
/// formatting between and inside the arguments stay where they were.
fn wrap_arguments(args: &[CallArgument], keys: &[&str], source: &str, edits: &mut SourceEdits) {
    for (index, (arg, key)) in args.iter().zip(keys).enumerate() {
        let opening = if index == 0 { "{ " } else { "" };
        edits.insert(arg.span().start, format!("{opening}{key}: "));
    }

    let last_positional = args[keys.len() - 1].span();
    match args.get(keys.len()) {
        None => edits.insert(last_positional.end, " }"),
        Some(CallArgument::ObjectLiteral {
            span, properties, ..
        }) if properties.is_empty() => {
            edits.replace(Span::new(last_positional.end, span.end), " }");
        }
        Some(CallArgument::ObjectLiteral { span, .. }) => {
            // The literal's closing brace closes the new object
            edits.remove(opening_brace(source, *span));
        }
        Some(options) => {
            edits.insert(options.span().start, "...");
            edits.insert(options.span().end, " }");
        }
    }
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// The literal's `{` together with the blanks that would dangle without it
fn opening_brace(source: &str, literal: Span) -> Span {
    let bytes = source.as_bytes();
    let brace_end = literal.start as usize + 1;
    let trailing = bytes[brace_end..].iter().take_while(|&&b| is_blank(b)).count();
    let end = (brace_end + trailing) as u32;

    if matches!(bytes.get(brace_end + trailing), None | Some(b'\n' | b'\r')) {
        let leading = bytes[..literal.start as usize]
            .iter()
            .rev()
            .take_while(|&&b| is_blank(b))
            .count();
        Span::new(literal.start - leading as u32, end)
    } else {
        Span::new(literal.start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::run;

    const IMPORTS: &str =
        "import { useQuery, useInfiniteQuery, useMutation } from '@tanstack/react-query';\n";

    fn migrate(body: &str) -> (String, ChangeReport) {
        let (out, report) = run(&DataHookCallMigrator, &format!("{IMPORTS}{body}"));
        (out[IMPORTS.len()..].to_string(), report)
    }

    #[test]
    fn query_with_two_arguments() {
        let (out, report) = migrate("const q = useQuery(['key1'], fetchData1);\n");
        assert_eq!(out, "const q = useQuery({ queryKey: ['key1'], queryFn: fetchData1 });\n");
        assert_eq!(report.count(USE_QUERIES), 1);
        assert_eq!(report.file_count, 1);
    }

    #[test]
    fn query_options_identifier_is_spread() {
        let (out, _) = migrate("useQuery(['key2'], fetchData2, queryOptions);\n");
        assert_eq!(
            out,
            "useQuery({ queryKey: ['key2'], queryFn: fetchData2, ...queryOptions });\n"
        );
    }

    #[test]
    fn query_options_literal_is_inlined() {
        let (out, _) = migrate(
            "useInfiniteQuery(['k'], fn, { enabled, retry: 1, ...rest, select(d) { return d; } });\n",
        );
        assert_eq!(
            out,
            "useInfiniteQuery({ queryKey: ['k'], queryFn: fn, enabled, retry: 1, ...rest, select(d) { return d; } });\n"
        );
    }

    #[test]
    fn comments_between_and_inside_arguments_survive() {
        let (out, _) = migrate("useQuery(k, /* keep */ fn, {\n  // why\n  enabled,\n});\n");
        assert_eq!(
            out,
            "useQuery({ queryKey: k, /* keep */ queryFn: fn,\n  // why\n  enabled,\n});\n"
        );
    }

    #[test]
    fn multiline_mutation_options_keep_their_layout() {
        let (out, _) = migrate("useMutation(save, {\n  onSuccess() {},\n});\n");
        assert_eq!(out, "useMutation({ mutationFn: save,\n  onSuccess() {},\n});\n");
    }

    #[test]
    fn empty_options_literal_is_dropped() {
        let (out, _) = migrate("useQuery(['k'], f, {});\n");
        assert_eq!(out, "useQuery({ queryKey: ['k'], queryFn: f });\n");
    }

    #[test]
    fn keeps_type_arguments() {
        let (out, _) = migrate("useQuery<Todo[], Error>(['todos'], fetchTodos);\n");
        assert_eq!(
            out,
            "useQuery<Todo[], Error>({ queryKey: ['todos'], queryFn: fetchTodos });\n"
        );
    }

    #[test]
    fn mutation_with_options() {
        let (out, report) = migrate("useMutation(handleSubmit, mutationOptions);\n");
        assert_eq!(out, "useMutation({ mutationFn: handleSubmit, ...mutationOptions });\n");
        assert_eq!(report.count(USE_MUTATIONS), 1);
        assert_eq!(report.count(USE_QUERIES), 0);
    }

    #[test]
    fn migrated_mutation_is_skipped() {
        let code = "useMutation({ mutationFn: save });\nuseQuery({ queryKey: ['k'], queryFn: f });\n";
        let (out, report) = migrate(code);
        assert_eq!(out, code);
        assert!(report.is_empty());
    }

    #[test]
    fn respects_aliases() {
        let code = "import { useQuery as q, useMutation as m } from '@tanstack/react-query';\nq(['aliasKey'], aliasFetch);\nm(aliasMutate);\nuseQuery(['plain'], f);\n";
        let (out, report) = run(&DataHookCallMigrator, code);
        assert_eq!(
            out,
            "import { useQuery as q, useMutation as m } from '@tanstack/react-query';\nq({ queryKey: ['aliasKey'], queryFn: aliasFetch });\nm({ mutationFn: aliasMutate });\nuseQuery(['plain'], f);\n"
        );
        assert_eq!(report.count(USE_QUERIES), 1);
        assert_eq!(report.count(USE_MUTATIONS), 1);
    }

    #[test]
    fn renames_is_loading_after_rewrite() {
        let (out, _) = migrate(
            "const m = useMutation(save);\nif (m.isLoading || other?.isLoading) {}\n",
        );
        assert_eq!(
            out,
            "const m = useMutation({ mutationFn: save });\nif (m.isPending || other?.isPending) {}\n"
        );
    }

    #[test]
    fn unsupported_shapes_are_left_alone() {
        let code = "useQuery(['k']);\nuseQuery(['k'], f, o, extra);\nuseQuery(...args);\nuseMutation();\nclient.useQuery(['k'], f);\nconst x = y.isLoading;\n";
        let (out, report) = migrate(code);
        assert_eq!(out, code);
        assert!(report.is_empty());
    }

    #[test]
    fn files_without_the_query_module_are_skipped() {
        let code = "import { useQuery } from 'swr';\nuseQuery(['k'], f);\n";
        let (out, report) = run(&DataHookCallMigrator, code);
        assert_eq!(out, code);
        assert!(report.is_empty());
    }

    #[test]
    fn nested_calls_wait_for_the_next_run() {
        let code = "useQuery(['outer'], () => useQuery(['inner'], g));\n";
        let (once, report) = migrate(code);
        assert_eq!(
            once,
            "useQuery({ queryKey: ['outer'], queryFn: () => useQuery(['inner'], g) });\n"
        );
        assert_eq!(report.count(USE_QUERIES), 1);

        let (twice, report) = migrate(&once);
        assert_eq!(
            twice,
            "useQuery({ queryKey: ['outer'], queryFn: () => useQuery({ queryKey: ['inner'], queryFn: g }) });\n"
        );
        assert_eq!(report.count(USE_QUERIES), 1);
    }
}
