//! Query API for reading the structure a codemod cares about
//!
//! Every query returns owned snapshots that carry the spans and verbatim text
//! of the nodes they describe. Snapshots outlive the parse that produced them,
//! so a rule can inspect a file, drop the AST and then build edits.

use crate::edit::span_text;
use crate::format::QuoteStyle;
use oxc_ast::ast::{
    Argument, CallExpression, Expression, ImportAttributeKey, ImportDeclaration,
    ImportDeclarationSpecifier, ModuleExportName, ObjectPropertyKind, Program, PropertyKind,
    StaticMemberExpression, Statement,
};
use oxc_ast_visit::{Visit, walk};
use oxc_span::{GetSpan, Span};

/// The string literal naming the imported module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpecifier {
    pub value: String,
    /// Span of the literal, quotes included
    pub span: Span,
    pub quote: QuoteStyle,
}

/// One `{ imported as alias }` entry of an import declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedImport {
    /// Exported name in the source module
    pub imported: String,
    /// `imported` as written, which may be a string literal
    pub imported_text: String,
    /// Local name, only when it differs from `imported`
    pub alias: Option<String>,
    /// `import { type X }`
    pub type_only: bool,
}

impl NamedImport {
    /// The name this binding introduces into the file
    pub fn local(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.imported)
    }

    /// Render the binding as it appears inside braces
    pub fn render(&self, type_modifier: bool) -> String {
        let mut out = String::new();
        if type_modifier {
            out.push_str("type ");
        }
        out.push_str(&self.imported_text);
        if let Some(alias) = &self.alias {
            out.push_str(" as ");
            out.push_str(alias);
        }
        out
    }
}

/// One `key: "value"` entry of an import-attributes clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeEntry {
    pub key: String,
    pub value: String,
    pub span: Span,
}

/// A `with { ... }` (or legacy `assert { ... }`) clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAttributes {
    pub span: Span,
    pub entries: Vec<AttributeEntry>,
}

impl ImportAttributes {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }
}

/// Decomposed shape of one import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// Span of the whole statement, terminator included
    pub span: Span,
    pub source: ModuleSpecifier,
    pub default: Option<String>,
    pub named: Vec<NamedImport>,
    pub namespace: Option<String>,
    /// `import type ...`
    pub type_only: bool,
    pub attributes: Option<ImportAttributes>,
    pub has_semicolon: bool,
}

impl ImportBinding {
    /// `import "./polyfill"`
    pub fn is_side_effect(&self) -> bool {
        self.default.is_none() && self.named.is_empty() && self.namespace.is_none()
    }
}

/// Kind of a member inside an object literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectMemberKind {
    /// `key: value`
    Property,
    /// `key`
    Shorthand,
    /// `...value`
    Spread,
    /// `key() {}`, `get key() {}`, `set key(v) {}`
    Method,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMember {
    pub kind: ObjectMemberKind,
    pub span: Span,
    pub text: String,
}

/// An unparsed argument fragment of a call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArgument {
    Expression {
        span: Span,
        text: String,
    },
    ObjectLiteral {
        span: Span,
        text: String,
        properties: Vec<ObjectMember>,
    },
    Spread {
        span: Span,
        text: String,
    },
}

impl CallArgument {
    pub fn span(&self) -> Span {
        match self {
            CallArgument::Expression { span, .. }
            | CallArgument::ObjectLiteral { span, .. }
            | CallArgument::Spread { span, .. } => *span,
        }
    }

    /// Verbatim source text of the argument
    pub fn text(&self) -> &str {
        match self {
            CallArgument::Expression { text, .. }
            | CallArgument::ObjectLiteral { text, .. }
            | CallArgument::Spread { text, .. } => text,
        }
    }

    pub fn is_object_literal(&self) -> bool {
        matches!(self, CallArgument::ObjectLiteral { .. })
    }

    pub fn is_spread(&self) -> bool {
        matches!(self, CallArgument::Spread { .. })
    }
}

/// A call whose callee is a plain identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub span: Span,
    /// Local name of the callee
    pub callee: String,
    /// Explicit type arguments, angle brackets included
    pub type_arguments: Option<String>,
    pub arguments: Vec<CallArgument>,
}

/// Collect every top-level import declaration in source order
pub fn collect_imports(program: &Program<'_>, source: &str) -> Vec<ImportBinding> {
    program
        .body
        .iter()
        .filter_map(|stmt| match stmt {
            Statement::ImportDeclaration(decl) => Some(import_binding(decl, source)),
            _ => None,
        })
        .collect()
}

fn import_binding(decl: &ImportDeclaration<'_>, source: &str) -> ImportBinding {
    let mut default = None;
    let mut named = Vec::new();
    let mut namespace = None;

    if let Some(specifiers) = &decl.specifiers {
        for spec in specifiers {
            match spec {
                ImportDeclarationSpecifier::ImportDefaultSpecifier(default_spec) => {
                    default = Some(default_spec.local.name.to_string());
                }
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(ns_spec) => {
                    namespace = Some(ns_spec.local.name.to_string());
                }
                ImportDeclarationSpecifier::ImportSpecifier(named_spec) => {
                    let imported = match &named_spec.imported {
                        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
                        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
                        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
                    };
                    let local = named_spec.local.name.to_string();
                    named.push(NamedImport {
                        imported_text: span_text(source, named_spec.imported.span()).to_string(),
                        alias: (local != imported).then_some(local),
                        imported,
                        type_only: named_spec.import_kind.is_type(),
                    });
                }
            }
        }
    }

    let attributes = decl.with_clause.as_ref().map(|clause| ImportAttributes {
        span: clause.span,
        entries: clause
            .with_entries
            .iter()
            .map(|entry| AttributeEntry {
                key: match &entry.key {
                    ImportAttributeKey::Identifier(ident) => ident.name.to_string(),
                    ImportAttributeKey::StringLiteral(lit) => lit.value.to_string(),
                },
                value: entry.value.value.to_string(),
                span: entry.span,
            })
            .collect(),
    });

    ImportBinding {
        span: decl.span,
        source: ModuleSpecifier {
            value: decl.source.value.to_string(),
            span: decl.source.span,
            quote: QuoteStyle::detect(span_text(source, decl.source.span)),
        },
        default,
        named,
        namespace,
        type_only: decl.import_kind.is_type(),
        attributes,
        has_semicolon: span_text(source, decl.span).trim_end().ends_with(';'),
    }
}

/// Collect calls whose callee is exactly one of `callees`, outermost first
pub fn collect_calls(program: &Program<'_>, source: &str, callees: &[&str]) -> Vec<CallSite> {
    struct CallCollector<'s> {
        callees: &'s [&'s str],
        source: &'s str,
        sites: Vec<CallSite>,
    }

    impl<'a, 's> Visit<'a> for CallCollector<'s> {
        fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
            if let Expression::Identifier(ident) = &call.callee {
                if self.callees.contains(&ident.name.as_str()) {
                    self.sites.push(call_site(call, ident.name.as_str(), self.source));
                }
            }
            walk::walk_call_expression(self, call);
        }
    }

    let mut collector = CallCollector {
        callees,
        source,
        sites: Vec::new(),
    };
    collector.visit_program(program);
    collector.sites
}

fn call_site(call: &CallExpression<'_>, callee: &str, source: &str) -> CallSite {
    CallSite {
        span: call.span,
        callee: callee.to_string(),
        type_arguments: call
            .type_arguments
            .as_ref()
            .map(|args| span_text(source, args.span).to_string()),
        arguments: call
            .arguments
            .iter()
            .map(|arg| call_argument(arg, source))
            .collect(),
    }
}

fn call_argument(arg: &Argument<'_>, source: &str) -> CallArgument {
    let span = arg.span();
    let text = span_text(source, span).to_string();
    match arg {
        Argument::SpreadElement(_) => CallArgument::Spread { span, text },
        Argument::ObjectExpression(object) => CallArgument::ObjectLiteral {
            span,
            text,
            properties: object
                .properties
                .iter()
                .map(|prop| object_member(prop, source))
                .collect(),
        },
        _ => CallArgument::Expression { span, text },
    }
}

fn object_member(prop: &ObjectPropertyKind<'_>, source: &str) -> ObjectMember {
    let kind = match prop {
        ObjectPropertyKind::SpreadProperty(_) => ObjectMemberKind::Spread,
        ObjectPropertyKind::ObjectProperty(property) => {
            if property.method || matches!(property.kind, PropertyKind::Get | PropertyKind::Set) {
                ObjectMemberKind::Method
            } else if property.shorthand {
                ObjectMemberKind::Shorthand
            } else {
                ObjectMemberKind::Property
            }
        }
    };
    let span = prop.span();
    ObjectMember {
        kind,
        span,
        text: span_text(source, span).to_string(),
    }
}

/// Spans of the property name in every `object.property` / `object?.property` access
pub fn collect_member_properties(program: &Program<'_>, property: &str) -> Vec<Span> {
    struct MemberCollector<'s> {
        property: &'s str,
        spans: Vec<Span>,
    }

    impl<'a, 's> Visit<'a> for MemberCollector<'s> {
        fn visit_static_member_expression(&mut self, member: &StaticMemberExpression<'a>) {
            if member.property.name.as_str() == self.property {
                self.spans.push(member.property.span);
            }
            walk::walk_static_member_expression(self, member);
        }
    }

    let mut collector = MemberCollector {
        property,
        spans: Vec::new(),
    };
    collector.visit_program(program);
    collector.spans
}
