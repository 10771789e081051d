//! Static context: in-scope namespaces, default namespaces and the effective version.
//!
//! Starts from the statically known namespaces of the dialect and applies the
//! module declaration and prolog in document order. Later namespace
//! declarations override the predeclared prefixes, but a prefix may only be
//! declared once within a prolog.

use indexmap::IndexMap;
use rowan::TextRange;

use xqsyntax_core::{Dialect, FN_NAMESPACE, NamespaceMap, Version};

use crate::Diagnostics;
use crate::config::ParseOptions;
use crate::diagnostics::DiagnosticKind;
use crate::parser::ast::{
    DefaultNamespaceDecl, ModuleImport, NamespaceDecl, Prefix, SchemaImport, StringLiteral,
};
use crate::parser::{Root, SyntaxNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticContext {
    pub dialect: Dialect,
    /// Declared version, or the configured default.
    pub version: Version,
    pub namespaces: NamespaceMap,
    /// Applies to unprefixed element and type names. Empty means no namespace.
    pub default_element_namespace: String,
    /// Applies to unprefixed function names.
    pub default_function_namespace: String,
    /// Target namespace of a library module.
    pub module_namespace: Option<String>,
}

impl StaticContext {
    /// Context of a source without a prolog.
    pub fn new(options: &ParseOptions) -> Self {
        Self {
            dialect: options.dialect,
            version: options.default_version,
            namespaces: NamespaceMap::statically_known(options.dialect),
            default_element_namespace: String::new(),
            default_function_namespace: FN_NAMESPACE.to_string(),
            module_namespace: None,
        }
    }

    /// Builds the context, dropping declaration diagnostics.
    pub fn from_root(root: &Root, options: &ParseOptions) -> Self {
        build_static_context(root, options, &mut Diagnostics::new())
    }
}

pub fn build_static_context(
    root: &Root,
    options: &ParseOptions,
    diag: &mut Diagnostics,
) -> StaticContext {
    let mut builder = ContextBuilder {
        context: StaticContext::new(options),
        declared: IndexMap::new(),
        diag,
    };

    if let Some(module) = root.module() {
        if let Some(decl) = module.version_decl() {
            builder.apply_version(decl.version());
        }
        if let Some(decl) = module.module_decl() {
            let uri = decl.uri().map(|literal| literal.value());
            if let (Some(prefix), Some(uri)) = (decl.prefix(), uri.clone()) {
                builder.declare(&prefix, uri);
            }
            builder.context.module_namespace = uri;
        }
        if let Some(prolog) = module.prolog() {
            for node in prolog.as_cst().children() {
                builder.apply_declaration(node);
            }
        }
    }

    let context = builder.context;
    tracing::debug!(
        version = %context.version.display(context.dialect),
        namespaces = context.namespaces.len(),
        default_element_namespace = %context.default_element_namespace,
        "static context"
    );
    context
}

struct ContextBuilder<'d> {
    context: StaticContext,
    /// Prefixes bound by the module itself, with their first binding site.
    declared: IndexMap<String, TextRange>,
    diag: &'d mut Diagnostics,
}

impl ContextBuilder<'_> {
    fn apply_version(&mut self, literal: Option<StringLiteral>) {
        let Some(literal) = literal else { return };
        let text = literal.value();
        match Version::from_declaration(&text) {
            Some(version) => self.context.version = version,
            None => {
                self.diag
                    .report(DiagnosticKind::UnsupportedVersion, literal.text_range())
                    .message(text)
                    .emit();
            }
        }
    }

    fn apply_declaration(&mut self, node: SyntaxNode) {
        if let Some(decl) = NamespaceDecl::cast(node.clone()) {
            if let (Some(prefix), Some(uri)) = (decl.prefix(), decl.uri()) {
                self.declare(&prefix, uri.value());
            }
        } else if let Some(decl) = DefaultNamespaceDecl::cast(node.clone()) {
            let uri = decl.uri().map(|literal| literal.value()).unwrap_or_default();
            if decl.is_function() {
                self.context.default_function_namespace = uri;
            } else {
                self.context.default_element_namespace = uri;
            }
        } else if let Some(import) = ModuleImport::cast(node.clone()) {
            if let (Some(prefix), Some(uri)) = (import.prefix(), import.uri()) {
                self.declare(&prefix, uri.value());
            }
        } else if let Some(import) = SchemaImport::cast(node) {
            let Some(uri) = import.uri().map(|literal| literal.value()) else {
                return;
            };
            if import.is_default_element() {
                self.context.default_element_namespace = uri.clone();
            }
            if let Some(prefix) = import.prefix() {
                self.declare(&prefix, uri);
            }
        }
    }

    fn declare(&mut self, prefix: &Prefix, uri: String) {
        let Some(token) = prefix.name() else { return };
        let name = token.text().to_string();
        let range = token.text_range();

        if let Some(&first) = self.declared.get(&name) {
            self.diag
                .report(DiagnosticKind::DuplicateNamespacePrefix, range)
                .message(&name)
                .related_to("first declared here", first)
                .emit();
            return;
        }

        self.declared.insert(name.clone(), range);
        self.context.namespaces.declare(name, uri);
    }
}
