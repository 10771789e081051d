//! Name resolution: expands every `EQName` in the tree against the static context.
//!
//! The role of a name (element, function, variable, ...) decides which default
//! namespace an unprefixed name falls into. Prefixed names go through
//! `parse_qname`; an undeclared prefix becomes a diagnostic here.

use indexmap::IndexMap;
use rowan::TextRange;

use xqsyntax_core::{QName, QNameError, parse_qname};

use crate::Diagnostics;
use crate::diagnostics::DiagnosticKind;
use crate::parser::ast::{Axis, AxisStep, EQName, Wildcard};
use crate::parser::{Root, SyntaxKind, SyntaxNode};

use super::context::StaticContext;
use super::visitor::Visitor;

/// Resolved names keyed by the `EQName` node.
pub type NameTable = IndexMap<SyntaxNode, QName>;

/// What a name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRole {
    Element,
    Attribute,
    Type,
    Function,
    Variable,
    Option,
    Annotation,
    /// Plain NCName parts: processing-instruction targets, standalone names.
    Local,
}

impl NameRole {
    /// Role of `name`, decided by where it sits in the tree.
    pub fn of(name: &EQName) -> NameRole {
        let Some(parent) = name.as_cst().parent() else {
            return NameRole::Local;
        };
        match parent.kind() {
            SyntaxKind::VarName => NameRole::Variable,
            SyntaxKind::FunctionCall
            | SyntaxKind::NamedFunctionRef
            | SyntaxKind::FunctionDecl
            | SyntaxKind::ArrowFunctionSpecifier => NameRole::Function,
            SyntaxKind::AtomicOrUnionType | SyntaxKind::TypeName | SyntaxKind::SingleType => {
                NameRole::Type
            }
            SyntaxKind::ElementTest
            | SyntaxKind::SchemaElementTest
            | SyntaxKind::CompElemConstructor => NameRole::Element,
            SyntaxKind::AttributeTest
            | SyntaxKind::SchemaAttributeTest
            | SyntaxKind::CompAttrConstructor => NameRole::Attribute,
            SyntaxKind::NameTest => name_test_role(&parent),
            SyntaxKind::OptionDecl => NameRole::Option,
            SyntaxKind::Annotation => NameRole::Annotation,
            _ => NameRole::Local,
        }
    }

    /// Whether unprefixed names take the default element namespace.
    fn uses_element_namespace(self) -> bool {
        matches!(self, NameRole::Element | NameRole::Type)
    }
}

/// The principal node kind of the step's axis decides the role.
fn name_test_role(name_test: &SyntaxNode) -> NameRole {
    let axis = name_test
        .parent()
        .and_then(AxisStep::cast)
        .map_or(Axis::Child, |step| step.axis());
    match axis {
        Axis::Attribute => NameRole::Attribute,
        Axis::Namespace => NameRole::Local,
        _ => NameRole::Element,
    }
}

pub fn resolve_names(root: &Root, context: &StaticContext, diag: &mut Diagnostics) -> NameTable {
    let mut resolver = NameResolver {
        context,
        diag,
        names: NameTable::new(),
    };
    resolver.visit_root(root);

    tracing::debug!(resolved = resolver.names.len(), "names resolved");
    resolver.names
}

/// Expands a single name, without reporting.
pub fn resolve_name(name: &EQName, context: &StaticContext) -> Result<Option<QName>, QNameError> {
    let Some(local) = name.local_name() else {
        return Ok(None);
    };
    let local = local.text();

    let qname = match name {
        EQName::URIQualifiedName(name) => {
            let uri = name.uri().map(|uri| uri.value()).unwrap_or_default();
            QName::uri_qualified(uri, local)
        }
        EQName::PrefixedName(name) => {
            let Some(prefix) = name.prefix() else {
                return Ok(None);
            };
            parse_qname(&format!("{}:{local}", prefix.text()), &context.namespaces)?
        }
        EQName::UnprefixedName(_) => {
            let role = NameRole::of(name);
            if role.uses_element_namespace() {
                QName::unprefixed(context.default_element_namespace.as_str(), local)
            } else if role == NameRole::Function {
                QName::unprefixed(context.default_function_namespace.as_str(), local)
            } else {
                QName::local(local)
            }
        }
    };
    Ok(Some(qname))
}

struct NameResolver<'c, 'd> {
    context: &'c StaticContext,
    diag: &'d mut Diagnostics,
    names: NameTable,
}

impl NameResolver<'_, '_> {
    fn report_undeclared(&mut self, prefix: &str, range: TextRange) {
        self.diag
            .report(DiagnosticKind::UndeclaredNamespacePrefix, range)
            .message(prefix)
            .emit();
    }
}

impl Visitor for NameResolver<'_, '_> {
    fn visit_eqname(&mut self, name: &EQName) {
        match resolve_name(name, self.context) {
            Ok(Some(qname)) => {
                self.names.insert(name.as_cst().clone(), qname);
            }
            Ok(None) => {}
            Err(QNameError::UndeclaredNamespacePrefix(prefix)) => {
                let range = name.prefix().map_or(name.text_range(), |t| t.text_range());
                self.report_undeclared(&prefix, range);
            }
        }
    }

    fn visit_wildcard(&mut self, wildcard: &Wildcard) {
        let Some(prefix) = wildcard.prefix() else { return };
        if !self.context.namespaces.contains(prefix.text()) {
            self.report_undeclared(prefix.text(), prefix.text_range());
        }
    }
}
