//! Version conformance: flags constructs newer than the effective language version.
//!
//! Each construct reports at its designated element (the `||` of a string
//! concatenation, the `[` of an array constructor, ...). Findings are warnings;
//! the tree is still fully usable.

use xqsyntax_core::{Dialect, Version};

use crate::Diagnostics;
use crate::diagnostics::DiagnosticKind;
use crate::parser::ast::{self, ConformanceElement};
use crate::parser::{AstNode, Root, SyntaxKind, SyntaxNode, SyntaxToken};

use super::context::StaticContext;
use super::visitor::{Visitor, walk_node};

pub fn check_conformance(root: &Root, context: &StaticContext, diag: &mut Diagnostics) {
    let mut checker = ConformanceChecker {
        context,
        diag,
        reported: 0,
    };
    checker.visit_root(root);

    tracing::debug!(
        version = %context.version.display(context.dialect),
        reported = checker.reported,
        "conformance checked"
    );
}

/// Minimum version of a version-dependent construct, with its designated token.
pub fn required_version(node: &SyntaxNode, dialect: Dialect) -> Option<(Version, SyntaxToken)> {
    let (version, token) = match node.kind() {
        SyntaxKind::StringConcatExpr => (Version::V3_0, designated::<ast::StringConcatExpr>(node)),
        SyntaxKind::SimpleMapExpr => (Version::V3_0, designated::<ast::SimpleMapExpr>(node)),
        SyntaxKind::URIQualifiedName => (Version::V3_0, designated::<ast::URIQualifiedName>(node)),
        SyntaxKind::Wildcard => (Version::V3_0, designated::<ast::Wildcard>(node)),
        SyntaxKind::InlineFunctionExpr => {
            (Version::V3_0, designated::<ast::InlineFunctionExpr>(node))
        }
        SyntaxKind::NamedFunctionRef => (Version::V3_0, designated::<ast::NamedFunctionRef>(node)),
        SyntaxKind::NamespaceNodeTest => {
            (Version::V3_0, designated::<ast::NamespaceNodeTest>(node))
        }
        SyntaxKind::AnyFunctionTest => (Version::V3_0, designated::<ast::AnyFunctionTest>(node)),
        SyntaxKind::TypedFunctionTest => {
            (Version::V3_0, designated::<ast::TypedFunctionTest>(node))
        }
        SyntaxKind::LetClause if !dialect.is_xquery() => {
            (Version::V3_0, designated::<ast::LetClause>(node))
        }
        SyntaxKind::CountClause if dialect.is_xquery() => {
            (Version::V3_0, designated::<ast::CountClause>(node))
        }

        SyntaxKind::ArrowExpr => (Version::V3_1, designated::<ast::ArrowExpr>(node)),
        SyntaxKind::MapConstructor => (Version::V3_1, designated::<ast::MapConstructor>(node)),
        SyntaxKind::SquareArrayConstructor => {
            (Version::V3_1, designated::<ast::SquareArrayConstructor>(node))
        }
        SyntaxKind::CurlyArrayConstructor => {
            (Version::V3_1, designated::<ast::CurlyArrayConstructor>(node))
        }
        SyntaxKind::Lookup | SyntaxKind::UnaryLookup => {
            (Version::V3_1, designated::<ast::Lookup>(node))
        }
        SyntaxKind::AnyMapTest => (Version::V3_1, designated::<ast::AnyMapTest>(node)),
        SyntaxKind::TypedMapTest => (Version::V3_1, designated::<ast::TypedMapTest>(node)),
        SyntaxKind::AnyArrayTest => (Version::V3_1, designated::<ast::AnyArrayTest>(node)),
        SyntaxKind::TypedArrayTest => (Version::V3_1, designated::<ast::TypedArrayTest>(node)),

        SyntaxKind::ParamList => (Version::V4_0, designated::<ast::ParamList>(node)),
        _ => return None,
    };
    Some((version, token?))
}

fn designated<N: AstNode + ConformanceElement>(node: &SyntaxNode) -> Option<SyntaxToken> {
    N::cast(node.clone())?.conformance_element()
}

struct ConformanceChecker<'c, 'd> {
    context: &'c StaticContext,
    diag: &'d mut Diagnostics,
    reported: usize,
}

impl Visitor for ConformanceChecker<'_, '_> {
    fn visit_node(&mut self, node: &SyntaxNode) {
        let dialect = self.context.dialect;
        if let Some((required, token)) = required_version(node, dialect)
            && required > self.context.version
        {
            self.diag
                .report(DiagnosticKind::RequiresVersion, token.text_range())
                .message(format!(
                    "`{}` requires {}",
                    token.text(),
                    required.display(dialect)
                ))
                .hint(format!(
                    "the effective language version is {}",
                    self.context.version.display(dialect)
                ))
                .emit();
            self.reported += 1;
        }
        walk_node(self, node);
    }
}
