//! CST visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your struct. Override the typed `visit_*` hooks to
//! observe names and types; they fire before the walk descends into the node.
//! Override `visit_node` to look at every node, and call `walk_node` within it
//! to continue recursion (or omit it to prune the subtree).
//!
//! ```ignore
//! impl Visitor for MyPass {
//!     fn visit_node(&mut self, node: &SyntaxNode) {
//!         // Pre-order logic
//!         walk_node(self, node);
//!         // Post-order logic
//!     }
//! }
//! ```

use crate::parser::ast::{EQName, Expr, SequenceType, SingleType, TypeDeclaration, Wildcard};
use crate::parser::{AstNode, Root, SyntaxNode};

pub trait Visitor: Sized {
    fn visit_root(&mut self, root: &Root) {
        walk_root(self, root);
    }

    fn visit_node(&mut self, node: &SyntaxNode) {
        walk_node(self, node);
    }

    fn visit_expr(&mut self, _expr: &Expr) {}

    fn visit_eqname(&mut self, _name: &EQName) {}

    fn visit_wildcard(&mut self, _wildcard: &Wildcard) {}

    fn visit_sequence_type(&mut self, _ty: &SequenceType) {}

    fn visit_single_type(&mut self, _ty: &SingleType) {}

    fn visit_type_declaration(&mut self, _decl: &TypeDeclaration) {}
}

pub fn walk_root<V: Visitor>(visitor: &mut V, root: &Root) {
    walk_node(visitor, root.as_cst());
}

pub fn walk_node<V: Visitor>(visitor: &mut V, node: &SyntaxNode) {
    for child in node.children() {
        dispatch(visitor, &child);
        visitor.visit_node(&child);
    }
}

fn dispatch<V: Visitor>(visitor: &mut V, node: &SyntaxNode) {
    let kind = node.kind();
    if EQName::can_cast(kind) {
        if let Some(name) = EQName::cast(node.clone()) {
            visitor.visit_eqname(&name);
        }
    } else if Wildcard::can_cast(kind) {
        if let Some(wildcard) = Wildcard::cast(node.clone()) {
            visitor.visit_wildcard(&wildcard);
        }
    } else if SequenceType::can_cast(kind) {
        if let Some(ty) = SequenceType::cast(node.clone()) {
            visitor.visit_sequence_type(&ty);
        }
    } else if SingleType::can_cast(kind) {
        if let Some(ty) = SingleType::cast(node.clone()) {
            visitor.visit_single_type(&ty);
        }
    } else if TypeDeclaration::can_cast(kind) {
        if let Some(decl) = TypeDeclaration::cast(node.clone()) {
            visitor.visit_type_declaration(&decl);
        }
    } else if let Some(expr) = Expr::cast(node.clone()) {
        visitor.visit_expr(&expr);
    }
}
