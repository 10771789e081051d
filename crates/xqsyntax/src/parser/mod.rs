//! Lexer, grammar and syntax tree for XPath and XQuery.
//!
//! Tokens come from a stateful lexer that tracks string literals, braced URI literals
//! and nested `(: :)` comments. The grammar is hand-written recursive descent over
//! that token stream and builds a Rowan green tree, so every byte of the input
//! (comments and whitespace included) survives in the resulting CST.
//!
//! Trivia is buffered and flushed into whichever node opens next. Binary operators
//! use checkpoints: the operator node is only started once its operator is seen, which
//! keeps operand-only expressions flat.
//!
//! # Recovery
//!
//! A tree is produced for any input:
//!
//! - an unexpected token is consumed inside an `Error` node;
//! - a missing token is reported without consuming anything;
//! - `)`, `]`, `}`, `,` and `;` resynchronize the enclosing production;
//! - leftover input after the entry production lands in one trailing `Error` node.
//!
//! Running out of exec or recursion fuel is the only hard failure.

pub mod ast;
pub mod chars;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{AstNode, EQName, Expr, ItemType, KindTest, Root};

pub use core::{ParseResult, Parser};
pub use lexer::{Lexer, LexerState, Token, lex, token_text};

use crate::PassResult;
use crate::config::ParseOptions;

/// Parse result containing the typed root.
///
/// The tree is always complete. Diagnostics are returned separately and
/// `Error` nodes in the tree mark recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    root: Root,
    exec_fuel_consumed: u32,
}

impl Parse {
    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn syntax(&self) -> &SyntaxNode {
        self.root.as_cst()
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }
}

/// Main entry point. Returns Err on fuel exhaustion.
pub fn parse(source: &str, options: &ParseOptions) -> PassResult<Parse> {
    let tokens = lex(source, options.dialect);
    tracing::debug!(
        source_len = source.len(),
        tokens = tokens.len(),
        dialect = %options.dialect,
        target = ?options.target,
        "parse start"
    );

    let parser = Parser::new(source, tokens, options.dialect)
        .with_exec_fuel(options.exec_fuel)
        .with_recursion_fuel(options.recursion_fuel);

    let ParseResult {
        root,
        diagnostics,
        exec_fuel_consumed,
    } = parser.parse(options.target)?;

    tracing::debug!(
        diagnostics = diagnostics.len(),
        exec_fuel_consumed,
        "parse done"
    );

    Ok((
        Parse {
            root,
            exec_fuel_consumed,
        },
        diagnostics,
    ))
}
