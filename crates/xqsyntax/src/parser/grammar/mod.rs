//! Grammar productions for XPath and XQuery.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Binary operator levels produce flat nodes and are only created when an
//! operator is present, so `1` parses to a bare `NumericLiteral`.

mod expressions;
mod flwor;
mod names;
mod paths;
mod primaries;
mod prolog;
mod types;

use crate::config::ParseTarget;
use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    pub fn parse_root(&mut self, target: ParseTarget) {
        self.start_node(SyntaxKind::Root);

        match target {
            ParseTarget::Expression if self.is_xquery() => self.parse_module(),
            ParseTarget::Expression | ParseTarget::Pattern => {
                if !self.at_end() {
                    self.parse_expr_or_error();
                }
            }
            ParseTarget::SequenceType => self.parse_sequence_type(),
            ParseTarget::ItemType => self.parse_item_type(),
            ParseTarget::EQName => {
                self.parse_eqname();
            }
            ParseTarget::NameTest => self.parse_name_test(),
            ParseTarget::Prefixes => self.parse_prefix_list(),
        }

        self.parse_trailing_input();
        self.eat_trivia();
        self.finish_node();
    }

    fn parse_trailing_input(&mut self) {
        if self.should_stop() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.error(DiagnosticKind::TrailingInput);
        while !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }
}
