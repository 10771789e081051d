use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{
    FORWARD_AXES, KIND_TEST_KEYWORDS, PATH_SEPARATORS, REVERSE_AXES,
};

impl Parser<'_> {
    /// `("/" RelativePathExpr?) | ("//" RelativePathExpr) | RelativePathExpr`
    pub(crate) fn parse_path_expr(&mut self) {
        match self.current() {
            SyntaxKind::Slash => {
                self.start_node(SyntaxKind::PathExpr);
                self.bump();
                if self.at_step_start() {
                    self.parse_relative_path_expr();
                }
                self.finish_node();
            }
            SyntaxKind::DoubleSlash => {
                self.start_node(SyntaxKind::PathExpr);
                self.bump();
                if self.at_step_start() {
                    self.parse_relative_path_expr();
                } else {
                    self.error_expected(DiagnosticKind::ExpectedNodeTest);
                }
                self.finish_node();
            }
            _ => self.parse_relative_path_expr(),
        }
    }

    fn at_step_start(&mut self) -> bool {
        let kind = self.current();
        kind.is_name()
            || matches!(
                kind,
                SyntaxKind::Star
                    | SyntaxKind::At
                    | SyntaxKind::Dot
                    | SyntaxKind::DotDot
                    | SyntaxKind::Dollar
                    | SyntaxKind::ParenOpen
                    | SyntaxKind::BracketOpen
                    | SyntaxKind::Question
                    | SyntaxKind::Percent
                    | SyntaxKind::IntegerLiteral
                    | SyntaxKind::DecimalLiteral
                    | SyntaxKind::DoubleLiteral
                    | SyntaxKind::StringLiteralStart
                    | SyntaxKind::BracedUriLiteralStart
            )
    }

    fn parse_relative_path_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_step_expr();
        if !self.currently_is_one_of(PATH_SEPARATORS) {
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::RelativePathExpr);
        while self.currently_is_one_of(PATH_SEPARATORS) && !self.has_fatal_error() {
            self.bump();
            self.parse_step_expr();
        }
        self.finish_node();
    }

    fn parse_step_expr(&mut self) {
        let kind = self.current();
        match kind {
            SyntaxKind::DotDot | SyntaxKind::At | SyntaxKind::Star => self.parse_axis_step(),
            _ if self.at_axis() => self.parse_axis_step(),
            _ if KIND_TEST_KEYWORDS.contains(kind) && self.next_is(SyntaxKind::ParenOpen) => {
                self.parse_axis_step()
            }
            _ if self.at_primary_start() => self.parse_postfix_expr(),
            _ if kind.is_name() || kind == SyntaxKind::BracedUriLiteralStart => {
                self.parse_axis_step()
            }
            _ => self.error_expected(DiagnosticKind::ExpectedExpression),
        }
    }

    fn at_axis(&mut self) -> bool {
        let kind = self.current();
        (FORWARD_AXES.contains(kind) || REVERSE_AXES.contains(kind))
            && self.next_is(SyntaxKind::AxisSeparator)
    }

    /// Explicit axes, `@` and predicates wrap the step in `AxisStep`; a bare node test stays bare.
    fn parse_axis_step(&mut self) {
        let checkpoint = self.checkpoint();
        let mut wrap = false;

        match self.current() {
            SyntaxKind::DotDot => {
                self.start_node(SyntaxKind::AbbrevReverseStep);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::At => {
                self.bump();
                self.parse_node_test();
                wrap = true;
            }
            kind if self.at_axis() => {
                let node = if FORWARD_AXES.contains(kind) {
                    SyntaxKind::ForwardAxis
                } else {
                    SyntaxKind::ReverseAxis
                };
                self.start_node(node);
                self.bump();
                self.bump();
                self.finish_node();
                self.parse_node_test();
                wrap = true;
            }
            _ => self.parse_node_test(),
        }

        if wrap || self.currently_is(SyntaxKind::BracketOpen) {
            self.start_node_at(checkpoint, SyntaxKind::AxisStep);
            self.parse_predicates();
            self.finish_node();
        }
    }

    fn parse_node_test(&mut self) {
        let kind = self.current();
        if KIND_TEST_KEYWORDS.contains(kind) && self.next_is(SyntaxKind::ParenOpen) {
            self.parse_kind_test();
        } else if kind.is_name()
            || matches!(kind, SyntaxKind::Star | SyntaxKind::BracedUriLiteralStart)
        {
            self.parse_name_test();
        } else {
            self.error_expected(DiagnosticKind::ExpectedNodeTest);
        }
    }

    /// `EQName | "*" | NCName ":*" | "*:" NCName | BracedURILiteral "*"`
    pub(crate) fn parse_name_test(&mut self) {
        let kind = self.current();
        if !(kind.is_name() || matches!(kind, SyntaxKind::Star | SyntaxKind::BracedUriLiteralStart))
        {
            self.error_expected(DiagnosticKind::ExpectedNodeTest);
            return;
        }

        self.start_node(SyntaxKind::NameTest);
        match kind {
            SyntaxKind::Star => {
                self.start_node(SyntaxKind::Wildcard);
                if self.nth_raw(1) == SyntaxKind::QNameSeparator && self.nth_raw(2).is_name() {
                    self.bump();
                    self.bump();
                    self.bump();
                } else {
                    self.bump();
                }
                self.finish_node();
            }
            _ if kind.is_name()
                && self.nth_raw(1) == SyntaxKind::QNameSeparator
                && self.nth_raw(2) == SyntaxKind::Star =>
            {
                self.start_node(SyntaxKind::Wildcard);
                self.bump();
                self.bump();
                self.bump();
                self.finish_node();
            }
            SyntaxKind::BracedUriLiteralStart if self.at_braced_uri_wildcard() => {
                self.start_node(SyntaxKind::Wildcard);
                self.parse_braced_uri_literal();
                self.bump();
                self.finish_node();
            }
            _ => {
                self.parse_eqname();
            }
        }
        self.finish_node();
    }

    fn at_braced_uri_wildcard(&mut self) -> bool {
        self.current();
        self.braced_uri_raw_len()
            .is_some_and(|len| self.nth_raw(len) == SyntaxKind::Star)
    }

    pub(crate) fn parse_predicates(&mut self) {
        while self.currently_is(SyntaxKind::BracketOpen) && !self.has_fatal_error() {
            self.parse_predicate();
        }
    }

    pub(crate) fn parse_predicate(&mut self) {
        self.start_node(SyntaxKind::Predicate);
        self.open_delimiter(SyntaxKind::BracketOpen);
        self.parse_expr_or_error();
        self.close_delimiter(SyntaxKind::BracketClose);
        self.finish_node();
    }
}
