use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::LITERAL_PARTS;
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// Whether the current token opens a primary expression rather than an axis step.
    pub(crate) fn at_primary_start(&mut self) -> bool {
        let kind = self.current();
        match kind {
            SyntaxKind::IntegerLiteral
            | SyntaxKind::DecimalLiteral
            | SyntaxKind::DoubleLiteral
            | SyntaxKind::StringLiteralStart
            | SyntaxKind::Dollar
            | SyntaxKind::ParenOpen
            | SyntaxKind::Dot
            | SyntaxKind::BracketOpen
            | SyntaxKind::Question
            | SyntaxKind::Percent => true,
            SyntaxKind::KwFunction if self.next_is(SyntaxKind::ParenOpen) => true,
            SyntaxKind::KwMap | SyntaxKind::KwArray if self.next_is(SyntaxKind::BraceOpen) => {
                true
            }
            _ if self.at_computed_constructor() => true,
            _ => self.eqname_raw_len().is_some_and(|len| {
                matches!(
                    self.peek_after_raw(len),
                    SyntaxKind::ParenOpen | SyntaxKind::Hash
                )
            }),
        }
    }

    fn at_computed_constructor(&mut self) -> bool {
        match self.current() {
            SyntaxKind::KwDocument | SyntaxKind::KwText | SyntaxKind::KwComment => {
                self.next_is(SyntaxKind::BraceOpen)
            }
            SyntaxKind::KwElement | SyntaxKind::KwAttribute => {
                let next = self.peek_nth(1);
                next == SyntaxKind::BraceOpen
                    || next == SyntaxKind::BracedUriLiteralStart
                    || (next.is_name() && self.peek_nth(2) == SyntaxKind::BraceOpen)
                    || (next.is_name()
                        && self.peek_nth(2) == SyntaxKind::QNameSeparator
                        && self.peek_nth(4) == SyntaxKind::BraceOpen)
            }
            _ => false,
        }
    }

    /// `PrimaryExpr (Predicate | ArgumentList | Lookup)*`
    pub(crate) fn parse_postfix_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_primary_expr();
        if !self.at_postfix() {
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::PostfixExpr);
        while !self.has_fatal_error() {
            match self.current() {
                SyntaxKind::BracketOpen => self.parse_predicate(),
                SyntaxKind::ParenOpen => self.parse_argument_list(),
                SyntaxKind::Question => self.parse_lookup(SyntaxKind::Lookup),
                _ => break,
            }
        }
        self.finish_node();
    }

    fn at_postfix(&mut self) -> bool {
        matches!(
            self.current(),
            SyntaxKind::BracketOpen | SyntaxKind::ParenOpen | SyntaxKind::Question
        )
    }

    fn parse_primary_expr(&mut self) {
        match self.current() {
            SyntaxKind::IntegerLiteral | SyntaxKind::DecimalLiteral | SyntaxKind::DoubleLiteral => {
                self.parse_numeric_literal()
            }
            SyntaxKind::StringLiteralStart => self.parse_string_literal(),
            SyntaxKind::Dollar => self.parse_var_ref(),
            SyntaxKind::ParenOpen => self.parse_parenthesized_expr(),
            SyntaxKind::Dot => {
                self.start_node(SyntaxKind::ContextItemExpr);
                self.bump();
                self.finish_node();
            }
            SyntaxKind::BracketOpen => self.parse_square_array_constructor(),
            SyntaxKind::Question => self.parse_lookup(SyntaxKind::UnaryLookup),
            SyntaxKind::Percent => self.parse_inline_function_expr(),
            SyntaxKind::KwFunction if self.next_is(SyntaxKind::ParenOpen) => {
                self.parse_inline_function_expr()
            }
            SyntaxKind::KwMap if self.next_is(SyntaxKind::BraceOpen) => {
                self.parse_map_constructor()
            }
            SyntaxKind::KwArray if self.next_is(SyntaxKind::BraceOpen) => {
                self.parse_curly_array_constructor()
            }
            _ if self.at_computed_constructor() => self.parse_computed_constructor(),
            _ => self.parse_function_call_or_ref(),
        }
    }

    pub(crate) fn parse_numeric_literal(&mut self) {
        self.start_node(SyntaxKind::NumericLiteral);
        let start = self.current_span().start();
        self.bump();
        if self.nth_raw(0) == SyntaxKind::PartialDoubleLiteralExponent {
            let end = self.current_span().end();
            self.error_at(
                DiagnosticKind::IncompleteDoubleExponent,
                rowan::TextRange::new(start, end),
            );
            self.bump();
        }
        self.finish_node();
    }

    pub(crate) fn parse_string_literal(&mut self) {
        self.start_node(SyntaxKind::StringLiteral);
        let open = self.current_span();
        self.bump();
        loop {
            match self.nth_raw(0) {
                SyntaxKind::StringLiteralEnd => {
                    self.bump();
                    break;
                }
                kind if LITERAL_PARTS.contains(kind) => self.bump_literal_part(),
                _ => {
                    self.error_unclosed_delimiter(
                        DiagnosticKind::UnclosedStringLiteral,
                        "reached end of input",
                        "string literal starts here",
                        open,
                    );
                    break;
                }
            }
        }
        self.finish_node();
    }

    pub(crate) fn parse_uri_literal(&mut self) {
        self.expect_string_literal("a URI literal");
    }

    pub(crate) fn expect_string_literal(&mut self, what: &str) {
        if self.currently_is(SyntaxKind::StringLiteralStart) {
            self.parse_string_literal();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, what);
        }
    }

    /// `"(" Expr? ")"`
    pub(crate) fn parse_parenthesized_expr(&mut self) {
        self.start_node(SyntaxKind::ParenthesizedExpr);
        self.open_delimiter(SyntaxKind::ParenOpen);
        if !self.currently_is(SyntaxKind::ParenClose) {
            self.parse_expr_or_error();
        }
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
    }

    /// `"(" (Argument ("," Argument)*)? ")"`
    pub(crate) fn parse_argument_list(&mut self) {
        self.start_node(SyntaxKind::ArgumentList);
        self.open_delimiter(SyntaxKind::ParenOpen);
        self.parse_comma_list(TokenSet::single(SyntaxKind::ParenClose), Self::parse_argument);
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
    }

    fn parse_argument(&mut self) {
        if self.currently_is(SyntaxKind::Question)
            && matches!(
                self.peek_nth(1),
                SyntaxKind::Comma | SyntaxKind::ParenClose
            )
        {
            self.start_node(SyntaxKind::ArgumentPlaceholder);
            self.bump();
            self.finish_node();
            return;
        }
        self.parse_expr_single_or_error();
    }

    /// Items separated by `,` up to (not including) one of `terminators`.
    ///
    /// Every item parser must consume at least one token unless it stops at a closer.
    pub(crate) fn parse_comma_list(&mut self, terminators: TokenSet, item: fn(&mut Self)) {
        if self.currently_is_one_of(terminators) {
            return;
        }
        loop {
            item(self);
            if self.should_stop() || self.currently_is_one_of(terminators) {
                break;
            }
            if self.eat_token(SyntaxKind::Comma) {
                continue;
            }
            if self.currently_is_one_of(crate::parser::cst::token_sets::CLOSERS) {
                break;
            }
            self.error_msg(DiagnosticKind::ExpectedToken, "`,`");
        }
    }

    /// `"?" KeySpecifier`, as `Lookup` after a primary or `UnaryLookup` on its own.
    fn parse_lookup(&mut self, node: SyntaxKind) {
        self.start_node(node);
        self.bump();

        let kind = self.current();
        if kind.is_name() || matches!(kind, SyntaxKind::IntegerLiteral | SyntaxKind::Star) {
            self.start_node(SyntaxKind::KeySpecifier);
            self.bump();
            self.finish_node();
        } else if kind == SyntaxKind::ParenOpen {
            self.start_node(SyntaxKind::KeySpecifier);
            self.parse_parenthesized_expr();
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "a key specifier");
        }
        self.finish_node();
    }

    /// `EQName "#" IntegerLiteral` or `EQName ArgumentList`.
    fn parse_function_call_or_ref(&mut self) {
        let checkpoint = self.checkpoint();
        if !self.parse_eqname() {
            return;
        }
        match self.current() {
            SyntaxKind::Hash => {
                self.start_node_at(checkpoint, SyntaxKind::NamedFunctionRef);
                self.bump();
                self.expect(SyntaxKind::IntegerLiteral, "an arity");
                self.finish_node();
            }
            SyntaxKind::ParenOpen => {
                self.start_node_at(checkpoint, SyntaxKind::FunctionCall);
                self.parse_argument_list();
                self.finish_node();
            }
            _ => {}
        }
    }

    /// `Annotation* "function" ParamList TypeDeclaration? EnclosedExpr`
    fn parse_inline_function_expr(&mut self) {
        self.start_node(SyntaxKind::InlineFunctionExpr);
        self.parse_annotations();
        if !self.expect(SyntaxKind::KwFunction, "`function`") {
            self.finish_node();
            return;
        }
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.error_msg(DiagnosticKind::ExpectedToken, "a parameter list");
        } else {
            self.parse_param_list();
            if self.currently_is(SyntaxKind::KwAs) {
                self.parse_type_declaration();
            }
            self.parse_enclosed_expr();
        }
        self.finish_node();
    }

    /// `"map" "{" (MapConstructorEntry ("," MapConstructorEntry)*)? "}"`
    fn parse_map_constructor(&mut self) {
        self.start_node(SyntaxKind::MapConstructor);
        self.bump();
        self.open_delimiter(SyntaxKind::BraceOpen);
        self.parse_comma_list(
            TokenSet::single(SyntaxKind::BraceClose),
            Self::parse_map_constructor_entry,
        );
        self.close_delimiter(SyntaxKind::BraceClose);
        self.finish_node();
    }

    fn parse_map_constructor_entry(&mut self) {
        self.start_node(SyntaxKind::MapConstructorEntry);
        self.parse_expr_single_or_error();
        if self.expect(SyntaxKind::QNameSeparator, "`:`") {
            self.parse_expr_single_or_error();
        }
        self.finish_node();
    }

    /// `"[" (ExprSingle ("," ExprSingle)*)? "]"`
    fn parse_square_array_constructor(&mut self) {
        self.start_node(SyntaxKind::SquareArrayConstructor);
        self.open_delimiter(SyntaxKind::BracketOpen);
        self.parse_comma_list(
            TokenSet::single(SyntaxKind::BracketClose),
            Self::parse_expr_single_or_error,
        );
        self.close_delimiter(SyntaxKind::BracketClose);
        self.finish_node();
    }

    fn parse_curly_array_constructor(&mut self) {
        self.start_node(SyntaxKind::CurlyArrayConstructor);
        self.bump();
        self.parse_enclosed_expr();
        self.finish_node();
    }

    fn parse_computed_constructor(&mut self) {
        let keyword = self.current();
        if !self.is_xquery() {
            self.error_msg(DiagnosticKind::XQueryOnly, "a computed constructor");
        }

        let node = match keyword {
            SyntaxKind::KwDocument => SyntaxKind::CompDocConstructor,
            SyntaxKind::KwText => SyntaxKind::CompTextConstructor,
            SyntaxKind::KwComment => SyntaxKind::CompCommentConstructor,
            SyntaxKind::KwElement => SyntaxKind::CompElemConstructor,
            _ => SyntaxKind::CompAttrConstructor,
        };
        self.start_node(node);
        self.bump();
        if matches!(keyword, SyntaxKind::KwElement | SyntaxKind::KwAttribute) {
            if self.currently_is(SyntaxKind::BraceOpen) {
                self.parse_enclosed_expr();
            } else {
                self.parse_eqname();
            }
        }
        self.parse_enclosed_expr();
        self.finish_node();
    }

    /// `"{" Expr? "}"`
    pub(crate) fn parse_enclosed_expr(&mut self) {
        if !self.currently_is(SyntaxKind::BraceOpen) {
            self.error_msg(DiagnosticKind::ExpectedToken, "`{`");
            return;
        }
        self.start_node(SyntaxKind::EnclosedExpr);
        self.open_delimiter(SyntaxKind::BraceOpen);
        if !self.currently_is(SyntaxKind::BraceClose) {
            self.parse_expr_or_error();
        }
        self.close_delimiter(SyntaxKind::BraceClose);
        self.finish_node();
    }
}
