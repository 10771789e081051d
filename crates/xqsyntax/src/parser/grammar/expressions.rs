use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{
    ADDITIVE_OPS, COMPARISON_OPS, EXPR_FIRST, INTERSECT_EXCEPT_OPS, MULTIPLICATIVE_OPS,
    UNION_OPS,
};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    pub(crate) fn at_expr_start(&mut self) -> bool {
        let kind = self.current();
        EXPR_FIRST.contains(kind) || kind.is_keyword()
    }

    /// `Expr ::= ExprSingle ("," ExprSingle)*`
    pub(crate) fn parse_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_expr_single();
        if !self.currently_is(SyntaxKind::Comma) {
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::SequenceExpr);
        while self.currently_is(SyntaxKind::Comma) && !self.has_fatal_error() {
            self.bump();
            self.parse_expr_single_or_error();
        }
        self.finish_node();
    }

    pub(crate) fn parse_expr_or_error(&mut self) {
        if self.at_expr_start() {
            self.parse_expr();
        } else {
            self.error_expected(DiagnosticKind::ExpectedExpression);
        }
    }

    pub(crate) fn parse_expr_single_or_error(&mut self) {
        if self.at_expr_start() {
            self.parse_expr_single();
        } else {
            self.error_expected(DiagnosticKind::ExpectedExpression);
        }
    }

    pub(crate) fn parse_expr_single(&mut self) {
        if !self.enter_recursion() {
            return;
        }

        match self.current() {
            SyntaxKind::KwFor | SyntaxKind::KwLet if self.next_is(SyntaxKind::Dollar) => {
                self.parse_flwor_expr()
            }
            SyntaxKind::KwSome | SyntaxKind::KwEvery if self.next_is(SyntaxKind::Dollar) => {
                self.parse_quantified_expr()
            }
            SyntaxKind::KwIf if self.next_is(SyntaxKind::ParenOpen) => self.parse_if_expr(),
            _ => self.parse_or_expr(),
        }

        self.exit_recursion();
    }

    /// Left-associative level: `operand (op operand)*` as one flat node.
    fn parse_binary(&mut self, node: SyntaxKind, ops: TokenSet, operand: fn(&mut Self)) {
        let checkpoint = self.checkpoint();
        operand(self);
        if !self.currently_is_one_of(ops) {
            return;
        }

        self.start_node_at(checkpoint, node);
        while self.currently_is_one_of(ops) && !self.has_fatal_error() {
            self.bump();
            operand(self);
        }
        self.finish_node();
    }

    /// Non-associative level: a second operator is reported, then parsed left-nested.
    fn parse_non_associative(&mut self, node: SyntaxKind, ops: TokenSet, operand: fn(&mut Self)) {
        let checkpoint = self.checkpoint();
        operand(self);

        let mut chained = false;
        while self.currently_is_one_of(ops) && !self.has_fatal_error() {
            if chained {
                self.error(DiagnosticKind::NonAssociativeOperator);
            }
            self.start_node_at(checkpoint, node);
            self.bump();
            operand(self);
            self.finish_node();
            chained = true;
        }
    }

    fn parse_or_expr(&mut self) {
        self.parse_binary(
            SyntaxKind::OrExpr,
            TokenSet::single(SyntaxKind::KwOr),
            Self::parse_and_expr,
        );
    }

    fn parse_and_expr(&mut self) {
        self.parse_binary(
            SyntaxKind::AndExpr,
            TokenSet::single(SyntaxKind::KwAnd),
            Self::parse_comparison_expr,
        );
    }

    fn parse_comparison_expr(&mut self) {
        self.parse_non_associative(
            SyntaxKind::ComparisonExpr,
            COMPARISON_OPS,
            Self::parse_string_concat_expr,
        );
    }

    fn parse_string_concat_expr(&mut self) {
        self.parse_binary(
            SyntaxKind::StringConcatExpr,
            TokenSet::single(SyntaxKind::Concat),
            Self::parse_range_expr,
        );
    }

    fn parse_range_expr(&mut self) {
        self.parse_non_associative(
            SyntaxKind::RangeExpr,
            TokenSet::single(SyntaxKind::KwTo),
            Self::parse_additive_expr,
        );
    }

    fn parse_additive_expr(&mut self) {
        self.parse_binary(
            SyntaxKind::AdditiveExpr,
            ADDITIVE_OPS,
            Self::parse_multiplicative_expr,
        );
    }

    fn parse_multiplicative_expr(&mut self) {
        self.parse_binary(
            SyntaxKind::MultiplicativeExpr,
            MULTIPLICATIVE_OPS,
            Self::parse_union_expr,
        );
    }

    fn parse_union_expr(&mut self) {
        self.parse_binary(
            SyntaxKind::UnionExpr,
            UNION_OPS,
            Self::parse_intersect_except_expr,
        );
    }

    fn parse_intersect_except_expr(&mut self) {
        self.parse_binary(
            SyntaxKind::IntersectExceptExpr,
            INTERSECT_EXCEPT_OPS,
            Self::parse_instanceof_expr,
        );
    }

    /// `TreatExpr ("instance" "of" SequenceType)?`
    fn parse_instanceof_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_treat_expr();
        if self.currently_is(SyntaxKind::KwInstance) && self.next_is(SyntaxKind::KwOf) {
            self.start_node_at(checkpoint, SyntaxKind::InstanceofExpr);
            self.bump();
            self.bump();
            self.parse_sequence_type();
            self.finish_node();
        }
    }

    fn parse_treat_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_castable_expr();
        if self.currently_is(SyntaxKind::KwTreat) && self.next_is(SyntaxKind::KwAs) {
            self.start_node_at(checkpoint, SyntaxKind::TreatExpr);
            self.bump();
            self.bump();
            self.parse_sequence_type();
            self.finish_node();
        }
    }

    fn parse_castable_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_cast_expr();
        if self.currently_is(SyntaxKind::KwCastable) && self.next_is(SyntaxKind::KwAs) {
            self.start_node_at(checkpoint, SyntaxKind::CastableExpr);
            self.bump();
            self.bump();
            self.parse_single_type();
            self.finish_node();
        }
    }

    fn parse_cast_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_arrow_expr();
        if self.currently_is(SyntaxKind::KwCast) && self.next_is(SyntaxKind::KwAs) {
            self.start_node_at(checkpoint, SyntaxKind::CastExpr);
            self.bump();
            self.bump();
            self.parse_single_type();
            self.finish_node();
        }
    }

    /// `UnaryExpr ("=>" ArrowFunctionSpecifier ArgumentList)*`, flat.
    fn parse_arrow_expr(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_unary_expr();
        if !self.currently_is(SyntaxKind::Arrow) {
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::ArrowExpr);
        while self.currently_is(SyntaxKind::Arrow) && !self.has_fatal_error() {
            self.bump();
            self.parse_arrow_function_specifier();
            if self.currently_is(SyntaxKind::ParenOpen) {
                self.parse_argument_list();
            } else {
                self.error(DiagnosticKind::ExpectedArgumentList);
            }
        }
        self.finish_node();
    }

    fn parse_arrow_function_specifier(&mut self) {
        let kind = self.current();
        if !(kind.is_name()
            || matches!(
                kind,
                SyntaxKind::BracedUriLiteralStart | SyntaxKind::Dollar | SyntaxKind::ParenOpen
            ))
        {
            self.error_expected(DiagnosticKind::ExpectedName);
            return;
        }

        self.start_node(SyntaxKind::ArrowFunctionSpecifier);
        match kind {
            SyntaxKind::Dollar => self.parse_var_ref(),
            SyntaxKind::ParenOpen => self.parse_parenthesized_expr(),
            _ => {
                self.parse_eqname();
            }
        }
        self.finish_node();
    }

    fn parse_unary_expr(&mut self) {
        if !self.currently_is_one_of(ADDITIVE_OPS) {
            self.parse_simple_map_expr();
            return;
        }

        self.start_node(SyntaxKind::UnaryExpr);
        while self.currently_is_one_of(ADDITIVE_OPS) {
            self.bump();
        }
        self.parse_simple_map_expr();
        self.finish_node();
    }

    fn parse_simple_map_expr(&mut self) {
        self.parse_binary(
            SyntaxKind::SimpleMapExpr,
            TokenSet::single(SyntaxKind::Bang),
            Self::parse_path_expr,
        );
    }
}
