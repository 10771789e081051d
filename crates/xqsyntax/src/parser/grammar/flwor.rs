use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    /// `InitialClause IntermediateClause* ReturnClause`
    ///
    /// XPath only has single `for` and `let` clauses; the remaining clauses are
    /// parsed in both dialects and reported outside XQuery.
    pub(crate) fn parse_flwor_expr(&mut self) {
        self.start_node(SyntaxKind::FLWORExpr);

        while !self.should_stop() {
            match self.current() {
                SyntaxKind::KwFor if self.next_is(SyntaxKind::Dollar) => self.parse_for_clause(),
                SyntaxKind::KwLet if self.next_is(SyntaxKind::Dollar) => self.parse_let_clause(),
                SyntaxKind::KwWhere => {
                    self.report_xquery_clause("`where`");
                    self.parse_where_clause();
                }
                SyntaxKind::KwOrder if self.next_is(SyntaxKind::KwBy) => {
                    self.report_xquery_clause("`order by`");
                    self.parse_order_by_clause();
                }
                SyntaxKind::KwStable if self.next_is(SyntaxKind::KwOrder) => {
                    self.report_xquery_clause("`stable order by`");
                    self.parse_order_by_clause();
                }
                SyntaxKind::KwCount if self.next_is(SyntaxKind::Dollar) => {
                    self.report_xquery_clause("`count`");
                    self.parse_count_clause();
                }
                _ => break,
            }
        }

        if self.currently_is(SyntaxKind::KwReturn) {
            self.start_node(SyntaxKind::ReturnClause);
            self.bump();
            self.parse_expr_single_or_error();
            self.finish_node();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`return`");
        }

        self.finish_node();
    }

    fn report_xquery_clause(&mut self, what: &str) {
        if !self.is_xquery() {
            self.error_msg(DiagnosticKind::XQueryOnly, format!("the {what} clause"));
        }
    }

    /// `"for" ForBinding ("," ForBinding)*`
    fn parse_for_clause(&mut self) {
        self.start_node(SyntaxKind::ForClause);
        self.bump();
        self.parse_for_binding();
        while self.currently_is(SyntaxKind::Comma) && self.next_is(SyntaxKind::Dollar) {
            self.bump();
            self.parse_for_binding();
        }
        self.finish_node();
    }

    /// `"$" VarName TypeDeclaration? PositionalVar? "in" ExprSingle`
    fn parse_for_binding(&mut self) {
        self.start_node(SyntaxKind::ForBinding);
        self.parse_binding_var();
        if self.currently_is(SyntaxKind::KwAt) && self.next_is(SyntaxKind::Dollar) {
            self.start_node(SyntaxKind::PositionalVar);
            self.bump();
            self.bump();
            self.parse_var_name();
            self.finish_node();
        }
        if self.expect(SyntaxKind::KwIn, "`in`") {
            self.parse_expr_single_or_error();
        }
        self.finish_node();
    }

    fn parse_binding_var(&mut self) {
        if self.expect(SyntaxKind::Dollar, "`$`") {
            self.parse_var_name();
        }
        if self.currently_is(SyntaxKind::KwAs) {
            self.parse_type_declaration();
        }
    }

    /// `"let" LetBinding ("," LetBinding)*`
    fn parse_let_clause(&mut self) {
        self.start_node(SyntaxKind::LetClause);
        self.bump();
        self.parse_let_binding();
        while self.currently_is(SyntaxKind::Comma) && self.next_is(SyntaxKind::Dollar) {
            self.bump();
            self.parse_let_binding();
        }
        self.finish_node();
    }

    /// `"$" VarName TypeDeclaration? ":=" ExprSingle`
    fn parse_let_binding(&mut self) {
        self.start_node(SyntaxKind::LetBinding);
        self.parse_binding_var();
        self.expect_assign();
        self.parse_expr_single_or_error();
        self.finish_node();
    }

    /// `:=`, with a fix when a comparison `=` was written instead.
    pub(crate) fn expect_assign(&mut self) {
        if self.eat_token(SyntaxKind::AssignEquals) {
            return;
        }
        if self.currently_is(SyntaxKind::Equals) {
            let range = self.current_span();
            self.error_with_fix(
                DiagnosticKind::ExpectedToken,
                range,
                "`:=`",
                "use `:=` to bind a variable",
                ":=",
            );
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
            return;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, "`:=`");
    }

    fn parse_where_clause(&mut self) {
        self.start_node(SyntaxKind::WhereClause);
        self.bump();
        self.parse_expr_single_or_error();
        self.finish_node();
    }

    /// `"stable"? "order" "by" OrderSpec ("," OrderSpec)*`
    fn parse_order_by_clause(&mut self) {
        self.start_node(SyntaxKind::OrderByClause);
        self.eat_token(SyntaxKind::KwStable);
        self.expect(SyntaxKind::KwOrder, "`order`");
        self.expect(SyntaxKind::KwBy, "`by`");
        self.parse_order_spec();
        while self.currently_is(SyntaxKind::Comma) && !self.has_fatal_error() {
            self.bump();
            self.parse_order_spec();
        }
        self.finish_node();
    }

    /// `ExprSingle ("ascending" | "descending")? ("empty" ("greatest" | "least"))? ("collation" URILiteral)?`
    fn parse_order_spec(&mut self) {
        self.start_node(SyntaxKind::OrderSpec);
        self.parse_expr_single_or_error();
        if !self.eat_token(SyntaxKind::KwAscending) {
            self.eat_token(SyntaxKind::KwDescending);
        }
        if self.eat_token(SyntaxKind::KwEmpty)
            && !self.eat_token(SyntaxKind::KwGreatest)
            && !self.eat_token(SyntaxKind::KwLeast)
        {
            self.error_msg(DiagnosticKind::ExpectedToken, "`greatest` or `least`");
        }
        if self.eat_token(SyntaxKind::KwCollation) {
            self.parse_uri_literal();
        }
        self.finish_node();
    }

    fn parse_count_clause(&mut self) {
        self.start_node(SyntaxKind::CountClause);
        self.bump();
        self.bump();
        self.parse_var_name();
        self.finish_node();
    }

    /// `("some" | "every") QuantifiedBinding ("," QuantifiedBinding)* "satisfies" ExprSingle`
    pub(crate) fn parse_quantified_expr(&mut self) {
        self.start_node(SyntaxKind::QuantifiedExpr);
        self.bump();
        self.parse_quantified_binding();
        while self.currently_is(SyntaxKind::Comma) && !self.has_fatal_error() {
            self.bump();
            self.parse_quantified_binding();
        }
        if self.expect(SyntaxKind::KwSatisfies, "`satisfies`") {
            self.parse_expr_single_or_error();
        }
        self.finish_node();
    }

    fn parse_quantified_binding(&mut self) {
        self.start_node(SyntaxKind::QuantifiedBinding);
        self.parse_binding_var();
        if self.expect(SyntaxKind::KwIn, "`in`") {
            self.parse_expr_single_or_error();
        }
        self.finish_node();
    }

    /// `"if" "(" Expr ")" "then" ExprSingle "else" ExprSingle`
    pub(crate) fn parse_if_expr(&mut self) {
        self.start_node(SyntaxKind::IfExpr);
        self.bump();
        self.open_delimiter(SyntaxKind::ParenOpen);
        self.parse_expr_or_error();
        self.close_delimiter(SyntaxKind::ParenClose);

        if self.expect(SyntaxKind::KwThen, "`then`") {
            self.parse_expr_single_or_error();
        }
        if self.expect(SyntaxKind::KwElse, "`else`") {
            self.parse_expr_single_or_error();
        }
        self.finish_node();
    }
}
