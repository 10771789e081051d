use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{EXPR_RECOVERY, PROLOG_RECOVERY};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// `VersionDecl? (ModuleDecl Prolog | Prolog QueryBody)`
    pub(crate) fn parse_module(&mut self) {
        self.start_node(SyntaxKind::Module);

        let mut has_header = false;
        if self.currently_is(SyntaxKind::KwXquery)
            && matches!(
                self.peek_nth(1),
                SyntaxKind::KwVersion | SyntaxKind::KwEncoding
            )
        {
            self.parse_version_decl();
            has_header = true;
        }

        let library =
            self.currently_is(SyntaxKind::KwModule) && self.next_is(SyntaxKind::KwNamespace);
        if library {
            self.parse_module_decl();
        }

        if self.at_prolog_decl() {
            self.parse_prolog();
            has_header = true;
        }

        if !library {
            if self.at_expr_start() {
                self.start_node(SyntaxKind::QueryBody);
                self.parse_expr();
                self.finish_node();
            } else if has_header {
                self.error_expected(DiagnosticKind::ExpectedExpression);
            }
        }

        self.finish_node();
    }

    /// `"xquery" (("encoding" StringLiteral) | ("version" StringLiteral ("encoding" StringLiteral)?)) ";"`
    fn parse_version_decl(&mut self) {
        self.start_node(SyntaxKind::VersionDecl);
        self.bump();
        if self.eat_token(SyntaxKind::KwVersion) {
            self.expect_string_literal("a version string");
        }
        if self.eat_token(SyntaxKind::KwEncoding) {
            self.expect_string_literal("an encoding name");
        }
        self.expect_semicolon();
        self.finish_node();
    }

    /// `"module" "namespace" Prefix "=" URILiteral ";"`
    fn parse_module_decl(&mut self) {
        self.start_node(SyntaxKind::ModuleDecl);
        self.bump();
        self.bump();
        self.parse_namespace_binding();
        self.expect_semicolon();
        self.finish_node();
    }

    fn parse_namespace_binding(&mut self) {
        self.parse_prefix();
        if self.expect(SyntaxKind::Equals, "`=`") {
            self.parse_uri_literal();
        }
    }

    fn at_prolog_decl(&mut self) -> bool {
        match self.current() {
            SyntaxKind::KwDeclare => matches!(
                self.peek_nth(1),
                SyntaxKind::KwNamespace
                    | SyntaxKind::KwDefault
                    | SyntaxKind::KwVariable
                    | SyntaxKind::KwFunction
                    | SyntaxKind::KwOption
                    | SyntaxKind::Percent
            ),
            SyntaxKind::KwImport => matches!(
                self.peek_nth(1),
                SyntaxKind::KwSchema | SyntaxKind::KwModule
            ),
            _ => false,
        }
    }

    fn parse_prolog(&mut self) {
        self.start_node(SyntaxKind::Prolog);
        while self.at_prolog_decl() && !self.has_fatal_error() {
            self.parse_prolog_decl();
        }
        self.finish_node();
    }

    fn parse_prolog_decl(&mut self) {
        let checkpoint = self.checkpoint();
        let import = self.currently_is(SyntaxKind::KwImport);
        self.bump();
        match self.current() {
            SyntaxKind::KwSchema if import => {
                self.start_node_at(checkpoint, SyntaxKind::SchemaImport);
                self.parse_schema_import();
            }
            _ if import => {
                self.start_node_at(checkpoint, SyntaxKind::ModuleImport);
                self.parse_module_import();
            }
            SyntaxKind::KwNamespace => {
                self.start_node_at(checkpoint, SyntaxKind::NamespaceDecl);
                self.bump();
                self.parse_namespace_binding();
            }
            SyntaxKind::KwDefault => {
                self.start_node_at(checkpoint, SyntaxKind::DefaultNamespaceDecl);
                self.bump();
                if !self.eat_token(SyntaxKind::KwElement) && !self.eat_token(SyntaxKind::KwFunction)
                {
                    self.error_msg(DiagnosticKind::ExpectedToken, "`element` or `function`");
                }
                if self.expect(SyntaxKind::KwNamespace, "`namespace`") {
                    self.parse_uri_literal();
                }
            }
            SyntaxKind::KwOption => {
                self.start_node_at(checkpoint, SyntaxKind::OptionDecl);
                self.bump();
                self.parse_eqname();
                self.expect_string_literal("an option value");
            }
            _ => {
                self.parse_annotations();
                match self.current() {
                    SyntaxKind::KwVariable => {
                        self.start_node_at(checkpoint, SyntaxKind::VarDecl);
                        self.parse_var_decl();
                    }
                    SyntaxKind::KwFunction => {
                        self.start_node_at(checkpoint, SyntaxKind::FunctionDecl);
                        self.parse_function_decl();
                    }
                    _ => {
                        self.start_node_at(checkpoint, SyntaxKind::Error);
                        self.error_recover(
                            DiagnosticKind::ExpectedToken,
                            "`variable` or `function`",
                            PROLOG_RECOVERY,
                        );
                    }
                }
            }
        }
        self.expect_semicolon();
        self.finish_node();
    }

    /// `"schema" SchemaPrefix? URILiteral ("at" URILiteral ("," URILiteral)*)?`
    fn parse_schema_import(&mut self) {
        self.bump();
        match self.current() {
            SyntaxKind::KwNamespace => {
                self.bump();
                self.parse_namespace_binding();
            }
            SyntaxKind::KwDefault => {
                self.bump();
                self.expect(SyntaxKind::KwElement, "`element`");
                self.expect(SyntaxKind::KwNamespace, "`namespace`");
                self.parse_uri_literal();
            }
            _ => self.parse_uri_literal(),
        }
        self.parse_location_hints();
    }

    /// `"module" ("namespace" Prefix "=")? URILiteral ("at" URILiteral ("," URILiteral)*)?`
    fn parse_module_import(&mut self) {
        self.bump();
        if self.eat_token(SyntaxKind::KwNamespace) {
            self.parse_namespace_binding();
        } else {
            self.parse_uri_literal();
        }
        self.parse_location_hints();
    }

    fn parse_location_hints(&mut self) {
        if !self.eat_token(SyntaxKind::KwAt) {
            return;
        }
        self.parse_uri_literal();
        while self.eat_token(SyntaxKind::Comma) {
            self.parse_uri_literal();
        }
    }

    /// `"variable" "$" VarName TypeDeclaration? ((":=" ExprSingle) | ("external" (":=" ExprSingle)?))`
    fn parse_var_decl(&mut self) {
        self.bump();
        if self.expect(SyntaxKind::Dollar, "`$`") {
            self.parse_var_name();
        }
        if self.currently_is(SyntaxKind::KwAs) {
            self.parse_type_declaration();
        }
        if self.eat_token(SyntaxKind::KwExternal) {
            if self.eat_token(SyntaxKind::AssignEquals) {
                self.parse_expr_single_or_error();
            }
            return;
        }
        self.expect_assign();
        self.parse_expr_single_or_error();
    }

    /// `"function" EQName ParamList TypeDeclaration? (EnclosedExpr | "external")`
    fn parse_function_decl(&mut self) {
        self.bump();
        self.parse_eqname();
        if self.currently_is(SyntaxKind::ParenOpen) {
            self.parse_param_list();
        } else {
            self.error_msg(DiagnosticKind::ExpectedToken, "a parameter list");
        }
        if self.currently_is(SyntaxKind::KwAs) {
            self.parse_type_declaration();
        }
        if !self.eat_token(SyntaxKind::KwExternal) {
            self.parse_enclosed_expr();
        }
    }

    /// `("%" EQName ("(" Literal ("," Literal)* ")")?)*`
    pub(crate) fn parse_annotations(&mut self) {
        while self.currently_is(SyntaxKind::Percent) && !self.has_fatal_error() {
            self.start_node(SyntaxKind::Annotation);
            self.bump();
            self.parse_eqname();
            if self.currently_is(SyntaxKind::ParenOpen) {
                self.open_delimiter(SyntaxKind::ParenOpen);
                self.parse_comma_list(
                    TokenSet::single(SyntaxKind::ParenClose),
                    Self::parse_annotation_literal,
                );
                self.close_delimiter(SyntaxKind::ParenClose);
            }
            self.finish_node();
        }
    }

    fn parse_annotation_literal(&mut self) {
        match self.current() {
            SyntaxKind::StringLiteralStart => self.parse_string_literal(),
            SyntaxKind::IntegerLiteral | SyntaxKind::DecimalLiteral | SyntaxKind::DoubleLiteral => {
                self.parse_numeric_literal()
            }
            _ if self.currently_is_one_of(EXPR_RECOVERY) => {
                self.error_msg(DiagnosticKind::ExpectedToken, "a literal")
            }
            _ => self.error_and_bump_msg(DiagnosticKind::ExpectedToken, "a literal"),
        }
    }

    /// `"(" (Param ("," Param)*)? ")"`, with a trailing `...` marking a variadic list.
    pub(crate) fn parse_param_list(&mut self) {
        self.start_node(SyntaxKind::ParamList);
        self.open_delimiter(SyntaxKind::ParenOpen);

        let terminators = TokenSet::new(&[SyntaxKind::ParenClose, SyntaxKind::Ellipsis]);
        loop {
            self.parse_comma_list(terminators, Self::parse_param);
            if !self.currently_is(SyntaxKind::Ellipsis) {
                break;
            }
            let ellipsis = self.current_span();
            self.bump();
            if !self.currently_is(SyntaxKind::Comma) {
                break;
            }
            self.error_at(DiagnosticKind::VariadicNotLast, ellipsis);
            self.bump();
        }

        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
    }

    /// `"$" VarName TypeDeclaration?`
    fn parse_param(&mut self) {
        if !self.currently_is(SyntaxKind::Dollar) {
            self.error_expected(DiagnosticKind::ExpectedVarName);
            return;
        }
        self.start_node(SyntaxKind::Param);
        self.bump();
        self.parse_var_name();
        if self.currently_is(SyntaxKind::KwAs) {
            self.parse_type_declaration();
        }
        self.finish_node();
    }

    /// Declarations end in `;`. A missing one is reported after the previous token.
    fn expect_semicolon(&mut self) {
        if self.eat_token(SyntaxKind::Semicolon) {
            return;
        }
        let Some(last) = self.last_non_trivia_span() else {
            self.error_msg(DiagnosticKind::ExpectedToken, "`;`");
            return;
        };
        let text = self.source[last].to_string();
        self.error_with_fix(
            DiagnosticKind::ExpectedToken,
            last,
            "`;` after declaration",
            "terminate the declaration",
            format!("{text};"),
        );
    }
}
