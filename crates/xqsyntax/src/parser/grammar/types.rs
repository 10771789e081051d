use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::token_sets::{KIND_TEST_KEYWORDS, OCCURRENCE_INDICATORS};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    /// `"empty-sequence" "(" ")" | ItemType OccurrenceIndicator?`
    ///
    /// An indicator directly after the item type always belongs to it.
    pub(crate) fn parse_sequence_type(&mut self) {
        if !self.enter_recursion() {
            return;
        }

        if self.currently_is(SyntaxKind::KwEmptySequence) && self.next_is(SyntaxKind::ParenOpen) {
            self.start_node(SyntaxKind::EmptySequenceType);
            self.bump();
            self.parse_empty_parens();
            self.finish_node();
        } else if self.at_item_type_start() {
            self.start_node(SyntaxKind::SequenceType);
            self.parse_item_type();
            if self.currently_is_one_of(OCCURRENCE_INDICATORS) {
                self.bump();
            }
            self.finish_node();
        } else {
            self.error_expected(DiagnosticKind::ExpectedSequenceType);
        }

        self.exit_recursion();
    }

    fn at_item_type_start(&mut self) -> bool {
        let kind = self.current();
        kind.is_name()
            || matches!(
                kind,
                SyntaxKind::BracedUriLiteralStart | SyntaxKind::ParenOpen | SyntaxKind::Percent
            )
    }

    pub(crate) fn parse_item_type(&mut self) {
        if !self.enter_recursion() {
            return;
        }

        let kind = self.current();
        let call = self.next_is(SyntaxKind::ParenOpen);
        match kind {
            SyntaxKind::KwItem if call => {
                self.start_node(SyntaxKind::AnyItemType);
                self.bump();
                self.parse_empty_parens();
                self.finish_node();
            }
            SyntaxKind::ParenOpen => {
                self.start_node(SyntaxKind::ParenthesizedItemType);
                self.open_delimiter(SyntaxKind::ParenOpen);
                self.parse_item_type();
                self.close_delimiter(SyntaxKind::ParenClose);
                self.finish_node();
            }
            SyntaxKind::Percent => self.parse_function_test(),
            SyntaxKind::KwFunction if call => self.parse_function_test(),
            SyntaxKind::KwMap if call => self.parse_map_test(),
            SyntaxKind::KwArray if call => self.parse_array_test(),
            _ if call && KIND_TEST_KEYWORDS.contains(kind) => self.parse_kind_test(),
            _ if kind.is_name() || kind == SyntaxKind::BracedUriLiteralStart => {
                self.start_node(SyntaxKind::AtomicOrUnionType);
                self.parse_eqname();
                self.finish_node();
            }
            _ => self.error_expected(DiagnosticKind::ExpectedItemType),
        }

        self.exit_recursion();
    }

    fn parse_empty_parens(&mut self) {
        self.open_delimiter(SyntaxKind::ParenOpen);
        self.close_delimiter(SyntaxKind::ParenClose);
    }

    /// Wildcard tests are `(*)`; returns whether one was consumed.
    fn eat_wildcard_parens(&mut self) -> bool {
        if self.currently_is(SyntaxKind::ParenOpen)
            && self.next_is(SyntaxKind::Star)
            && self.peek_nth(2) == SyntaxKind::ParenClose
        {
            self.open_delimiter(SyntaxKind::ParenOpen);
            self.bump();
            self.close_delimiter(SyntaxKind::ParenClose);
            return true;
        }
        false
    }

    /// `Annotation* "function" ("(" "*" ")" | "(" SequenceType,* ")" "as" SequenceType)`
    fn parse_function_test(&mut self) {
        let checkpoint = self.checkpoint();
        self.parse_annotations();
        if !self.currently_is(SyntaxKind::KwFunction) {
            self.start_node_at(checkpoint, SyntaxKind::AnyFunctionTest);
            self.error_msg(DiagnosticKind::ExpectedToken, "`function`");
            self.finish_node();
            return;
        }
        self.bump();

        if self.eat_wildcard_parens() {
            self.start_node_at(checkpoint, SyntaxKind::AnyFunctionTest);
            self.finish_node();
            return;
        }
        if !self.currently_is(SyntaxKind::ParenOpen) {
            self.start_node_at(checkpoint, SyntaxKind::AnyFunctionTest);
            self.error_msg(DiagnosticKind::ExpectedToken, "`(`");
            self.finish_node();
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::TypedFunctionTest);
        self.open_delimiter(SyntaxKind::ParenOpen);
        self.parse_comma_list(
            TokenSet::single(SyntaxKind::ParenClose),
            Self::parse_sequence_type,
        );
        self.close_delimiter(SyntaxKind::ParenClose);
        if self.expect(SyntaxKind::KwAs, "`as`") {
            self.parse_sequence_type();
        }
        self.finish_node();
    }

    /// `"map" "(" "*" ")" | "map" "(" AtomicOrUnionType "," SequenceType ")"`
    fn parse_map_test(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump();
        if self.eat_wildcard_parens() {
            self.start_node_at(checkpoint, SyntaxKind::AnyMapTest);
            self.finish_node();
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::TypedMapTest);
        self.open_delimiter(SyntaxKind::ParenOpen);
        if self.at_name() || self.currently_is(SyntaxKind::BracedUriLiteralStart) {
            self.start_node(SyntaxKind::AtomicOrUnionType);
            self.parse_eqname();
            self.finish_node();
        } else {
            self.error_expected(DiagnosticKind::ExpectedItemType);
        }
        if self.expect(SyntaxKind::Comma, "`,`") {
            self.parse_sequence_type();
        }
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
    }

    /// `"array" "(" "*" ")" | "array" "(" SequenceType ")"`
    fn parse_array_test(&mut self) {
        let checkpoint = self.checkpoint();
        self.bump();
        if self.eat_wildcard_parens() {
            self.start_node_at(checkpoint, SyntaxKind::AnyArrayTest);
            self.finish_node();
            return;
        }

        self.start_node_at(checkpoint, SyntaxKind::TypedArrayTest);
        self.open_delimiter(SyntaxKind::ParenOpen);
        self.parse_sequence_type();
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
    }

    /// Kind tests, entered on the keyword with `(` next.
    pub(crate) fn parse_kind_test(&mut self) {
        let keyword = self.current();
        let node = match keyword {
            SyntaxKind::KwDocumentNode => SyntaxKind::DocumentTest,
            SyntaxKind::KwElement => SyntaxKind::ElementTest,
            SyntaxKind::KwAttribute => SyntaxKind::AttributeTest,
            SyntaxKind::KwSchemaElement => SyntaxKind::SchemaElementTest,
            SyntaxKind::KwSchemaAttribute => SyntaxKind::SchemaAttributeTest,
            SyntaxKind::KwProcessingInstruction => SyntaxKind::PITest,
            SyntaxKind::KwComment => SyntaxKind::CommentTest,
            SyntaxKind::KwText => SyntaxKind::TextTest,
            SyntaxKind::KwNamespaceNode => SyntaxKind::NamespaceNodeTest,
            _ => SyntaxKind::AnyKindTest,
        };

        self.start_node(node);
        self.bump();
        self.open_delimiter(SyntaxKind::ParenOpen);
        match node {
            SyntaxKind::DocumentTest => self.parse_document_test_body(),
            SyntaxKind::ElementTest => self.parse_element_test_body(true),
            SyntaxKind::AttributeTest => self.parse_element_test_body(false),
            SyntaxKind::SchemaElementTest | SyntaxKind::SchemaAttributeTest => {
                self.parse_eqname();
            }
            SyntaxKind::PITest => match self.current() {
                SyntaxKind::StringLiteralStart => self.parse_string_literal(),
                kind if kind.is_name() => {
                    self.start_node(SyntaxKind::UnprefixedName);
                    self.bump();
                    self.finish_node();
                }
                _ => {}
            },
            _ => {}
        }
        self.close_delimiter(SyntaxKind::ParenClose);
        self.finish_node();
    }

    fn parse_document_test_body(&mut self) {
        let kind = self.current();
        if matches!(kind, SyntaxKind::KwElement | SyntaxKind::KwSchemaElement)
            && self.next_is(SyntaxKind::ParenOpen)
        {
            self.parse_kind_test();
        } else if kind != SyntaxKind::ParenClose {
            self.error_expected(DiagnosticKind::ExpectedNodeTest);
        }
    }

    /// `(NameOrWildcard ("," TypeName "?"?)?)?`; the `?` is only allowed for elements.
    fn parse_element_test_body(&mut self, nillable: bool) {
        match self.current() {
            SyntaxKind::ParenClose => return,
            SyntaxKind::Star => {
                self.start_node(SyntaxKind::Wildcard);
                self.bump();
                self.finish_node();
            }
            _ => {
                if !self.parse_eqname() {
                    return;
                }
            }
        }

        if !self.eat_token(SyntaxKind::Comma) {
            return;
        }
        self.parse_type_name();
        if nillable {
            self.eat_token(SyntaxKind::Question);
        }
    }

    fn parse_type_name(&mut self) {
        let kind = self.current();
        if !(kind.is_name() || kind == SyntaxKind::BracedUriLiteralStart) {
            self.error_expected(DiagnosticKind::ExpectedName);
            return;
        }
        self.start_node(SyntaxKind::TypeName);
        self.parse_eqname();
        self.finish_node();
    }

    /// `EQName "?"?` as used by `cast as` and `castable as`.
    pub(crate) fn parse_single_type(&mut self) {
        let kind = self.current();
        if !(kind.is_name() || kind == SyntaxKind::BracedUriLiteralStart) {
            self.error_expected(DiagnosticKind::ExpectedSequenceType);
            return;
        }
        self.start_node(SyntaxKind::SingleType);
        self.parse_eqname();
        self.eat_token(SyntaxKind::Question);
        self.finish_node();
    }

    /// `"as" SequenceType`
    pub(crate) fn parse_type_declaration(&mut self) {
        self.start_node(SyntaxKind::TypeDeclaration);
        self.assert_current(SyntaxKind::KwAs);
        self.bump();
        self.parse_sequence_type();
        self.finish_node();
    }
}
