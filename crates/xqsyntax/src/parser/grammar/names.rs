use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::LITERAL_PARTS;

impl Parser<'_> {
    /// `URIQualifiedName | PrefixedName | UnprefixedName`.
    ///
    /// The parts of a prefixed name must be adjacent; `a :b` is not a QName.
    pub(crate) fn parse_eqname(&mut self) -> bool {
        match self.current() {
            SyntaxKind::BracedUriLiteralStart => {
                self.start_node(SyntaxKind::URIQualifiedName);
                self.parse_braced_uri_literal();
                if self.nth_raw(0).is_name() {
                    self.bump();
                } else {
                    self.error(DiagnosticKind::ExpectedName);
                }
                self.finish_node();
                true
            }
            kind if kind.is_name() => {
                if self.nth_raw(1) == SyntaxKind::QNameSeparator && self.nth_raw(2).is_name() {
                    self.start_node(SyntaxKind::PrefixedName);
                    self.bump();
                    self.bump();
                    self.bump();
                } else {
                    self.start_node(SyntaxKind::UnprefixedName);
                    self.bump();
                }
                self.finish_node();
                true
            }
            _ => {
                self.error_expected(DiagnosticKind::ExpectedName);
                false
            }
        }
    }

    /// Raw token count of the braced URI literal at the current position, closing `}` included.
    pub(crate) fn braced_uri_raw_len(&self) -> Option<usize> {
        if self.nth_raw(0) != SyntaxKind::BracedUriLiteralStart {
            return None;
        }
        let mut len = 1;
        loop {
            match self.nth_raw(len) {
                SyntaxKind::BracedUriLiteralEnd => return Some(len + 1),
                kind if LITERAL_PARTS.contains(kind) || kind == SyntaxKind::BadCharacter => {
                    len += 1
                }
                _ => return None,
            }
        }
    }

    /// Raw token count of the EQName starting at the current position.
    pub(crate) fn eqname_raw_len(&mut self) -> Option<usize> {
        let kind = self.current();
        if kind == SyntaxKind::BracedUriLiteralStart {
            let len = self.braced_uri_raw_len()?;
            return self.nth_raw(len).is_name().then_some(len + 1);
        }
        if !kind.is_name() {
            return None;
        }
        if self.nth_raw(1) == SyntaxKind::QNameSeparator && self.nth_raw(2).is_name() {
            Some(3)
        } else {
            Some(1)
        }
    }

    pub(crate) fn parse_braced_uri_literal(&mut self) {
        self.start_node(SyntaxKind::BracedUriLiteral);
        let open = self.current_span();
        self.bump();
        loop {
            match self.nth_raw(0) {
                SyntaxKind::BracedUriLiteralEnd => {
                    self.bump();
                    break;
                }
                SyntaxKind::BadCharacter => {
                    self.error_msg(
                        DiagnosticKind::BadCharacter,
                        "`{` is not allowed in a braced URI literal",
                    );
                    self.bump();
                }
                kind if LITERAL_PARTS.contains(kind) => self.bump_literal_part(),
                _ => {
                    let found = if self.at_end() {
                        "reached end of input"
                    } else {
                        "found unexpected token"
                    };
                    self.error_unclosed_delimiter(
                        DiagnosticKind::UnclosedBracedUriLiteral,
                        found,
                        "braced URI literal starts here",
                        open,
                    );
                    break;
                }
            }
        }
        self.finish_node();
    }

    /// Literal body token; malformed entity references are reported in place.
    pub(crate) fn bump_literal_part(&mut self) {
        match self.nth_raw(0) {
            SyntaxKind::PartialEntityReference => {
                self.error(DiagnosticKind::InvalidEntityReference);
            }
            SyntaxKind::EmptyEntityReference => {
                self.error(DiagnosticKind::EmptyEntityReference);
            }
            _ => {}
        }
        self.bump();
    }

    /// `"$" VarName`
    pub(crate) fn parse_var_ref(&mut self) {
        self.start_node(SyntaxKind::VarRef);
        self.assert_current(SyntaxKind::Dollar);
        self.bump();
        self.parse_var_name();
        self.finish_node();
    }

    pub(crate) fn parse_var_name(&mut self) {
        let kind = self.current();
        if !(kind.is_name() || kind == SyntaxKind::BracedUriLiteralStart) {
            self.error_expected(DiagnosticKind::ExpectedVarName);
            return;
        }
        self.start_node(SyntaxKind::VarName);
        self.parse_eqname();
        self.finish_node();
    }

    /// Namespace prefix in declarations: a single NCName.
    pub(crate) fn parse_prefix(&mut self) {
        if !self.at_name() {
            self.error_expected(DiagnosticKind::ExpectedName);
            return;
        }
        self.start_node(SyntaxKind::Prefix);
        self.bump();
        self.finish_node();
    }

    /// Whitespace-separated prefixes; `#default` names the default namespace.
    pub(crate) fn parse_prefix_list(&mut self) {
        self.start_node(SyntaxKind::PrefixList);
        while !self.should_stop() {
            if self.at_name() {
                self.parse_prefix();
            } else if self.currently_is(SyntaxKind::Hash)
                && self.nth_raw(1) == SyntaxKind::KwDefault
            {
                self.start_node(SyntaxKind::Prefix);
                self.bump();
                self.bump();
                self.finish_node();
            } else {
                self.error_unexpected(DiagnosticKind::ExpectedName);
            }
        }
        self.finish_node();
    }
}
