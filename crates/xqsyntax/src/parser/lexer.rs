//! Stateful lexer for XPath and XQuery.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! The lexer carries a stack of [`LexerState`]s so that string literals, braced URI
//! literals and (nested) comments can be scanned with their own rules. The stack is
//! observable and resumable: [`Lexer::resume`] continues from any offset given the
//! states captured at that offset.
//!
//! ## Error handling
//!
//! Lexing never fails. Characters that start no token become `BadCharacter`, an
//! exponent marker with no digits becomes `PartialDoubleLiteralExponent`, and a comment
//! that runs into end of input is followed by a zero-width `UnexpectedEndOfBlock`.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use xqsyntax_core::Dialect;

use super::chars::CharClass;
use super::cst::{SyntaxKind, keyword};

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Delimiter of an open string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    Double,
    Single,
}

impl Quote {
    fn char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }

    fn escape_kind(self) -> SyntaxKind {
        match self {
            Quote::Double => SyntaxKind::EscapeQuot,
            Quote::Single => SyntaxKind::EscapeApos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexerState {
    Default,
    StringLiteral(Quote),
    BracedUriLiteral,
    /// Pending `e`/`E` marker of a number whose exponent has no digits.
    DoubleExponent,
    Comment,
    UnexpectedEndOfBlock,
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

pub struct Lexer<'src> {
    source: &'src str,
    dialect: Dialect,
    pos: usize,
    /// Never empty; the bottom entry is always `Default`.
    states: Vec<LexerState>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str, dialect: Dialect) -> Self {
        Self {
            source,
            dialect,
            pos: 0,
            states: vec![LexerState::Default],
        }
    }

    /// Continues lexing at `offset` with a previously captured state stack.
    ///
    /// An empty stack is treated as `[Default]`. `offset` must lie on a char boundary.
    pub fn resume(
        source: &'src str,
        dialect: Dialect,
        offset: usize,
        mut states: Vec<LexerState>,
    ) -> Self {
        if states.first() != Some(&LexerState::Default) {
            states.insert(0, LexerState::Default);
        }
        Self {
            source,
            dialect,
            pos: offset.min(source.len()),
            states,
        }
    }

    #[inline]
    pub fn state(&self) -> LexerState {
        self.states.last().copied().unwrap_or(LexerState::Default)
    }

    /// Current state stack, bottom first.
    pub fn states(&self) -> &[LexerState] {
        &self.states
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Produces the next token, or `None` at end of input.
    pub fn advance(&mut self) -> Option<Token> {
        let start = self.pos;
        let kind = match self.state() {
            LexerState::Default => self.lex_default()?,
            LexerState::StringLiteral(quote) => self.lex_string_literal(quote)?,
            LexerState::BracedUriLiteral => self.lex_braced_uri_literal()?,
            LexerState::DoubleExponent => self.lex_exponent()?,
            LexerState::Comment => self.lex_comment()?,
            LexerState::UnexpectedEndOfBlock => {
                self.pop_state();
                SyntaxKind::UnexpectedEndOfBlock
            }
        };
        Some(Token::new(kind, range_to_text_range(start..self.pos)))
    }

    fn push_state(&mut self, state: LexerState) {
        tracing::trace!(?state, offset = self.pos, "push lexer state");
        self.states.push(state);
    }

    fn pop_state(&mut self) {
        assert!(
            self.states.len() > 1,
            "lexer: popped the default state at offset {}",
            self.pos
        );
        let state = self.states.pop();
        tracing::trace!(?state, offset = self.pos, "pop lexer state");
    }

    #[inline]
    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.bump();
            return true;
        }
        false
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn lex_default(&mut self) -> Option<SyntaxKind> {
        let c = self.peek()?;
        let kind = match CharClass::of(c) {
            CharClass::Whitespace => {
                self.bump_while(|c| CharClass::of(c) == CharClass::Whitespace);
                SyntaxKind::Whitespace
            }
            CharClass::ParenthesisOpen if self.peek_nth(1) == Some(':') => {
                self.pos += 2;
                self.push_state(LexerState::Comment);
                SyntaxKind::CommentStartTag
            }
            CharClass::Digit => self.lex_number(),
            CharClass::Dot if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                self.lex_number()
            }
            CharClass::NameStartChar => self.lex_name(),
            CharClass::Quote => {
                self.bump();
                self.push_state(LexerState::StringLiteral(Quote::Double));
                SyntaxKind::StringLiteralStart
            }
            CharClass::Apostrophe => {
                self.bump();
                self.push_state(LexerState::StringLiteral(Quote::Single));
                SyntaxKind::StringLiteralStart
            }
            CharClass::NameChar | CharClass::Ampersand | CharClass::Other => {
                self.bump();
                SyntaxKind::BadCharacter
            }
            _ => self.lex_symbol(),
        };
        Some(kind)
    }

    /// Longest-match punctuation via the Logos-derived recognizer.
    fn lex_symbol(&mut self) -> SyntaxKind {
        let mut symbols = SyntaxKind::lexer(self.rest());
        match symbols.next() {
            Some(Ok(kind)) if symbols.span().start == 0 => {
                self.pos += symbols.span().end;
                kind
            }
            _ => {
                self.bump();
                SyntaxKind::BadCharacter
            }
        }
    }

    fn lex_number(&mut self) -> SyntaxKind {
        let mut kind = SyntaxKind::IntegerLiteral;
        self.bump_while(|c| c.is_ascii_digit());
        if self.eat('.') {
            self.bump_while(|c| c.is_ascii_digit());
            kind = SyntaxKind::DecimalLiteral;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let mark = self.pos;
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.bump_while(|c| c.is_ascii_digit());
                kind = SyntaxKind::DoubleLiteral;
            } else {
                self.pos = mark;
                self.push_state(LexerState::DoubleExponent);
            }
        }
        kind
    }

    fn lex_exponent(&mut self) -> Option<SyntaxKind> {
        self.pop_state();
        if !matches!(self.peek(), Some('e' | 'E')) {
            return self.lex_default();
        }
        self.bump();
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        Some(SyntaxKind::PartialDoubleLiteralExponent)
    }

    fn lex_name(&mut self) -> SyntaxKind {
        if self.rest().starts_with("Q{") {
            self.pos += 2;
            self.push_state(LexerState::BracedUriLiteral);
            return SyntaxKind::BracedUriLiteralStart;
        }
        let start = self.pos;
        self.bump_while(|c| CharClass::of(c).is_name_char());
        keyword(&self.source[start..self.pos]).unwrap_or(SyntaxKind::NCName)
    }

    fn lex_string_literal(&mut self, quote: Quote) -> Option<SyntaxKind> {
        let delimiter = quote.char();
        let c = self.peek()?;
        if c == delimiter {
            self.bump();
            if self.eat(delimiter) {
                return Some(quote.escape_kind());
            }
            self.pop_state();
            return Some(SyntaxKind::StringLiteralEnd);
        }
        if c == '&' && self.dialect.is_xquery() {
            return Some(self.lex_entity_reference());
        }

        let entities = self.dialect.is_xquery();
        self.bump_while(|c| c != delimiter && !(entities && c == '&'));
        Some(SyntaxKind::StringLiteralContents)
    }

    fn lex_braced_uri_literal(&mut self) -> Option<SyntaxKind> {
        let c = self.peek()?;
        match c {
            '}' => {
                self.bump();
                self.pop_state();
                Some(SyntaxKind::BracedUriLiteralEnd)
            }
            '{' => {
                self.bump();
                Some(SyntaxKind::BadCharacter)
            }
            '&' if self.dialect.is_xquery() => Some(self.lex_entity_reference()),
            _ => {
                let entities = self.dialect.is_xquery();
                self.bump_while(|c| c != '}' && c != '{' && !(entities && c == '&'));
                Some(SyntaxKind::StringLiteralContents)
            }
        }
    }

    fn lex_entity_reference(&mut self) -> SyntaxKind {
        self.bump();
        match self.peek() {
            Some(';') => {
                self.bump();
                SyntaxKind::EmptyEntityReference
            }
            Some('#') => {
                self.bump();
                let hex = self.eat('x');
                let digits = self.pos;
                if hex {
                    self.bump_while(|c| c.is_ascii_hexdigit());
                } else {
                    self.bump_while(|c| c.is_ascii_digit());
                }
                let has_digits = self.pos > digits;
                if self.eat(';') && has_digits {
                    SyntaxKind::CharacterReference
                } else {
                    SyntaxKind::PartialEntityReference
                }
            }
            Some(c) if CharClass::of(c).is_name_start() => {
                let start = self.pos;
                self.bump_while(|c| CharClass::of(c).is_name_char());
                let name = &self.source[start..self.pos];
                let predefined = matches!(name, "lt" | "gt" | "amp" | "quot" | "apos");
                if self.eat(';') && predefined {
                    SyntaxKind::PredefinedEntityReference
                } else {
                    SyntaxKind::PartialEntityReference
                }
            }
            _ => SyntaxKind::PartialEntityReference,
        }
    }

    fn lex_comment(&mut self) -> Option<SyntaxKind> {
        if self.rest().starts_with(":)") {
            self.pos += 2;
            self.pop_state();
            return Some(SyntaxKind::CommentEndTag);
        }
        if self.rest().is_empty() {
            self.pop_state();
            return Some(SyntaxKind::UnexpectedEndOfBlock);
        }

        let mut depth = 1u32;
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                self.pop_state();
                self.push_state(LexerState::UnexpectedEndOfBlock);
                return Some(SyntaxKind::Comment);
            }
            if rest.starts_with("(:") {
                depth += 1;
                self.pos += 2;
            } else if rest.starts_with(":)") {
                depth -= 1;
                if depth == 0 {
                    return Some(SyntaxKind::Comment);
                }
                self.pos += 2;
            } else {
                self.bump();
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.advance()
    }
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str, dialect: Dialect) -> Vec<Token> {
    Lexer::new(source, dialect).collect()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
