//! Token cursor, tree builder and error reporting shared by all grammar productions.

use std::cell::Cell;

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use xqsyntax_core::Dialect;

use super::ast::Root;
use super::cst::token_sets::{CLOSERS, EXPR_RECOVERY};
use super::cst::{SyntaxKind, SyntaxNode, TokenSet};
use super::lexer::{Token, token_text};
use crate::Error;
use crate::config::ParseTarget;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Lookaheads allowed between two consumed tokens before the parser is considered stuck.
pub(super) const DEBUG_FUEL: u32 = 256;

#[derive(Debug)]
pub struct ParseResult {
    pub root: Root,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

/// An opening `(`, `[` or `{` still waiting for its closer.
#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

#[derive(Debug, Clone, Copy)]
struct ExecFuel {
    limit: u32,
    left: u32,
}

/// Recursive-descent parser over a pre-lexed token stream.
///
/// Trivia is not consumed by the grammar. It piles up in `trivia_buffer` while looking ahead
/// and is flushed into whichever node or token is emitted next.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) dialect: Dialect,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: Cell<u32>,
    exec_fuel: Option<ExecFuel>,
    recursion_limit: Option<u32>,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>, dialect: Dialect) -> Self {
        Self {
            source,
            dialect,
            tokens,
            pos: 0,
            trivia_buffer: Vec::new(),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::new(),
            debug_fuel: Cell::new(DEBUG_FUEL),
            exec_fuel: None,
            recursion_limit: None,
            fatal_error: None,
        }
    }

    /// Caps the number of tokens the parser may consume.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit.map(|limit| ExecFuel { limit, left: limit });
        self
    }

    /// Caps the nesting depth of recursive productions.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self, target: ParseTarget) -> Result<ParseResult, Error> {
        self.parse_root(target);
        self.drain_trivia();

        if let Some(err) = self.fatal_error {
            return Err(err);
        }

        let exec_fuel_consumed = self.exec_fuel.map_or(0, |f| f.limit - f.left);
        let green: GreenNode = self.builder.finish();
        let root = Root::cast(SyntaxNode::new_root(green)).expect("parser always produces Root");
        Ok(ParseResult {
            root,
            diagnostics: self.diagnostics,
            exec_fuel_consumed,
        })
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.fatal_error.is_some()
    }

    fn fail(&mut self, err: Error) {
        self.fatal_error.get_or_insert(err);
    }

    fn burn_exec_fuel(&mut self) {
        let Some(fuel) = self.exec_fuel.as_mut() else {
            return;
        };
        if fuel.left > 0 {
            fuel.left -= 1;
            return;
        }
        self.fail(Error::ExecFuelExhausted);
    }

    // Token cursor

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    /// Raw lookahead, trivia included. `Error` past end of input.
    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => TextRange::empty(self.eof_offset()),
        }
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::of(self.source)
    }

    /// End of input once trailing trivia is buffered.
    pub(super) fn at_end(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.at_end() || self.has_fatal_error()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn at_name(&mut self) -> bool {
        self.current().is_name()
    }

    pub(super) fn is_xquery(&self) -> bool {
        self.dialect.is_xquery()
    }

    /// Kind of the `n`th significant token from here; `peek_nth(0)` is `current()`.
    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.significant_from(self.pos, n)
    }

    /// First non-trivia kind `raw` tokens past the current one.
    pub(super) fn peek_after_raw(&mut self, raw: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.significant_from(self.pos + raw, 0)
    }

    fn significant_from(&self, pos: usize, n: usize) -> SyntaxKind {
        self.tokens
            .iter()
            .skip(pos)
            .map(|t| t.kind)
            .filter(|kind| !kind.is_trivia())
            .nth(n)
            .unwrap_or(SyntaxKind::Error)
    }

    pub(super) fn next_is(&mut self, kind: SyntaxKind) -> bool {
        self.peek_nth(1) == kind
    }

    pub(super) fn last_non_trivia_span(&self) -> Option<TextRange> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span)
    }

    // Trivia

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while let Some(&token) = self.tokens.get(self.pos) {
            if !token.kind.is_trivia() {
                break;
            }
            if token.kind == SyntaxKind::UnexpectedEndOfBlock {
                self.report_unclosed_comment(token);
            }
            self.trivia_buffer.push(token);
            self.pos += 1;
        }
    }

    fn report_unclosed_comment(&mut self, marker: Token) {
        let start = self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| t.kind == SyntaxKind::CommentStartTag)
            .map_or(marker.span.start(), |t| t.span.start());
        let open = TextRange::new(start, (start + TextSize::from(2)).min(marker.span.end()));
        self.diagnostics
            .report(
                DiagnosticKind::UnclosedComment,
                TextRange::new(start, marker.span.end()),
            )
            .message("expected `:)` before end of input")
            .related_to("comment started here", open)
            .emit();
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in std::mem::take(&mut self.trivia_buffer) {
            self.push_token(token);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    fn push_token(&mut self, token: Token) {
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
    }

    // Tree building

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Flushes pending trivia first, so a node started here later does not swallow it.
    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.eat_trivia();
        self.builder.checkpoint()
    }

    /// Consumes the next significant token, flushing the trivia before it.
    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        self.assert_not_at_eof();
        self.debug_fuel.set(DEBUG_FUEL);
        self.burn_exec_fuel();

        self.drain_trivia();
        let token = self.tokens[self.pos];
        self.push_token(token);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        let matched = self.currently_is(kind);
        if matched {
            self.bump();
        }
        matched
    }

    /// Eats `kind` or reports `expected {what}` without consuming anything.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat_token(kind) {
            return true;
        }
        self.error_msg(DiagnosticKind::ExpectedToken, what);
        false
    }

    // Diagnostics

    /// One diagnostic per offset: the first report at a position wins.
    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    fn report_here(&mut self, kind: DiagnosticKind, detail: Option<String>) {
        let range = self.current_span();
        if !self.should_report(range.start()) {
            return;
        }
        // inside a delimiter, everything up to end of input may be fallout from this error
        let suppression = self
            .delimiter_stack
            .last()
            .map_or(range, |open| TextRange::new(open.span.start(), self.eof_offset()));

        let mut builder = self
            .diagnostics
            .report(kind, range)
            .suppression_range(suppression);
        if let Some(detail) = detail {
            builder = builder.message(detail);
        }
        builder.emit();
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.report_here(kind, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_here(kind, Some(message.into()));
    }

    /// Reports at an explicit range, bypassing the current token.
    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange) {
        if self.should_report(range.start()) {
            self.diagnostics.report(kind, range).emit();
        }
    }

    pub(super) fn error_with_fix(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
        fix_description: impl Into<String>,
        fix_replacement: impl Into<String>,
    ) {
        if !self.should_report(range.start()) {
            return;
        }
        self.diagnostics
            .report(kind, range)
            .message(message)
            .fix(fix_description, fix_replacement)
            .emit();
    }

    fn bump_as_error(&mut self) {
        if self.at_end() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.bump();
        self.finish_node();
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump_as_error();
    }

    pub(super) fn error_and_bump_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_msg(kind, message);
        self.bump_as_error();
    }

    /// Reports the current token as unexpected. Stray bad characters get their own kind.
    pub(super) fn error_unexpected(&mut self, kind: DiagnosticKind) {
        if self.currently_is(SyntaxKind::BadCharacter) {
            self.error_and_bump(DiagnosticKind::BadCharacter);
        } else {
            self.error_and_bump(kind);
        }
    }

    /// Missing construct: consumes the offending token unless it can resynchronize a parent.
    pub(super) fn error_expected(&mut self, kind: DiagnosticKind) {
        if self.currently_is_one_of(EXPR_RECOVERY) || self.at_end() {
            self.error(kind);
        } else {
            self.error_unexpected(kind);
        }
    }

    /// Reports, then skips into a single `Error` node until a token in `recovery`.
    pub(super) fn error_recover(
        &mut self,
        kind: DiagnosticKind,
        message: &str,
        recovery: TokenSet,
    ) {
        if self.currently_is_one_of(recovery) || self.should_stop() {
            self.error_msg(kind, message);
            return;
        }

        self.start_node(SyntaxKind::Error);
        self.error_msg(kind, message);
        while !self.currently_is_one_of(recovery) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    // Recursion

    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.recursion_limit.is_some_and(|limit| self.depth >= limit) {
            self.fail(Error::RecursionLimitExceeded);
            return false;
        }
        self.depth += 1;
        self.debug_fuel.set(DEBUG_FUEL);
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.debug_fuel.set(DEBUG_FUEL);
    }

    // Delimiters

    /// Bumps the opening delimiter and remembers where it was.
    pub(super) fn open_delimiter(&mut self, kind: SyntaxKind) {
        self.assert_current(kind);
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
        self.bump();
    }

    /// Consumes the closing delimiter matching the innermost open one, or reports it unclosed.
    ///
    /// Stray tokens before the closer are wrapped in an `Error` node.
    pub(super) fn close_delimiter(&mut self, close: SyntaxKind) -> bool {
        let (kind, message) = match close {
            SyntaxKind::BracketClose => (DiagnosticKind::UnclosedBracket, "expected `]`"),
            SyntaxKind::BraceClose => (DiagnosticKind::UnclosedBrace, "expected `}`"),
            _ => (DiagnosticKind::UnclosedParen, "expected `)`"),
        };

        if !self.currently_is(close) && !self.currently_is_one_of(CLOSERS) && !self.should_stop() {
            self.error_recover(DiagnosticKind::UnexpectedToken, message, CLOSERS);
        }

        let open = self.delimiter_stack.pop();
        if self.eat_token(close) {
            return true;
        }
        if let Some(open) = open {
            let related = match open.kind {
                SyntaxKind::BracketOpen => "`[` opened here",
                SyntaxKind::BraceOpen => "`{` opened here",
                _ => "`(` opened here",
            };
            let found = match self.tokens.get(self.pos) {
                Some(token) => format!("found `{}`", token_text(self.source, token)),
                None => "reached end of input".to_string(),
            };
            self.error_unclosed_delimiter(kind, found, related, open.span);
        }
        false
    }

    /// Reports an unclosed construct spanning from its opener to the current token.
    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.current_span();
        if !self.should_report(current.start()) {
            return;
        }
        self.diagnostics
            .report(kind, TextRange::new(open_range.start(), current.end()))
            .message(message)
            .related_to(related_msg, open_range)
            .emit();
    }
}
