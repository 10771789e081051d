//! Internal consistency checks. A failure here is a grammar bug, never bad input.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::{DEBUG_FUEL, Parser};
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Every lookahead burns debug fuel and every bump refills it, so running dry
    /// means some loop stopped consuming input.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let fuel = self.debug_fuel.get();
        assert!(
            fuel > 0,
            "no token consumed after {DEBUG_FUEL} lookaheads (token #{})",
            self.pos
        );
        self.debug_fuel.set(fuel - 1);
    }

    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert_eq!(
            found, expected,
            "production dispatched on {expected:?} but the current token is {found:?}"
        );
    }

    #[inline]
    pub(super) fn assert_not_at_eof(&self) {
        assert!(self.pos < self.tokens.len(), "bump past end of input");
    }
}
