use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(0, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert_eq!(
        diagnostics.iter().next().map(|d| d.message()),
        Some("expected an expression")
    );
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedToken, range(0, 5))
        .message("`then`")
        .emit();

    assert_eq!(
        diagnostics.iter().next().map(|d| d.message()),
        Some("expected `then`")
    );
}

#[test]
fn warnings_are_not_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::RequiresVersion, range(0, 2))
        .message("`||` requires XPath 3.0")
        .emit();

    assert!(!diagnostics.has_errors());
    assert!(diagnostics.has_warnings());
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(diagnostics.error_count(), 0);
}

#[test]
fn error_codes() {
    assert_eq!(
        DiagnosticKind::UndeclaredNamespacePrefix.error_code(),
        Some("XPST0081")
    );
    assert_eq!(DiagnosticKind::UnclosedParen.error_code(), Some("XPST0003"));
    assert_eq!(DiagnosticKind::RequiresVersion.error_code(), None);
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 5))
        .message("primary")
        .related_to("related info", range(6, 10))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    let result = diagnostics.printer("hello world!").render();
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`; primary
      |
    1 | hello world!
      | ^^^^^ ---- related info
      | |
      | missing closing `)`; primary
    ");
}

#[test]
fn builder_with_fix() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(0, 5))
        .message("fixable")
        .fix("apply this fix", "fixed")
        .emit();

    let result = diagnostics.printer("hello world").render();
    insta::assert_snapshot!(result, @r"
    error: unexpected token: fixable
      |
    1 | hello world
      | ^^^^^ unexpected token: fixable
      |
    help: apply this fix
      |
    1 - hello world
    1 + fixed world
      |
    ");
}

#[test]
fn printer_with_codes_and_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UndeclaredNamespacePrefix, range(0, 1))
        .message("p")
        .emit();

    let result = diagnostics
        .printer("p:a")
        .path("query.xq")
        .codes(true)
        .render();
    assert!(result.starts_with("error[XPST0081]: undeclared namespace prefix `p`"));
    assert!(result.contains("query.xq:1:1"));

    let plain = diagnostics.printer("p:a").render();
    assert!(plain.starts_with("error: undeclared namespace prefix `p`"));
}

#[test]
fn display_plain() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedName, range(3, 4))
        .related_to("here", range(0, 1))
        .emit();

    let text = diagnostics.iter().map(|d| d.to_string()).collect::<Vec<_>>();
    assert_eq!(
        text,
        ["error at 3..4: expected a name (related: here at 0..1)"]
    );
}

#[test]
fn default_hint_is_attached() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::XQueryOnly, range(0, 3))
        .message("`where` clause")
        .emit();

    let text = diagnostics.iter().next().map(|d| d.to_string());
    assert_eq!(
        text.as_deref(),
        Some(
            "error at 0..3: `where` clause is only available in XQuery \
             (hint: parse the input as XQuery to use this construct)"
        )
    );
}

#[test]
fn empty_range_at_end_still_renders() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(4, 4))
        .emit();

    let result = diagnostics.printer("1 + ").render();
    assert!(result.starts_with("error: expected an expression"));
}

#[test]
fn filtered_suppresses_contained_lower_priority() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 10))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(3, 4))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::UnclosedParen);
}

#[test]
fn filtered_root_cause_beats_structural_at_same_start() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBracket, range(5, 5))
        .emit();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(5, 5))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::ExpectedExpression);
}

#[test]
fn filtered_drops_consequences() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(0, 1))
        .emit();
    diagnostics
        .report(DiagnosticKind::TrailingInput, range(8, 9))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].kind(), DiagnosticKind::ExpectedExpression);
}

#[test]
fn filtered_keeps_unrelated() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::BadCharacter, range(0, 1))
        .emit();
    diagnostics
        .report(DiagnosticKind::BadCharacter, range(4, 5))
        .emit();

    assert_eq!(diagnostics.filtered().len(), 2);
}

#[test]
fn extend_merges() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::BadCharacter, range(0, 1)).emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::RequiresVersion, range(2, 3))
        .emit();

    a.extend(b);
    assert_eq!(a.len(), 2);
    assert_eq!(a.error_count(), 1);
    assert_eq!(a.warning_count(), 1);
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedExpression, range(0, 1))
        .emit();

    let styled = diagnostics.printer("+").colored(true).render();
    let plain = diagnostics.printer("+").colored(false).render();

    assert!(styled.contains("\u{1b}["));
    assert!(!plain.contains("\u{1b}["));
    assert!(plain.starts_with("error: expected an expression"));
}
