use crate::Document;
use crate::diagnostics::DiagnosticKind;

#[test]
fn missing_paren() {
    let res = Document::expect_invalid("(1, 2");

    insta::assert_snapshot!(res, @r"
    error: missing closing `)`; reached end of input
      |
    1 | (1, 2
      | -^^^^
      | |
      | missing closing `)`; reached end of input
      | `(` opened here
    ");
}

#[test]
fn missing_bracket() {
    let res = Document::expect_invalid("[1, 2");

    insta::assert_snapshot!(res, @r"
    error: missing closing `]`; reached end of input
      |
    1 | [1, 2
      | -^^^^
      | |
      | missing closing `]`; reached end of input
      | `[` opened here
    ");
}

#[test]
fn missing_brace() {
    let res = Document::expect_invalid("map { 1: 2");

    insta::assert_snapshot!(res, @r"
    error: missing closing `}`; reached end of input
      |
    1 | map { 1: 2
      |     -^^^^^
      |     |
      |     missing closing `}`; reached end of input
      |     `{` opened here
    ");
}

#[test]
fn nested_unclosed() {
    let res = Document::expect_invalid("((1)");

    insta::assert_snapshot!(res, @r"
    error: missing closing `)`; reached end of input
      |
    1 | ((1)
      | -^^^
      | |
      | missing closing `)`; reached end of input
      | `(` opened here
    ");
}

#[test]
fn mismatched_closer() {
    let res = Document::expect_invalid("(1]");

    insta::assert_snapshot!(res, @r"
    error: missing closing `)`; found `]`
      |
    1 | (1]
      | -^^
      | |
      | missing closing `)`; found `]`
      | `(` opened here
    ");
}

#[test]
fn unclosed_string() {
    let res = Document::expect_invalid(r#""abc"#);

    insta::assert_snapshot!(res, @r#"
    error: unclosed string literal; reached end of input
      |
    1 | "abc
      | -^^^
      | |
      | unclosed string literal; reached end of input
      | string literal starts here
    "#);
}

#[test]
fn unclosed_braced_uri() {
    let document = Document::expect("Q{urn:x");

    let kinds: Vec<_> = document.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DiagnosticKind::UnclosedBracedUriLiteral]);
}

#[test]
fn unclosed_comment() {
    let document = Document::expect("1 (: note");

    let messages: Vec<_> = document
        .diagnostics()
        .iter()
        .map(|d| d.message().to_string())
        .collect();
    assert_eq!(
        messages,
        vec!["unclosed comment; expected `:)` before end of input"]
    );
    assert_eq!(document.syntax().text().to_string(), "1 (: note");
}
