use crate::Document;
use crate::diagnostics::DiagnosticKind;

#[test]
fn trailing_expression() {
    let res = Document::expect_invalid("1 2");

    insta::assert_snapshot!(res, @r"
    error: expected end of input
      |
    1 | 1 2
      |   ^ expected end of input
    ");
}

#[test]
fn bad_character_operand() {
    let res = Document::expect_invalid("1 + ^");

    insta::assert_snapshot!(res, @r"
    error: unexpected character
      |
    1 | 1 + ^
      |     ^ unexpected character
    ");
}

#[test]
fn chained_comparison() {
    let res = Document::expect_invalid("1 = 2 = 3");

    insta::assert_snapshot!(res, @r"
    error: operator is not associative
      |
    1 | 1 = 2 = 3
      |       ^ operator is not associative
    ");
}

#[test]
fn missing_return() {
    let res = Document::expect_invalid("for $x in 1 $x");

    insta::assert_snapshot!(res, @r"
    error: expected `return`
      |
    1 | for $x in 1 $x
      |             ^ expected `return`
    ");
}

#[test]
fn missing_then() {
    let res = Document::expect_invalid("if (1) 2 else 3");

    insta::assert_snapshot!(res, @r"
    error: expected `then`
      |
    1 | if (1) 2 else 3
      |        ^ expected `then`
    ");
}

#[test]
fn trailing_comma() {
    let res = Document::expect_invalid("(1,)");

    insta::assert_snapshot!(res, @r"
    error: expected an expression
      |
    1 | (1,)
      |    ^ expected an expression
    ");
}

#[test]
fn where_clause_in_xpath() {
    let res = Document::expect_invalid_xpath("for $x in 1 where $x return $x");

    insta::assert_snapshot!(res, @r"
    error: the `where` clause is only available in XQuery
      |
    1 | for $x in 1 where $x return $x
      |             ^^^^^ the `where` clause is only available in XQuery
    ");
}

#[test]
fn unknown_entity() {
    let res = Document::expect_invalid(r#""&bogus;""#);

    insta::assert_snapshot!(res, @r#"
    error: invalid entity reference
      |
    1 | "&bogus;"
      |  ^^^^^^^ invalid entity reference
    "#);
}

#[test]
fn incomplete_exponent() {
    let res = Document::expect_invalid("1e+");

    insta::assert_snapshot!(res, @r"
    error: incomplete double exponent
      |
    1 | 1e+
      | ^^^ incomplete double exponent
    ");
}

#[test]
fn equals_instead_of_assign() {
    let document = Document::expect("let $x = 1 return $x");
    let diagnostics = document.diagnostics();

    let messages: Vec<_> = diagnostics.iter().map(|d| d.message()).collect();
    assert_eq!(messages, vec!["expected `:=`"]);

    let fix = diagnostics.iter().find_map(|d| d.fix.as_ref());
    assert_eq!(fix.map(|f| f.replacement.as_str()), Some(":="));
}

#[test]
fn variadic_marker_not_last() {
    let document = Document::expect("declare function local:f($a ..., $b) { 1 }; 1");

    let kinds: Vec<_> = document.diagnostics().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds, vec![DiagnosticKind::VariadicNotLast]);
}
