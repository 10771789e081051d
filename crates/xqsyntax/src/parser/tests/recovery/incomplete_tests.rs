use crate::Document;

#[test]
fn missing_right_operand() {
    let res = Document::expect_invalid("1 +");

    insta::assert_snapshot!(res, @r"
    error: expected an expression
      |
    1 | 1 +
      |    ^ expected an expression
    ");
}

#[test]
fn missing_variable_name() {
    let res = Document::expect_invalid("$");

    insta::assert_snapshot!(res, @r"
    error: expected a variable name
      |
    1 | $
      |  ^ expected a variable name
    ");
}

#[test]
fn missing_node_test() {
    let res = Document::expect_invalid("child::");

    insta::assert_snapshot!(res, @r"
    error: expected a name test or kind test
      |
    1 | child::
      |        ^ expected a name test or kind test
    ");
}

#[test]
fn missing_sequence_type() {
    let res = Document::expect_invalid("1 instance of");

    insta::assert_snapshot!(res, @r"
    error: expected a sequence type
      |
    1 | 1 instance of
      |              ^ expected a sequence type
    ");
}

#[test]
fn missing_argument() {
    let res = Document::expect_invalid("f(1,");

    insta::assert_snapshot!(res, @r"
    error: expected an expression
      |
    1 | f(1,
      |     ^ expected an expression
    ");
}

#[test]
fn missing_semicolon() {
    let document = Document::expect(r#"declare namespace a = "urn:a" a:b"#);

    let messages: Vec<_> = document
        .diagnostics()
        .iter()
        .map(|d| d.message().to_string())
        .collect();
    assert_eq!(messages, vec!["expected `;` after declaration"]);
}

#[test]
fn syntax_survives_missing_pieces() {
    let input = "for $x in return";
    let document = Document::expect(input);

    assert!(!document.is_valid());
    assert_eq!(document.syntax().text().to_string(), input);
}
