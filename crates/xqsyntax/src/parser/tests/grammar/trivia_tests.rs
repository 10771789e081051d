use crate::{Document, ParseOptions};

#[test]
fn leading_comment() {
    let res = Document::expect_valid_cst_full("(: note :) 1");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        CommentStartTag "(:"
        Comment " note "
        CommentEndTag ":)"
        Whitespace " "
        QueryBody
          NumericLiteral
            IntegerLiteral "1"
    "#);
}

#[test]
fn nested_trailing_comment() {
    let res = Document::expect_valid_cst_full("1 (: a (: b :) c :)");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          NumericLiteral
            IntegerLiteral "1"
      Whitespace " "
      CommentStartTag "(:"
      Comment " a (: b :) c "
      CommentEndTag ":)"
    "#);
}

#[test]
fn whitespace_between_operands() {
    let document = Document::expect_valid_with("a / b", ParseOptions::xpath());

    insta::assert_snapshot!(document.dump_cst_full(), @r#"
    Root
      RelativePathExpr
        NameTest
          UnprefixedName
            NCName "a"
        Whitespace " "
        Slash "/"
        Whitespace " "
        NameTest
          UnprefixedName
            NCName "b"
    "#);
}

#[test]
fn comment_between_tokens() {
    let document = Document::expect_valid_with("$x(::)+1", ParseOptions::xpath());

    insta::assert_snapshot!(document.dump_cst_full(), @r#"
    Root
      AdditiveExpr
        VarRef
          Dollar "$"
          VarName
            UnprefixedName
              NCName "x"
        CommentStartTag "(:"
        CommentEndTag ":)"
        Plus "+"
        NumericLiteral
          IntegerLiteral "1"
    "#);
}

#[test]
fn source_text_is_preserved() {
    let input = "for $x (: binding :) in\n  (1, 2)\nreturn $x  ";
    let document = Document::expect_valid(input);

    assert_eq!(document.syntax().text().to_string(), input);
}

#[test]
fn spaced_axis_separator() {
    let document = Document::expect_valid_with("child :: a", ParseOptions::xpath());

    insta::assert_snapshot!(document.dump_cst_full(), @r#"
    Root
      AxisStep
        ForwardAxis
          KwChild "child"
          Whitespace " "
          AxisSeparator "::"
        Whitespace " "
        NameTest
          UnprefixedName
            NCName "a"
    "#);
}

#[test]
fn keyword_pairs_across_trivia() {
    let inputs = [
        "'1' cast as xs:double?",
        "'1' castable (: c :) as xs:double",
        "1 treat\n  as xs:integer",
        "1 instance  of xs:integer",
        "for $x at $i in (1, 2) return $i",
        "for $x in 1 count $n return $n",
        "module namespace m = \"urn:m\";",
        "import module namespace m = \"urn:m\" at \"m.xq\"; m:f()",
    ];

    for input in inputs {
        let document = Document::expect_valid(input);
        assert_eq!(document.syntax().text().to_string(), input);
    }
}
