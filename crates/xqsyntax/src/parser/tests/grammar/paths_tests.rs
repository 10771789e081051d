use crate::Document;

#[test]
fn rooted_path() {
    let res = Document::expect_valid_cst("/a/b");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          PathExpr
            Slash "/"
            RelativePathExpr
              NameTest
                UnprefixedName
                  NCName "a"
              Slash "/"
              NameTest
                UnprefixedName
                  NCName "b"
    "#);
}

#[test]
fn lone_slash() {
    let res = Document::expect_valid_xpath_cst("/");

    insta::assert_snapshot!(res, @r#"
    Root
      PathExpr
        Slash "/"
    "#);
}

#[test]
fn descendant_path() {
    let res = Document::expect_valid_xpath_cst("//a");

    insta::assert_snapshot!(res, @r#"
    Root
      PathExpr
        DoubleSlash "//"
        NameTest
          UnprefixedName
            NCName "a"
    "#);
}

#[test]
fn explicit_axis_with_predicate() {
    let res = Document::expect_valid_xpath_cst("child::a[1]");

    insta::assert_snapshot!(res, @r#"
    Root
      AxisStep
        ForwardAxis
          KwChild "child"
          AxisSeparator "::"
        NameTest
          UnprefixedName
            NCName "a"
        Predicate
          BracketOpen "["
          NumericLiteral
            IntegerLiteral "1"
          BracketClose "]"
    "#);
}

#[test]
fn abbreviated_steps() {
    let res = Document::expect_valid_xpath_cst("../@id");

    insta::assert_snapshot!(res, @r#"
    Root
      RelativePathExpr
        AbbrevReverseStep
          DotDot ".."
        Slash "/"
        AxisStep
          At "@"
          NameTest
            UnprefixedName
              NCName "id"
    "#);
}

#[test]
fn reverse_axis() {
    let res = Document::expect_valid_xpath_cst("ancestor-or-self::*");

    insta::assert_snapshot!(res, @r#"
    Root
      AxisStep
        ReverseAxis
          KwAncestorOrSelf "ancestor-or-self"
          AxisSeparator "::"
        NameTest
          Wildcard
            Star "*"
    "#);
}

#[test]
fn wildcards() {
    let res = Document::expect_valid_xpath_cst("* | xs:* | *:a");

    insta::assert_snapshot!(res, @r#"
    Root
      UnionExpr
        NameTest
          Wildcard
            Star "*"
        Pipe "|"
        NameTest
          Wildcard
            NCName "xs"
            QNameSeparator ":"
            Star "*"
        Pipe "|"
        NameTest
          Wildcard
            Star "*"
            QNameSeparator ":"
            NCName "a"
    "#);
}

#[test]
fn kind_test_steps() {
    let res = Document::expect_valid_xpath_cst("self::node()/text()");

    insta::assert_snapshot!(res, @r#"
    Root
      RelativePathExpr
        AxisStep
          ForwardAxis
            KwSelf "self"
            AxisSeparator "::"
          AnyKindTest
            KwNode "node"
            ParenOpen "("
            ParenClose ")"
        Slash "/"
        TextTest
          KwText "text"
          ParenOpen "("
          ParenClose ")"
    "#);
}

#[test]
fn context_item() {
    let res = Document::expect_valid_xpath_cst(".//a");

    insta::assert_snapshot!(res, @r#"
    Root
      RelativePathExpr
        ContextItemExpr
          Dot "."
        DoubleSlash "//"
        NameTest
          UnprefixedName
            NCName "a"
    "#);
}

#[test]
fn filter_on_primary() {
    let res = Document::expect_valid_xpath_cst("$x[1]");

    insta::assert_snapshot!(res, @r#"
    Root
      PostfixExpr
        VarRef
          Dollar "$"
          VarName
            UnprefixedName
              NCName "x"
        Predicate
          BracketOpen "["
          NumericLiteral
            IntegerLiteral "1"
          BracketClose "]"
    "#);
}

#[test]
fn uri_qualified_name_test() {
    let res = Document::expect_valid_xpath_cst("Q{urn:x}a");

    insta::assert_snapshot!(res, @r#"
    Root
      NameTest
        URIQualifiedName
          BracedUriLiteral
            BracedUriLiteralStart "Q{"
            StringLiteralContents "urn:x"
            BracedUriLiteralEnd "}"
          NCName "a"
    "#);
}
