use crate::Document;

#[test]
fn sequence() {
    let res = Document::expect_valid_cst("1, 2");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          SequenceExpr
            NumericLiteral
              IntegerLiteral "1"
            Comma ","
            NumericLiteral
              IntegerLiteral "2"
    "#);
}

#[test]
fn multiplicative_binds_tighter() {
    let res = Document::expect_valid_cst("1 + 2 * 3");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          AdditiveExpr
            NumericLiteral
              IntegerLiteral "1"
            Plus "+"
            MultiplicativeExpr
              NumericLiteral
                IntegerLiteral "2"
              Star "*"
              NumericLiteral
                IntegerLiteral "3"
    "#);
}

#[test]
fn additive_chain_is_flat() {
    let res = Document::expect_valid_cst("1 - 2 + 3");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          AdditiveExpr
            NumericLiteral
              IntegerLiteral "1"
            Minus "-"
            NumericLiteral
              IntegerLiteral "2"
            Plus "+"
            NumericLiteral
              IntegerLiteral "3"
    "#);
}

#[test]
fn logical_operators() {
    let res = Document::expect_valid_cst("a or b and c");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          OrExpr
            NameTest
              UnprefixedName
                NCName "a"
            KwOr "or"
            AndExpr
              NameTest
                UnprefixedName
                  NCName "b"
              KwAnd "and"
              NameTest
                UnprefixedName
                  NCName "c"
    "#);
}

#[test]
fn unary_signs() {
    let res = Document::expect_valid_cst("-+1");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          UnaryExpr
            Minus "-"
            Plus "+"
            NumericLiteral
              IntegerLiteral "1"
    "#);
}

#[test]
fn range() {
    let res = Document::expect_valid_cst("1 to 3");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          RangeExpr
            NumericLiteral
              IntegerLiteral "1"
            KwTo "to"
            NumericLiteral
              IntegerLiteral "3"
    "#);
}

#[test]
fn string_concat() {
    let res = Document::expect_valid_cst("'a' || 'b'");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          StringConcatExpr
            StringLiteral
              StringLiteralStart "'"
              StringLiteralContents "a"
              StringLiteralEnd "'"
            Concat "||"
            StringLiteral
              StringLiteralStart "'"
              StringLiteralContents "b"
              StringLiteralEnd "'"
    "#);
}

#[test]
fn simple_map() {
    let res = Document::expect_valid_cst("a ! b");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          SimpleMapExpr
            NameTest
              UnprefixedName
                NCName "a"
            Bang "!"
            NameTest
              UnprefixedName
                NCName "b"
    "#);
}

#[test]
fn arrow() {
    let res = Document::expect_valid_cst("$s => upper-case()");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          ArrowExpr
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "s"
            Arrow "=>"
            ArrowFunctionSpecifier
              UnprefixedName
                NCName "upper-case"
            ArgumentList
              ParenOpen "("
              ParenClose ")"
    "#);
}

#[test]
fn cast() {
    let res = Document::expect_valid_cst("$x cast as xs:integer?");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          CastExpr
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "x"
            KwCast "cast"
            KwAs "as"
            SingleType
              PrefixedName
                NCName "xs"
                QNameSeparator ":"
                NCName "integer"
              Question "?"
    "#);
}

#[test]
fn if_then_else() {
    let res = Document::expect_valid_cst("if (1) then 2 else 3");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          IfExpr
            KwIf "if"
            ParenOpen "("
            NumericLiteral
              IntegerLiteral "1"
            ParenClose ")"
            KwThen "then"
            NumericLiteral
              IntegerLiteral "2"
            KwElse "else"
            NumericLiteral
              IntegerLiteral "3"
    "#);
}

#[test]
fn quantified() {
    let res = Document::expect_valid_cst("some $x in 1 satisfies $x");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          QuantifiedExpr
            KwSome "some"
            QuantifiedBinding
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "x"
              KwIn "in"
              NumericLiteral
                IntegerLiteral "1"
            KwSatisfies "satisfies"
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "x"
    "#);
}

#[test]
fn keywords_are_names() {
    let res = Document::expect_valid_xpath_cst("for | if");

    insta::assert_snapshot!(res, @r#"
    Root
      UnionExpr
        NameTest
          UnprefixedName
            KwFor "for"
        Pipe "|"
        NameTest
          UnprefixedName
            KwIf "if"
    "#);
}
