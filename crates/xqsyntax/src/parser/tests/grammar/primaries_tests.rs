use crate::Document;

#[test]
fn function_call() {
    let res = Document::expect_valid_cst("fn:count((1, 2))");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          FunctionCall
            PrefixedName
              NCName "fn"
              QNameSeparator ":"
              KwCount "count"
            ArgumentList
              ParenOpen "("
              ParenthesizedExpr
                ParenOpen "("
                SequenceExpr
                  NumericLiteral
                    IntegerLiteral "1"
                  Comma ","
                  NumericLiteral
                    IntegerLiteral "2"
                ParenClose ")"
              ParenClose ")"
    "#);
}

#[test]
fn partial_application() {
    let res = Document::expect_valid_cst("f(?, 1)");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          FunctionCall
            UnprefixedName
              NCName "f"
            ArgumentList
              ParenOpen "("
              ArgumentPlaceholder
                Question "?"
              Comma ","
              NumericLiteral
                IntegerLiteral "1"
              ParenClose ")"
    "#);
}

#[test]
fn named_function_ref() {
    let res = Document::expect_valid_cst("fn:true#0");

    insta::assert_snapshot!(res, @r##"
    Root
      Module
        QueryBody
          NamedFunctionRef
            PrefixedName
              NCName "fn"
              QNameSeparator ":"
              NCName "true"
            Hash "#"
            IntegerLiteral "0"
    "##);
}

#[test]
fn inline_function() {
    let res = Document::expect_valid_cst("function($a) { $a }");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          InlineFunctionExpr
            KwFunction "function"
            ParamList
              ParenOpen "("
              Param
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "a"
              ParenClose ")"
            EnclosedExpr
              BraceOpen "{"
              VarRef
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "a"
              BraceClose "}"
    "#);
}

#[test]
fn map_constructor() {
    let res = Document::expect_valid_cst("map { 'a': 1 }");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          MapConstructor
            KwMap "map"
            BraceOpen "{"
            MapConstructorEntry
              StringLiteral
                StringLiteralStart "'"
                StringLiteralContents "a"
                StringLiteralEnd "'"
              QNameSeparator ":"
              NumericLiteral
                IntegerLiteral "1"
            BraceClose "}"
    "#);
}

#[test]
fn array_constructors() {
    let res = Document::expect_valid_cst("[1, 2], array { 1 }");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          SequenceExpr
            SquareArrayConstructor
              BracketOpen "["
              NumericLiteral
                IntegerLiteral "1"
              Comma ","
              NumericLiteral
                IntegerLiteral "2"
              BracketClose "]"
            Comma ","
            CurlyArrayConstructor
              KwArray "array"
              EnclosedExpr
                BraceOpen "{"
                NumericLiteral
                  IntegerLiteral "1"
                BraceClose "}"
    "#);
}

#[test]
fn lookups() {
    let res = Document::expect_valid_cst("$m?key");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          PostfixExpr
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "m"
            Lookup
              Question "?"
              KeySpecifier
                NCName "key"
    "#);
}

#[test]
fn unary_lookup() {
    let res = Document::expect_valid_cst("?1");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          UnaryLookup
            Question "?"
            KeySpecifier
              IntegerLiteral "1"
    "#);
}

#[test]
fn computed_constructors() {
    let res = Document::expect_valid_cst("element foo { text { 'x' } }");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          CompElemConstructor
            KwElement "element"
            UnprefixedName
              NCName "foo"
            EnclosedExpr
              BraceOpen "{"
              CompTextConstructor
                KwText "text"
                EnclosedExpr
                  BraceOpen "{"
                  StringLiteral
                    StringLiteralStart "'"
                    StringLiteralContents "x"
                    StringLiteralEnd "'"
                  BraceClose "}"
              BraceClose "}"
    "#);
}

#[test]
fn string_escapes() {
    let res = Document::expect_valid_cst(r#""a""b&lt;""#);

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          StringLiteral
            StringLiteralStart "\""
            StringLiteralContents "a"
            EscapeQuot "\"\""
            StringLiteralContents "b"
            PredefinedEntityReference "&lt;"
            StringLiteralEnd "\""
    "#);
}

#[test]
fn numeric_literals() {
    let res = Document::expect_valid_cst("1, 2.5, 1e3");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          SequenceExpr
            NumericLiteral
              IntegerLiteral "1"
            Comma ","
            NumericLiteral
              DecimalLiteral "2.5"
            Comma ","
            NumericLiteral
              DoubleLiteral "1e3"
    "#);
}

#[test]
fn empty_parens() {
    let res = Document::expect_valid_cst("()");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          ParenthesizedExpr
            ParenOpen "("
            ParenClose ")"
    "#);
}
