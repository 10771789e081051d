use crate::Document;

#[test]
fn empty_sequence_type() {
    let res = Document::expect_valid_cst("() instance of empty-sequence()");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          InstanceofExpr
            ParenthesizedExpr
              ParenOpen "("
              ParenClose ")"
            KwInstance "instance"
            KwOf "of"
            EmptySequenceType
              KwEmptySequence "empty-sequence"
              ParenOpen "("
              ParenClose ")"
    "#);
}

#[test]
fn typed_function_test() {
    let res = Document::expect_valid_cst("$f instance of function(xs:string) as item()*");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          InstanceofExpr
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "f"
            KwInstance "instance"
            KwOf "of"
            SequenceType
              TypedFunctionTest
                KwFunction "function"
                ParenOpen "("
                SequenceType
                  AtomicOrUnionType
                    PrefixedName
                      NCName "xs"
                      QNameSeparator ":"
                      NCName "string"
                ParenClose ")"
                KwAs "as"
                SequenceType
                  AnyItemType
                    KwItem "item"
                    ParenOpen "("
                    ParenClose ")"
                  Star "*"
    "#);
}

#[test]
fn map_and_array_tests() {
    let res = Document::expect_valid_cst("$m instance of map(xs:string, array(*))");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          InstanceofExpr
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "m"
            KwInstance "instance"
            KwOf "of"
            SequenceType
              TypedMapTest
                KwMap "map"
                ParenOpen "("
                AtomicOrUnionType
                  PrefixedName
                    NCName "xs"
                    QNameSeparator ":"
                    NCName "string"
                Comma ","
                SequenceType
                  AnyArrayTest
                    KwArray "array"
                    ParenOpen "("
                    Star "*"
                    ParenClose ")"
                ParenClose ")"
    "#);
}

#[test]
fn element_test_with_type() {
    let res = Document::expect_valid_cst("$n treat as element(a, xs:string?)");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          TreatExpr
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "n"
            KwTreat "treat"
            KwAs "as"
            SequenceType
              ElementTest
                KwElement "element"
                ParenOpen "("
                UnprefixedName
                  NCName "a"
                Comma ","
                TypeName
                  PrefixedName
                    NCName "xs"
                    QNameSeparator ":"
                    NCName "string"
                Question "?"
                ParenClose ")"
    "#);
}

#[test]
fn document_test() {
    let res = Document::expect_valid_cst("$d instance of document-node(element(*))");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          InstanceofExpr
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "d"
            KwInstance "instance"
            KwOf "of"
            SequenceType
              DocumentTest
                KwDocumentNode "document-node"
                ParenOpen "("
                ElementTest
                  KwElement "element"
                  ParenOpen "("
                  Wildcard
                    Star "*"
                  ParenClose ")"
                ParenClose ")"
    "#);
}

#[test]
fn castable() {
    let res = Document::expect_valid_cst("'1' castable as xs:integer");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          CastableExpr
            StringLiteral
              StringLiteralStart "'"
              StringLiteralContents "1"
              StringLiteralEnd "'"
            KwCastable "castable"
            KwAs "as"
            SingleType
              PrefixedName
                NCName "xs"
                QNameSeparator ":"
                NCName "integer"
    "#);
}

#[test]
fn parenthesized_item_type() {
    let res = Document::expect_valid_cst("$x instance of (node())+");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          InstanceofExpr
            VarRef
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "x"
            KwInstance "instance"
            KwOf "of"
            SequenceType
              ParenthesizedItemType
                ParenOpen "("
                AnyKindTest
                  KwNode "node"
                  ParenOpen "("
                  ParenClose ")"
                ParenClose ")"
              Plus "+"
    "#);
}
