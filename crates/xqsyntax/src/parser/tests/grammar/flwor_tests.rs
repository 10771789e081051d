use crate::Document;

#[test]
fn for_with_positional_var() {
    let res = Document::expect_valid_cst("for $x at $i in (1, 2) return $x");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          FLWORExpr
            ForClause
              KwFor "for"
              ForBinding
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "x"
                PositionalVar
                  KwAt "at"
                  Dollar "$"
                  VarName
                    UnprefixedName
                      NCName "i"
                KwIn "in"
                ParenthesizedExpr
                  ParenOpen "("
                  SequenceExpr
                    NumericLiteral
                      IntegerLiteral "1"
                    Comma ","
                    NumericLiteral
                      IntegerLiteral "2"
                  ParenClose ")"
            ReturnClause
              KwReturn "return"
              VarRef
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "x"
    "#);
}

#[test]
fn typed_let() {
    let res = Document::expect_valid_cst("let $x as xs:integer := 1 return $x");

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          FLWORExpr
            LetClause
              KwLet "let"
              LetBinding
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "x"
                TypeDeclaration
                  KwAs "as"
                  SequenceType
                    AtomicOrUnionType
                      PrefixedName
                        NCName "xs"
                        QNameSeparator ":"
                        NCName "integer"
                AssignEquals ":="
                NumericLiteral
                  IntegerLiteral "1"
            ReturnClause
              KwReturn "return"
              VarRef
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "x"
    "#);
}

#[test]
fn intermediate_clauses() {
    let res = Document::expect_valid_cst(
        "for $x in $s where $x stable order by $x descending empty least count $n return $n",
    );

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        QueryBody
          FLWORExpr
            ForClause
              KwFor "for"
              ForBinding
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "x"
                KwIn "in"
                VarRef
                  Dollar "$"
                  VarName
                    UnprefixedName
                      NCName "s"
            WhereClause
              KwWhere "where"
              VarRef
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "x"
            OrderByClause
              KwStable "stable"
              KwOrder "order"
              KwBy "by"
              OrderSpec
                VarRef
                  Dollar "$"
                  VarName
                    UnprefixedName
                      NCName "x"
                KwDescending "descending"
                KwEmpty "empty"
                KwLeast "least"
            CountClause
              KwCount "count"
              Dollar "$"
              VarName
                UnprefixedName
                  NCName "n"
            ReturnClause
              KwReturn "return"
              VarRef
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "n"
    "#);
}

#[test]
fn multiple_let_bindings_in_xpath() {
    let res = Document::expect_valid_xpath_cst("let $a := 1, $b := 2 return $b");

    insta::assert_snapshot!(res, @r#"
    Root
      FLWORExpr
        LetClause
          KwLet "let"
          LetBinding
            Dollar "$"
            VarName
              UnprefixedName
                NCName "a"
            AssignEquals ":="
            NumericLiteral
              IntegerLiteral "1"
          Comma ","
          LetBinding
            Dollar "$"
            VarName
              UnprefixedName
                NCName "b"
            AssignEquals ":="
            NumericLiteral
              IntegerLiteral "2"
        ReturnClause
          KwReturn "return"
          VarRef
            Dollar "$"
            VarName
              UnprefixedName
                NCName "b"
    "#);
}
