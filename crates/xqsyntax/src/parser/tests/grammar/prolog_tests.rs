use crate::Document;
use indoc::indoc;

#[test]
fn version_declaration() {
    let res = Document::expect_valid_cst(r#"xquery version "3.1"; 1"#);

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        VersionDecl
          KwXquery "xquery"
          KwVersion "version"
          StringLiteral
            StringLiteralStart "\""
            StringLiteralContents "3.1"
            StringLiteralEnd "\""
          Semicolon ";"
        QueryBody
          NumericLiteral
            IntegerLiteral "1"
    "#);
}

#[test]
fn namespace_and_variable() {
    let input = indoc! {r#"
    declare namespace ex = "urn:ex";
    declare variable $ex:v := 1;
    $ex:v
    "#};

    let res = Document::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        Prolog
          NamespaceDecl
            KwDeclare "declare"
            KwNamespace "namespace"
            Prefix
              NCName "ex"
            Equals "="
            StringLiteral
              StringLiteralStart "\""
              StringLiteralContents "urn:ex"
              StringLiteralEnd "\""
            Semicolon ";"
          VarDecl
            KwDeclare "declare"
            KwVariable "variable"
            Dollar "$"
            VarName
              PrefixedName
                NCName "ex"
                QNameSeparator ":"
                NCName "v"
            AssignEquals ":="
            NumericLiteral
              IntegerLiteral "1"
            Semicolon ";"
        QueryBody
          VarRef
            Dollar "$"
            VarName
              PrefixedName
                NCName "ex"
                QNameSeparator ":"
                NCName "v"
    "#);
}

#[test]
fn annotated_function() {
    let input = indoc! {r#"
    declare %private function local:inc($n as xs:integer) as xs:integer { $n + 1 };
    local:inc(1)
    "#};

    let res = Document::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        Prolog
          FunctionDecl
            KwDeclare "declare"
            Annotation
              Percent "%"
              UnprefixedName
                NCName "private"
            KwFunction "function"
            PrefixedName
              NCName "local"
              QNameSeparator ":"
              NCName "inc"
            ParamList
              ParenOpen "("
              Param
                Dollar "$"
                VarName
                  UnprefixedName
                    NCName "n"
                TypeDeclaration
                  KwAs "as"
                  SequenceType
                    AtomicOrUnionType
                      PrefixedName
                        NCName "xs"
                        QNameSeparator ":"
                        NCName "integer"
              ParenClose ")"
            TypeDeclaration
              KwAs "as"
              SequenceType
                AtomicOrUnionType
                  PrefixedName
                    NCName "xs"
                    QNameSeparator ":"
                    NCName "integer"
            EnclosedExpr
              BraceOpen "{"
              AdditiveExpr
                VarRef
                  Dollar "$"
                  VarName
                    UnprefixedName
                      NCName "n"
                Plus "+"
                NumericLiteral
                  IntegerLiteral "1"
              BraceClose "}"
            Semicolon ";"
        QueryBody
          FunctionCall
            PrefixedName
              NCName "local"
              QNameSeparator ":"
              NCName "inc"
            ArgumentList
              ParenOpen "("
              NumericLiteral
                IntegerLiteral "1"
              ParenClose ")"
    "#);
}

#[test]
fn library_module() {
    let input = indoc! {r#"
    module namespace m = "urn:m";
    declare function m:f() { 1 };
    "#};

    let res = Document::expect_valid_cst(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        ModuleDecl
          KwModule "module"
          KwNamespace "namespace"
          Prefix
            NCName "m"
          Equals "="
          StringLiteral
            StringLiteralStart "\""
            StringLiteralContents "urn:m"
            StringLiteralEnd "\""
          Semicolon ";"
        Prolog
          FunctionDecl
            KwDeclare "declare"
            KwFunction "function"
            PrefixedName
              NCName "m"
              QNameSeparator ":"
              NCName "f"
            ParamList
              ParenOpen "("
              ParenClose ")"
            EnclosedExpr
              BraceOpen "{"
              NumericLiteral
                IntegerLiteral "1"
              BraceClose "}"
            Semicolon ";"
    "#);
}

#[test]
fn option_and_default_namespace() {
    let input = indoc! {r#"
    declare default element namespace "urn:e";
    declare option Q{urn:opt}method "xml";
    a
    "#};

    let res = Document::expect_valid_names(input);

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        Prolog
          DefaultNamespaceDecl
            KwDeclare "declare"
            KwDefault "default"
            KwElement "element"
            KwNamespace "namespace"
            StringLiteral
              StringLiteralStart "\""
              StringLiteralContents "urn:e"
              StringLiteralEnd "\""
            Semicolon ";"
          OptionDecl
            KwDeclare "declare"
            KwOption "option"
            URIQualifiedName => {urn:opt}method
              BracedUriLiteral
                BracedUriLiteralStart "Q{"
                StringLiteralContents "urn:opt"
                BracedUriLiteralEnd "}"
              NCName "method"
            StringLiteral
              StringLiteralStart "\""
              StringLiteralContents "xml"
              StringLiteralEnd "\""
            Semicolon ";"
        QueryBody
          NameTest
            UnprefixedName => {urn:e}a
              NCName "a"
    "#);
}

#[test]
fn schema_import() {
    let res = Document::expect_valid_cst(r#"import schema namespace s = "urn:s" at "s.xsd"; 1"#);

    insta::assert_snapshot!(res, @r#"
    Root
      Module
        Prolog
          SchemaImport
            KwImport "import"
            KwSchema "schema"
            KwNamespace "namespace"
            Prefix
              NCName "s"
            Equals "="
            StringLiteral
              StringLiteralStart "\""
              StringLiteralContents "urn:s"
              StringLiteralEnd "\""
            KwAt "at"
            StringLiteral
              StringLiteralStart "\""
              StringLiteralContents "s.xsd"
              StringLiteralEnd "\""
            Semicolon ";"
        QueryBody
          NumericLiteral
            IntegerLiteral "1"
    "#);
}
