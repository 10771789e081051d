use indoc::indoc;
use xqsyntax_core::{Dialect, Version};

use crate::analyze::required_version;
use crate::{Document, ParseOptions};

fn xpath2() -> ParseOptions {
    ParseOptions::xpath().with_default_version(Version::V1_0)
}

fn warnings(document: &Document) -> Vec<String> {
    document
        .diagnostics()
        .iter()
        .filter(|d| d.is_warning())
        .map(|d| d.message().to_string())
        .collect()
}

#[test]
fn string_concat_in_xpath2() {
    let document = Document::expect_with("a || b", xpath2());

    assert!(document.is_valid());
    insta::assert_snapshot!(document.dump_diagnostics(), @r"
    warning: `||` requires XPath 3.0
      |
    1 | a || b
      |   ^^ `||` requires XPath 3.0
    ");
}

#[test]
fn let_expression_in_xpath2() {
    let document = Document::expect_with("let $x := 1 return $x", xpath2());

    assert_eq!(warnings(&document), vec!["`let` requires XPath 3.0"]);
}

#[test]
fn let_clause_in_xquery1() {
    let document = Document::expect_valid(r#"xquery version "1.0"; for $x in 1 let $y := $x return $y"#);

    assert!(warnings(&document).is_empty());
}

#[test]
fn count_clause_in_xquery1() {
    let document =
        Document::expect_valid(r#"xquery version "1.0"; for $x in 1 count $n return $n"#);

    assert_eq!(warnings(&document), vec!["`count` requires XQuery 3.0"]);
}

#[test]
fn declared_version_sets_the_level() {
    let document = Document::expect_valid(r#"xquery version "1.0"; [1]"#);

    assert_eq!(warnings(&document), vec!["`[` requires XQuery 3.1"]);
}

#[test]
fn warnings_in_document_order() {
    let document = Document::expect_valid(r#"xquery version "3.0"; $m?a => f()"#);

    assert_eq!(
        warnings(&document),
        vec!["`=>` requires XQuery 3.1", "`?` requires XQuery 3.1"]
    );
}

#[test]
fn uri_qualified_names() {
    let input = indoc! {r#"
    xquery version "1.0";
    Q{urn:x}a, Q{urn:x}*, *:a
    "#};

    let document = Document::expect_valid(input);

    assert_eq!(
        warnings(&document),
        vec!["`Q{` requires XQuery 3.0", "`Q{` requires XQuery 3.0"]
    );
}

#[test]
fn variadic_parameters() {
    let document = Document::expect_valid("declare function local:f($a ...) { $a }; local:f(1)");

    assert_eq!(warnings(&document), vec!["`...` requires XQuery 4.0"]);
}

#[test]
fn fixed_parameters() {
    let document = Document::expect_valid("declare function local:f($a) { $a }; local:f(1)");

    assert!(warnings(&document).is_empty());
}

#[test]
fn nothing_reported_at_latest_version() {
    let options = ParseOptions::default().with_default_version(Version::V4_0);
    let document = Document::expect_valid_with("map { 1: [2] }?1 => array:size()", options);

    assert!(document.diagnostics().is_empty());
}

#[test]
fn required_version_of_node() {
    let document = Document::expect_valid("function($x) { $x } ! 1");
    let versions: Vec<_> = document
        .syntax()
        .descendants()
        .filter_map(|node| required_version(&node, Dialect::XQuery))
        .map(|(version, token)| format!("{} {}", token.text(), version.number(Dialect::XQuery)))
        .collect();

    assert_eq!(versions, vec!["! 3.0", "function 3.0"]);
}
