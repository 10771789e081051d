use indoc::indoc;
use xqsyntax_core::QNameError;

use crate::analyze::{NameRole, StaticContext, resolve_name};
use crate::parser::EQName;
use crate::{Document, ParseOptions};

fn resolved(document: &Document) -> String {
    document
        .names()
        .iter()
        .map(|(node, name)| format!("{} => {}\n", node.text(), name.expanded()))
        .collect()
}

fn roles(src: &str) -> String {
    let document = Document::expect_valid(src);
    document
        .syntax()
        .descendants()
        .filter_map(EQName::cast)
        .map(|name| format!("{} {:?}\n", name.as_cst().text(), NameRole::of(&name)))
        .collect()
}

#[test]
fn prefixed_function_name() {
    let document = Document::expect_valid("fn:count($x)");

    insta::assert_snapshot!(resolved(&document), @r"
    fn:count => {http://www.w3.org/2005/xpath-functions}count
    x => x
    ");
}

#[test]
fn unprefixed_function_uses_default_function_namespace() {
    let document = Document::expect_valid("count(1)");

    insta::assert_snapshot!(resolved(&document), @"count => {http://www.w3.org/2005/xpath-functions}count");
}

#[test]
fn unprefixed_element_uses_default_element_namespace() {
    let input = indoc! {r#"
    declare default element namespace "urn:e";
    a/@b
    "#};

    let document = Document::expect_valid(input);

    insta::assert_snapshot!(resolved(&document), @r"
    a => {urn:e}a
    b => b
    ");
}

#[test]
fn declared_prefix() {
    let input = indoc! {r#"
    declare namespace ex = "urn:ex";
    ex:item
    "#};

    let document = Document::expect_valid(input);

    insta::assert_snapshot!(resolved(&document), @"ex:item => {urn:ex}item");
}

#[test]
fn uri_qualified_name() {
    let document = Document::expect_valid("Q{urn:x}local");

    insta::assert_snapshot!(resolved(&document), @"Q{urn:x}local => {urn:x}local");
}

#[test]
fn local_functions_in_xquery() {
    let document = Document::expect_valid("local:f()");

    insta::assert_snapshot!(resolved(&document), @"local:f => {http://www.w3.org/2005/xquery-local-functions}f");
}

#[test]
fn local_prefix_is_not_known_in_xpath() {
    let res = Document::expect_invalid_xpath("local:f()");

    insta::assert_snapshot!(res, @r"
    error: undeclared namespace prefix `local`
      |
    1 | local:f()
      | ^^^^^ undeclared namespace prefix `local`
    ");
}

#[test]
fn undeclared_prefix() {
    let res = Document::expect_invalid("foo:bar");

    insta::assert_snapshot!(res, @r"
    error: undeclared namespace prefix `foo`
      |
    1 | foo:bar
      | ^^^ undeclared namespace prefix `foo`
    ");
}

#[test]
fn undeclared_wildcard_prefix() {
    let res = Document::expect_invalid("foo:*");

    insta::assert_snapshot!(res, @r"
    error: undeclared namespace prefix `foo`
      |
    1 | foo:*
      | ^^^ undeclared namespace prefix `foo`
    ");
}

#[test]
fn declared_wildcard_prefix() {
    Document::expect_valid("xs:*");
}

#[test]
fn undeclared_names_are_left_out() {
    let document = Document::expect("foo:bar, baz");

    insta::assert_snapshot!(resolved(&document), @"baz => baz");
}

#[test]
fn roles_by_axis() {
    insta::assert_snapshot!(roles("attribute::a | namespace::b | c | @d"), @r"
    a Attribute
    b Local
    c Element
    d Attribute
    ");
}

#[test]
fn roles_of_bindings_and_types() {
    insta::assert_snapshot!(roles("let $v := f#1 return $v cast as t"), @r"
    v Variable
    f Function
    v Variable
    t Type
    ");
}

#[test]
fn roles_in_kind_tests() {
    insta::assert_snapshot!(roles(". instance of element(e, t)"), @r"
    e Element
    t Type
    ");
}

#[test]
fn type_names_use_default_element_namespace() {
    let input = indoc! {r#"
    declare default element namespace "urn:e";
    1 cast as t
    "#};

    let document = Document::expect_valid(input);

    insta::assert_snapshot!(resolved(&document), @"t => {urn:e}t");
}

#[test]
fn resolve_name_without_reporting() {
    let document = Document::expect("foo:bar");
    let options = ParseOptions::default();
    let context = StaticContext::new(&options);
    let name = document
        .syntax()
        .descendants()
        .find_map(EQName::cast)
        .unwrap();

    let err = resolve_name(&name, &context).unwrap_err();

    assert_eq!(err, QNameError::UndeclaredNamespacePrefix("foo".to_string()));
}
