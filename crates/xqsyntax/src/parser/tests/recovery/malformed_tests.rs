use indoc::indoc;

use crate::Document;

fn messages(document: &Document) -> Vec<String> {
    document
        .diagnostics()
        .iter()
        .map(|d| d.message().to_string())
        .collect()
}

#[track_caller]
fn assert_lossless_invalid(input: &str) {
    let document = Document::new(input)
        .exec()
        .unwrap_or_else(|e| panic!("exec failed on {input:?}: {e}"));

    assert!(!document.is_valid(), "expected diagnostics for {input:?}");
    assert_eq!(document.syntax().text().to_string(), input);
}

#[test]
fn function_keyword_without_param_list() {
    let document = Document::expect("%a function");

    assert!(!document.is_valid());
    assert_eq!(messages(&document), vec!["expected a parameter list"]);
    assert_eq!(document.syntax().text().to_string(), "%a function");
}

#[test]
fn function_keyword_as_named_ref() {
    let document = Document::expect("function#");

    assert_eq!(messages(&document), vec!["expected an arity"]);
    assert!(document.dump_cst().contains("NamedFunctionRef"));
}

#[test]
fn malformed_inputs_keep_their_text() {
    let inputs = [
        "function#",
        "function#{",
        "/function#{",
        "%1 function",
        "%a function",
        "%a function {",
        "%a",
        "1 cast as",
        "1 castable as",
        "1 treat as",
        "1 instance of",
        "1 instance of %a function",
        "1 instance of function(",
        "import module \"urn:m\"",
        "import schema",
        "module namespace",
        "declare function local:f",
        "Q{",
        "Q{urn:x",
        "child ::",
        "for $x at",
        "map { 1:",
        "(: open",
        "\"abc",
        "<a>",
    ];

    for input in inputs {
        assert_lossless_invalid(input);
    }
}

#[test]
fn truncated_query_keeps_its_text() {
    let query = indoc! {r#"
    xquery version "3.1";
    import module namespace m = "urn:m" at "m.xq";
    declare namespace p = "urn:p";
    declare %private function local:f($a as xs:integer, $b ...) as item()* {
      for $x at $i in (1 to $a) count $n
      where $x instance of xs:integer
      return ($x cast as xs:double?, child :: p:x[@id], %a function($y) { $y }, m:g#1)
    };
    local:f(1, Q{urn:q}v)
    "#};

    for (end, _) in query.char_indices() {
        let input = &query[..end];
        let document = Document::new(input)
            .exec()
            .unwrap_or_else(|e| panic!("exec failed on {input:?}: {e}"));
        assert_eq!(document.syntax().text().to_string(), input);
    }
}
