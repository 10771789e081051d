use indoc::indoc;
use xqsyntax_core::{Dialect, Version};

use crate::config::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL, ParseOptions, ParseTarget};

#[test]
fn defaults() {
    let options = ParseOptions::default();

    assert_eq!(options.dialect, Dialect::XQuery);
    assert_eq!(options.default_version, Version::V3_1);
    assert_eq!(options.exec_fuel, Some(DEFAULT_EXEC_FUEL));
    assert_eq!(options.recursion_fuel, Some(DEFAULT_RECURSION_FUEL));
    assert_eq!(options.target, ParseTarget::Expression);
}

#[test]
fn builder_chain() {
    let options = ParseOptions::xpath()
        .with_default_version(Version::V3_0)
        .with_exec_fuel(None)
        .with_recursion_fuel(Some(8))
        .with_target(ParseTarget::SequenceType);

    assert_eq!(options.dialect, Dialect::XPath);
    assert_eq!(options.default_version, Version::V3_0);
    assert_eq!(options.exec_fuel, None);
    assert_eq!(options.recursion_fuel, Some(8));
    assert_eq!(options.target, ParseTarget::SequenceType);
}

#[test]
fn serialize_kebab_case() {
    let options = ParseOptions::xpath().with_target(ParseTarget::NameTest);
    let json = serde_json::to_string_pretty(&options).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "dialect": "xpath",
      "default-version": "3.1",
      "exec-fuel": 1000000,
      "recursion-fuel": 4096,
      "target": "name-test"
    }
    "#);
}

#[test]
fn deserialize_partial_uses_defaults() {
    let json = indoc! {r#"
        {
          "dialect": "xpath",
          "target": "eqname"
        }
    "#};
    let options: ParseOptions = serde_json::from_str(json).unwrap();

    assert_eq!(options.dialect, Dialect::XPath);
    assert_eq!(options.target, ParseTarget::EQName);
    assert_eq!(options.default_version, Version::V3_1);
    assert_eq!(options.exec_fuel, Some(DEFAULT_EXEC_FUEL));
}

#[test]
fn deserialize_xpath_version_alias() {
    let options: ParseOptions = serde_json::from_str(r#"{ "default-version": "2.0" }"#).unwrap();

    assert_eq!(options.default_version, Version::V1_0);
}
