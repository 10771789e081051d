use crate::{Dialect, Version};

#[test]
fn version_numbers_follow_dialect() {
    assert_eq!(Version::V1_0.display(Dialect::XPath), "XPath 2.0");
    assert_eq!(Version::V1_0.display(Dialect::XQuery), "XQuery 1.0");
    assert_eq!(Version::V3_1.display(Dialect::XPath), "XPath 3.1");
    assert_eq!(Version::V4_0.display(Dialect::XQuery), "XQuery 4.0");
}

#[test]
fn versions_are_ordered() {
    assert!(Version::V1_0 < Version::V3_0);
    assert!(Version::V3_0 < Version::V3_1);
    assert!(Version::V3_1 < Version::V4_0);
    assert_eq!(Version::default(), Version::V3_1);
}

#[test]
fn version_declaration() {
    assert_eq!(Version::from_declaration("1.0"), Some(Version::V1_0));
    assert_eq!(Version::from_declaration(" 3.1 "), Some(Version::V3_1));
    assert_eq!(Version::from_declaration("2.0"), None);
    assert_eq!(Version::from_declaration("three"), None);
}

#[test]
fn version_serde() {
    let v: Version = serde_json::from_str(r#""3.0""#).unwrap();
    assert_eq!(v, Version::V3_0);
    let v: Version = serde_json::from_str(r#""2.0""#).unwrap();
    assert_eq!(v, Version::V1_0);
    assert_eq!(serde_json::to_string(&Version::V3_1).unwrap(), r#""3.1""#);

    let d: Dialect = serde_json::from_str(r#""xpath""#).unwrap();
    assert_eq!(d, Dialect::XPath);
}
