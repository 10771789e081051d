use crate::{Dialect, NamespaceMap, QName, QNameError, XSD_NAMESPACE, parse_qname};

#[test]
fn uri_qualified_name() {
    let empty = NamespaceMap::new();
    let name = parse_qname("Q{http://example.com}test", &empty).unwrap();

    assert_eq!(name, QName::uri_qualified("http://example.com", "test"));
    assert_eq!(name.prefix, None);
    assert!(!name.is_lexical);
}

#[test]
fn uri_qualified_name_ignores_prefix_map() {
    let namespaces: NamespaceMap = [("Q", "urn:q"), ("test", "urn:t")].into_iter().collect();
    let name = parse_qname("Q{http://example.com}test", &namespaces).unwrap();

    assert_eq!(name.namespace.as_deref(), Some("http://example.com"));
    assert_eq!(name.local_name, "test");
}

#[test]
fn clark_notation() {
    let name = parse_qname("{urn:x}item", &NamespaceMap::new()).unwrap();

    assert_eq!(name, QName::uri_qualified("urn:x", "item"));
}

#[test]
fn uri_qualified_name_with_empty_local() {
    let name = parse_qname("Q{urn:x}", &NamespaceMap::new()).unwrap();
    assert_eq!(name.namespace.as_deref(), Some("urn:x"));
    assert_eq!(name.local_name, "");

    let name = parse_qname("Q{urn:x}123", &NamespaceMap::new()).unwrap();
    assert_eq!(name.local_name, "123");
}

#[test]
fn unterminated_braced_uri() {
    let name = parse_qname("Q{urn:x", &NamespaceMap::new()).unwrap();

    assert_eq!(name.namespace.as_deref(), Some("urn:x"));
    assert_eq!(name.local_name, "");
}

#[test]
fn undeclared_prefix() {
    let err = parse_qname("a:test", &NamespaceMap::new()).unwrap_err();

    assert_eq!(err, QNameError::UndeclaredNamespacePrefix("a".into()));
    insta::assert_snapshot!(err.to_string(), @"XPST0081: Undeclared namespace prefix: a");
}

#[test]
fn declared_prefix() {
    let namespaces: NamespaceMap = [("a", "urn:x")].into_iter().collect();
    let name = parse_qname("a:test", &namespaces).unwrap();

    assert_eq!(name, QName::prefixed("urn:x", "a", "test"));
    assert!(name.is_lexical);
}

#[test]
fn bare_name_has_empty_namespace() {
    let namespaces = NamespaceMap::statically_known(Dialect::XQuery);
    let name = parse_qname("test", &namespaces).unwrap();

    assert_eq!(name.namespace.as_deref(), Some(""));
    assert_eq!(name.prefix, None);
    assert_eq!(name.local_name, "test");
    assert!(name.is_lexical);
}

#[test]
fn display_keeps_surface_form() {
    let namespaces = NamespaceMap::statically_known(Dialect::XPath);

    let prefixed = parse_qname("xs:string", &namespaces).unwrap();
    assert_eq!(prefixed.to_string(), "xs:string");
    assert_eq!(prefixed.expanded(), format!("{{{XSD_NAMESPACE}}}string"));

    let braced = parse_qname("Q{urn:x}a", &namespaces).unwrap();
    assert_eq!(braced.to_string(), "Q{urn:x}a");

    let bare = parse_qname("a", &namespaces).unwrap();
    assert_eq!(bare.to_string(), "a");
    assert_eq!(bare.expanded(), "a");
}

#[test]
fn same_name_ignores_prefix() {
    let a = QName::prefixed(XSD_NAMESPACE, "xs", "int");
    let b = QName::prefixed(XSD_NAMESPACE, "xsd", "int");
    let c = QName::uri_qualified(XSD_NAMESPACE, "int");

    assert_ne!(a, b);
    assert!(a.same_name(&b));
    assert!(a.same_name(&c));
    assert!(!a.same_name(&QName::local("int")));
}

#[test]
fn statically_known_namespaces() {
    let xquery = NamespaceMap::statically_known(Dialect::XQuery);
    let xpath = NamespaceMap::statically_known(Dialect::XPath);

    assert_eq!(xquery.get("xs"), Some(XSD_NAMESPACE));
    assert!(xquery.contains("local"));
    assert!(!xpath.contains("local"));
    assert_eq!(
        xpath.prefixes().collect::<Vec<_>>(),
        ["xml", "xs", "xsi", "fn", "math", "map", "array", "err"]
    );
}

#[test]
fn redeclare_and_undeclare() {
    let mut namespaces = NamespaceMap::new();

    assert_eq!(namespaces.declare("p", "urn:a"), None);
    assert_eq!(namespaces.declare("p", "urn:b").as_deref(), Some("urn:a"));
    assert_eq!(namespaces.get("p"), Some("urn:b"));

    namespaces.declare("p", "");
    assert!(namespaces.is_empty());
}
