//! Qualified names and the lexical QName resolver.
//!
//! A name reaches the resolver in one of four surface forms:
//! - `local` (NCName, no prefix)
//! - `prefix:local` (lexical QName)
//! - `{uri}local` (Clark notation)
//! - `Q{uri}local` (URI-qualified name)

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Dialect;

pub const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const FN_NAMESPACE: &str = "http://www.w3.org/2005/xpath-functions";
pub const MATH_NAMESPACE: &str = "http://www.w3.org/2005/xpath-functions/math";
pub const MAP_NAMESPACE: &str = "http://www.w3.org/2005/xpath-functions/map";
pub const ARRAY_NAMESPACE: &str = "http://www.w3.org/2005/xpath-functions/array";
pub const ERR_NAMESPACE: &str = "http://www.w3.org/2005/xqt-errors";
pub const LOCAL_NAMESPACE: &str = "http://www.w3.org/2005/xquery-local-functions";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QNameError {
    #[error("XPST0081: Undeclared namespace prefix: {0}")]
    UndeclaredNamespacePrefix(String),
}

/// A resolved qualified name.
///
/// After resolution `namespace` is always present; the empty string means
/// "no namespace". `is_lexical` records whether the name was written with a
/// prefix or bare (as opposed to `Q{uri}local` or Clark notation).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QName {
    pub namespace: Option<String>,
    pub prefix: Option<String>,
    pub local_name: String,
    pub is_lexical: bool,
}

impl QName {
    /// Bare name in no namespace.
    pub fn local(local_name: impl Into<String>) -> Self {
        Self::unprefixed("", local_name)
    }

    /// Bare name placed in a default namespace.
    pub fn unprefixed(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            prefix: None,
            local_name: local_name.into(),
            is_lexical: true,
        }
    }

    pub fn prefixed(
        namespace: impl Into<String>,
        prefix: impl Into<String>,
        local_name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            prefix: Some(prefix.into()),
            local_name: local_name.into(),
            is_lexical: true,
        }
    }

    pub fn uri_qualified(namespace: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            prefix: None,
            local_name: local_name.into(),
            is_lexical: false,
        }
    }

    pub fn namespace_uri(&self) -> &str {
        self.namespace.as_deref().unwrap_or("")
    }

    /// Clark notation, `{uri}local`, or just `local` when in no namespace.
    pub fn expanded(&self) -> String {
        match self.namespace_uri() {
            "" => self.local_name.clone(),
            ns => format!("{{{ns}}}{}", self.local_name),
        }
    }

    /// Compares expanded names, ignoring the prefix and surface form.
    pub fn same_name(&self, other: &QName) -> bool {
        self.namespace_uri() == other.namespace_uri() && self.local_name == other.local_name
    }

    pub fn is_in(&self, namespace: &str) -> bool {
        self.namespace_uri() == namespace
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.prefix, self.is_lexical) {
            (Some(prefix), true) => write!(f, "{prefix}:{}", self.local_name),
            (None, true) => write!(f, "{}", self.local_name),
            (_, false) => write!(f, "Q{{{}}}{}", self.namespace_uri(), self.local_name),
        }
    }
}

/// Ordered mapping from namespace prefix to namespace URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceMap(IndexMap<String, String>);

impl NamespaceMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// The statically known namespaces of the dialect.
    pub fn statically_known(dialect: Dialect) -> Self {
        let mut map = Self::new();
        map.declare("xml", XML_NAMESPACE);
        map.declare("xs", XSD_NAMESPACE);
        map.declare("xsi", XSI_NAMESPACE);
        map.declare("fn", FN_NAMESPACE);
        map.declare("math", MATH_NAMESPACE);
        map.declare("map", MAP_NAMESPACE);
        map.declare("array", ARRAY_NAMESPACE);
        map.declare("err", ERR_NAMESPACE);
        if dialect.is_xquery() {
            map.declare("local", LOCAL_NAMESPACE);
        }
        map
    }

    /// Binds `prefix`, replacing an earlier binding. Binding to the empty URI
    /// removes the prefix. Returns the previous URI.
    pub fn declare(&mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Option<String> {
        let prefix = prefix.into();
        let uri = uri.into();
        if uri.is_empty() {
            return self.0.shift_remove(&prefix);
        }
        self.0.insert(prefix, uri)
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.0.get(prefix).map(String::as_str)
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.0.contains_key(prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<P: Into<String>, U: Into<String>> FromIterator<(P, U)> for NamespaceMap {
    fn from_iter<I: IntoIterator<Item = (P, U)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (prefix, uri) in iter {
            map.declare(prefix, uri);
        }
        map
    }
}

/// Resolves a name written in any of the four surface forms.
///
/// `Q{` and `{` prefixes always select the URI-qualified reading, even when the
/// local part is empty or not a valid NCName. A missing `}` leaves the rest of
/// the text as the namespace and an empty local name.
pub fn parse_qname(text: &str, namespaces: &NamespaceMap) -> Result<QName, QNameError> {
    if let Some(rest) = text.strip_prefix("Q{") {
        return Ok(split_braced(rest));
    }
    if let Some(rest) = text.strip_prefix('{') {
        return Ok(split_braced(rest));
    }
    if let Some((prefix, local_name)) = text.split_once(':') {
        let Some(namespace) = namespaces.get(prefix) else {
            return Err(QNameError::UndeclaredNamespacePrefix(prefix.to_string()));
        };
        return Ok(QName::prefixed(namespace, prefix, local_name));
    }
    Ok(QName::local(text))
}

fn split_braced(rest: &str) -> QName {
    let (namespace, local_name) = rest.split_once('}').unwrap_or((rest, ""));
    QName::uri_qualified(namespace, local_name)
}
