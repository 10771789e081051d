//! Language dialects and conformance levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which grammar a source text is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    XPath,
    #[default]
    XQuery,
}

impl Dialect {
    pub fn is_xquery(self) -> bool {
        self == Dialect::XQuery
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::XPath => write!(f, "XPath"),
            Dialect::XQuery => write!(f, "XQuery"),
        }
    }
}

/// Conformance level, shared by both dialects.
///
/// The levels pair up: XPath 2.0 with XQuery 1.0, then 3.0, 3.1 and the 4.0 draft
/// under the same number in both languages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Version {
    #[serde(rename = "1.0", alias = "2.0")]
    V1_0,
    #[serde(rename = "3.0")]
    V3_0,
    #[default]
    #[serde(rename = "3.1")]
    V3_1,
    #[serde(rename = "4.0")]
    V4_0,
}

impl Version {
    pub const ALL: [Version; 4] = [Version::V1_0, Version::V3_0, Version::V3_1, Version::V4_0];

    /// The version number as written in the given dialect.
    pub fn number(self, dialect: Dialect) -> &'static str {
        match (self, dialect) {
            (Version::V1_0, Dialect::XPath) => "2.0",
            (Version::V1_0, Dialect::XQuery) => "1.0",
            (Version::V3_0, _) => "3.0",
            (Version::V3_1, _) => "3.1",
            (Version::V4_0, _) => "4.0",
        }
    }

    /// Human-readable name, e.g. `XPath 2.0` or `XQuery 3.1`.
    pub fn display(self, dialect: Dialect) -> String {
        format!("{} {}", dialect, self.number(dialect))
    }

    /// Parses the version string of an `xquery version "..."` declaration.
    pub fn from_declaration(text: &str) -> Option<Version> {
        match text.trim() {
            "1.0" => Some(Version::V1_0),
            "3.0" => Some(Version::V3_0),
            "3.1" => Some(Version::V3_1),
            "4.0" => Some(Version::V4_0),
            _ => None,
        }
    }
}
