//! Parse options.

use serde::{Deserialize, Serialize};

use xqsyntax_core::{Dialect, Version};

pub const DEFAULT_EXEC_FUEL: u32 = 1_000_000;
pub const DEFAULT_RECURSION_FUEL: u32 = 4096;

/// Grammar entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseTarget {
    /// An XPath expression, or a whole module in the XQuery dialect.
    #[default]
    Expression,
    /// An XSLT match pattern.
    Pattern,
    SequenceType,
    ItemType,
    #[serde(rename = "eqname")]
    EQName,
    NameTest,
    /// Whitespace-separated prefixes, `#default` included.
    Prefixes,
}

/// Options shared by the parser and the analysis passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ParseOptions {
    pub dialect: Dialect,
    /// Conformance level when the source has no version declaration.
    pub default_version: Version,
    /// Token budget. `None` = infinite.
    pub exec_fuel: Option<u32>,
    /// Nesting budget. `None` = infinite.
    pub recursion_fuel: Option<u32>,
    pub target: ParseTarget,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            dialect: Dialect::default(),
            default_version: Version::default(),
            exec_fuel: Some(DEFAULT_EXEC_FUEL),
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
            target: ParseTarget::default(),
        }
    }
}

impl ParseOptions {
    pub fn xpath() -> Self {
        Self::default().with_dialect(Dialect::XPath)
    }

    pub fn xquery() -> Self {
        Self::default().with_dialect(Dialect::XQuery)
    }

    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_default_version(mut self, version: Version) -> Self {
        self.default_version = version;
        self
    }

    /// Each consumed token costs one unit; the budget is never refilled.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel = limit;
        self
    }

    /// Maximum nesting of recursive productions such as `((((1))))`.
    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.recursion_fuel = limit;
        self
    }

    pub fn with_target(mut self, target: ParseTarget) -> Self {
        self.target = target;
        self
    }
}
