//! xqsyntax: lossless XPath and XQuery parser with static name and type analysis.
//!
//! # Example
//!
//! ```
//! use xqsyntax::Document;
//!
//! let source = "for $x in (1, 2, 3) return $x * 2";
//!
//! let document = Document::try_from(source).expect("out of fuel");
//! assert!(document.is_valid());
//! eprintln!("{}", document.diagnostics().render(source));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod config;
pub mod diagnostics;
pub mod document;
pub mod parser;

#[cfg(test)]
mod config_tests;

/// Result type for analysis passes that produce both output and diagnostics.
///
/// Each pass returns its typed output alongside any diagnostics it collected.
/// Fatal errors (like fuel exhaustion) use the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

pub use config::{ParseOptions, ParseTarget};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use document::Document;
pub use parser::{Parse, parse};
pub use xqsyntax_core::{Dialect, Version};

/// Errors that stop the pipeline. Everything else is a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many parser operations).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

pub type Result<T> = std::result::Result<T, Error>;
