//! Static analysis over the parsed tree.
//!
//! Passes, in pipeline order:
//! - `context`: version and namespace declarations → `StaticContext`
//! - `names`: every `EQName` expanded against the context → `NameTable`
//! - `types`: sequence and single types lowered to the type model → `TypeTable`
//! - `conformance`: constructs newer than the effective version
//!
//! `literals` and `params` add value and parameter-hint accessors to AST nodes.

pub mod conformance;
pub mod context;
pub mod literals;
pub mod names;
pub mod params;
pub mod types;
pub mod visitor;

#[cfg(test)]
mod conformance_tests;
#[cfg(test)]
mod names_tests;

pub use conformance::{check_conformance, required_version};
pub use context::{StaticContext, build_static_context};
pub use literals::{ConstantValue, NumericValue};
pub use names::{NameRole, NameTable, resolve_name, resolve_names};
pub use params::{SignatureHint, render_signature};
pub use types::{TypeLowering, TypeTable, infer_types};
pub use visitor::{Visitor, walk_node, walk_root};
