#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data model for the XPath/XQuery syntax layer.
//!
//! Everything here is independent of the syntax tree:
//! - **Names**: `QName`, `NamespaceMap` and the lexical resolver `parse_qname`
//! - **Schema types**: the fixed table of built-in XML Schema types and `TypeRef`
//! - **Sequence types**: occurrence bounds, kind tests, item and sequence types
//! - **Versions**: the XPath/XQuery dialect and conformance level

mod qname;
mod schema;
mod types;
mod version;

#[cfg(test)]
mod qname_tests;
#[cfg(test)]
mod version_tests;

pub use qname::{
    ARRAY_NAMESPACE, ERR_NAMESPACE, FN_NAMESPACE, LOCAL_NAMESPACE, MAP_NAMESPACE, MATH_NAMESPACE,
    NamespaceMap, QName, QNameError, XML_NAMESPACE, XSD_NAMESPACE, XSI_NAMESPACE, parse_qname,
};
pub use schema::{BuiltinType, SchemaTypeKind, TypeRef, resolve_type};
pub use types::{Bound, FunctionSignature, ItemType, KindTest, Occurrence, SequenceType};
pub use version::{Dialect, Version};
