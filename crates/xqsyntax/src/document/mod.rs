//! Document processing pipeline.
//!
//! Stages: parse → static context → names → types → conformance.
//! Stages keep separate diagnostic lists; a document is valid when none of them
//! holds an error.

mod dump;
mod printer;
pub use printer::DocumentPrinter;


use rowan::GreenNodeBuilder;

use xqsyntax_core::{QName, SequenceType};

use crate::Result;
use crate::analyze::{
    NameTable, StaticContext, TypeTable, build_static_context, check_conformance, infer_types,
    resolve_names,
};
use crate::config::ParseOptions;
use crate::diagnostics::Diagnostics;
use crate::parser::{self, Root, SyntaxKind, SyntaxNode};

/// A parsed and analyzed XPath expression or XQuery module.
///
/// Build with [`new`](Self::new) and [`with_options`](Self::with_options), then run every
/// stage with [`exec`](Self::exec). Syntax and static errors never make `exec` fail; they
/// show up in [`diagnostics`](Self::diagnostics).
#[derive(Debug, Clone)]
pub struct Document<'a> {
    source: &'a str,
    options: ParseOptions,
    root: Root,
    static_context: StaticContext,
    names: NameTable,
    types: TypeTable,
    exec_fuel_consumed: u32,
    parse_diagnostics: Diagnostics,
    context_diagnostics: Diagnostics,
    resolve_diagnostics: Diagnostics,
    conformance_diagnostics: Diagnostics,
}

fn empty_root() -> Root {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SyntaxKind::Root.into());
    builder.finish_node();
    let green = builder.finish();
    Root::cast(SyntaxNode::new_root(green)).expect("we just built a Root node")
}

impl<'a> Document<'a> {
    /// Unanalyzed document with default options.
    pub fn new(source: &'a str) -> Self {
        let options = ParseOptions::default();
        Self {
            source,
            static_context: StaticContext::new(&options),
            options,
            root: empty_root(),
            names: NameTable::new(),
            types: TypeTable::new(),
            exec_fuel_consumed: 0,
            parse_diagnostics: Diagnostics::new(),
            context_diagnostics: Diagnostics::new(),
            resolve_diagnostics: Diagnostics::new(),
            conformance_diagnostics: Diagnostics::new(),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.static_context = StaticContext::new(&options);
        self.options = options;
        self
    }

    /// Parses and analyzes. Only fuel exhaustion is an `Err`.
    pub fn exec(mut self) -> Result<Self> {
        self.try_parse()?;
        self.build_context();
        self.resolve_names();
        self.infer_types();
        self.check_conformance();
        Ok(self)
    }

    fn try_parse(&mut self) -> Result<()> {
        let (parse, diagnostics) = parser::parse(self.source, &self.options)?;
        self.exec_fuel_consumed = parse.exec_fuel_consumed();
        self.root = parse.root().clone();
        self.parse_diagnostics = diagnostics;
        Ok(())
    }

    fn build_context(&mut self) {
        self.static_context =
            build_static_context(&self.root, &self.options, &mut self.context_diagnostics);
    }

    fn resolve_names(&mut self) {
        self.names = resolve_names(
            &self.root,
            &self.static_context,
            &mut self.resolve_diagnostics,
        );
    }

    fn infer_types(&mut self) {
        self.types = infer_types(&self.root, &self.names);
    }

    fn check_conformance(&mut self) {
        check_conformance(
            &self.root,
            &self.static_context,
            &mut self.conformance_diagnostics,
        );
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn syntax(&self) -> &SyntaxNode {
        self.root.as_cst()
    }

    pub fn static_context(&self) -> &StaticContext {
        &self.static_context
    }

    pub fn names(&self) -> &NameTable {
        &self.names
    }

    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Expanded name of an `EQName` node.
    pub fn resolved_name(&self, node: &SyntaxNode) -> Option<&QName> {
        self.names.get(node)
    }

    /// Static type of a `SequenceType`, `SingleType` or `TypeDeclaration` node.
    pub fn static_type(&self, node: &SyntaxNode) -> Option<&SequenceType> {
        self.types.get(node)
    }

    pub fn exec_fuel_consumed(&self) -> u32 {
        self.exec_fuel_consumed
    }

    /// Diagnostics of every stage, in stage order.
    pub fn diagnostics(&self) -> Diagnostics {
        let mut all = Diagnostics::new();
        all.extend(self.parse_diagnostics.clone());
        all.extend(self.context_diagnostics.clone());
        all.extend(self.resolve_diagnostics.clone());
        all.extend(self.conformance_diagnostics.clone());
        all
    }

    /// Warnings do not count.
    pub fn is_valid(&self) -> bool {
        !self.parse_diagnostics.has_errors()
            && !self.context_diagnostics.has_errors()
            && !self.resolve_diagnostics.has_errors()
            && !self.conformance_diagnostics.has_errors()
    }

    pub fn printer(&self) -> DocumentPrinter<'_, 'a> {
        DocumentPrinter::new(self)
    }
}

impl<'a> TryFrom<&'a str> for Document<'a> {
    type Error = crate::Error;

    fn try_from(source: &'a str) -> Result<Self> {
        Self::new(source).exec()
    }
}

impl<'a> TryFrom<&'a String> for Document<'a> {
    type Error = crate::Error;

    fn try_from(source: &'a String) -> Result<Self> {
        Self::new(source.as_str()).exec()
    }
}
