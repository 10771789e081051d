//! Static types: lowers sequence types, single types and type declarations
//! into the `xqsyntax_core` type model.
//!
//! Type names come from the name table, so lowering runs after name
//! resolution. A type that mentions an unresolved name is left out of the table.

use indexmap::IndexMap;

use xqsyntax_core::{
    FunctionSignature, ItemType, KindTest, Occurrence, QName, SequenceType, TypeRef, resolve_type,
};

use crate::parser::ast::{self, EQName};
use crate::parser::chars::is_ncname;
use crate::parser::{Root, SyntaxNode};

use super::names::NameTable;
use super::visitor::Visitor;

/// Static types keyed by `SequenceType`, `SingleType` and `TypeDeclaration` nodes.
pub type TypeTable = IndexMap<SyntaxNode, SequenceType>;

pub fn infer_types(root: &Root, names: &NameTable) -> TypeTable {
    let mut collector = TypeCollector {
        lowering: TypeLowering { names },
        types: TypeTable::new(),
    };
    collector.visit_root(root);

    tracing::debug!(types = collector.types.len(), "static types");
    collector.types
}

struct TypeCollector<'n> {
    lowering: TypeLowering<'n>,
    types: TypeTable,
}

impl Visitor for TypeCollector<'_> {
    fn visit_sequence_type(&mut self, ty: &ast::SequenceType) {
        if let Some(lowered) = self.lowering.sequence_type(ty) {
            self.types.insert(ty.as_cst().clone(), lowered);
        }
    }

    fn visit_single_type(&mut self, ty: &ast::SingleType) {
        if let Some(lowered) = self.lowering.single_type(ty) {
            self.types.insert(ty.as_cst().clone(), lowered);
        }
    }

    fn visit_type_declaration(&mut self, decl: &ast::TypeDeclaration) {
        let lowered = decl
            .sequence_type()
            .and_then(|ty| self.lowering.sequence_type(&ty));
        if let Some(lowered) = lowered {
            self.types.insert(decl.as_cst().clone(), lowered);
        }
    }
}

/// Converts typed AST nodes into static types.
pub struct TypeLowering<'n> {
    names: &'n NameTable,
}

impl<'n> TypeLowering<'n> {
    pub fn new(names: &'n NameTable) -> Self {
        Self { names }
    }

    fn name(&self, name: Option<EQName>) -> Option<QName> {
        self.names.get(name?.as_cst()).cloned()
    }

    pub fn sequence_type(&self, ty: &ast::SequenceType) -> Option<SequenceType> {
        if ty.is_empty_sequence() {
            return Some(SequenceType::empty());
        }
        let item = self.item_type(&ty.item_type()?)?;
        let occurrence = ty
            .occurrence_indicator()
            .and_then(|t| t.text().chars().next())
            .and_then(Occurrence::from_indicator)
            .unwrap_or(Occurrence::One);
        Some(SequenceType::new(item, occurrence))
    }

    /// `cast as xs:integer?` is zero-or-one of the atomic type.
    pub fn single_type(&self, ty: &ast::SingleType) -> Option<SequenceType> {
        let atomic = resolve_type(&self.name(ty.name())?);
        let occurrence = if ty.is_optional() {
            Occurrence::ZeroOrOne
        } else {
            Occurrence::One
        };
        Some(SequenceType::new(ItemType::Atomic(atomic), occurrence))
    }

    pub fn item_type(&self, ty: &ast::ItemType) -> Option<ItemType> {
        let item = match ty {
            ast::ItemType::AnyItem(_) => ItemType::Item,
            ast::ItemType::Parenthesized(inner) => return self.item_type(&inner.item_type()?),
            ast::ItemType::Atomic(atomic) => ItemType::Atomic(self.type_ref(atomic.name())?),
            ast::ItemType::Kind(test) => ItemType::Kind(self.kind_test(test)?),
            ast::ItemType::AnyFunction(_) => ItemType::Function(None),
            ast::ItemType::TypedFunction(test) => {
                let params = test
                    .param_types()
                    .map(|param| self.sequence_type(&param))
                    .collect::<Option<Vec<_>>>()?;
                let result = self.sequence_type(&test.return_type()?)?;
                ItemType::Function(Some(FunctionSignature {
                    params,
                    result: Box::new(result),
                }))
            }
            ast::ItemType::AnyMap(_) => ItemType::Map(None),
            ast::ItemType::TypedMap(test) => {
                let key = self.type_ref(test.key_type()?.name())?;
                let value = self.sequence_type(&test.value_type()?)?;
                ItemType::Map(Some((key, Box::new(value))))
            }
            ast::ItemType::AnyArray(_) => ItemType::Array(None),
            ast::ItemType::TypedArray(test) => {
                let member = self.sequence_type(&test.member_type()?)?;
                ItemType::Array(Some(Box::new(member)))
            }
        };
        Some(item)
    }

    fn type_ref(&self, name: Option<EQName>) -> Option<TypeRef> {
        Some(resolve_type(&self.name(name)?))
    }

    pub fn kind_test(&self, test: &ast::KindTest) -> Option<KindTest> {
        let lowered = match test {
            ast::KindTest::AnyKindTest(_) => KindTest::AnyKind,
            ast::KindTest::TextTest(_) => KindTest::Text,
            ast::KindTest::CommentTest(_) => KindTest::Comment,
            ast::KindTest::NamespaceNodeTest(_) => KindTest::NamespaceNode,
            ast::KindTest::DocumentTest(doc) => match doc.inner() {
                Some(inner) => KindTest::Document(Some(Box::new(self.kind_test(&inner)?))),
                None => KindTest::Document(None),
            },
            ast::KindTest::PITest(pi) => KindTest::ProcessingInstruction(pi_target(pi)),
            ast::KindTest::ElementTest(element) => KindTest::Element {
                name: self.optional_name(element.name())?,
                type_name: self.optional_type(element.type_name())?,
                nillable: element.is_nillable(),
            },
            ast::KindTest::AttributeTest(attribute) => KindTest::Attribute {
                name: self.optional_name(attribute.name())?,
                type_name: self.optional_type(attribute.type_name())?,
            },
            ast::KindTest::SchemaElementTest(element) => {
                KindTest::SchemaElement(self.name(element.name())?)
            }
            ast::KindTest::SchemaAttributeTest(attribute) => {
                KindTest::SchemaAttribute(self.name(attribute.name())?)
            }
        };
        Some(lowered)
    }

    /// `Some(None)` when no name was written, `None` when it failed to resolve.
    fn optional_name(&self, name: Option<EQName>) -> Option<Option<QName>> {
        match name {
            Some(name) => self.name(Some(name)).map(Some),
            None => Some(None),
        }
    }

    fn optional_type(&self, name: Option<ast::TypeName>) -> Option<Option<TypeRef>> {
        match name {
            Some(name) => self.type_ref(name.name()).map(Some),
            None => Some(None),
        }
    }
}

/// A literal target is whitespace-trimmed and must be an NCName.
fn pi_target(pi: &ast::PITest) -> Option<String> {
    if let Some(name) = pi.name() {
        return name.local_name().map(|t| t.text().to_string());
    }
    let value = pi.literal()?.value();
    let target = value.trim();
    is_ncname(target).then(|| target.to_string())
}
