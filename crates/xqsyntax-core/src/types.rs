//! Static sequence types.

use std::fmt;

use crate::{QName, TypeRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bound {
    Zero,
    One,
    Many,
}

impl Bound {
    fn product(self, other: Bound) -> Bound {
        match (self, other) {
            (Bound::Zero, _) | (_, Bound::Zero) => Bound::Zero,
            (Bound::One, b) | (b, Bound::One) => b,
            (Bound::Many, Bound::Many) => Bound::Many,
        }
    }
}

/// Occurrence indicator of a sequence type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Occurrence {
    Zero,
    #[default]
    One,
    ZeroOrOne,
    ZeroOrMany,
    OneOrMany,
}

impl Occurrence {
    pub fn lower(self) -> Bound {
        match self {
            Occurrence::Zero | Occurrence::ZeroOrOne | Occurrence::ZeroOrMany => Bound::Zero,
            Occurrence::One | Occurrence::OneOrMany => Bound::One,
        }
    }

    pub fn upper(self) -> Bound {
        match self {
            Occurrence::Zero => Bound::Zero,
            Occurrence::One | Occurrence::ZeroOrOne => Bound::One,
            Occurrence::ZeroOrMany | Occurrence::OneOrMany => Bound::Many,
        }
    }

    /// A lower bound of `Many` is read as `One`; an upper bound of `Zero` wins.
    pub fn from_bounds(lower: Bound, upper: Bound) -> Occurrence {
        match (lower, upper) {
            (_, Bound::Zero) => Occurrence::Zero,
            (Bound::Zero, Bound::One) => Occurrence::ZeroOrOne,
            (Bound::Zero, Bound::Many) => Occurrence::ZeroOrMany,
            (_, Bound::One) => Occurrence::One,
            (_, Bound::Many) => Occurrence::OneOrMany,
        }
    }

    pub fn from_indicator(c: char) -> Option<Occurrence> {
        match c {
            '?' => Some(Occurrence::ZeroOrOne),
            '*' => Some(Occurrence::ZeroOrMany),
            '+' => Some(Occurrence::OneOrMany),
            _ => None,
        }
    }

    pub fn indicator(self) -> Option<char> {
        match self {
            Occurrence::ZeroOrOne => Some('?'),
            Occurrence::ZeroOrMany => Some('*'),
            Occurrence::OneOrMany => Some('+'),
            Occurrence::Zero | Occurrence::One => None,
        }
    }

    /// Bounds of a sequence of `self` items, each of which is itself a sequence
    /// bounded by `inner`.
    pub fn compose(self, inner: Occurrence) -> Occurrence {
        Occurrence::from_bounds(
            self.lower().product(inner.lower()),
            self.upper().product(inner.upper()),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KindTest {
    AnyKind,
    Text,
    Comment,
    NamespaceNode,
    Document(Option<Box<KindTest>>),
    /// Target name; `None` when absent or not a valid NCName.
    ProcessingInstruction(Option<String>),
    Element {
        /// `None` for `element()` and `element(*)`.
        name: Option<QName>,
        type_name: Option<TypeRef>,
        nillable: bool,
    },
    Attribute {
        name: Option<QName>,
        type_name: Option<TypeRef>,
    },
    SchemaElement(QName),
    SchemaAttribute(QName),
}

impl KindTest {
    /// The node name the test constrains, if any.
    pub fn node_name(&self) -> Option<QName> {
        match self {
            KindTest::ProcessingInstruction(target) => target.as_deref().map(QName::local),
            KindTest::Element { name, .. } | KindTest::Attribute { name, .. } => name.clone(),
            KindTest::SchemaElement(name) | KindTest::SchemaAttribute(name) => Some(name.clone()),
            KindTest::Document(inner) => inner.as_deref().and_then(KindTest::node_name),
            KindTest::AnyKind | KindTest::Text | KindTest::Comment | KindTest::NamespaceNode => None,
        }
    }
}

impl fmt::Display for KindTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KindTest::AnyKind => write!(f, "node()"),
            KindTest::Text => write!(f, "text()"),
            KindTest::Comment => write!(f, "comment()"),
            KindTest::NamespaceNode => write!(f, "namespace-node()"),
            KindTest::Document(None) => write!(f, "document-node()"),
            KindTest::Document(Some(inner)) => write!(f, "document-node({inner})"),
            KindTest::ProcessingInstruction(None) => write!(f, "processing-instruction()"),
            KindTest::ProcessingInstruction(Some(target)) => {
                write!(f, "processing-instruction({target})")
            }
            KindTest::Element {
                name,
                type_name,
                nillable,
            } => {
                write!(f, "element(")?;
                write_name_and_type(f, name, type_name)?;
                if *nillable {
                    write!(f, "?")?;
                }
                write!(f, ")")
            }
            KindTest::Attribute { name, type_name } => {
                write!(f, "attribute(")?;
                write_name_and_type(f, name, type_name)?;
                write!(f, ")")
            }
            KindTest::SchemaElement(name) => write!(f, "schema-element({name})"),
            KindTest::SchemaAttribute(name) => write!(f, "schema-attribute({name})"),
        }
    }
}

fn write_name_and_type(
    f: &mut fmt::Formatter<'_>,
    name: &Option<QName>,
    type_name: &Option<TypeRef>,
) -> fmt::Result {
    match (name, type_name) {
        (None, None) => Ok(()),
        (Some(name), None) => write!(f, "{name}"),
        (None, Some(ty)) => write!(f, "*, {ty}"),
        (Some(name), Some(ty)) => write!(f, "{name}, {ty}"),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSignature {
    pub params: Vec<SequenceType>,
    pub result: Box<SequenceType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    Item,
    Kind(KindTest),
    Atomic(TypeRef),
    /// `None` for `function(*)`.
    Function(Option<FunctionSignature>),
    /// `None` for `map(*)`.
    Map(Option<(TypeRef, Box<SequenceType>)>),
    /// `None` for `array(*)`.
    Array(Option<Box<SequenceType>>),
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Item => write!(f, "item()"),
            ItemType::Kind(test) => write!(f, "{test}"),
            ItemType::Atomic(ty) => write!(f, "{ty}"),
            ItemType::Function(None) => write!(f, "function(*)"),
            ItemType::Function(Some(sig)) => {
                write!(f, "function(")?;
                for (i, param) in sig.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{param}")?;
                }
                write!(f, ") as {}", sig.result)
            }
            ItemType::Map(None) => write!(f, "map(*)"),
            ItemType::Map(Some((key, value))) => write!(f, "map({key}, {value})"),
            ItemType::Array(None) => write!(f, "array(*)"),
            ItemType::Array(Some(member)) => write!(f, "array({member})"),
        }
    }
}

/// An item type with an occurrence indicator. `item == None` is `empty-sequence()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceType {
    pub item: Option<ItemType>,
    pub occurrence: Occurrence,
}

impl SequenceType {
    pub fn empty() -> Self {
        Self {
            item: None,
            occurrence: Occurrence::Zero,
        }
    }

    pub fn new(item: ItemType, occurrence: Occurrence) -> Self {
        Self {
            item: Some(item),
            occurrence,
        }
    }

    pub fn one(item: ItemType) -> Self {
        Self::new(item, Occurrence::One)
    }

    pub fn is_empty_sequence(&self) -> bool {
        self.item.is_none()
    }

    /// Occurrence after folding in the bounds implied by an atomic item type,
    /// so `xs:NMTOKENS` is zero-or-many even without an indicator.
    pub fn effective_occurrence(&self) -> Occurrence {
        match &self.item {
            Some(ItemType::Atomic(ty)) => self.occurrence.compose(ty.occurrence()),
            _ => self.occurrence,
        }
    }

    pub fn bounds(&self) -> (Bound, Bound) {
        let occurrence = self.effective_occurrence();
        (occurrence.lower(), occurrence.upper())
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(item) = &self.item else {
            return write!(f, "empty-sequence()");
        };
        let Some(indicator) = self.occurrence.indicator() else {
            return write!(f, "{item}");
        };
        match item {
            ItemType::Function(Some(_)) => write!(f, "({item}){indicator}"),
            _ => write!(f, "{item}{indicator}"),
        }
    }
}
