//! Built-in XML Schema types.
//!
//! The table is fixed: every XSD 1.1 built-in that XDM 3.1 exposes, with its
//! base in the type hierarchy and the occurrence bounds a reference to it implies.
//! Names outside the table resolve to [`TypeRef::Named`] and are left to a
//! schema-aware consumer.

use std::fmt;

use crate::types::{Bound, Occurrence};
use crate::XSD_NAMESPACE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaTypeKind {
    Abstract,
    Atomic,
    List,
    Union,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuiltinType {
    AnyType,
    Untyped,
    AnySimpleType,
    AnyAtomicType,
    UntypedAtomic,
    String,
    Boolean,
    Decimal,
    Float,
    Double,
    Duration,
    DateTime,
    Time,
    Date,
    GYearMonth,
    GYear,
    GMonthDay,
    GDay,
    GMonth,
    HexBinary,
    Base64Binary,
    AnyUri,
    QName,
    Notation,
    Integer,
    NonPositiveInteger,
    NegativeInteger,
    Long,
    Int,
    Short,
    Byte,
    NonNegativeInteger,
    UnsignedLong,
    UnsignedInt,
    UnsignedShort,
    UnsignedByte,
    PositiveInteger,
    NormalizedString,
    Token,
    Language,
    NmToken,
    Name,
    NcName,
    Id,
    IdRef,
    Entity,
    YearMonthDuration,
    DayTimeDuration,
    DateTimeStamp,
    NmTokens,
    IdRefs,
    Entities,
    Numeric,
    Error,
}

use BuiltinType::*;

impl BuiltinType {
    pub const ALL: [BuiltinType; 54] = [
        AnyType,
        Untyped,
        AnySimpleType,
        AnyAtomicType,
        UntypedAtomic,
        String,
        Boolean,
        Decimal,
        Float,
        Double,
        Duration,
        DateTime,
        Time,
        Date,
        GYearMonth,
        GYear,
        GMonthDay,
        GDay,
        GMonth,
        HexBinary,
        Base64Binary,
        AnyUri,
        QName,
        Notation,
        Integer,
        NonPositiveInteger,
        NegativeInteger,
        Long,
        Int,
        Short,
        Byte,
        NonNegativeInteger,
        UnsignedLong,
        UnsignedInt,
        UnsignedShort,
        UnsignedByte,
        PositiveInteger,
        NormalizedString,
        Token,
        Language,
        NmToken,
        Name,
        NcName,
        Id,
        IdRef,
        Entity,
        YearMonthDuration,
        DayTimeDuration,
        DateTimeStamp,
        NmTokens,
        IdRefs,
        Entities,
        Numeric,
        Error,
    ];

    /// Finds a built-in by its local name in the XML Schema namespace.
    pub fn lookup(local_name: &str) -> Option<BuiltinType> {
        Self::ALL.into_iter().find(|t| t.local_name() == local_name)
    }

    pub fn local_name(self) -> &'static str {
        match self {
            AnyType => "anyType",
            Untyped => "untyped",
            AnySimpleType => "anySimpleType",
            AnyAtomicType => "anyAtomicType",
            UntypedAtomic => "untypedAtomic",
            String => "string",
            Boolean => "boolean",
            Decimal => "decimal",
            Float => "float",
            Double => "double",
            Duration => "duration",
            DateTime => "dateTime",
            Time => "time",
            Date => "date",
            GYearMonth => "gYearMonth",
            GYear => "gYear",
            GMonthDay => "gMonthDay",
            GDay => "gDay",
            GMonth => "gMonth",
            HexBinary => "hexBinary",
            Base64Binary => "base64Binary",
            AnyUri => "anyURI",
            QName => "QName",
            Notation => "NOTATION",
            Integer => "integer",
            NonPositiveInteger => "nonPositiveInteger",
            NegativeInteger => "negativeInteger",
            Long => "long",
            Int => "int",
            Short => "short",
            Byte => "byte",
            NonNegativeInteger => "nonNegativeInteger",
            UnsignedLong => "unsignedLong",
            UnsignedInt => "unsignedInt",
            UnsignedShort => "unsignedShort",
            UnsignedByte => "unsignedByte",
            PositiveInteger => "positiveInteger",
            NormalizedString => "normalizedString",
            Token => "token",
            Language => "language",
            NmToken => "NMTOKEN",
            Name => "Name",
            NcName => "NCName",
            Id => "ID",
            IdRef => "IDREF",
            Entity => "ENTITY",
            YearMonthDuration => "yearMonthDuration",
            DayTimeDuration => "dayTimeDuration",
            DateTimeStamp => "dateTimeStamp",
            NmTokens => "NMTOKENS",
            IdRefs => "IDREFS",
            Entities => "ENTITIES",
            Numeric => "numeric",
            Error => "error",
        }
    }

    pub fn kind(self) -> SchemaTypeKind {
        match self {
            AnyType | Untyped | AnySimpleType | AnyAtomicType => SchemaTypeKind::Abstract,
            NmTokens | IdRefs | Entities => SchemaTypeKind::List,
            Numeric | Error => SchemaTypeKind::Union,
            _ => SchemaTypeKind::Atomic,
        }
    }

    /// Base type in the XML Schema derivation hierarchy. `None` only for `xs:anyType`.
    pub fn base(self) -> Option<BuiltinType> {
        let base = match self {
            AnyType => return None,
            Untyped | AnySimpleType => AnyType,
            AnyAtomicType | NmTokens | IdRefs | Entities | Numeric | Error => AnySimpleType,
            UntypedAtomic | String | Boolean | Decimal | Float | Double | Duration | DateTime
            | Time | Date | GYearMonth | GYear | GMonthDay | GDay | GMonth | HexBinary
            | Base64Binary | AnyUri | QName | Notation => AnyAtomicType,
            Integer => Decimal,
            NonPositiveInteger | Long | NonNegativeInteger => Integer,
            NegativeInteger => NonPositiveInteger,
            Int => Long,
            Short => Int,
            Byte => Short,
            UnsignedLong | PositiveInteger => NonNegativeInteger,
            UnsignedInt => UnsignedLong,
            UnsignedShort => UnsignedInt,
            UnsignedByte => UnsignedShort,
            NormalizedString => String,
            Token => NormalizedString,
            Language | NmToken | Name => Token,
            NcName => Name,
            Id | IdRef | Entity => NcName,
            YearMonthDuration | DayTimeDuration => Duration,
            DateTimeStamp => DateTime,
        };
        Some(base)
    }

    /// Bounds implied by a reference to this type.
    ///
    /// List types and the abstract types that admit lists or complex content are
    /// zero-or-many; everything else is exactly one.
    pub fn occurrence(self) -> Occurrence {
        match self {
            AnyType | Untyped | AnySimpleType | NmTokens | IdRefs | Entities => {
                Occurrence::ZeroOrMany
            }
            _ => Occurrence::One,
        }
    }

    /// Member types of a union type, in declaration order.
    pub fn member_types(self) -> &'static [BuiltinType] {
        match self {
            Numeric => &[Double, Float, Decimal],
            _ => &[],
        }
    }

    /// Item type of a list type.
    pub fn list_item_type(self) -> Option<BuiltinType> {
        match self {
            NmTokens => Some(NmToken),
            IdRefs => Some(IdRef),
            Entities => Some(Entity),
            _ => None,
        }
    }

    /// Whether `self` is `ancestor` or derives from it.
    pub fn derives_from(self, ancestor: BuiltinType) -> bool {
        let mut current = Some(self);
        while let Some(t) = current {
            if t == ancestor {
                return true;
            }
            current = t.base();
        }
        false
    }

    pub fn qname(self) -> crate::QName {
        crate::QName::prefixed(XSD_NAMESPACE, "xs", self.local_name())
    }
}

/// A reference to a schema type, as named by a sequence type or single type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Builtin(BuiltinType),
    Named(crate::QName),
}

impl TypeRef {
    pub fn name(&self) -> crate::QName {
        match self {
            TypeRef::Builtin(b) => b.qname(),
            TypeRef::Named(name) => name.clone(),
        }
    }

    /// The table entry a reference resolves to.
    ///
    /// A built-in union maps to the union itself (`xs:numeric`), not to one of
    /// its members; those come from [`TypeRef::member_types`].
    pub fn item_type(&self) -> TypeRef {
        self.clone()
    }

    /// Named types have no known derivation.
    pub fn base_type(&self) -> Option<TypeRef> {
        match self {
            TypeRef::Builtin(b) => b.base().map(TypeRef::Builtin),
            TypeRef::Named(_) => None,
        }
    }

    pub fn occurrence(&self) -> Occurrence {
        match self {
            TypeRef::Builtin(b) => b.occurrence(),
            TypeRef::Named(_) => Occurrence::One,
        }
    }

    pub fn lower_bound(&self) -> Bound {
        self.occurrence().lower()
    }

    pub fn upper_bound(&self) -> Bound {
        self.occurrence().upper()
    }

    pub fn kind(&self) -> Option<SchemaTypeKind> {
        match self {
            TypeRef::Builtin(b) => Some(b.kind()),
            TypeRef::Named(_) => None,
        }
    }

    pub fn member_types(&self) -> Vec<TypeRef> {
        match self {
            TypeRef::Builtin(b) => b.member_types().iter().copied().map(TypeRef::Builtin).collect(),
            TypeRef::Named(_) => Vec::new(),
        }
    }

    pub fn list_item_type(&self) -> Option<TypeRef> {
        match self {
            TypeRef::Builtin(b) => b.list_item_type().map(TypeRef::Builtin),
            TypeRef::Named(_) => None,
        }
    }

    pub fn as_builtin(&self) -> Option<BuiltinType> {
        match self {
            TypeRef::Builtin(b) => Some(*b),
            TypeRef::Named(_) => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Builtin(b) => write!(f, "xs:{}", b.local_name()),
            TypeRef::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Resolves a type name against the built-in table.
pub fn resolve_type(name: &crate::QName) -> TypeRef {
    if name.is_in(XSD_NAMESPACE)
        && let Some(builtin) = BuiltinType::lookup(&name.local_name)
    {
        return TypeRef::Builtin(builtin);
    }
    TypeRef::Named(name.clone())
}
