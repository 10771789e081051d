//! Syntax kinds for XPath and XQuery.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives recognition of the punctuation tokens only; names, numbers, strings
//! and comments are scanned by the stateful lexer. `XqLang` implements Rowan's
//! `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then keywords, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    /// Variable indicator.
    #[token("$")]
    Dollar,

    #[token("=")]
    Equals,

    #[token("!=")]
    NotEquals,

    #[token("<")]
    Less,

    #[token("<=")]
    LessEquals,

    #[token(">")]
    Greater,

    #[token(">=")]
    GreaterEquals,

    #[token("<<")]
    NodeBefore,

    #[token(">>")]
    NodeAfter,

    #[token("|")]
    Pipe,

    /// String concatenation `||`.
    #[token("||")]
    Concat,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("//")]
    DoubleSlash,

    #[token("@")]
    At,

    /// Context item.
    #[token(".")]
    Dot,

    /// Parent selector.
    #[token("..")]
    DotDot,

    /// Variadic parameter marker.
    #[token("...")]
    Ellipsis,

    #[token("::")]
    AxisSeparator,

    #[token(":=")]
    AssignEquals,

    /// Namespace separator in `prefix:local`, also the key/value separator in maps.
    #[token(":")]
    QNameSeparator,

    #[token("?")]
    Question,

    /// Simple map operator.
    #[token("!")]
    Bang,

    #[token("#")]
    Hash,

    /// Annotation marker.
    #[token("%")]
    Percent,

    #[token("=>")]
    Arrow,

    #[token(":)")]
    CommentEndTag,

    CommentStartTag,
    Comment,
    /// Zero-width marker after a comment that runs into end of input.
    UnexpectedEndOfBlock,
    Whitespace,

    IntegerLiteral,
    DecimalLiteral,
    DoubleLiteral,
    /// `e`, `e+` or `e-` with no exponent digits after a number.
    PartialDoubleLiteralExponent,

    StringLiteralStart,
    StringLiteralContents,
    StringLiteralEnd,
    /// Doubled `""` inside a quoted literal.
    EscapeQuot,
    /// Doubled `''` inside an apostrophe literal.
    EscapeApos,
    PredefinedEntityReference,
    CharacterReference,
    /// `&` not followed by a complete reference.
    PartialEntityReference,
    EmptyEntityReference,

    /// `Q{`
    BracedUriLiteralStart,
    BracedUriLiteralEnd,

    NCName,
    BadCharacter,
    Error,

    // --- Keywords (accepted wherever an NCName is) ---
    KwAncestor,
    KwAncestorOrSelf,
    KwAnd,
    KwArray,
    KwAs,
    KwAscending,
    KwAt,
    KwAttribute,
    KwBy,
    KwCast,
    KwCastable,
    KwChild,
    KwCollation,
    KwComment,
    KwCount,
    KwDeclare,
    KwDefault,
    KwDescendant,
    KwDescendantOrSelf,
    KwDescending,
    KwDiv,
    KwDocument,
    KwDocumentNode,
    KwElement,
    KwElse,
    KwEmpty,
    KwEmptySequence,
    KwEncoding,
    KwEq,
    KwEvery,
    KwExcept,
    KwExternal,
    KwFollowing,
    KwFollowingSibling,
    KwFor,
    KwFunction,
    KwGe,
    KwGreatest,
    KwGt,
    KwIdiv,
    KwIf,
    KwImport,
    KwIn,
    KwInstance,
    KwIntersect,
    KwIs,
    KwItem,
    KwLe,
    KwLeast,
    KwLet,
    KwLt,
    KwMap,
    KwMod,
    KwModule,
    KwNamespace,
    KwNamespaceNode,
    KwNe,
    KwNode,
    KwOf,
    KwOption,
    KwOr,
    KwOrder,
    KwParent,
    KwPreceding,
    KwPrecedingSibling,
    KwProcessingInstruction,
    KwReturn,
    KwSatisfies,
    KwSchema,
    KwSchemaAttribute,
    KwSchemaElement,
    KwSelf,
    KwSome,
    KwStable,
    KwText,
    KwThen,
    KwTo,
    KwTreat,
    KwUnion,
    KwVariable,
    KwVersion,
    KwWhere,
    KwXquery,

    // --- Node kinds (non-terminals) ---
    Root,
    Module,
    VersionDecl,
    ModuleDecl,
    Prolog,
    NamespaceDecl,
    DefaultNamespaceDecl,
    VarDecl,
    FunctionDecl,
    OptionDecl,
    ModuleImport,
    SchemaImport,
    Annotation,
    Prefix,
    PrefixList,
    QueryBody,
    ParamList,
    Param,
    EnclosedExpr,

    SequenceExpr,
    FLWORExpr,
    ForClause,
    ForBinding,
    PositionalVar,
    LetClause,
    LetBinding,
    WhereClause,
    OrderByClause,
    OrderSpec,
    CountClause,
    ReturnClause,
    QuantifiedExpr,
    QuantifiedBinding,
    IfExpr,

    OrExpr,
    AndExpr,
    ComparisonExpr,
    StringConcatExpr,
    RangeExpr,
    AdditiveExpr,
    MultiplicativeExpr,
    UnionExpr,
    IntersectExceptExpr,
    InstanceofExpr,
    TreatExpr,
    CastableExpr,
    CastExpr,
    ArrowExpr,
    ArrowFunctionSpecifier,
    UnaryExpr,
    SimpleMapExpr,

    PathExpr,
    RelativePathExpr,
    AxisStep,
    ForwardAxis,
    ReverseAxis,
    AbbrevReverseStep,
    NameTest,
    Wildcard,
    Predicate,

    PostfixExpr,
    ArgumentList,
    ArgumentPlaceholder,
    Lookup,
    UnaryLookup,
    KeySpecifier,
    ParenthesizedExpr,
    ContextItemExpr,
    FunctionCall,
    NamedFunctionRef,
    InlineFunctionExpr,
    MapConstructor,
    MapConstructorEntry,
    SquareArrayConstructor,
    CurlyArrayConstructor,
    CompDocConstructor,
    CompElemConstructor,
    CompAttrConstructor,
    CompTextConstructor,
    CompCommentConstructor,

    VarRef,
    VarName,
    NumericLiteral,
    StringLiteral,
    BracedUriLiteral,
    UnprefixedName,
    PrefixedName,
    URIQualifiedName,

    SequenceType,
    EmptySequenceType,
    SingleType,
    TypeDeclaration,
    TypeName,
    AtomicOrUnionType,
    AnyItemType,
    ParenthesizedItemType,
    AnyKindTest,
    DocumentTest,
    TextTest,
    CommentTest,
    NamespaceNodeTest,
    PITest,
    AttributeTest,
    SchemaAttributeTest,
    ElementTest,
    SchemaElementTest,
    AnyFunctionTest,
    TypedFunctionTest,
    AnyMapTest,
    TypedMapTest,
    AnyArrayTest,
    TypedArrayTest,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | CommentStartTag | Comment | CommentEndTag | UnexpectedEndOfBlock
        )
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | BadCharacter)
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (KwAncestor as u16..=KwXquery as u16).contains(&(self as u16))
    }

    /// Tokens that can stand for an NCName.
    #[inline]
    pub fn is_name(self) -> bool {
        self == NCName || self.is_keyword()
    }

    #[inline]
    pub fn is_node(self) -> bool {
        self as u16 >= Root as u16 && self != __LAST
    }
}

/// Maps a scanned name to its keyword kind.
pub fn keyword(name: &str) -> Option<SyntaxKind> {
    let kind = match name {
        "ancestor" => KwAncestor,
        "ancestor-or-self" => KwAncestorOrSelf,
        "and" => KwAnd,
        "array" => KwArray,
        "as" => KwAs,
        "ascending" => KwAscending,
        "at" => KwAt,
        "attribute" => KwAttribute,
        "by" => KwBy,
        "cast" => KwCast,
        "castable" => KwCastable,
        "child" => KwChild,
        "collation" => KwCollation,
        "comment" => KwComment,
        "count" => KwCount,
        "declare" => KwDeclare,
        "default" => KwDefault,
        "descendant" => KwDescendant,
        "descendant-or-self" => KwDescendantOrSelf,
        "descending" => KwDescending,
        "div" => KwDiv,
        "document" => KwDocument,
        "document-node" => KwDocumentNode,
        "element" => KwElement,
        "else" => KwElse,
        "empty" => KwEmpty,
        "empty-sequence" => KwEmptySequence,
        "encoding" => KwEncoding,
        "eq" => KwEq,
        "every" => KwEvery,
        "except" => KwExcept,
        "external" => KwExternal,
        "following" => KwFollowing,
        "following-sibling" => KwFollowingSibling,
        "for" => KwFor,
        "function" => KwFunction,
        "ge" => KwGe,
        "greatest" => KwGreatest,
        "gt" => KwGt,
        "idiv" => KwIdiv,
        "if" => KwIf,
        "import" => KwImport,
        "in" => KwIn,
        "instance" => KwInstance,
        "intersect" => KwIntersect,
        "is" => KwIs,
        "item" => KwItem,
        "le" => KwLe,
        "least" => KwLeast,
        "let" => KwLet,
        "lt" => KwLt,
        "map" => KwMap,
        "mod" => KwMod,
        "module" => KwModule,
        "namespace" => KwNamespace,
        "namespace-node" => KwNamespaceNode,
        "ne" => KwNe,
        "node" => KwNode,
        "of" => KwOf,
        "option" => KwOption,
        "or" => KwOr,
        "order" => KwOrder,
        "parent" => KwParent,
        "preceding" => KwPreceding,
        "preceding-sibling" => KwPrecedingSibling,
        "processing-instruction" => KwProcessingInstruction,
        "return" => KwReturn,
        "satisfies" => KwSatisfies,
        "schema" => KwSchema,
        "schema-attribute" => KwSchemaAttribute,
        "schema-element" => KwSchemaElement,
        "self" => KwSelf,
        "some" => KwSome,
        "stable" => KwStable,
        "text" => KwText,
        "then" => KwThen,
        "to" => KwTo,
        "treat" => KwTreat,
        "union" => KwUnion,
        "variable" => KwVariable,
        "version" => KwVersion,
        "where" => KwWhere,
        "xquery" => KwXquery,
        _ => return None,
    };
    Some(kind)
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum XqLang {}

impl Language for XqLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<XqLang>;
pub type SyntaxToken = rowan::SyntaxToken<XqLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

const TOKEN_SET_WORDS: usize = 4;
const TOKEN_SET_CAPACITY: u16 = 64 * TOKEN_SET_WORDS as u16;

/// 256-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet([u64; TOKEN_SET_WORDS]);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant exceeds the capacity.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut words = [0u64; TOKEN_SET_WORDS];
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(
                kind < TOKEN_SET_CAPACITY,
                "SyntaxKind value exceeds TokenSet capacity"
            );
            words[(kind / 64) as usize] |= 1 << (kind % 64);
            i += 1;
        }
        TokenSet(words)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        Self::new(&[kind])
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= TOKEN_SET_CAPACITY {
            return false;
        }
        self.0[(kind / 64) as usize] & (1 << (kind % 64)) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        let mut words = self.0;
        let mut i = 0;
        while i < TOKEN_SET_WORDS {
            words[i] |= other.0[i];
            i += 1;
        }
        TokenSet(words)
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..TOKEN_SET_CAPACITY.min(__LAST as u16) {
            // SAFETY: i < __LAST, and SyntaxKind is repr(u16)
            let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
            if self.contains(kind) {
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// FIRST set of `ExprSingle`, apart from names and keywords.
    pub const EXPR_FIRST: TokenSet = TokenSet::new(&[
        IntegerLiteral,
        DecimalLiteral,
        DoubleLiteral,
        StringLiteralStart,
        Dollar,
        ParenOpen,
        BracketOpen,
        Dot,
        DotDot,
        At,
        Slash,
        DoubleSlash,
        Star,
        Plus,
        Minus,
        Question,
        Percent,
        NCName,
        BracedUriLiteralStart,
    ]);

    pub const COMPARISON_OPS: TokenSet = TokenSet::new(&[
        Equals,
        NotEquals,
        Less,
        LessEquals,
        Greater,
        GreaterEquals,
        KwEq,
        KwNe,
        KwLt,
        KwLe,
        KwGt,
        KwGe,
        KwIs,
        NodeBefore,
        NodeAfter,
    ]);

    pub const ADDITIVE_OPS: TokenSet = TokenSet::new(&[Plus, Minus]);
    pub const MULTIPLICATIVE_OPS: TokenSet = TokenSet::new(&[Star, KwDiv, KwIdiv, KwMod]);
    pub const UNION_OPS: TokenSet = TokenSet::new(&[KwUnion, Pipe]);
    pub const INTERSECT_EXCEPT_OPS: TokenSet = TokenSet::new(&[KwIntersect, KwExcept]);
    pub const PATH_SEPARATORS: TokenSet = TokenSet::new(&[Slash, DoubleSlash]);
    pub const OCCURRENCE_INDICATORS: TokenSet = TokenSet::new(&[Question, Star, Plus]);

    pub const FORWARD_AXES: TokenSet = TokenSet::new(&[
        KwChild,
        KwDescendant,
        KwAttribute,
        KwSelf,
        KwDescendantOrSelf,
        KwFollowingSibling,
        KwFollowing,
        KwNamespace,
    ]);

    pub const REVERSE_AXES: TokenSet = TokenSet::new(&[
        KwParent,
        KwAncestor,
        KwPrecedingSibling,
        KwPreceding,
        KwAncestorOrSelf,
    ]);

    /// Keywords that open a kind test when followed by `(`.
    pub const KIND_TEST_KEYWORDS: TokenSet = TokenSet::new(&[
        KwNode,
        KwText,
        KwComment,
        KwNamespaceNode,
        KwProcessingInstruction,
        KwDocumentNode,
        KwElement,
        KwAttribute,
        KwSchemaElement,
        KwSchemaAttribute,
    ]);

    /// Tokens that make up the body of a string or braced URI literal.
    pub const LITERAL_PARTS: TokenSet = TokenSet::new(&[
        StringLiteralContents,
        EscapeQuot,
        EscapeApos,
        PredefinedEntityReference,
        CharacterReference,
        PartialEntityReference,
        EmptyEntityReference,
    ]);

    /// Closing delimiters and declaration ends.
    pub const CLOSERS: TokenSet = TokenSet::new(&[ParenClose, BracketClose, BraceClose, Semicolon]);

    /// Synchronization points inside expressions.
    pub const EXPR_RECOVERY: TokenSet = CLOSERS.union(TokenSet::single(Comma));

    pub const PROLOG_RECOVERY: TokenSet = TokenSet::new(&[Semicolon, KwDeclare, KwImport]);
}
