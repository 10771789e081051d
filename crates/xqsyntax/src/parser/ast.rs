//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast only checks the `SyntaxKind`; a wrapper over a node with recovered
//! errors simply returns `None` from accessors whose child is missing.

use rowan::TextRange;

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Shared capability of every typed wrapper.
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;

    fn cast(node: SyntaxNode) -> Option<Self>;

    fn syntax(&self) -> &SyntaxNode;

    fn text_range(&self) -> TextRange {
        self.syntax().text_range()
    }
}

macro_rules! ast_node {
    ($name:ident, $($kind:ident)|+) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                <Self as AstNode>::can_cast(node.kind()).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }

            pub fn text_range(&self) -> TextRange {
                self.0.text_range()
            }
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                matches!(kind, $(SyntaxKind::$kind)|+)
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                Self::can_cast(node.kind()).then(|| Self(node))
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

/// Sum type whose variants share their names with the wrapped node kinds.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($variant),)+
        }

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                match node.kind() {
                    $(SyntaxKind::$variant => $variant::cast(node).map(Self::$variant),)+
                    _ => None,
                }
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                match self {
                    $(Self::$variant(n) => n.as_cst(),)+
                }
            }
        }

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                matches!(kind, $(SyntaxKind::$variant)|+)
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                $name::cast(node)
            }

            fn syntax(&self) -> &SyntaxNode {
                self.as_cst()
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(Module, Module);
ast_node!(VersionDecl, VersionDecl);
ast_node!(ModuleDecl, ModuleDecl);
ast_node!(Prolog, Prolog);
ast_node!(NamespaceDecl, NamespaceDecl);
ast_node!(DefaultNamespaceDecl, DefaultNamespaceDecl);
ast_node!(VarDecl, VarDecl);
ast_node!(FunctionDecl, FunctionDecl);
ast_node!(OptionDecl, OptionDecl);
ast_node!(ModuleImport, ModuleImport);
ast_node!(SchemaImport, SchemaImport);
ast_node!(Annotation, Annotation);
ast_node!(Prefix, Prefix);
ast_node!(PrefixList, PrefixList);
ast_node!(QueryBody, QueryBody);
ast_node!(ParamList, ParamList);
ast_node!(Param, Param);
ast_node!(EnclosedExpr, EnclosedExpr);

ast_node!(SequenceExpr, SequenceExpr);
ast_node!(FLWORExpr, FLWORExpr);
ast_node!(ForClause, ForClause);
ast_node!(ForBinding, ForBinding);
ast_node!(PositionalVar, PositionalVar);
ast_node!(LetClause, LetClause);
ast_node!(LetBinding, LetBinding);
ast_node!(WhereClause, WhereClause);
ast_node!(OrderByClause, OrderByClause);
ast_node!(OrderSpec, OrderSpec);
ast_node!(CountClause, CountClause);
ast_node!(ReturnClause, ReturnClause);
ast_node!(QuantifiedExpr, QuantifiedExpr);
ast_node!(QuantifiedBinding, QuantifiedBinding);
ast_node!(IfExpr, IfExpr);

ast_node!(OrExpr, OrExpr);
ast_node!(AndExpr, AndExpr);
ast_node!(ComparisonExpr, ComparisonExpr);
ast_node!(StringConcatExpr, StringConcatExpr);
ast_node!(RangeExpr, RangeExpr);
ast_node!(AdditiveExpr, AdditiveExpr);
ast_node!(MultiplicativeExpr, MultiplicativeExpr);
ast_node!(UnionExpr, UnionExpr);
ast_node!(IntersectExceptExpr, IntersectExceptExpr);
ast_node!(InstanceofExpr, InstanceofExpr);
ast_node!(TreatExpr, TreatExpr);
ast_node!(CastableExpr, CastableExpr);
ast_node!(CastExpr, CastExpr);
ast_node!(ArrowExpr, ArrowExpr);
ast_node!(ArrowFunctionSpecifier, ArrowFunctionSpecifier);
ast_node!(UnaryExpr, UnaryExpr);
ast_node!(SimpleMapExpr, SimpleMapExpr);

ast_node!(PathExpr, PathExpr);
ast_node!(RelativePathExpr, RelativePathExpr);
ast_node!(AxisStep, AxisStep);
ast_node!(AbbrevReverseStep, AbbrevReverseStep);
ast_node!(NameTest, NameTest);
ast_node!(Wildcard, Wildcard);
ast_node!(Predicate, Predicate);

ast_node!(PostfixExpr, PostfixExpr);
ast_node!(ArgumentList, ArgumentList);
ast_node!(ArgumentPlaceholder, ArgumentPlaceholder);
ast_node!(Lookup, Lookup | UnaryLookup);
ast_node!(KeySpecifier, KeySpecifier);
ast_node!(ParenthesizedExpr, ParenthesizedExpr);
ast_node!(ContextItemExpr, ContextItemExpr);
ast_node!(FunctionCall, FunctionCall);
ast_node!(NamedFunctionRef, NamedFunctionRef);
ast_node!(InlineFunctionExpr, InlineFunctionExpr);
ast_node!(MapConstructor, MapConstructor);
ast_node!(MapConstructorEntry, MapConstructorEntry);
ast_node!(SquareArrayConstructor, SquareArrayConstructor);
ast_node!(CurlyArrayConstructor, CurlyArrayConstructor);
ast_node!(
    ComputedConstructor,
    CompDocConstructor
        | CompElemConstructor
        | CompAttrConstructor
        | CompTextConstructor
        | CompCommentConstructor
);
ast_node!(VarRef, VarRef);
ast_node!(VarName, VarName);
ast_node!(NumericLiteral, NumericLiteral);
ast_node!(StringLiteral, StringLiteral);
ast_node!(BracedUriLiteral, BracedUriLiteral);
ast_node!(UnprefixedName, UnprefixedName);
ast_node!(PrefixedName, PrefixedName);
ast_node!(URIQualifiedName, URIQualifiedName);

ast_node!(SequenceType, SequenceType | EmptySequenceType);
ast_node!(SingleType, SingleType);
ast_node!(TypeDeclaration, TypeDeclaration);
ast_node!(TypeName, TypeName);
ast_node!(AtomicOrUnionType, AtomicOrUnionType);
ast_node!(AnyItemType, AnyItemType);
ast_node!(ParenthesizedItemType, ParenthesizedItemType);
ast_node!(AnyKindTest, AnyKindTest);
ast_node!(DocumentTest, DocumentTest);
ast_node!(TextTest, TextTest);
ast_node!(CommentTest, CommentTest);
ast_node!(NamespaceNodeTest, NamespaceNodeTest);
ast_node!(PITest, PITest);
ast_node!(AttributeTest, AttributeTest);
ast_node!(SchemaAttributeTest, SchemaAttributeTest);
ast_node!(ElementTest, ElementTest);
ast_node!(SchemaElementTest, SchemaElementTest);
ast_node!(AnyFunctionTest, AnyFunctionTest);
ast_node!(TypedFunctionTest, TypedFunctionTest);
ast_node!(AnyMapTest, AnyMapTest);
ast_node!(TypedMapTest, TypedMapTest);
ast_node!(AnyArrayTest, AnyArrayTest);
ast_node!(TypedArrayTest, TypedArrayTest);

ast_enum! {
    /// Node tests that can stand alone as a path step.
    KindTest {
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
    }
}

ast_enum! {
    /// Name in any of its three surface forms.
    EQName {
        UnprefixedName,
        PrefixedName,
        URIQualifiedName,
    }
}

ast_enum! {
    FlworClause {
        ForClause,
        LetClause,
        WhereClause,
        OrderByClause,
        CountClause,
    }
}

/// Item types; kind tests are folded into `Kind`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    AnyItem(AnyItemType),
    Parenthesized(ParenthesizedItemType),
    Atomic(AtomicOrUnionType),
    Kind(KindTest),
    AnyFunction(AnyFunctionTest),
    TypedFunction(TypedFunctionTest),
    AnyMap(AnyMapTest),
    TypedMap(TypedMapTest),
    AnyArray(AnyArrayTest),
    TypedArray(TypedArrayTest),
}

impl ItemType {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let item = match node.kind() {
            SyntaxKind::AnyItemType => ItemType::AnyItem(AnyItemType(node)),
            SyntaxKind::ParenthesizedItemType => {
                ItemType::Parenthesized(ParenthesizedItemType(node))
            }
            SyntaxKind::AtomicOrUnionType => ItemType::Atomic(AtomicOrUnionType(node)),
            SyntaxKind::AnyFunctionTest => ItemType::AnyFunction(AnyFunctionTest(node)),
            SyntaxKind::TypedFunctionTest => ItemType::TypedFunction(TypedFunctionTest(node)),
            SyntaxKind::AnyMapTest => ItemType::AnyMap(AnyMapTest(node)),
            SyntaxKind::TypedMapTest => ItemType::TypedMap(TypedMapTest(node)),
            SyntaxKind::AnyArrayTest => ItemType::AnyArray(AnyArrayTest(node)),
            SyntaxKind::TypedArrayTest => ItemType::TypedArray(TypedArrayTest(node)),
            _ => return KindTest::cast(node).map(ItemType::Kind),
        };
        Some(item)
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            ItemType::AnyItem(n) => n.as_cst(),
            ItemType::Parenthesized(n) => n.as_cst(),
            ItemType::Atomic(n) => n.as_cst(),
            ItemType::Kind(n) => n.as_cst(),
            ItemType::AnyFunction(n) => n.as_cst(),
            ItemType::TypedFunction(n) => n.as_cst(),
            ItemType::AnyMap(n) => n.as_cst(),
            ItemType::TypedMap(n) => n.as_cst(),
            ItemType::AnyArray(n) => n.as_cst(),
            ItemType::TypedArray(n) => n.as_cst(),
        }
    }
}

/// Expression: any node that can stand where an `ExprSingle` is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Sequence(SequenceExpr),
    Flwor(FLWORExpr),
    Quantified(QuantifiedExpr),
    If(IfExpr),
    Or(OrExpr),
    And(AndExpr),
    Comparison(ComparisonExpr),
    StringConcat(StringConcatExpr),
    Range(RangeExpr),
    Additive(AdditiveExpr),
    Multiplicative(MultiplicativeExpr),
    Union(UnionExpr),
    IntersectExcept(IntersectExceptExpr),
    InstanceOf(InstanceofExpr),
    Treat(TreatExpr),
    Castable(CastableExpr),
    Cast(CastExpr),
    Arrow(ArrowExpr),
    Unary(UnaryExpr),
    SimpleMap(SimpleMapExpr),
    Path(PathExpr),
    RelativePath(RelativePathExpr),
    AxisStep(AxisStep),
    AbbrevReverseStep(AbbrevReverseStep),
    NameTest(NameTest),
    KindTest(KindTest),
    Postfix(PostfixExpr),
    UnaryLookup(Lookup),
    Parenthesized(ParenthesizedExpr),
    ContextItem(ContextItemExpr),
    FunctionCall(FunctionCall),
    NamedFunctionRef(NamedFunctionRef),
    InlineFunction(InlineFunctionExpr),
    Map(MapConstructor),
    SquareArray(SquareArrayConstructor),
    CurlyArray(CurlyArrayConstructor),
    Computed(ComputedConstructor),
    VarRef(VarRef),
    Numeric(NumericLiteral),
    String(StringLiteral),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        let expr = match node.kind() {
            SyntaxKind::SequenceExpr => Expr::Sequence(SequenceExpr(node)),
            SyntaxKind::FLWORExpr => Expr::Flwor(FLWORExpr(node)),
            SyntaxKind::QuantifiedExpr => Expr::Quantified(QuantifiedExpr(node)),
            SyntaxKind::IfExpr => Expr::If(IfExpr(node)),
            SyntaxKind::OrExpr => Expr::Or(OrExpr(node)),
            SyntaxKind::AndExpr => Expr::And(AndExpr(node)),
            SyntaxKind::ComparisonExpr => Expr::Comparison(ComparisonExpr(node)),
            SyntaxKind::StringConcatExpr => Expr::StringConcat(StringConcatExpr(node)),
            SyntaxKind::RangeExpr => Expr::Range(RangeExpr(node)),
            SyntaxKind::AdditiveExpr => Expr::Additive(AdditiveExpr(node)),
            SyntaxKind::MultiplicativeExpr => Expr::Multiplicative(MultiplicativeExpr(node)),
            SyntaxKind::UnionExpr => Expr::Union(UnionExpr(node)),
            SyntaxKind::IntersectExceptExpr => Expr::IntersectExcept(IntersectExceptExpr(node)),
            SyntaxKind::InstanceofExpr => Expr::InstanceOf(InstanceofExpr(node)),
            SyntaxKind::TreatExpr => Expr::Treat(TreatExpr(node)),
            SyntaxKind::CastableExpr => Expr::Castable(CastableExpr(node)),
            SyntaxKind::CastExpr => Expr::Cast(CastExpr(node)),
            SyntaxKind::ArrowExpr => Expr::Arrow(ArrowExpr(node)),
            SyntaxKind::UnaryExpr => Expr::Unary(UnaryExpr(node)),
            SyntaxKind::SimpleMapExpr => Expr::SimpleMap(SimpleMapExpr(node)),
            SyntaxKind::PathExpr => Expr::Path(PathExpr(node)),
            SyntaxKind::RelativePathExpr => Expr::RelativePath(RelativePathExpr(node)),
            SyntaxKind::AxisStep => Expr::AxisStep(AxisStep(node)),
            SyntaxKind::AbbrevReverseStep => Expr::AbbrevReverseStep(AbbrevReverseStep(node)),
            SyntaxKind::NameTest => Expr::NameTest(NameTest(node)),
            SyntaxKind::PostfixExpr => Expr::Postfix(PostfixExpr(node)),
            SyntaxKind::UnaryLookup => Expr::UnaryLookup(Lookup(node)),
            SyntaxKind::ParenthesizedExpr => Expr::Parenthesized(ParenthesizedExpr(node)),
            SyntaxKind::ContextItemExpr => Expr::ContextItem(ContextItemExpr(node)),
            SyntaxKind::FunctionCall => Expr::FunctionCall(FunctionCall(node)),
            SyntaxKind::NamedFunctionRef => Expr::NamedFunctionRef(NamedFunctionRef(node)),
            SyntaxKind::InlineFunctionExpr => Expr::InlineFunction(InlineFunctionExpr(node)),
            SyntaxKind::MapConstructor => Expr::Map(MapConstructor(node)),
            SyntaxKind::SquareArrayConstructor => {
                Expr::SquareArray(SquareArrayConstructor(node))
            }
            SyntaxKind::CurlyArrayConstructor => Expr::CurlyArray(CurlyArrayConstructor(node)),
            SyntaxKind::VarRef => Expr::VarRef(VarRef(node)),
            SyntaxKind::NumericLiteral => Expr::Numeric(NumericLiteral(node)),
            SyntaxKind::StringLiteral => Expr::String(StringLiteral(node)),
            kind if ComputedConstructor::can_cast(kind) => {
                Expr::Computed(ComputedConstructor(node))
            }
            _ => return KindTest::cast(node).map(Expr::KindTest),
        };
        Some(expr)
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::Sequence(n) => n.as_cst(),
            Expr::Flwor(n) => n.as_cst(),
            Expr::Quantified(n) => n.as_cst(),
            Expr::If(n) => n.as_cst(),
            Expr::Or(n) => n.as_cst(),
            Expr::And(n) => n.as_cst(),
            Expr::Comparison(n) => n.as_cst(),
            Expr::StringConcat(n) => n.as_cst(),
            Expr::Range(n) => n.as_cst(),
            Expr::Additive(n) => n.as_cst(),
            Expr::Multiplicative(n) => n.as_cst(),
            Expr::Union(n) => n.as_cst(),
            Expr::IntersectExcept(n) => n.as_cst(),
            Expr::InstanceOf(n) => n.as_cst(),
            Expr::Treat(n) => n.as_cst(),
            Expr::Castable(n) => n.as_cst(),
            Expr::Cast(n) => n.as_cst(),
            Expr::Arrow(n) => n.as_cst(),
            Expr::Unary(n) => n.as_cst(),
            Expr::SimpleMap(n) => n.as_cst(),
            Expr::Path(n) => n.as_cst(),
            Expr::RelativePath(n) => n.as_cst(),
            Expr::AxisStep(n) => n.as_cst(),
            Expr::AbbrevReverseStep(n) => n.as_cst(),
            Expr::NameTest(n) => n.as_cst(),
            Expr::KindTest(n) => n.as_cst(),
            Expr::Postfix(n) => n.as_cst(),
            Expr::UnaryLookup(n) => n.as_cst(),
            Expr::Parenthesized(n) => n.as_cst(),
            Expr::ContextItem(n) => n.as_cst(),
            Expr::FunctionCall(n) => n.as_cst(),
            Expr::NamedFunctionRef(n) => n.as_cst(),
            Expr::InlineFunction(n) => n.as_cst(),
            Expr::Map(n) => n.as_cst(),
            Expr::SquareArray(n) => n.as_cst(),
            Expr::CurlyArray(n) => n.as_cst(),
            Expr::Computed(n) => n.as_cst(),
            Expr::VarRef(n) => n.as_cst(),
            Expr::Numeric(n) => n.as_cst(),
            Expr::String(n) => n.as_cst(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.as_cst().text_range()
    }
}

fn child<N: AstNode>(node: &SyntaxNode) -> Option<N> {
    node.children().find_map(N::cast)
}

fn children<'a, N: AstNode + 'a>(node: &'a SyntaxNode) -> impl Iterator<Item = N> + 'a {
    node.children().filter_map(N::cast)
}

fn exprs(node: &SyntaxNode) -> impl Iterator<Item = Expr> + '_ {
    node.children().filter_map(Expr::cast)
}

fn token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

fn has_token(node: &SyntaxNode, kind: SyntaxKind) -> bool {
    token(node, kind).is_some()
}

/// Significant tokens directly under `node`, in order.
fn direct_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .filter(|t| !t.kind().is_trivia())
}

/// First child of type `N` that follows a direct `kind` token.
fn child_after<N: AstNode>(node: &SyntaxNode, kind: SyntaxKind) -> Option<N> {
    let mut seen = false;
    for element in node.children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(t) if t.kind() == kind => seen = true,
            rowan::NodeOrToken::Node(n) if seen => {
                if let Some(found) = N::cast(n) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}

fn expr_after(node: &SyntaxNode, kind: SyntaxKind) -> Option<Expr> {
    let mut seen = false;
    for element in node.children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(t) if t.kind() == kind => seen = true,
            rowan::NodeOrToken::Node(n) if seen => {
                if let Some(expr) = Expr::cast(n) {
                    return Some(expr);
                }
            }
            _ => {}
        }
    }
    None
}

/// First expression child that starts before any direct `kind` token.
fn expr_before(node: &SyntaxNode, kind: SyntaxKind) -> Option<Expr> {
    for element in node.children_with_tokens() {
        match element {
            rowan::NodeOrToken::Token(t) if t.kind() == kind => return None,
            rowan::NodeOrToken::Node(n) => {
                if let Some(expr) = Expr::cast(n) {
                    return Some(expr);
                }
            }
            _ => {}
        }
    }
    None
}

impl Root {
    pub fn module(&self) -> Option<Module> {
        child(&self.0)
    }

    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn sequence_type(&self) -> Option<SequenceType> {
        child(&self.0)
    }

    pub fn item_type(&self) -> Option<ItemType> {
        self.0.children().find_map(ItemType::cast)
    }

    pub fn eqname(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn prefix_list(&self) -> Option<PrefixList> {
        child(&self.0)
    }

    /// The main expression, whether written as a bare expression or as a query body.
    pub fn body(&self) -> Option<Expr> {
        match self.module() {
            Some(module) => module.query_body().and_then(|b| b.expr()),
            None => self.expr(),
        }
    }
}

impl Module {
    pub fn version_decl(&self) -> Option<VersionDecl> {
        child(&self.0)
    }

    pub fn module_decl(&self) -> Option<ModuleDecl> {
        child(&self.0)
    }

    pub fn prolog(&self) -> Option<Prolog> {
        child(&self.0)
    }

    pub fn query_body(&self) -> Option<QueryBody> {
        child(&self.0)
    }
}

impl VersionDecl {
    pub fn version(&self) -> Option<StringLiteral> {
        child_after(&self.0, SyntaxKind::KwVersion)
    }

    pub fn encoding(&self) -> Option<StringLiteral> {
        child_after(&self.0, SyntaxKind::KwEncoding)
    }
}

impl ModuleDecl {
    pub fn prefix(&self) -> Option<Prefix> {
        child(&self.0)
    }

    pub fn uri(&self) -> Option<StringLiteral> {
        child(&self.0)
    }
}

impl Prolog {
    pub fn namespace_decls(&self) -> impl Iterator<Item = NamespaceDecl> + '_ {
        children(&self.0)
    }

    pub fn default_namespace_decls(&self) -> impl Iterator<Item = DefaultNamespaceDecl> + '_ {
        children(&self.0)
    }

    pub fn var_decls(&self) -> impl Iterator<Item = VarDecl> + '_ {
        children(&self.0)
    }

    pub fn function_decls(&self) -> impl Iterator<Item = FunctionDecl> + '_ {
        children(&self.0)
    }

    pub fn option_decls(&self) -> impl Iterator<Item = OptionDecl> + '_ {
        children(&self.0)
    }

    pub fn module_imports(&self) -> impl Iterator<Item = ModuleImport> + '_ {
        children(&self.0)
    }

    pub fn schema_imports(&self) -> impl Iterator<Item = SchemaImport> + '_ {
        children(&self.0)
    }
}

impl NamespaceDecl {
    pub fn prefix(&self) -> Option<Prefix> {
        child(&self.0)
    }

    pub fn uri(&self) -> Option<StringLiteral> {
        child(&self.0)
    }
}

impl DefaultNamespaceDecl {
    /// `declare default function namespace`, as opposed to `element`.
    pub fn is_function(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwFunction)
    }

    pub fn uri(&self) -> Option<StringLiteral> {
        child(&self.0)
    }
}

impl VarDecl {
    pub fn annotations(&self) -> impl Iterator<Item = Annotation> + '_ {
        children(&self.0)
    }

    pub fn var_name(&self) -> Option<VarName> {
        child(&self.0)
    }

    pub fn type_declaration(&self) -> Option<TypeDeclaration> {
        child(&self.0)
    }

    pub fn is_external(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwExternal)
    }

    /// The initializer, or the default value of an external variable.
    pub fn value(&self) -> Option<Expr> {
        expr_after(&self.0, SyntaxKind::AssignEquals)
    }
}

impl FunctionDecl {
    pub fn annotations(&self) -> impl Iterator<Item = Annotation> + '_ {
        children(&self.0)
    }

    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn param_list(&self) -> Option<ParamList> {
        child(&self.0)
    }

    pub fn return_type(&self) -> Option<TypeDeclaration> {
        child(&self.0)
    }

    pub fn body(&self) -> Option<EnclosedExpr> {
        child(&self.0)
    }

    pub fn is_external(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwExternal)
    }
}

impl OptionDecl {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn value(&self) -> Option<StringLiteral> {
        child(&self.0)
    }
}

impl ModuleImport {
    pub fn prefix(&self) -> Option<Prefix> {
        child(&self.0)
    }

    /// Target namespace of the import.
    pub fn uri(&self) -> Option<StringLiteral> {
        child(&self.0)
    }

    pub fn location_hints(&self) -> impl Iterator<Item = StringLiteral> + '_ {
        children(&self.0).skip(1)
    }
}

impl SchemaImport {
    pub fn prefix(&self) -> Option<Prefix> {
        child(&self.0)
    }

    /// `import schema default element namespace "..."`
    pub fn is_default_element(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwDefault)
    }

    pub fn uri(&self) -> Option<StringLiteral> {
        child(&self.0)
    }

    pub fn location_hints(&self) -> impl Iterator<Item = StringLiteral> + '_ {
        children(&self.0).skip(1)
    }
}

impl Annotation {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn values(&self) -> impl Iterator<Item = Expr> + '_ {
        exprs(&self.0)
    }
}

impl Prefix {
    /// The prefix token; `None` for `#default`.
    pub fn name(&self) -> Option<SyntaxToken> {
        if self.is_default() {
            return None;
        }
        direct_tokens(&self.0).next()
    }

    pub fn is_default(&self) -> bool {
        has_token(&self.0, SyntaxKind::Hash)
    }
}

impl PrefixList {
    pub fn prefixes(&self) -> impl Iterator<Item = Prefix> + '_ {
        children(&self.0)
    }
}

impl QueryBody {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl ParamList {
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        children(&self.0)
    }

    pub fn ellipsis(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Ellipsis)
    }
}

impl Param {
    pub fn var_name(&self) -> Option<VarName> {
        child(&self.0)
    }

    pub fn type_declaration(&self) -> Option<TypeDeclaration> {
        child(&self.0)
    }
}

impl EnclosedExpr {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl SequenceExpr {
    pub fn items(&self) -> impl Iterator<Item = Expr> + '_ {
        exprs(&self.0)
    }
}

impl FLWORExpr {
    pub fn clauses(&self) -> impl Iterator<Item = FlworClause> + '_ {
        children(&self.0)
    }

    pub fn return_clause(&self) -> Option<ReturnClause> {
        child(&self.0)
    }
}

impl ForClause {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwFor)
    }

    pub fn bindings(&self) -> impl Iterator<Item = ForBinding> + '_ {
        children(&self.0)
    }
}

impl ForBinding {
    pub fn var_name(&self) -> Option<VarName> {
        child(&self.0)
    }

    pub fn type_declaration(&self) -> Option<TypeDeclaration> {
        child(&self.0)
    }

    pub fn positional_var(&self) -> Option<PositionalVar> {
        child(&self.0)
    }

    pub fn in_expr(&self) -> Option<Expr> {
        expr_after(&self.0, SyntaxKind::KwIn)
    }
}

impl PositionalVar {
    pub fn var_name(&self) -> Option<VarName> {
        child(&self.0)
    }
}

impl LetClause {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwLet)
    }

    pub fn bindings(&self) -> impl Iterator<Item = LetBinding> + '_ {
        children(&self.0)
    }
}

impl LetBinding {
    pub fn var_name(&self) -> Option<VarName> {
        child(&self.0)
    }

    pub fn type_declaration(&self) -> Option<TypeDeclaration> {
        child(&self.0)
    }

    pub fn value(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl WhereClause {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwWhere)
    }

    pub fn condition(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl OrderByClause {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).next()
    }

    pub fn is_stable(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwStable)
    }

    pub fn specs(&self) -> impl Iterator<Item = OrderSpec> + '_ {
        children(&self.0)
    }
}

impl OrderSpec {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn is_descending(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwDescending)
    }

    /// `Some(true)` for `empty greatest`, `Some(false)` for `empty least`.
    pub fn empty_greatest(&self) -> Option<bool> {
        if has_token(&self.0, SyntaxKind::KwGreatest) {
            Some(true)
        } else if has_token(&self.0, SyntaxKind::KwLeast) {
            Some(false)
        } else {
            None
        }
    }

    pub fn collation(&self) -> Option<StringLiteral> {
        child(&self.0)
    }
}

impl CountClause {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwCount)
    }

    pub fn var_name(&self) -> Option<VarName> {
        child(&self.0)
    }
}

impl ReturnClause {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl QuantifiedExpr {
    pub fn is_every(&self) -> bool {
        has_token(&self.0, SyntaxKind::KwEvery)
    }

    pub fn bindings(&self) -> impl Iterator<Item = QuantifiedBinding> + '_ {
        children(&self.0)
    }

    pub fn satisfies(&self) -> Option<Expr> {
        expr_after(&self.0, SyntaxKind::KwSatisfies)
    }
}

impl QuantifiedBinding {
    pub fn var_name(&self) -> Option<VarName> {
        child(&self.0)
    }

    pub fn type_declaration(&self) -> Option<TypeDeclaration> {
        child(&self.0)
    }

    pub fn in_expr(&self) -> Option<Expr> {
        expr_after(&self.0, SyntaxKind::KwIn)
    }
}

impl IfExpr {
    pub fn condition(&self) -> Option<Expr> {
        expr_before(&self.0, SyntaxKind::ParenClose)
    }

    pub fn then_branch(&self) -> Option<Expr> {
        expr_after(&self.0, SyntaxKind::KwThen)
    }

    pub fn else_branch(&self) -> Option<Expr> {
        expr_after(&self.0, SyntaxKind::KwElse)
    }
}

/// Flat operator chains: operands interleaved with operator tokens.
macro_rules! operator_chain {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $name {
                pub fn operands(&self) -> impl Iterator<Item = Expr> + '_ {
                    exprs(&self.0)
                }

                pub fn operators(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
                    direct_tokens(&self.0)
                }
            }
        )+
    };
}

operator_chain!(
    OrExpr,
    AndExpr,
    StringConcatExpr,
    AdditiveExpr,
    MultiplicativeExpr,
    UnionExpr,
    IntersectExceptExpr,
    SimpleMapExpr,
    RelativePathExpr,
);

impl ComparisonExpr {
    pub fn lhs(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn rhs(&self) -> Option<Expr> {
        exprs(&self.0).nth(1)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).next()
    }
}

impl RangeExpr {
    pub fn start(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn end(&self) -> Option<Expr> {
        expr_after(&self.0, SyntaxKind::KwTo)
    }
}

impl InstanceofExpr {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn sequence_type(&self) -> Option<SequenceType> {
        child(&self.0)
    }
}

impl TreatExpr {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn sequence_type(&self) -> Option<SequenceType> {
        child(&self.0)
    }
}

impl CastableExpr {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn single_type(&self) -> Option<SingleType> {
        child(&self.0)
    }
}

impl CastExpr {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn single_type(&self) -> Option<SingleType> {
        child(&self.0)
    }
}

impl ArrowExpr {
    /// The expression fed into the first application.
    pub fn base(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn specifiers(&self) -> impl Iterator<Item = ArrowFunctionSpecifier> + '_ {
        children(&self.0)
    }

    pub fn argument_lists(&self) -> impl Iterator<Item = ArgumentList> + '_ {
        children(&self.0)
    }

    pub fn arrows(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        direct_tokens(&self.0).filter(|t| t.kind() == SyntaxKind::Arrow)
    }
}

impl ArrowFunctionSpecifier {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn var_ref(&self) -> Option<VarRef> {
        child(&self.0)
    }

    pub fn parenthesized(&self) -> Option<ParenthesizedExpr> {
        child(&self.0)
    }
}

impl UnaryExpr {
    pub fn operand(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    /// An odd number of `-` signs negates.
    pub fn is_negative(&self) -> bool {
        direct_tokens(&self.0)
            .filter(|t| t.kind() == SyntaxKind::Minus)
            .count()
            % 2
            == 1
    }
}

impl PathExpr {
    /// `//` rather than `/`.
    pub fn is_descendant(&self) -> bool {
        has_token(&self.0, SyntaxKind::DoubleSlash)
    }

    pub fn relative(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

/// The thirteen XPath axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Child,
    Descendant,
    Attribute,
    SelfAxis,
    DescendantOrSelf,
    FollowingSibling,
    Following,
    Namespace,
    Parent,
    Ancestor,
    PrecedingSibling,
    Preceding,
    AncestorOrSelf,
}

impl Axis {
    fn from_keyword(kind: SyntaxKind) -> Option<Axis> {
        let axis = match kind {
            SyntaxKind::KwChild => Axis::Child,
            SyntaxKind::KwDescendant => Axis::Descendant,
            SyntaxKind::KwAttribute => Axis::Attribute,
            SyntaxKind::KwSelf => Axis::SelfAxis,
            SyntaxKind::KwDescendantOrSelf => Axis::DescendantOrSelf,
            SyntaxKind::KwFollowingSibling => Axis::FollowingSibling,
            SyntaxKind::KwFollowing => Axis::Following,
            SyntaxKind::KwNamespace => Axis::Namespace,
            SyntaxKind::KwParent => Axis::Parent,
            SyntaxKind::KwAncestor => Axis::Ancestor,
            SyntaxKind::KwPrecedingSibling => Axis::PrecedingSibling,
            SyntaxKind::KwPreceding => Axis::Preceding,
            SyntaxKind::KwAncestorOrSelf => Axis::AncestorOrSelf,
            _ => return None,
        };
        Some(axis)
    }

    pub fn is_reverse(self) -> bool {
        matches!(
            self,
            Axis::Parent
                | Axis::Ancestor
                | Axis::PrecedingSibling
                | Axis::Preceding
                | Axis::AncestorOrSelf
        )
    }
}

/// Node test of an axis step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeTest {
    Name(NameTest),
    Kind(KindTest),
}

impl AxisStep {
    pub fn axis(&self) -> Axis {
        let explicit = self
            .0
            .children()
            .filter(|n| matches!(n.kind(), SyntaxKind::ForwardAxis | SyntaxKind::ReverseAxis))
            .find_map(|n| {
                n.children_with_tokens()
                    .filter_map(|it| it.into_token())
                    .find_map(|t| Axis::from_keyword(t.kind()))
            });
        if let Some(axis) = explicit {
            return axis;
        }
        if has_token(&self.0, SyntaxKind::At) {
            return Axis::Attribute;
        }
        if child::<AbbrevReverseStep>(&self.0).is_some() {
            return Axis::Parent;
        }
        Axis::Child
    }

    pub fn node_test(&self) -> Option<NodeTest> {
        self.0.children().find_map(|n| {
            NameTest::cast(n.clone())
                .map(NodeTest::Name)
                .or_else(|| KindTest::cast(n).map(NodeTest::Kind))
        })
    }

    pub fn predicates(&self) -> impl Iterator<Item = Predicate> + '_ {
        children(&self.0)
    }
}

impl NameTest {
    pub fn eqname(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn wildcard(&self) -> Option<Wildcard> {
        child(&self.0)
    }
}

impl Wildcard {
    /// Prefix of `p:*`.
    pub fn prefix(&self) -> Option<SyntaxToken> {
        let mut tokens = direct_tokens(&self.0);
        let first = tokens.next()?;
        (first.kind().is_name()).then_some(first)
    }

    /// Local part of `*:l`.
    pub fn local_name(&self) -> Option<SyntaxToken> {
        let mut tokens = direct_tokens(&self.0);
        let first = tokens.next()?;
        if first.kind() != SyntaxKind::Star {
            return None;
        }
        tokens.nth(1).filter(|t| t.kind().is_name())
    }

    /// Namespace of `Q{uri}*`.
    pub fn uri(&self) -> Option<BracedUriLiteral> {
        child(&self.0)
    }
}

impl Predicate {
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl PostfixExpr {
    pub fn base(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }

    pub fn predicates(&self) -> impl Iterator<Item = Predicate> + '_ {
        children(&self.0)
    }

    pub fn argument_lists(&self) -> impl Iterator<Item = ArgumentList> + '_ {
        children(&self.0)
    }

    pub fn lookups(&self) -> impl Iterator<Item = Lookup> + '_ {
        children(&self.0)
    }
}

impl ArgumentList {
    /// Arguments in order; `?` placeholders are `None`.
    pub fn arguments(&self) -> impl Iterator<Item = Option<Expr>> + '_ {
        self.0.children().filter_map(|n| {
            if n.kind() == SyntaxKind::ArgumentPlaceholder {
                return Some(None);
            }
            Expr::cast(n).map(Some)
        })
    }

    pub fn is_partial_application(&self) -> bool {
        child::<ArgumentPlaceholder>(&self.0).is_some()
    }
}

impl Lookup {
    pub fn is_unary(&self) -> bool {
        self.0.kind() == SyntaxKind::UnaryLookup
    }

    pub fn question_mark(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Question)
    }

    pub fn key(&self) -> Option<KeySpecifier> {
        child(&self.0)
    }
}

impl KeySpecifier {
    pub fn is_wildcard(&self) -> bool {
        has_token(&self.0, SyntaxKind::Star)
    }

    /// NCName or integer key.
    pub fn token(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).next()
    }

    pub fn expr(&self) -> Option<ParenthesizedExpr> {
        child(&self.0)
    }
}

impl ParenthesizedExpr {
    /// `None` for the empty sequence `()`.
    pub fn expr(&self) -> Option<Expr> {
        exprs(&self.0).next()
    }
}

impl FunctionCall {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn argument_list(&self) -> Option<ArgumentList> {
        child(&self.0)
    }

    pub fn arity(&self) -> usize {
        self.argument_list().map_or(0, |args| args.arguments().count())
    }
}

impl NamedFunctionRef {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn hash(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::Hash)
    }

    pub fn arity(&self) -> Option<u32> {
        token(&self.0, SyntaxKind::IntegerLiteral)?.text().parse().ok()
    }
}

impl InlineFunctionExpr {
    pub fn annotations(&self) -> impl Iterator<Item = Annotation> + '_ {
        children(&self.0)
    }

    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwFunction)
    }

    pub fn param_list(&self) -> Option<ParamList> {
        child(&self.0)
    }

    pub fn return_type(&self) -> Option<TypeDeclaration> {
        child(&self.0)
    }

    pub fn body(&self) -> Option<EnclosedExpr> {
        child(&self.0)
    }
}

impl MapConstructor {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwMap)
    }

    pub fn entries(&self) -> impl Iterator<Item = MapConstructorEntry> + '_ {
        children(&self.0)
    }
}

impl MapConstructorEntry {
    pub fn key(&self) -> Option<Expr> {
        expr_before(&self.0, SyntaxKind::QNameSeparator)
    }

    pub fn value(&self) -> Option<Expr> {
        expr_after(&self.0, SyntaxKind::QNameSeparator)
    }
}

impl SquareArrayConstructor {
    pub fn members(&self) -> impl Iterator<Item = Expr> + '_ {
        exprs(&self.0)
    }
}

impl CurlyArrayConstructor {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwArray)
    }

    pub fn body(&self) -> Option<EnclosedExpr> {
        child(&self.0)
    }
}

impl ComputedConstructor {
    /// The constructor keyword: `element`, `attribute`, `document`, `text` or `comment`.
    pub fn keyword(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).next()
    }

    /// Static name of an element or attribute constructor.
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    /// Computed name of `element { .. } { .. }` or `attribute { .. } { .. }`.
    pub fn name_expr(&self) -> Option<EnclosedExpr> {
        let mut enclosed = children::<EnclosedExpr>(&self.0);
        let first = enclosed.next()?;
        enclosed.next().is_some().then_some(first)
    }

    pub fn content(&self) -> Option<EnclosedExpr> {
        children(&self.0).last()
    }
}

impl VarRef {
    pub fn name(&self) -> Option<VarName> {
        child(&self.0)
    }
}

impl VarName {
    pub fn eqname(&self) -> Option<EQName> {
        child(&self.0)
    }
}

impl NumericLiteral {
    pub fn token(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).next()
    }
}

impl StringLiteral {
    /// Body tokens between the delimiters.
    pub fn parts(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| {
                !matches!(
                    t.kind(),
                    SyntaxKind::StringLiteralStart | SyntaxKind::StringLiteralEnd
                )
            })
    }

    pub fn is_closed(&self) -> bool {
        has_token(&self.0, SyntaxKind::StringLiteralEnd)
    }
}

impl BracedUriLiteral {
    pub fn parts(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| {
                !matches!(
                    t.kind(),
                    SyntaxKind::BracedUriLiteralStart | SyntaxKind::BracedUriLiteralEnd
                )
            })
    }
}

impl UnprefixedName {
    pub fn local_name(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).next()
    }
}

impl PrefixedName {
    pub fn prefix(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).next()
    }

    pub fn local_name(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).nth(2)
    }
}

impl URIQualifiedName {
    pub fn uri(&self) -> Option<BracedUriLiteral> {
        child(&self.0)
    }

    pub fn local_name(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).next()
    }
}

impl EQName {
    pub fn prefix(&self) -> Option<SyntaxToken> {
        match self {
            EQName::PrefixedName(name) => name.prefix(),
            _ => None,
        }
    }

    pub fn local_name(&self) -> Option<SyntaxToken> {
        match self {
            EQName::UnprefixedName(name) => name.local_name(),
            EQName::PrefixedName(name) => name.local_name(),
            EQName::URIQualifiedName(name) => name.local_name(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        self.as_cst().text_range()
    }
}

impl SequenceType {
    pub fn is_empty_sequence(&self) -> bool {
        self.0.kind() == SyntaxKind::EmptySequenceType
    }

    pub fn item_type(&self) -> Option<ItemType> {
        self.0.children().find_map(ItemType::cast)
    }

    /// `?`, `*` or `+` after the item type.
    pub fn occurrence_indicator(&self) -> Option<SyntaxToken> {
        direct_tokens(&self.0).find(|t| {
            matches!(
                t.kind(),
                SyntaxKind::Question | SyntaxKind::Star | SyntaxKind::Plus
            )
        })
    }
}

impl SingleType {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn is_optional(&self) -> bool {
        has_token(&self.0, SyntaxKind::Question)
    }
}

impl TypeDeclaration {
    pub fn sequence_type(&self) -> Option<SequenceType> {
        child(&self.0)
    }
}

impl TypeName {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }
}

impl AtomicOrUnionType {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }
}

impl ParenthesizedItemType {
    pub fn item_type(&self) -> Option<ItemType> {
        self.0.children().find_map(ItemType::cast)
    }
}

impl DocumentTest {
    pub fn inner(&self) -> Option<KindTest> {
        child(&self.0)
    }
}

impl PITest {
    pub fn name(&self) -> Option<UnprefixedName> {
        child(&self.0)
    }

    pub fn literal(&self) -> Option<StringLiteral> {
        child(&self.0)
    }
}

impl ElementTest {
    /// `None` for `element()` and `element(*)`.
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn type_name(&self) -> Option<TypeName> {
        child(&self.0)
    }

    pub fn is_nillable(&self) -> bool {
        has_token(&self.0, SyntaxKind::Question)
    }
}

impl AttributeTest {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }

    pub fn type_name(&self) -> Option<TypeName> {
        child(&self.0)
    }
}

impl SchemaElementTest {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }
}

impl SchemaAttributeTest {
    pub fn name(&self) -> Option<EQName> {
        child(&self.0)
    }
}

impl NamespaceNodeTest {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwNamespaceNode)
    }
}

impl AnyFunctionTest {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwFunction)
    }
}

impl TypedFunctionTest {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwFunction)
    }

    pub fn param_types(&self) -> impl Iterator<Item = SequenceType> + '_ {
        let as_start = token(&self.0, SyntaxKind::KwAs).map(|t| t.text_range().start());
        children::<SequenceType>(&self.0)
            .filter(move |ty| as_start.is_none_or(|start| ty.text_range().start() < start))
    }

    pub fn return_type(&self) -> Option<SequenceType> {
        child_after(&self.0, SyntaxKind::KwAs)
    }
}

impl AnyMapTest {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwMap)
    }
}

impl TypedMapTest {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwMap)
    }

    pub fn key_type(&self) -> Option<AtomicOrUnionType> {
        child(&self.0)
    }

    pub fn value_type(&self) -> Option<SequenceType> {
        child(&self.0)
    }
}

impl AnyArrayTest {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwArray)
    }
}

impl TypedArrayTest {
    pub fn keyword(&self) -> Option<SyntaxToken> {
        token(&self.0, SyntaxKind::KwArray)
    }

    pub fn member_type(&self) -> Option<SequenceType> {
        child(&self.0)
    }
}

/// Nodes whose availability depends on the language version.
///
/// The designated element is the token a version diagnostic points at.
pub trait ConformanceElement {
    fn conformance_element(&self) -> Option<SyntaxToken>;
}

macro_rules! conformance_token {
    ($($name:ident => $kind:ident),+ $(,)?) => {
        $(
            impl ConformanceElement for $name {
                fn conformance_element(&self) -> Option<SyntaxToken> {
                    token(&self.0, SyntaxKind::$kind)
                }
            }
        )+
    };
}

conformance_token!(
    StringConcatExpr => Concat,
    SquareArrayConstructor => BracketOpen,
    CurlyArrayConstructor => KwArray,
    MapConstructor => KwMap,
    ArrowExpr => Arrow,
    SimpleMapExpr => Bang,
    InlineFunctionExpr => KwFunction,
    NamedFunctionRef => Hash,
    Lookup => Question,
    LetClause => KwLet,
    ParamList => Ellipsis,
    NamespaceNodeTest => KwNamespaceNode,
    AnyFunctionTest => KwFunction,
    TypedFunctionTest => KwFunction,
    AnyMapTest => KwMap,
    TypedMapTest => KwMap,
    AnyArrayTest => KwArray,
    TypedArrayTest => KwArray,
    CountClause => KwCount,
);

impl ConformanceElement for URIQualifiedName {
    fn conformance_element(&self) -> Option<SyntaxToken> {
        let uri = self.uri()?;
        token(uri.as_cst(), SyntaxKind::BracedUriLiteralStart)
    }
}

impl ConformanceElement for Wildcard {
    /// Only `Q{uri}*` depends on the version.
    fn conformance_element(&self) -> Option<SyntaxToken> {
        let uri = self.uri()?;
        token(uri.as_cst(), SyntaxKind::BracedUriLiteralStart)
    }
}
