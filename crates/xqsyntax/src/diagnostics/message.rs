use rowan::TextRange;

/// What went wrong. Declaration order is priority order: an earlier variant
/// hides a later one reported inside its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // unterminated constructs
    UnclosedParen,
    UnclosedBracket,
    UnclosedBrace,
    UnclosedStringLiteral,
    UnclosedBracedUriLiteral,
    UnclosedComment,

    // missing pieces
    ExpectedExpression,
    ExpectedName,
    ExpectedVarName,
    ExpectedNodeTest,
    ExpectedSequenceType,
    ExpectedItemType,
    ExpectedArgumentList,
    ExpectedToken,

    // stray or malformed input
    BadCharacter,
    IncompleteDoubleExponent,
    InvalidEntityReference,
    EmptyEntityReference,
    UnexpectedToken,
    NonAssociativeOperator,
    VariadicNotLast,
    XQueryOnly,

    // static context
    UndeclaredNamespacePrefix,
    UnsupportedVersion,
    DuplicateNamespacePrefix,

    RequiresVersion,

    // usually fallout from an earlier error
    TrailingInput,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::RequiresVersion => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Declaration order decides.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    /// An unterminated `(`, `[`, `{`, string, braced URI or comment.
    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedParen
                | Self::UnclosedBracket
                | Self::UnclosedBrace
                | Self::UnclosedStringLiteral
                | Self::UnclosedBracedUriLiteral
                | Self::UnclosedComment
        )
    }

    /// Something required is missing at the reported offset.
    pub fn is_root_cause_error(&self) -> bool {
        matches!(
            self,
            Self::ExpectedExpression
                | Self::ExpectedName
                | Self::ExpectedVarName
                | Self::ExpectedNodeTest
                | Self::ExpectedSequenceType
                | Self::ExpectedItemType
                | Self::ExpectedArgumentList
                | Self::ExpectedToken
        )
    }

    /// Dropped by [`Diagnostics::filtered`](super::Diagnostics::filtered) whenever a missing-piece
    /// or unterminated-construct error exists.
    pub fn is_consequence_error(&self) -> bool {
        matches!(self, Self::TrailingInput)
    }

    /// W3C error code, when the condition has one.
    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            Self::UndeclaredNamespacePrefix => Some("XPST0081"),
            Self::UnsupportedVersion => Some("XQST0031"),
            Self::DuplicateNamespacePrefix => Some("XQST0033"),
            Self::RequiresVersion => None,
            _ if self.default_severity() == Severity::Error => Some("XPST0003"),
            _ => None,
        }
    }

    /// Attached to every diagnostic of this kind.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::XQueryOnly => Some("parse the input as XQuery to use this construct"),
            Self::NonAssociativeOperator => Some("add parentheses to group the comparison"),
            Self::VariadicNotLast => Some("`...` must follow the last parameter"),
            _ => None,
        }
    }

    /// Message used when the reporter supplies no detail.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBracket => "missing closing `]`",
            Self::UnclosedBrace => "missing closing `}`",
            Self::UnclosedStringLiteral => "unclosed string literal",
            Self::UnclosedBracedUriLiteral => "missing closing `}` in braced URI literal",
            Self::UnclosedComment => "unclosed comment",

            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedName => "expected a name",
            Self::ExpectedVarName => "expected a variable name",
            Self::ExpectedNodeTest => "expected a name test or kind test",
            Self::ExpectedSequenceType => "expected a sequence type",
            Self::ExpectedItemType => "expected an item type",
            Self::ExpectedArgumentList => "expected an argument list",
            Self::ExpectedToken => "expected a token",

            Self::BadCharacter => "unexpected character",
            Self::IncompleteDoubleExponent => "incomplete double exponent",
            Self::InvalidEntityReference => "invalid entity reference",
            Self::EmptyEntityReference => "empty entity reference",
            Self::UnexpectedToken => "unexpected token",
            Self::NonAssociativeOperator => "operator is not associative",
            Self::VariadicNotLast => "variadic marker must be last",
            Self::XQueryOnly => "only available in XQuery",

            Self::UndeclaredNamespacePrefix => "undeclared namespace prefix",
            Self::UnsupportedVersion => "unsupported language version",
            Self::DuplicateNamespacePrefix => "namespace prefix is declared twice",

            Self::RequiresVersion => "requires a newer language version",

            Self::TrailingInput => "expected end of input",
        }
    }

    /// How reporter-supplied detail is worked into the message. `{}` marks the spot.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ExpectedToken => "expected {}".to_string(),
            Self::UndeclaredNamespacePrefix => "undeclared namespace prefix `{}`".to_string(),
            Self::DuplicateNamespacePrefix => "namespace prefix `{}` is declared twice".to_string(),
            Self::UnsupportedVersion => "unsupported language version `{}`".to_string(),
            Self::XQueryOnly => "{} is only available in XQuery".to_string(),
            Self::RequiresVersion => "{}".to_string(),

            Self::UnclosedParen
            | Self::UnclosedBracket
            | Self::UnclosedBrace
            | Self::UnclosedStringLiteral
            | Self::UnclosedBracedUriLiteral
            | Self::UnclosedComment => {
                format!("{}; {{}}", self.fallback_message())
            }

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Underlined when rendered.
    pub(crate) range: TextRange,
    /// The range used for suppression logic. Defaults to `range` but can be
    /// widened to an enclosing construct.
    pub(crate) suppression_range: TextRange,
    pub(crate) message: String,
    pub(crate) fix: Option<Fix>,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            suppression_range: range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

/// One-line form, e.g. `error at 3..4: expected a name (related: here at 0..1)`.
impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {:?}: {}", self.severity(), self.range, self.message)?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(f, " (related: {} at {:?})", related.message, related.range)?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}
