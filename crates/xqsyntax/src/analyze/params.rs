//! Parameter hints: which parameter a caret is in, and how to render a signature.
//!
//! An arrow application `$x => f(a, b)` passes `$x` as the first argument, so
//! the first argument written inside its list is the second parameter.

use rowan::{TextRange, TextSize};

use crate::parser::ast::{ArgumentList, ParamList};
use crate::parser::SyntaxKind;

impl ArgumentList {
    /// `$x => f(..)` rather than `f(..)`.
    pub fn is_arrow_application(&self) -> bool {
        self.as_cst()
            .parent()
            .is_some_and(|parent| parent.kind() == SyntaxKind::ArrowExpr)
    }

    /// Zero-based index of the parameter an edit at `offset` falls into.
    pub fn parameter_index(&self, offset: TextSize) -> usize {
        let commas = self
            .as_cst()
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .filter(|t| t.kind() == SyntaxKind::Comma && t.text_range().start() < offset)
            .count();
        commas + usize::from(self.is_arrow_application())
    }
}

impl ParamList {
    pub fn is_variadic(&self) -> bool {
        self.ellipsis().is_some()
    }
}

/// A rendered parameter list with the current parameter highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHint {
    pub label: String,
    /// Range within `label`; `None` when the index is past the last parameter.
    pub highlight: Option<TextRange>,
}

/// Joins `params` with `", "`, appending `" ..."` to a variadic list.
///
/// Extra arguments of a variadic function all highlight the last parameter,
/// together with its `...`.
pub fn render_signature(params: &[String], variadic: bool, index: usize) -> SignatureHint {
    let mut label = String::new();
    let mut ranges = Vec::with_capacity(params.len());
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            label.push_str(", ");
        }
        let start = label.len();
        label.push_str(param);
        ranges.push((start, label.len()));
    }

    let last = params.len().checked_sub(1);
    if variadic && last.is_some() {
        label.push_str(" ...");
    }

    let highlight = match last {
        Some(last) if variadic && index >= last => {
            let (start, _) = ranges[last];
            Some((start, label.len()))
        }
        _ => ranges.get(index).copied(),
    };

    SignatureHint {
        highlight: highlight.map(|(start, end)| text_range(start, end)),
        label,
    }
}

fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::new(start as u32), TextSize::new(end as u32))
}
