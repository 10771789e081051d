use std::fmt::Write;

use rowan::{NodeOrToken, TextRange};

use crate::parser::SyntaxNode;

use super::Document;

/// Renders the syntax tree, one node or token per line.
///
/// Nodes can be annotated with their expanded name (`=> {uri}local`) and
/// their static type (`:: xs:integer?`).
pub struct DocumentPrinter<'d, 'src> {
    document: &'d Document<'src>,
    trivia: bool,
    spans: bool,
    names: bool,
    types: bool,
}

impl<'d, 'src> DocumentPrinter<'d, 'src> {
    pub fn new(document: &'d Document<'src>) -> Self {
        Self {
            document,
            trivia: false,
            spans: false,
            names: false,
            types: false,
        }
    }

    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn with_names(mut self, value: bool) -> Self {
        self.names = value;
        self
    }

    pub fn with_types(mut self, value: bool) -> Self {
        self.types = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_cst(self.document.syntax(), 0, w)
    }

    fn format_cst(&self, node: &SyntaxNode, depth: usize, w: &mut impl Write) -> std::fmt::Result {
        write!(w, "{:pad$}{:?}", "", node.kind(), pad = depth * 2)?;
        self.format_span(node.text_range(), w)?;
        self.format_annotations(node, w)?;
        writeln!(w)?;

        for child in node.children_with_tokens() {
            let token = match child {
                NodeOrToken::Node(n) => {
                    self.format_cst(&n, depth + 1, w)?;
                    continue;
                }
                NodeOrToken::Token(t) => t,
            };
            if token.kind().is_trivia() && !self.trivia {
                continue;
            }
            write!(w, "{:pad$}{:?}", "", token.kind(), pad = (depth + 1) * 2)?;
            self.format_span(token.text_range(), w)?;
            writeln!(w, " {:?}", token.text())?;
        }
        Ok(())
    }

    fn format_annotations(&self, node: &SyntaxNode, w: &mut impl Write) -> std::fmt::Result {
        if self.names
            && let Some(name) = self.document.resolved_name(node)
        {
            write!(w, " => {}", name.expanded())?;
        }
        if self.types
            && let Some(ty) = self.document.static_type(node)
        {
            write!(w, " :: {}", ty)?;
        }
        Ok(())
    }

    fn format_span(&self, range: TextRange, w: &mut impl Write) -> std::fmt::Result {
        if self.spans {
            write!(w, " [{range:?}]")?;
        }
        Ok(())
    }
}
