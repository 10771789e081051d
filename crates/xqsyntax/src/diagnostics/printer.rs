//! Source-annotated rendering on top of `annotate-snippets`.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::message::{DiagnosticMessage, Severity};

/// Renders a batch of diagnostics against the source they were reported on.
pub struct DiagnosticsPrinter<'s> {
    messages: Vec<DiagnosticMessage>,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
    codes: bool,
}

impl<'s> DiagnosticsPrinter<'s> {
    pub(crate) fn new(messages: Vec<DiagnosticMessage>, source: &'s str) -> Self {
        Self {
            messages,
            source,
            path: None,
            colored: false,
            codes: false,
        }
    }

    /// File name shown in the `-->` line.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// Show W3C error codes in titles, e.g. `error[XPST0081]`.
    pub fn codes(mut self, value: bool) -> Self {
        self.codes = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.messages.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let report = self.report(diag);
            write!(w, "{}", renderer.render(&report))?;
        }
        Ok(())
    }

    fn report<'m>(&'m self, diag: &'m DiagnosticMessage) -> Vec<Group<'m>> {
        let primary = char_span(diag.range, self.source);

        let mut snippet = Snippet::source(self.source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(primary.clone()).label(&diag.message));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in &diag.related {
            let span = char_span(related.range, self.source);
            snippet = snippet.annotation(AnnotationKind::Context.span(span).label(&related.message));
        }

        let mut title = level(diag.severity()).primary_title(&diag.message);
        if self.codes
            && let Some(code) = diag.kind.error_code()
        {
            title = title.id(code);
        }

        let mut groups = vec![title.element(snippet)];
        if let Some(fix) = &diag.fix {
            let patched = Snippet::source(self.source)
                .line_start(1)
                .patch(Patch::new(primary, &fix.replacement));
            groups.push(Level::HELP.secondary_title(&fix.description).element(patched));
        }
        groups
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Byte range to underline. Empty ranges still get one column so that
/// "expected ..." at end of input has something to point at.
fn char_span(range: TextRange, source: &str) -> Range<usize> {
    let start = usize::from(range.start());
    let end = usize::from(range.end());
    if start < end {
        return start..end;
    }
    start..(start + 1).min(source.len())
}
