//! Diagnostic collection, cascade suppression and rendering.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, Fix, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

/// Diagnostics in the order they were reported.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a diagnostic of `kind` at `range` with the kind's fallback message.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.messages
            .iter()
            .filter(|d| d.severity() == severity)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    /// Diagnostics worth showing to a user.
    ///
    /// A higher-priority diagnostic hides lower-priority ones inside its range. At a shared
    /// offset, a missing-piece error wins over an unclosed delimiter. Leftover-input errors
    /// only survive when nothing else went wrong.
    pub fn filtered(&self) -> Vec<DiagnosticMessage> {
        let has_primary = self
            .messages
            .iter()
            .any(|m| m.kind.is_root_cause_error() || m.kind.is_structural_error());

        let mut keep: Vec<bool> = self
            .messages
            .iter()
            .map(|m| !(has_primary && m.kind.is_consequence_error()))
            .collect();

        for (i, a) in self.messages.iter().enumerate() {
            for (j, b) in self.messages.iter().enumerate() {
                if i != j && keep[i] && keep[j] && hides(a, b) {
                    keep[j] = false;
                }
            }
        }

        self.messages
            .iter()
            .zip(keep)
            .filter_map(|(m, keep)| keep.then(|| m.clone()))
            .collect()
    }

    pub fn printer<'a>(&self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self.messages.clone(), source)
    }

    /// Like [`Diagnostics::printer`], over [`Diagnostics::filtered`].
    pub fn filtered_printer<'a>(&self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self.filtered(), source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_filtered(&self, source: &str) -> String {
        self.filtered_printer(source).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Detail text, spliced into the kind's message template.
    pub fn message(mut self, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn fix(mut self, description: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.message.fix = Some(Fix::new(replacement, description));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    /// Range this diagnostic hides others within. Defaults to the reported range.
    pub fn suppression_range(mut self, range: TextRange) -> Self {
        self.message.suppression_range = range;
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

/// Whether `a` makes `b` redundant.
fn hides(a: &DiagnosticMessage, b: &DiagnosticMessage) -> bool {
    let (ka, kb) = (a.kind, b.kind);

    let contains = a.suppression_range.start() < b.range.start()
        && b.range.end() <= a.suppression_range.end();
    if contains && ka.suppresses(&kb) {
        return true;
    }

    if a.range.start() != b.range.start() {
        return false;
    }
    if ka.is_root_cause_error() && kb.is_structural_error() {
        return true;
    }
    if ka.is_structural_error() && kb.is_root_cause_error() {
        return false;
    }
    ka.suppresses(&kb)
}
