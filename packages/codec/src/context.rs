//! Per-document state shared by all codecs of one call.

use std::collections::HashSet;

use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Location};
use crate::enums::EnumRegistry;
use crate::error::Result;

/// Context threaded through a single decode or encode call.
///
/// Holds the enum registry, the diagnostic sink and the XML IDs seen so
/// far. A context is never shared between documents.
pub struct CodecContext<'a> {
    enums: &'a EnumRegistry,
    sink: &'a mut dyn DiagnosticSink,
    ids: HashSet<String>,
}

impl<'a> CodecContext<'a> {
    #[must_use]
    pub fn new(enums: &'a EnumRegistry, sink: &'a mut dyn DiagnosticSink) -> Self {
        Self {
            enums,
            sink,
            ids: HashSet::new(),
        }
    }

    #[must_use]
    pub fn enums(&self) -> &'a EnumRegistry {
        self.enums
    }

    /// Report a diagnostic to the sink.
    ///
    /// # Errors
    /// Propagates the sink's decision to abort.
    pub fn report(&mut self, kind: DiagnosticKind, location: Option<Location>) -> Result<()> {
        self.sink.report(Diagnostic::at(kind, location))
    }

    /// Record an XML ID, reporting [`DiagnosticKind::DuplicateId`] when it
    /// was already declared in this document.
    ///
    /// # Errors
    /// Propagates the sink's decision to abort.
    pub fn register_id(&mut self, id: &str, location: Option<Location>) -> Result<()> {
        if self.ids.insert(id.to_string()) {
            return Ok(());
        }
        self.report(
            DiagnosticKind::DuplicateId { id: id.to_string() },
            location,
        )
    }

    /// Check whether an ID has been registered.
    #[must_use]
    pub fn has_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_reported_once() {
        let enums = EnumRegistry::new();
        let mut sink: Vec<Diagnostic> = Vec::new();
        {
            let mut ctx = CodecContext::new(&enums, &mut sink);
            ctx.register_id("a", None).unwrap();
            ctx.register_id("b", None).unwrap();
            ctx.register_id("a", None).unwrap();
            assert!(ctx.has_id("b"));
        }
        assert_eq!(sink.len(), 1);
        assert_eq!(
            sink[0].kind,
            DiagnosticKind::DuplicateId { id: "a".to_string() }
        );
    }
}
