//! Diagnostic collection for lexer and parser errors.
//!
//! A [`Handler`] accumulates [`Diagnostic`]s as the lexer and parser run;
//! it never aborts early on its own, mirroring the spec's "collect
//! everything, let the caller decide" error policy. Unlike a full compiler's
//! diagnostic subsystem, telex has no warnings or notes to report: every
//! diagnostic raised here is a hard parse failure, so the type is kept to
//! just a message and a span.
//!
//! # Examples
//!
//! ```
//! use telex_util::diagnostic::{Handler, DiagnosticBuilder};
//! use telex_util::span::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character").span(Span::point(0, 1, 1)).emit(&handler);
//! assert!(handler.has_errors());
//! ```

use crate::span::Span;
use std::cell::RefCell;

/// A single lexer/parser diagnostic: a message anchored at a source span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

/// Fluent constructor for a [`Diagnostic`], matching the call-site shape
/// used throughout the lexer and parser: `DiagnosticBuilder::error(msg).span(s).emit(handler)`.
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
}

impl DiagnosticBuilder {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
        }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic::new(self.message, self.span)
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}

/// Collects diagnostics raised while lexing or parsing a single input.
///
/// Lexer errors are always appended before parser errors, since lexing
/// always runs to completion (or aborts) before parsing begins.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    pub fn error(&self, message: impl Into<String>, span: Span) {
        self.emit(Diagnostic::new(message, span));
    }

    fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_handler_has_no_errors() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn errors_are_collected_in_order() {
        let handler = Handler::new();
        handler.error("first", Span::point(0, 1, 1));
        handler.error("second", Span::point(3, 1, 4));
        let diags = handler.into_diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "first");
        assert_eq!(diags[1].message, "second");
    }
}
