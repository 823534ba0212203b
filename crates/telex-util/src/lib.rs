//! telex-util - Shared source-location and diagnostic infrastructure.
//!
//! Every other crate in this workspace depends on this one for [`span::Span`]
//! and the [`diagnostic::Handler`]/[`diagnostic::Diagnostic`] pair used to
//! collect lexer and parser errors.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, Handler};
pub use span::Span;
