//! The public façade's error taxonomy.
//!
//! Internally `telex-parse` collects diagnostics in a flat `Vec` and
//! `telex-eval` returns a single [`telex_eval::EvalError`]; this module folds
//! both into the linked-list/result shape the spec's error taxonomy (§7)
//! describes, so a caller sees one `Error` type regardless of which phase
//! failed.

use telex_cst::CombineError;
use telex_eval::EvalError;
use telex_util::Diagnostic;

/// One syntax diagnostic, chained to the next one in source order.
///
/// Mirrors `telex_error_get_message`/`_get_line`/`_get_col`/`_get_next` from
/// the original C API, minus the manual free: `Box` drops the chain
/// structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    message: String,
    line: u32,
    column: u32,
    next: Option<Box<SyntaxError>>,
}

impl SyntaxError {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Option<Self> {
        let mut chain: Option<Box<SyntaxError>> = None;

        for diag in diagnostics.into_iter().rev() {
            chain = Some(Box::new(SyntaxError {
                message: diag.message,
                line: diag.span.line,
                column: diag.span.column,
                next: chain,
            }));
        }

        chain.map(|b| *b)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn next(&self) -> Option<&SyntaxError> {
        self.next.as_deref()
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Every way a façade call can fail, per the spec's §7 error taxonomy.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// NULL/undefined inputs, or an illegal combination such as evaluating a
    /// relative telex with no origin.
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// A lexer or parser diagnostic chain.
    #[error("{0}")]
    BadSyntax(SyntaxError),

    /// A CST node was missing a child its invariants guarantee it has.
    /// Reaching this means a bug in the parser, not bad input.
    #[error("malformed tree: {0}")]
    BadTree(String),

    /// The anchor (string, line, column) named by the expression does not
    /// exist in the buffer.
    #[error("no such position in buffer")]
    NotFound,

    /// `combine` was called with a second operand that has no prefix.
    #[error("second operand of combine must be relative (have a prefix)")]
    UndefinedOp,

    /// Regex evaluation is not implemented.
    #[error("regex evaluation is not implemented")]
    Unimplemented,
}

impl Error {
    pub(crate) fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        match SyntaxError::from_diagnostics(diagnostics) {
            Some(chain) => Error::BadSyntax(chain),
            None => Error::BadTree("parse failed with no diagnostics".to_string()),
        }
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::InvalidArgs(msg) => Error::InvalidArgs(msg),
            EvalError::NotFound => Error::NotFound,
            EvalError::BadTree(msg) => Error::BadTree(msg),
            EvalError::Unimplemented => Error::Unimplemented,
        }
    }
}

impl From<CombineError> for Error {
    fn from(_: CombineError) -> Self {
        Error::UndefinedOp
    }
}
