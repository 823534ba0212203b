//! Error type for the evaluator.
//!
//! Unlike the lexer/parser's [`telex_util::Handler`], evaluation has no
//! partial success to report: a node either resolves to a position or it
//! doesn't, so a single error value is enough.

use thiserror::Error;

/// Why a telex failed to evaluate against a buffer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A relative telex (one with a top-level prefix) was evaluated with no
    /// origin, or a caller passed an otherwise-illegal argument combination.
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    /// The anchor (string, line, column) named by the expression does not
    /// exist in the buffer.
    #[error("no such position in buffer")]
    NotFound,

    /// A CST node was missing a child its invariants guarantee it has.
    /// Reaching this means a bug in the parser, not bad input.
    #[error("malformed tree: {0}")]
    BadTree(String),

    /// Regex evaluation is not implemented.
    #[error("regex evaluation is not implemented")]
    Unimplemented,
}

pub type Result<T> = std::result::Result<T, EvalError>;
