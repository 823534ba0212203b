//! The four direction tokens, lifted out of [`telex_lex::TokenKind`] into a
//! small closed type the evaluator can match on without re-deriving meaning
//! from a general-purpose token kind every time.

use telex_lex::{Token, TokenKind};

use crate::error::EvalError;

/// A direction/inclusiveness prefix: `<`, `<<`, `>`, or `>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    Less,
    DLess,
    Greater,
    DGreater,
}

impl Prefix {
    /// `+1` for a forward prefix, `-1` for a backward one.
    pub fn direction(self) -> i64 {
        match self {
            Prefix::Less | Prefix::DLess => -1,
            Prefix::Greater | Prefix::DGreater => 1,
        }
    }

    /// Whether this is a "doubled" arrow (`<<`/`>>`), which lands past the
    /// matched boundary rather than at its start.
    pub fn doubled(self) -> bool {
        matches!(self, Prefix::DLess | Prefix::DGreater)
    }

    pub fn is_backward(self) -> bool {
        matches!(self, Prefix::Less | Prefix::DLess)
    }

    pub fn from_token(token: &Token) -> Result<Self, EvalError> {
        match token.kind {
            TokenKind::Less => Ok(Prefix::Less),
            TokenKind::DLess => Ok(Prefix::DLess),
            TokenKind::Greater => Ok(Prefix::Greater),
            TokenKind::DGreater => Ok(Prefix::DGreater),
            _ => Err(EvalError::BadTree(format!(
                "expected a prefix token, found {}",
                token.kind
            ))),
        }
    }
}
