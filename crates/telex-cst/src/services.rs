//! AST services: pretty-printing, structural combination, and the small
//! decoded-value helpers the evaluator needs (integer values, unescaped
//! string content).
//!
//! There is no explicit `free`: every node here owns its children and its
//! embedded tokens outright (no cycles, no shared ownership), so `Drop`
//! recursively releases a tree exactly the way the source's hand-written
//! `*_free` functions did. `Clone` is likewise derived rather than
//! hand-rolled, since the tree has no non-owning back-references to copy
//! specially.

use thiserror::Error;

use telex_lex::{Token, TokenKind};

use crate::ast::{ColExpr, CompoundExpr, LineExpr, OrExpr, PrimaryExpr, Stringy, StringyKind, Telex};

/// Error produced by [`combine`] when the second operand has no direction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CombineError {
    /// `b` has no prefix, so there is no operator to join `a` and `b` with.
    #[error("second operand of combine must be relative (have a prefix)")]
    UndefinedOp,
}

impl Telex {
    /// Whether this telex's top-level starts with a prefix and therefore
    /// requires an origin to evaluate.
    pub fn is_relative(&self) -> bool {
        self.prefix.is_some()
    }

    /// Exact round-trip serialization: the concatenation of every embedded
    /// token's lexeme in source order. Whitespace between tokens is not part
    /// of the CST, so it is never reproduced.
    pub fn to_string_lossless(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        if let Some(prefix) = &self.prefix {
            out.push_str(&prefix.lexeme_str());
        }
        self.compound.write_into(out);
    }
}

impl CompoundExpr {
    fn write_into(&self, out: &mut String) {
        self.head.write_into(out);
        for (op, or_expr) in &self.rest {
            out.push_str(&op.lexeme_str());
            or_expr.write_into(out);
        }
    }
}

impl OrExpr {
    fn write_into(&self, out: &mut String) {
        self.head.write_into(out);
        for (or_tok, primary) in &self.rest {
            out.push_str(&or_tok.lexeme_str());
            primary.write_into(out);
        }
    }
}

impl PrimaryExpr {
    fn write_into(&self, out: &mut String) {
        match self {
            PrimaryExpr::Stringy(s) => out.push_str(&s.token.lexeme_str()),
            PrimaryExpr::Line(l) => {
                out.push_str(&l.colon.lexeme_str());
                out.push_str(&l.integer.lexeme_str());
            }
            PrimaryExpr::Col(c) => {
                if let Some(pound) = &c.pound {
                    out.push_str(&pound.lexeme_str());
                }
                out.push_str(&c.integer.lexeme_str());
            }
            PrimaryExpr::Nested {
                lparen,
                telex,
                rparen,
            } => {
                // Parens synthesized by `combine` (see below) carry no real
                // source position; they exist to preserve grouping in the
                // structural tree but were never typed by a user, so the
                // printed form omits them for the trivial single-primary
                // case `combine` actually produces.
                let synthetic = lparen.span.line == 0;
                if !synthetic {
                    out.push_str(&lparen.lexeme_str());
                }
                telex.write_into(out);
                if !synthetic {
                    out.push_str(&rparen.lexeme_str());
                }
            }
        }
    }
}

impl Stringy {
    /// The decoded content between the delimiters: for a string literal,
    /// `\` escapes are resolved (the escaped byte is kept, the backslash
    /// dropped); for a regex literal the body is returned verbatim since the
    /// lexer performs no escape processing for it.
    pub fn content(&self) -> Vec<u8> {
        let lexeme = self.token.lexeme();
        // Strip the surrounding delimiters.
        let body = &lexeme[1..lexeme.len() - 1];

        match self.kind {
            StringyKind::Regex => body.to_vec(),
            StringyKind::String => {
                let mut out = Vec::with_capacity(body.len());
                let mut iter = body.iter().copied();
                while let Some(b) = iter.next() {
                    if b == b'\\' {
                        if let Some(escaped) = iter.next() {
                            out.push(escaped);
                        }
                    } else {
                        out.push(b);
                    }
                }
                out
            }
        }
    }
}

impl LineExpr {
    /// The parsed decimal value of the integer token. The lexer only ever
    /// produces digit runs, so this never fails.
    pub fn value(&self) -> i64 {
        parse_digits(self.integer.lexeme())
    }
}

impl ColExpr {
    /// The parsed decimal value of the integer token.
    pub fn value(&self) -> i64 {
        parse_digits(self.integer.lexeme())
    }
}

fn parse_digits(bytes: &[u8]) -> i64 {
    let mut value: i64 = 0;
    for &b in bytes {
        value = value * 10 + i64::from(b - b'0');
    }
    value
}

/// `combine(a, b) -> c`
///
/// Requires `b.prefix` to be set (otherwise there is no operator to join the
/// two telexes with). Clones both operands, strips each one's top-level
/// prefix, grafts `a`'s compound expression and `b`'s compound expression
/// each into a synthetic `(...)`-wrapped primary, and joins them with `b`'s
/// former prefix as the new compound's operator. The result's top-level
/// prefix is `a`'s former prefix.
pub fn combine(a: &Telex, b: &Telex) -> Result<Telex, CombineError> {
    let Some(op) = b.prefix.clone() else {
        return Err(CombineError::UndefinedOp);
    };

    let a = a.clone();
    let b = b.clone();
    let top = a.prefix;

    let wrapped_a = wrap_as_or_expr(a.compound);
    let wrapped_b = wrap_as_or_expr(b.compound);

    Ok(Telex {
        prefix: top,
        compound: CompoundExpr {
            head: wrapped_a,
            rest: vec![(op, wrapped_b)],
        },
    })
}

fn wrap_as_or_expr(compound: CompoundExpr) -> OrExpr {
    let telex = Telex {
        prefix: None,
        compound,
    };
    let primary = PrimaryExpr::Nested {
        lparen: Token::synthetic(TokenKind::LParen, b"("),
        telex: Box::new(telex),
        rparen: Token::synthetic(TokenKind::RParen, b")"),
    };
    OrExpr {
        head: primary,
        rest: Vec::new(),
    }
}
