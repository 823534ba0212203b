//! CST node definitions.
//!
//! The grammar's left recursion (`compound := compound prefix or`, `or :=
//! or '|' primary`) is represented as an explicit ordered sequence rather
//! than a recursive `prev` link: a leading element plus a `Vec` of
//! `(operator, element)` extensions. This is semantically identical to the
//! recursive shape — the leading element is the innermost/leftmost operand,
//! each entry in `rest` is one right-extension in source order — but avoids
//! recursion depth proportional to input length when cloning, dropping, or
//! printing a long chain.

use telex_lex::Token;

/// `telex := prefix? compound`
///
/// The top-level node. A telex with no `prefix` is absolute; one with a
/// `prefix` is relative and needs a caller-supplied origin to evaluate.
#[derive(Debug, Clone)]
pub struct Telex {
    /// Leading direction token, if any.
    pub prefix: Option<Token>,
    pub compound: CompoundExpr,
}

/// `compound := compound prefix or | or`
///
/// `head` is the leftmost `or` in the chain; `rest` holds each subsequent
/// `prefix or` extension in left-to-right source order.
#[derive(Debug, Clone)]
pub struct CompoundExpr {
    pub head: OrExpr,
    pub rest: Vec<(Token, OrExpr)>,
}

/// `or := or '|' primary | primary`
///
/// `head` is the leftmost primary; `rest` holds each subsequent `'|'
/// primary` extension in left-to-right source order.
#[derive(Debug, Clone)]
pub struct OrExpr {
    pub head: PrimaryExpr,
    pub rest: Vec<(Token, PrimaryExpr)>,
}

/// `primary := stringy | line_expr | col_expr | '(' telex ')'`
///
/// A tagged union rather than a struct of mutually-exclusive optional
/// fields, since exactly one alternative is ever present.
#[derive(Debug, Clone)]
pub enum PrimaryExpr {
    Stringy(Stringy),
    Line(LineExpr),
    Col(ColExpr),
    /// A fully parenthesized sub-telex: `'(' telex ')'`.
    Nested {
        lparen: Token,
        telex: Box<Telex>,
        rparen: Token,
    },
}

/// `stringy := STRING | REGEX`
///
/// Dispatches on the token's kind at construction time rather than at every
/// use site.
#[derive(Debug, Clone)]
pub struct Stringy {
    pub kind: StringyKind,
    pub token: Token,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringyKind {
    String,
    Regex,
}

/// `line_expr := ':' INTEGER`
#[derive(Debug, Clone)]
pub struct LineExpr {
    pub colon: Token,
    pub integer: Token,
}

/// `col_expr := '#'? INTEGER`
#[derive(Debug, Clone)]
pub struct ColExpr {
    pub pound: Option<Token>,
    pub integer: Token,
}
