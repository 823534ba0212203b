//! telex-cst - concrete syntax tree for telex expressions.
//!
//! The grammar's left recursion (`compound := compound prefix or`, `or :=
//! or '|' primary`) is modeled as an explicit ordered sequence — a leading
//! element plus a `Vec` of `(operator, element)` extensions — rather than a
//! recursive "previous node" link. Semantically the two shapes are
//! identical; the sequence form just avoids recursion depth proportional to
//! chain length when cloning, dropping, or printing.
//!
//! No node here is ever mutated after construction; `telex-parse` builds
//! them bottom-up and `telex-eval` only reads them.

pub mod ast;
pub mod services;

pub use ast::{ColExpr, CompoundExpr, LineExpr, OrExpr, PrimaryExpr, Stringy, StringyKind, Telex};
pub use services::{combine, CombineError};
