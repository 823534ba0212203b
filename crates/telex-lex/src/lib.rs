//! telex-lex - byte-oriented lexer for telex expressions.
//!
//! Produces a flat [`Token`] stream from an input buffer. There is no
//! keyword/identifier/number-literal machinery of the kind a general
//! programming-language lexer needs: telex has a handful of punctuation
//! tokens, an integer run, and two quoted-literal forms.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
