//! Token kinds and the owned [`Token`] type produced by the lexer.

use std::fmt;
use telex_util::Span;

/// The kind of a lexical token.
///
/// `Any` is a pseudo-kind: it never appears on a real token, but the parser's
/// `have`/`eat` helpers accept it as a wildcard meaning "any kind matches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Invalid,
    Newline,
    Space,
    Tab,
    String,
    Regex,
    Integer,
    LParen,
    RParen,
    Less,
    DLess,
    Greater,
    DGreater,
    Colon,
    Pound,
    Or,
    Eof,
    Any,
}

impl TokenKind {
    /// Whitespace kinds are insignificant and skipped by the parser.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Space | TokenKind::Tab)
    }

    pub fn is_prefix(self) -> bool {
        matches!(
            self,
            TokenKind::Less | TokenKind::DLess | TokenKind::Greater | TokenKind::DGreater
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Invalid => "invalid token",
            TokenKind::Newline => "newline",
            TokenKind::Space => "space",
            TokenKind::Tab => "tab",
            TokenKind::String => "string",
            TokenKind::Regex => "regex",
            TokenKind::Integer => "integer",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Less => "'<'",
            TokenKind::DLess => "'<<'",
            TokenKind::Greater => "'>'",
            TokenKind::DGreater => "'>>'",
            TokenKind::Colon => "':'",
            TokenKind::Pound => "'#'",
            TokenKind::Or => "'|'",
            TokenKind::Eof => "end of input",
            TokenKind::Any => "any token",
        };
        f.write_str(name)
    }
}

/// A single lexical token: its kind, its owned source bytes, and the span
/// in the original input it was scanned from.
///
/// The lexeme for `STRING`/`REGEX` tokens includes the surrounding
/// delimiters, so that [`Token::lexeme_str`] is exactly what `to_string`
/// should re-emit for a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    lexeme: Vec<u8>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: Vec<u8>, span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// A synthetic token with no real source position, used by `combine` to
    /// manufacture the parentheses that wrap a grafted subtree.
    pub fn synthetic(kind: TokenKind, lexeme: &[u8]) -> Self {
        Self {
            kind,
            lexeme: lexeme.to_vec(),
            span: Span::DUMMY,
        }
    }

    pub fn lexeme(&self) -> &[u8] {
        &self.lexeme
    }

    pub fn lexeme_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.lexeme)
    }

    pub fn line(&self) -> u32 {
        self.span.line
    }

    pub fn col(&self) -> u32 {
        self.span.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme_str())
    }
}
