//! The table-and-switch scanner that turns an input buffer into a token stream.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use telex_util::{Handler, Span};

/// Scans `source` into a flat token stream.
///
/// On success the stream always ends with an `EOF` token. On an
/// unrecognized byte, a diagnostic is raised on `handler` and an empty
/// vector is returned — the spec treats a lex failure as an all-or-nothing
/// event, so no partial token list is handed back to the parser.
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    handler: &'a Handler,
    line: u32,
    col: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a [u8], handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            line: 1,
            col: 1,
        }
    }

    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let start_pos = self.cursor.position();
            let start_line = self.line;
            let start_col = self.col;

            match self.scan_one(start_pos) {
                Ok((kind, end_pos)) => {
                    let lexeme = self.cursor.slice(start_pos, end_pos).to_vec();
                    let span = Span::new(start_pos, end_pos, start_line, start_col);
                    let is_eof = kind == TokenKind::Eof;
                    let is_newline = kind == TokenKind::Newline;

                    tokens.push(Token::new(kind, lexeme, span));
                    self.cursor.advance_to(end_pos);

                    // The newline token is recorded at its own start column
                    // above; only now do the line/column counters move past it.
                    if is_newline {
                        self.line += 1;
                        self.col = 1;
                    } else {
                        self.col += (end_pos - start_pos) as u32;
                    }

                    if is_eof {
                        break;
                    }
                }
                Err(()) => {
                    let message = match self.cursor.current() {
                        Some(byte) => format!("Could not recognize token: `{}'", byte as char),
                        None => "Could not recognize token".to_string(),
                    };
                    self.handler
                        .error(message, Span::point(start_pos, start_line, start_col));
                    return Vec::new();
                }
            }
        }

        tokens
    }

    fn scan_one(&self, pos: usize) -> Result<(TokenKind, usize), ()> {
        let Some(byte) = self.cursor.current() else {
            return Ok((TokenKind::Eof, pos));
        };

        match byte {
            b'\n' => Ok((TokenKind::Newline, pos + 1)),
            b'\t' => Ok((TokenKind::Tab, pos + 1)),
            b' ' => Ok((TokenKind::Space, pos + 1)),
            b':' => Ok((TokenKind::Colon, pos + 1)),
            b'#' => Ok((TokenKind::Pound, pos + 1)),
            b'(' => Ok((TokenKind::LParen, pos + 1)),
            b')' => Ok((TokenKind::RParen, pos + 1)),
            b'|' => Ok((TokenKind::Or, pos + 1)),
            b'"' => self
                .scan_delimited(pos, b'"', true)
                .map(|end| (TokenKind::String, end)),
            b'\'' => self
                .scan_delimited(pos, b'\'', false)
                .map(|end| (TokenKind::Regex, end)),
            b'<' => Ok(if self.cursor.peek_at(1) == Some(b'<') {
                (TokenKind::DLess, pos + 2)
            } else {
                (TokenKind::Less, pos + 1)
            }),
            b'>' => Ok(if self.cursor.peek_at(1) == Some(b'>') {
                (TokenKind::DGreater, pos + 2)
            } else {
                (TokenKind::Greater, pos + 1)
            }),
            b'0'..=b'9' => {
                let mut end = pos + 1;
                while matches!(self.cursor.peek_at(end - pos), Some(b'0'..=b'9')) {
                    end += 1;
                }
                Ok((TokenKind::Integer, end))
            }
            _ => Err(()),
        }
    }

    /// Scans a `"..."` / `'...'` literal starting at the opening delimiter
    /// `pos`, returning the index just past the closing delimiter.
    ///
    /// `escapes` is true only for STRING: a `\` consumes whatever byte
    /// follows it literally, including the delimiter itself, so `\"` does
    /// not end the string. REGEX has no escaping at all.
    fn scan_delimited(&self, pos: usize, delim: u8, escapes: bool) -> Result<usize, ()> {
        let mut i = pos + 1;
        loop {
            match self.cursor.peek_at(i - pos) {
                None => return Err(()),
                Some(b) if b == delim => return Ok(i + 1),
                Some(b'\\') if escapes => {
                    i += 1;
                    if self.cursor.peek_at(i - pos).is_none() {
                        return Err(());
                    }
                    i += 1;
                }
                Some(_) => i += 1,
            }
        }
    }
}
