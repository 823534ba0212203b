//! Recursive-descent parser: one function per grammar production.
//!
//! Whitespace (`NEWLINE`, `SPACE`, `TAB`) is never consumed by a production
//! function directly; [`Parser::peek_relevant`] and [`Parser::eat`] skip
//! over it transparently so every production can pretend the token stream
//! holds only significant tokens. The two left-recursive productions
//! (`compound` and `or`) are parsed iteratively: build the leading element,
//! then keep extending while the next relevant token is a continuation
//! operator.

use telex_cst::ast::{ColExpr, CompoundExpr, LineExpr, OrExpr, PrimaryExpr, Stringy, StringyKind, Telex};
use telex_lex::{Token, TokenKind};
use telex_util::Handler;

const PREFIX_KINDS: [TokenKind; 4] = [
    TokenKind::Less,
    TokenKind::DLess,
    TokenKind::Greater,
    TokenKind::DGreater,
];

/// Recursive-descent parser over a finished token stream.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    position: usize,
    handler: &'a Handler,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, handler: &'a Handler) -> Self {
        Self {
            tokens,
            position: 0,
            handler,
        }
    }

    /// Parses a complete `telex`, then checks that no significant tokens
    /// remain — a top-level parse must consume the whole input.
    pub fn parse_telex_top(&mut self) -> Option<Telex> {
        let telex = self.parse_telex();

        if !self.have(&[TokenKind::Eof]) {
            let tok = self.peek_relevant().clone();
            self.error_expected("end of input", &tok);
        }

        telex
    }

    // ------------------------------------------------------------------
    // Token-stream helpers
    // ------------------------------------------------------------------

    /// Index of the next token that is not whitespace, without consuming
    /// anything.
    fn relevant_index(&self) -> usize {
        let mut idx = self.position;
        while let Some(tok) = self.tokens.get(idx) {
            if tok.kind.is_whitespace() {
                idx += 1;
            } else {
                break;
            }
        }
        idx
    }

    /// The next relevant token, or the trailing `EOF` token if the stream is
    /// exhausted. Does not advance the parser.
    fn peek_relevant(&self) -> &Token {
        let idx = self.relevant_index();
        self.tokens
            .get(idx)
            .or_else(|| self.tokens.last())
            .expect("token stream always ends with EOF")
    }

    /// Whether the next relevant token's kind is in `kinds` (or `kinds`
    /// contains [`TokenKind::Any`]). Makes no state change.
    fn have(&self, kinds: &[TokenKind]) -> bool {
        let kind = self.peek_relevant().kind;
        kinds.contains(&TokenKind::Any) || kinds.contains(&kind)
    }

    /// Advances past the next relevant token and returns it, iff its kind is
    /// in `kinds`. Leaves the parser untouched on mismatch.
    fn eat(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let idx = self.relevant_index();
        let tok = self.tokens.get(idx)?;

        if kinds.contains(&TokenKind::Any) || kinds.contains(&tok.kind) {
            let tok = tok.clone();
            self.position = idx + 1;
            Some(tok)
        } else {
            None
        }
    }

    /// Like [`Parser::eat`], but records an "Expected ... but found ..."
    /// diagnostic on mismatch.
    fn eat_or_error(&mut self, kinds: &[TokenKind], what: &str) -> Option<Token> {
        match self.eat(kinds) {
            Some(tok) => Some(tok),
            None => {
                let tok = self.peek_relevant().clone();
                self.error_expected(what, &tok);
                None
            }
        }
    }

    fn error_expected(&self, what: &str, found: &Token) {
        self.handler.error(
            format!("Expected {} but found '{}'", what, found.lexeme_str()),
            found.span,
        );
    }

    // ------------------------------------------------------------------
    // Grammar productions
    // ------------------------------------------------------------------

    /// `telex := prefix? compound`
    fn parse_telex(&mut self) -> Option<Telex> {
        let prefix = self.eat(&PREFIX_KINDS);
        let compound = self.parse_compound_expr()?;
        Some(Telex { prefix, compound })
    }

    /// `compound := compound prefix or | or` (parsed iteratively)
    fn parse_compound_expr(&mut self) -> Option<CompoundExpr> {
        let head = self.parse_or_expr()?;
        let mut rest = Vec::new();

        while self.have(&PREFIX_KINDS) {
            let prefix = self.eat(&PREFIX_KINDS).expect("checked by have");
            let or_expr = self.parse_or_expr()?;
            rest.push((prefix, or_expr));
        }

        Some(CompoundExpr { head, rest })
    }

    /// `or := or '|' primary | primary` (parsed iteratively)
    fn parse_or_expr(&mut self) -> Option<OrExpr> {
        let head = self.parse_primary_expr()?;
        let mut rest = Vec::new();

        while let Some(or_tok) = self.eat(&[TokenKind::Or]) {
            let primary = self.parse_primary_expr()?;
            rest.push((or_tok, primary));
        }

        Some(OrExpr { head, rest })
    }

    /// `primary := stringy | line_expr | col_expr | '(' telex ')'`
    fn parse_primary_expr(&mut self) -> Option<PrimaryExpr> {
        if self.have(&[TokenKind::String, TokenKind::Regex]) {
            self.parse_stringy().map(PrimaryExpr::Stringy)
        } else if self.have(&[TokenKind::Colon]) {
            self.parse_line_expr().map(PrimaryExpr::Line)
        } else if self.have(&[TokenKind::Pound, TokenKind::Integer]) {
            self.parse_col_expr().map(PrimaryExpr::Col)
        } else if self.have(&[TokenKind::LParen]) {
            let lparen = self.eat(&[TokenKind::LParen]).expect("checked by have");
            let telex = self.parse_telex()?;
            let rparen = self.eat_or_error(&[TokenKind::RParen], "')'")?;
            Some(PrimaryExpr::Nested {
                lparen,
                telex: Box::new(telex),
                rparen,
            })
        } else {
            let tok = self.peek_relevant().clone();
            self.error_expected("string, regex, line, column, or parenthesized expression", &tok);
            None
        }
    }

    /// `stringy := STRING | REGEX`
    fn parse_stringy(&mut self) -> Option<Stringy> {
        let token = self.eat_or_error(&[TokenKind::String, TokenKind::Regex], "string or regex")?;
        let kind = if token.kind == TokenKind::String {
            StringyKind::String
        } else {
            StringyKind::Regex
        };
        Some(Stringy { kind, token })
    }

    /// `line_expr := ':' INTEGER`
    fn parse_line_expr(&mut self) -> Option<LineExpr> {
        let colon = self.eat_or_error(&[TokenKind::Colon], "colon")?;
        let integer = self.eat_or_error(&[TokenKind::Integer], "integer")?;
        Some(LineExpr { colon, integer })
    }

    /// `col_expr := '#'? INTEGER`
    fn parse_col_expr(&mut self) -> Option<ColExpr> {
        let pound = self.eat(&[TokenKind::Pound]);
        let integer = self.eat_or_error(&[TokenKind::Integer], "integer")?;
        Some(ColExpr { pound, integer })
    }
}
