//! telex-parse - recursive-descent parser for telex expressions.
//!
//! Turns source text into a [`telex_cst::Telex`] CST plus a list of
//! diagnostics. Lexer errors are surfaced the same way parser errors are:
//! a non-empty diagnostic list means the parse failed, even if a partial
//! tree was produced (see [`parse`]).

pub mod parser;

use telex_cst::Telex;
use telex_lex::Lexer;
use telex_util::{Diagnostic, Handler};

pub use parser::Parser;

/// Parses `input` into a telex CST.
///
/// The returned `Option` reflects whether a tree could be *constructed* at
/// all; callers must still treat any non-empty `errors` list as failure,
/// per the contract: a syntactically recovered partial tree is not a
/// successful parse.
pub fn parse(input: &str) -> (Option<Telex>, Vec<Diagnostic>) {
    let handler = Handler::new();
    let tokens = Lexer::new(input.as_bytes(), &handler).tokenize();

    if handler.has_errors() {
        return (None, handler.into_diagnostics());
    }

    let telex = Parser::new(tokens, &handler).parse_telex_top();
    (telex, handler.into_diagnostics())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(input: &str) -> Telex {
        let (telex, errors) = parse(input);
        assert!(errors.is_empty(), "unexpected errors parsing {input:?}: {errors:?}");
        telex.unwrap_or_else(|| panic!("expected a tree for {input:?}"))
    }

    fn fails(input: &str) {
        let (_, errors) = parse(input);
        assert!(!errors.is_empty(), "expected a parse failure for {input:?}");
    }

    #[test]
    fn parses_bare_string() {
        let telex = ok(r#""world""#);
        assert!(!telex.is_relative());
        assert_eq!(telex.to_string_lossless(), r#""world""#);
    }

    #[test]
    fn parses_forward_prefix_string() {
        let telex = ok(r#">"world""#);
        assert!(telex.is_relative());
        assert_eq!(telex.to_string_lossless(), r#">"world""#);
    }

    #[test]
    fn parses_line_and_col() {
        let telex = ok(":2>#3");
        assert_eq!(telex.to_string_lossless(), ":2>#3");
    }

    #[test]
    fn parses_alternation() {
        let telex = ok(r#">"foo"|"bar""#);
        assert_eq!(telex.to_string_lossless(), r#">"foo"|"bar""#);
    }

    #[test]
    fn parses_nested_parens() {
        let telex = ok(r#">("foo"|"bar")"#);
        assert_eq!(telex.to_string_lossless(), r#">("foo"|"bar")"#);
    }

    #[test]
    fn whitespace_between_tokens_is_insignificant() {
        let telex = ok(" > \"foo\" \n | \t \"bar\" ");
        assert_eq!(telex.to_string_lossless(), r#">"foo"|"bar""#);
    }

    #[test]
    fn composition_chain_inherits_direction() {
        let telex = ok(r#">"a">"b""#);
        assert_eq!(telex.compound.rest.len(), 1);
        assert_eq!(telex.compound.rest[0].0.kind, telex_lex::TokenKind::Greater);
    }

    #[test]
    fn unrecognized_byte_is_a_lex_failure() {
        let (telex, errors) = parse("\u{00AB}");
        assert!(telex.is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span.line, 1);
        assert_eq!(errors[0].span.column, 1);
        assert!(errors[0].message.contains("Could not recognize token"));
    }

    #[test]
    fn missing_integer_after_colon_is_a_parse_failure() {
        fails(":");
    }

    #[test]
    fn dangling_or_is_a_parse_failure() {
        fails(r#""a"|"#);
    }

    #[test]
    fn unclosed_paren_is_a_parse_failure() {
        fails(r#">("a""#);
    }

    #[test]
    fn trailing_garbage_after_telex_is_a_parse_failure() {
        fails(r#":1)"#);
    }
}
