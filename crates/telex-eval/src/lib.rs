//! telex-eval - interprets a telex CST against a buffer and an origin.
//!
//! This crate is a pure function library: no I/O, no shared state across
//! calls. [`eval_telex`] is the only entry point a caller needs; the rest of
//! the module tree is one function per grammar production, mirroring
//! `telex-parse`'s structure on the production side.

mod error;
mod eval;
mod prefix;

pub use error::{EvalError, Result};
pub use eval::eval_telex;
pub use prefix::Prefix;

#[cfg(test)]
mod tests {
    use super::*;
    use telex_parse::parse;

    fn parse_ok(src: &str) -> telex_cst::Telex {
        let (telex, errors) = parse(src);
        assert!(errors.is_empty(), "unexpected parse errors for {src:?}: {errors:?}");
        telex.unwrap()
    }

    fn eval(src: &str, buf: &[u8], origin: Option<usize>) -> Result<usize> {
        let telex = parse_ok(src);
        eval_telex(&telex, buf, origin, None).map(|(pos, _)| pos)
    }

    #[test]
    fn scenario_1_forward_string_match() {
        assert_eq!(eval(r#">"world""#, b"hello world", Some(0)), Ok(6));
    }

    #[test]
    fn scenario_2_doubled_forward_lands_past_match() {
        assert_eq!(eval(r#">>"hello""#, b"hello world", Some(0)), Ok(5));
    }

    #[test]
    fn scenario_3_absolute_line_motion() {
        assert_eq!(eval(":2", b"line1\nline2\nline3", Some(0)), Ok(6));
    }

    #[test]
    fn scenario_4_line_then_column() {
        assert_eq!(eval(":2>#3", b"abc\ndefgh\n", Some(0)), Ok(6));
    }

    #[test]
    fn scenario_5_alternation_first_branch_found() {
        assert_eq!(eval(r#">"foo"|"bar""#, b"qux bar foo", Some(0)), Ok(8));
    }

    #[test]
    fn scenario_6_alternation_falls_back() {
        assert_eq!(eval(r#">"foo"|"bar""#, b"qux bar baz", Some(0)), Ok(4));
    }

    #[test]
    fn backward_string_match_lands_at_match_start() {
        // last "o" before position 11 (end) in "foo boo foo" starting the search at 8
        assert_eq!(eval(r#"<"foo""#, b"foo boo foo", Some(10)), Ok(8));
    }

    #[test]
    fn doubled_backward_lands_before_match_start() {
        assert_eq!(eval(r#"<<"world""#, b"hello world", Some(10)), Ok(5));
    }

    #[test]
    fn string_not_found_is_an_error() {
        assert_eq!(eval(r#">"xyz""#, b"hello world", Some(0)), Err(EvalError::NotFound));
    }

    #[test]
    fn regex_is_unimplemented() {
        assert_eq!(eval("'world'", b"hello world", Some(0)), Err(EvalError::Unimplemented));
    }

    #[test]
    fn relative_telex_without_origin_is_invalid() {
        assert!(matches!(eval(r#">"world""#, b"hello world", None), Err(EvalError::InvalidArgs(_))));
    }

    #[test]
    fn line_motion_clamps_at_buffer_edge() {
        // only one line exists; asking for line 5 clamps to the buffer end.
        assert_eq!(eval(":5", b"one line, no newline", Some(0)), Ok(21));
    }

    #[test]
    fn column_motion_stops_before_newline() {
        assert_eq!(eval(">#999", b"abc\ndef", Some(0)), Ok(3));
    }

    #[test]
    fn composition_threads_position_through_chain() {
        assert_eq!(eval(r#">>"hello">>" ""#, b"hello world", Some(0)), Ok(6));
    }

    #[test]
    fn nested_parenthesized_telex_overrides_direction() {
        assert_eq!(eval(r#">(<"hello")"#, b"hello world hello", Some(11)), Ok(12));
    }
}
