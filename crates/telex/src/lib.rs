//! telex - parser and evaluator for telex expressions.
//!
//! A telex denotes a point (a byte offset) within a buffer, expressed as a
//! composition of movements: find a literal substring, advance or retreat by
//! N lines, advance or retreat by N columns, alternate between candidates,
//! and chain such movements left-to-right. This crate is the public façade
//! over `telex-lex` + `telex-cst` + `telex-parse` + `telex-eval`, matching
//! the original C library's `telex_parse`/`telex_lookup`/`telex_combine`
//! surface but with a `Result`-shaped error taxonomy instead of an
//! out-parameter and a sentinel return code.
//!
//! ```
//! use telex::{parse, lookup};
//!
//! let t = parse(r#">"world""#).unwrap();
//! let pos = lookup(&t, b"hello world", 0).unwrap();
//! assert_eq!(pos, 6);
//! ```

mod error;

pub use error::{Error, SyntaxError};
pub use telex_cst::Telex;

/// Parses `input` into a telex expression.
///
/// A non-empty diagnostic list from the lexer or parser is always surfaced
/// as [`Error::BadSyntax`], even if a partial tree could be constructed —
/// per the spec, a recovered partial parse is still a failed one.
pub fn parse(input: &str) -> Result<Telex, Error> {
    let (telex, diagnostics) = telex_parse::parse(input);

    if !diagnostics.is_empty() {
        return Err(Error::from_diagnostics(diagnostics));
    }

    telex.ok_or_else(|| Error::BadTree("parser produced no tree and no diagnostics".to_string()))
}

/// Evaluates `telex` against `buf`, starting from `origin`.
pub fn lookup(telex: &Telex, buf: &[u8], origin: usize) -> Result<usize, Error> {
    telex_eval::eval_telex(telex, buf, Some(origin), None)
        .map(|(pos, _)| pos)
        .map_err(Error::from)
}

/// Evaluates each telex in `telexes` left to right, feeding the result of
/// one as the origin of the next. The inherited direction is sticky: it is
/// whichever telex in the chain most recently carried an explicit prefix.
pub fn lookup_multi(buf: &[u8], origin: usize, telexes: &[Telex]) -> Result<usize, Error> {
    let mut pos = origin;
    let mut inherited = None;

    for telex in telexes {
        let (next_pos, effective) = telex_eval::eval_telex(telex, buf, Some(pos), inherited)?;
        pos = next_pos;
        // Only a telex that carries its own prefix updates the sticky value;
        // a prefix-less telex defaults to `effective` for its own evaluation
        // (or absolute addressing) without overriding what later telexes
        // inherit.
        if telex.prefix.is_some() {
            inherited = Some(effective);
        }
    }

    Ok(pos)
}

/// Computes the telex `":line>#col"` that addresses `pos` in `buf`, using
/// 1-based line/column counting identical to absolute `line_expr`/`col_expr`
/// evaluation. Useful for round-tripping a concrete offset back into an
/// addressable expression.
pub fn reverse_lookup(buf: &[u8], pos: usize) -> Result<Telex, Error> {
    let pos = pos.min(buf.len());
    let preceding = &buf[..pos];
    let line = 1 + preceding.iter().filter(|&&b| b == b'\n').count() as u32;
    let col = match preceding.iter().rposition(|&b| b == b'\n') {
        Some(newline) => (pos - newline) as u32,
        None => pos as u32 + 1,
    };

    parse(&format!(":{line}>#{col}"))
}

/// Structurally combines `a` and `b` into `a` followed by `b`'s own prefix
/// operator joining the two, as described in §4.4. Fails if `b` has no
/// prefix of its own, since there would be no operator to join with.
pub fn combine(a: &Telex, b: &Telex) -> Result<Telex, Error> {
    telex_cst::combine(a, b).map_err(Error::from)
}

/// Deep-clones a telex. A plain `Clone::clone` call: every node in the CST
/// owns its children and its tokens outright, so a derived `Clone` already
/// performs the deep copy the spec calls for.
pub fn clone(telex: &Telex) -> Telex {
    telex.clone()
}

/// Exact round-trip serialization of `telex` back to source text (modulo
/// insignificant whitespace, which the CST never stores).
pub fn to_string(telex: &Telex) -> String {
    telex.to_string_lossless()
}

/// Whether `telex`'s top level carries a prefix and therefore requires an
/// origin to evaluate.
pub fn is_relative(telex: &Telex) -> bool {
    telex.is_relative()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_1_forward_string_match() {
        let t = parse(r#">"world""#).unwrap();
        assert_eq!(lookup(&t, b"hello world", 0), Ok(6));
    }

    #[test]
    fn scenario_7_unrecognized_byte_reports_line_and_column() {
        let err = parse("\u{00AB}").unwrap_err();
        match err {
            Error::BadSyntax(chain) => {
                assert_eq!(chain.line(), 1);
                assert_eq!(chain.column(), 1);
                assert!(chain.message().contains("Could not recognize token"));
                assert!(chain.next().is_none());
            }
            other => panic!("expected BadSyntax, got {other:?}"),
        }
    }

    #[test]
    fn scenario_8_combine_undefined_and_defined() {
        let line1 = parse(":1").unwrap();
        let line2 = parse(":2").unwrap();
        assert!(matches!(combine(&line1, &line2), Err(Error::UndefinedOp)));

        let forward_x = parse(r#">"x""#).unwrap();
        let combined = combine(&line1, &forward_x).unwrap();
        assert_eq!(to_string(&combined), r#":1>"x""#);
    }

    #[test]
    fn lookup_multi_chains_origin_and_sticky_prefix() {
        let buf = b"hello world";
        let first = parse(r#">"hello""#).unwrap();
        let second = parse(r#"#1"#).unwrap(); // no prefix: inherits `>` from `first`
        let pos = lookup_multi(buf, 0, &[first, second]).unwrap();
        // `>"hello"` lands at 0 (match start), then `#1` steps one byte
        // forward (inherited direction), landing on 'e'.
        assert_eq!(pos, 1);
    }

    #[test]
    fn lookup_multi_keeps_absolute_addressing_across_prefix_less_telexes() {
        // Neither `:1` nor `:2` carries a prefix, so each must be evaluated
        // in absolute mode independently — `:2` is not allowed to inherit a
        // direction merely because `:1` was evaluated first.
        let buf = b"line1\nline2\nline3";
        let first = parse(":1").unwrap();
        let second = parse(":2").unwrap();
        let pos = lookup_multi(buf, 0, &[first, second]).unwrap();
        assert_eq!(pos, lookup(&parse(":2").unwrap(), buf, 0).unwrap());
    }

    #[test]
    fn reverse_lookup_round_trips_every_offset() {
        let buf: &[u8] = b"line1\nline2\nline3";
        for offset in 0..=buf.len() {
            let telex = reverse_lookup(buf, offset).unwrap();
            assert_eq!(lookup(&telex, buf, 0), Ok(offset), "offset {offset}");
        }
    }

    #[test]
    fn clone_equivalence() {
        let t = parse(r#">"foo"|"bar""#).unwrap();
        let cloned = clone(&t);
        assert_eq!(to_string(&cloned), to_string(&t));
    }

    #[test]
    fn is_relative_reflects_top_level_prefix() {
        assert!(!is_relative(&parse(":1").unwrap()));
        assert!(is_relative(&parse(r#">"x""#).unwrap()));
    }
}
