//! Property and scenario tests for the public façade, drawn directly from
//! the quantified invariants and concrete scenarios this crate is expected
//! to satisfy: round-trip serialization, clone equivalence, alternation
//! monotonicity, composition direction-inheritance, absolute-vs-relative
//! addressing, and reverse-lookup round-tripping.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use telex::{combine, is_relative, lookup, lookup_multi, parse, reverse_lookup, to_string};

/// A small closed set of literal needles, kept short so generated buffers
/// plausibly contain them.
const WORDS: [&str; 6] = ["foo", "bar", "baz", "qux", "a", "hello"];

#[derive(Clone, Debug)]
struct Word(&'static str);

impl Arbitrary for Word {
    fn arbitrary(g: &mut Gen) -> Self {
        Word(*g.choose(&WORDS).unwrap())
    }
}

#[quickcheck]
fn round_trip_is_idempotent(a: Word, b: Word) -> bool {
    let src = format!(r#">"{}"|"{}""#, a.0, b.0);
    let Ok(telex) = parse(&src) else { return true };
    to_string(&telex) == src
}

#[quickcheck]
fn clone_equivalence(a: Word) -> bool {
    let src = format!(r#">"{}""#, a.0);
    let Ok(telex) = parse(&src) else { return true };
    let cloned = telex::clone(&telex);
    to_string(&cloned) == to_string(&telex)
}

#[quickcheck]
fn alternation_monotonicity(needle: Word, filler: Word) -> bool {
    let buf = format!("___{}___", needle.0);
    let buf = buf.as_bytes();

    let p = match parse(&format!(r#">"{}""#, needle.0)) {
        Ok(p) => p,
        Err(_) => return true,
    };
    let Ok(x) = lookup(&p, buf, 0) else { return true };

    let extended_src = format!(r#">"{}"|"{}""#, needle.0, filler.0);
    let Ok(extended) = parse(&extended_src) else { return true };
    lookup(&extended, buf, 0) == Ok(x)
}

#[test]
fn composition_direction_inheritance() {
    // `>"a">"b"`: the second extension repeats the leading `>`, i.e. it
    // inherits the same forward direction the whole expression started with.
    let telex = parse(r#">"a">"b""#).unwrap();
    assert_eq!(lookup(&telex, b"xaxb", 0), Ok(3));
}

#[test]
fn absolute_vs_relative_line_addressing() {
    let buf = b"line1\nline2";
    let line1 = parse(":1").unwrap();
    let line2 = parse(":2").unwrap();
    assert_eq!(lookup(&line1, buf, 0), Ok(0));
    assert_eq!(lookup(&line2, buf, 0), Ok(6));
}

#[test]
fn reverse_round_trip_every_offset() {
    let buf: &[u8] = b"abc\ndefgh\nij";
    for offset in 0..=buf.len() {
        let telex = reverse_lookup(buf, offset).unwrap();
        assert_eq!(lookup(&telex, buf, 0), Ok(offset));
    }
}

#[test]
fn scenario_combine_then_lookup() {
    let a = parse(":1").unwrap();
    let b = parse(r#">"world""#).unwrap();
    let combined = combine(&a, &b).unwrap();
    assert_eq!(to_string(&combined), r#":1>"world""#);
    assert_eq!(lookup(&combined, b"hello world", 0), Ok(6));
}

#[test]
fn is_relative_distinguishes_absolute_and_relative_top_level() {
    assert!(!is_relative(&parse(":1>#2").unwrap()));
    assert!(is_relative(&parse(r#">"x""#).unwrap()));
}

#[test]
fn lookup_multi_matches_sequential_single_lookups() {
    let buf = b"alpha beta gamma";
    let steps = [parse(r#">"beta""#).unwrap(), parse(r#">"gamma""#).unwrap()];

    let chained = lookup_multi(buf, 0, &steps).unwrap();

    let first = lookup(&steps[0], buf, 0).unwrap();
    let second = lookup(&steps[1], buf, first).unwrap();

    assert_eq!(chained, second);
}
