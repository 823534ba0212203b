//! The evaluator: walks a [`Telex`] CST against a buffer and an origin,
//! producing a byte offset or an [`EvalError`].
//!
//! Each node function mirrors one grammar production, matching the
//! structure of the lexer/parser split. `absolute` is decided exactly once,
//! at the outermost [`eval_telex`] call, and threaded unchanged through every
//! nested node: it answers "did the whole expression ever receive a
//! direction, from its own top-level prefix or from a caller-supplied
//! inherited one" rather than being re-derived per node, which is what makes
//! scenario 4 of the evaluator test suite (`:2>#3`) land where it does —
//! the `#3` is not itself prefix-less, but the expression as a whole is.

use telex_cst::ast::{ColExpr, CompoundExpr, LineExpr, OrExpr, PrimaryExpr, StringyKind, Telex};

use crate::error::{EvalError, Result};
use crate::prefix::Prefix;

/// Evaluates `telex` against `buf`, starting at `pos` (or the buffer start
/// if `pos` is `None`), using `inherited` as the direction to fall back to
/// when neither `telex` nor any enclosing caller specified one.
///
/// Returns the resolved offset together with the prefix that was actually
/// in effect for the top of this expression, so callers chaining several
/// telexes (see `telex::lookup_multi`) can carry it forward as the next
/// call's `inherited`.
pub fn eval_telex(
    telex: &Telex,
    buf: &[u8],
    pos: Option<usize>,
    inherited: Option<Prefix>,
) -> Result<(usize, Prefix)> {
    if telex.prefix.is_some() && pos.is_none() {
        return Err(EvalError::InvalidArgs(
            "relative telex requires an origin".to_string(),
        ));
    }

    let own = telex.prefix.as_ref().map(Prefix::from_token).transpose()?;
    let absolute = own.is_none() && inherited.is_none();
    let effective = own.or(inherited).unwrap_or(Prefix::Greater);
    let start = pos.unwrap_or(0).min(buf.len());

    let result = eval_compound(&telex.compound, buf, start, effective, absolute)?;
    Ok((result, effective))
}

/// Used for a `'(' telex ')'` nested primary: same rule as the top-level
/// entry point (own prefix overrides, `absolute` is carried from outside)
/// but `pos` is always concrete since evaluation is already underway.
fn eval_nested(telex: &Telex, buf: &[u8], pos: usize, inherited: Prefix, absolute: bool) -> Result<usize> {
    let own = telex.prefix.as_ref().map(Prefix::from_token).transpose()?;
    let effective = own.unwrap_or(inherited);
    eval_compound(&telex.compound, buf, pos, effective, absolute)
}

/// `compound := compound prefix or | or`
///
/// The head uses the prefix inherited from the enclosing telex; each
/// extension in `rest` always carries its own explicit prefix token (the
/// grammar guarantees this), which fully overrides whatever came before.
fn eval_compound(
    expr: &CompoundExpr,
    buf: &[u8],
    pos: usize,
    effective: Prefix,
    absolute: bool,
) -> Result<usize> {
    let mut cur = eval_or(&expr.head, buf, pos, effective, absolute)?;

    for (op, or_expr) in &expr.rest {
        let dir = Prefix::from_token(op)?;
        cur = eval_or(or_expr, buf, cur, dir, absolute)?;
    }

    Ok(cur)
}

/// `or := or '|' primary | primary`
///
/// First-success: try the head, then each alternative in order, returning
/// the first one that resolves. If none do, the error from the last
/// attempt is returned (matching the recursive "prev chain then tail"
/// shape this sequence replaces).
fn eval_or(expr: &OrExpr, buf: &[u8], pos: usize, effective: Prefix, absolute: bool) -> Result<usize> {
    let mut result = eval_primary(&expr.head, buf, pos, effective, absolute);

    for (_, primary) in &expr.rest {
        if result.is_ok() {
            break;
        }
        result = eval_primary(primary, buf, pos, effective, absolute);
    }

    result
}

fn eval_primary(
    expr: &PrimaryExpr,
    buf: &[u8],
    pos: usize,
    effective: Prefix,
    absolute: bool,
) -> Result<usize> {
    match expr {
        PrimaryExpr::Stringy(s) => match s.kind {
            StringyKind::String => eval_string(&s.content(), buf, pos, effective),
            StringyKind::Regex => Err(EvalError::Unimplemented),
        },
        PrimaryExpr::Line(l) => eval_line_expr(l, buf, pos, effective, absolute),
        PrimaryExpr::Col(c) => eval_col_expr(c, buf, pos, effective, absolute),
        PrimaryExpr::Nested { telex, .. } => eval_nested(telex, buf, pos, effective, absolute),
    }
}

/// Forward search finds the first occurrence at or after `pos`; backward
/// search finds the last one at or before `pos`. `>`/`<` land on the match
/// start, `>>` lands just past the match end, `<<` lands just before the
/// match start — the "doubled arrow" convention that makes chained matches
/// composable (`>>"abc">>"def"` steps past both in order).
fn eval_string(needle: &[u8], buf: &[u8], pos: usize, effective: Prefix) -> Result<usize> {
    if needle.is_empty() {
        return Ok(pos);
    }

    let start = if effective.is_backward() {
        rfind_at_or_before(buf, pos, needle)
    } else {
        find_at_or_after(buf, pos, needle)
    };

    let Some(start) = start else {
        return Err(EvalError::NotFound);
    };

    let position = match effective {
        Prefix::Greater | Prefix::Less => start,
        Prefix::DGreater => start + needle.len(),
        Prefix::DLess => start.saturating_sub(1),
    };

    Ok(position)
}

fn find_at_or_after(buf: &[u8], pos: usize, needle: &[u8]) -> Option<usize> {
    if pos > buf.len() || needle.len() > buf.len() {
        return None;
    }
    (pos..=buf.len() - needle.len()).find(|&i| i >= pos && buf[i..i + needle.len()] == *needle)
}

fn rfind_at_or_before(buf: &[u8], pos: usize, needle: &[u8]) -> Option<usize> {
    if needle.len() > buf.len() {
        return None;
    }
    let last_possible = pos.min(buf.len() - needle.len());
    (0..=last_possible).rev().find(|&i| buf[i..i + needle.len()] == *needle)
}

/// `N` newline hops in the effective direction. In absolute mode (neither
/// this telex nor its caller ever supplied a direction) `N` is treated as a
/// 1-based line number and decremented by one first. A doubled arrow adds
/// one more hop, to land past the line boundary rather than on it.
fn eval_line_expr(expr: &LineExpr, buf: &[u8], pos: usize, effective: Prefix, absolute: bool) -> Result<usize> {
    let (mut steps, mut dir) = signed_steps(expr.value(), effective);

    if absolute {
        steps -= 1;
    }
    if effective.doubled() {
        steps += 1;
    }
    if steps < 0 {
        steps = 0;
    }

    let mut cur = pos;
    for _ in 0..steps {
        match find_newline(buf, cur, dir) {
            Some(np) => cur = if dir > 0 { np + 1 } else { np },
            None => {
                return Ok(if dir < 0 { 0 } else { cur });
            }
        }
    }

    if dir < 0 && effective.doubled() {
        cur += 1;
    }

    Ok(cur)
}

fn find_newline(buf: &[u8], pos: usize, dir: i64) -> Option<usize> {
    if dir > 0 {
        buf.get(pos..)?.iter().position(|&b| b == b'\n').map(|i| pos + i)
    } else {
        buf[..pos.min(buf.len())].iter().rposition(|&b| b == b'\n')
    }
}

/// `N` bytes in the effective direction, stopping at a buffer edge or at a
/// newline (forward motion includes the newline itself; backward motion
/// never crosses it). Absolute mode decrements `N` by one, matching
/// `line_expr`'s 1-based addressing convention.
fn eval_col_expr(expr: &ColExpr, buf: &[u8], pos: usize, effective: Prefix, absolute: bool) -> Result<usize> {
    let (mut steps, dir) = signed_steps(expr.value(), effective);

    if absolute {
        steps -= 1;
    }
    if steps < 0 {
        steps = 0;
    }

    let mut cur = pos as i64;
    let len = buf.len() as i64;

    for _ in 0..steps {
        let next = cur + dir;
        let in_bounds = next >= 0 && next <= len;
        let is_newline = in_bounds && (next as usize) < buf.len() && buf[next as usize] == b'\n';

        if !in_bounds || is_newline {
            if is_newline && dir > 0 {
                cur = next;
            }
            break;
        }

        cur = next;
    }

    Ok(cur as usize)
}

/// Shared by `line_expr`/`col_expr`: a negative integer value flips the
/// effective direction and takes its magnitude as the step count.
fn signed_steps(value: i64, effective: Prefix) -> (i64, i64) {
    let mut dir = effective.direction();
    let mut steps = value;
    if steps < 0 {
        dir = -dir;
        steps = -steps;
    }
    (steps, dir)
}
