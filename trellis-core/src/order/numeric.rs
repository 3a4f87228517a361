//! Numeric-magnitude comparison across heterogeneous representations.
//!
//! A traversal can hand the same logical quantity to a comparator as an
//! `i64`, a `BigInt`, or an `f64`. Magnitude comparison promotes only as
//! wide as the specific pair requires and never round-trips an integer
//! through `f64`, so values near and beyond 2^53 rank by true mathematical
//! value. NaN ranks greatest as a deterministic tiebreak; callers must not
//! assume a total order holds when NaN operands are present.

use std::cmp::Ordering;

use num_bigint::BigInt;
use num_traits::FromPrimitive;
use ordered_float::OrderedFloat;
use trellis_model::Value;

/// 2^63 — the first float at or above which every `i64` compares less.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Borrowed numeric view over a [`Value`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum Num<'a> {
    Int(i64),
    Big(&'a BigInt),
    Float(f64),
}

/// View a value through its numeric representation, if it has one.
pub(crate) fn as_num(value: &Value) -> Option<Num<'_>> {
    match value {
        Value::Int(v) => Some(Num::Int(*v)),
        Value::Big(v) => Some(Num::Big(v)),
        Value::Float(v) => Some(Num::Float(*v)),
        _ => None,
    }
}

/// Compare two numeric operands by mathematical value.
pub(crate) fn cmp_magnitude(first: Num<'_>, second: Num<'_>) -> Ordering {
    match (first, second) {
        (Num::Int(a), Num::Int(b)) => a.cmp(&b),
        (Num::Big(a), Num::Big(b)) => a.cmp(b),
        (Num::Int(a), Num::Big(b)) => BigInt::from(a).cmp(b),
        (Num::Big(a), Num::Int(b)) => a.cmp(&BigInt::from(b)),
        (Num::Float(a), Num::Float(b)) => cmp_floats(a, b),
        (Num::Int(a), Num::Float(b)) => cmp_int_float(a, b),
        (Num::Float(a), Num::Int(b)) => cmp_int_float(b, a).reverse(),
        (Num::Big(a), Num::Float(b)) => cmp_big_float(a, b),
        (Num::Float(a), Num::Big(b)) => cmp_big_float(b, a).reverse(),
    }
}

/// IEEE ordering with the NaN-greatest tiebreak; `-0.0` and `0.0` are
/// mathematically equal.
pub(crate) fn cmp_floats(a: f64, b: f64) -> Ordering {
    OrderedFloat(a).cmp(&OrderedFloat(b))
}

/// Exact `i64` vs `f64` comparison.
///
/// The integer is never cast to `f64`. After screening NaN, infinities and
/// the 2^63 range bound, the float's truncated integral part fits `i64`
/// exactly; ties on the whole part break on the fractional remainder.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    if float >= TWO_POW_63 {
        // covers +inf
        return Ordering::Less;
    }
    if float < -TWO_POW_63 {
        // covers -inf
        return Ordering::Greater;
    }
    let trunc = float.trunc();
    let whole = trunc as i64;
    match int.cmp(&whole) {
        Ordering::Equal => frac_ordering(float - trunc),
        ord => ord,
    }
}

/// Exact `BigInt` vs `f64` comparison, same split as [`cmp_int_float`] with
/// the truncated float lifted into `BigInt` (exact for every finite float).
fn cmp_big_float(big: &BigInt, float: f64) -> Ordering {
    if float.is_nan() || float == f64::INFINITY {
        return Ordering::Less;
    }
    if float == f64::NEG_INFINITY {
        return Ordering::Greater;
    }
    let trunc = float.trunc();
    let Some(whole) = BigInt::from_f64(trunc) else {
        // from_f64 only fails on non-finite input, which is screened above
        return Ordering::Less;
    };
    match big.cmp(&whole) {
        Ordering::Equal => frac_ordering(float - trunc),
        ord => ord,
    }
}

/// Ordering of an integer against a float that shares its whole part and
/// leaves `frac` behind the point.
fn frac_ordering(frac: f64) -> Ordering {
    if frac > 0.0 {
        Ordering::Less
    } else if frac < 0.0 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}
