//! Natural per-kind ordering over runtime values.

use std::cmp::Ordering;

use tracing::trace;
use trellis_model::Value;

use crate::error::{OrderError, Result};
use crate::order::numeric::cmp_floats;

/// Compare two values by each kind's own ordering.
///
/// Only same-kind pairs have a natural order; widening across numeric
/// representations belongs to the magnitude path, not here. Entries carry
/// no natural order of their own — callers extract a component first.
pub(crate) fn natural_cmp(first: &Value, second: &Value) -> Result<Ordering> {
    match (first, second) {
        (Value::Int(a), Value::Int(b)) => Ok(a.cmp(b)),
        (Value::Big(a), Value::Big(b)) => Ok(a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => Ok(cmp_floats(*a, *b)),
        (Value::Text(a), Value::Text(b)) => Ok(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Ok(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Ok(a.cmp(b)),
        _ => {
            trace!(
                lhs = %first.kind(),
                rhs = %second.kind(),
                "operands have no mutual natural ordering"
            );
            Err(OrderError::NotComparable {
                lhs: first.kind(),
                rhs: second.kind(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_model::{Entry, ValueKind};

    #[test]
    fn same_kind_pairs_order_naturally() {
        assert_eq!(
            natural_cmp(&Value::from("apple"), &Value::from("banana")),
            Ok(Ordering::Less)
        );
        assert_eq!(
            natural_cmp(&Value::from(false), &Value::from(true)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            natural_cmp(&Value::from(2), &Value::from(10)),
            Ok(Ordering::Less)
        );
        assert_eq!(
            natural_cmp(&Value::from(1.5), &Value::from(1.5)),
            Ok(Ordering::Equal)
        );
    }

    #[test]
    fn dates_order_chronologically() {
        use trellis_model::chrono::{TimeZone, Utc};

        let earlier = Value::from(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        let later = Value::from(Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap());
        assert_eq!(natural_cmp(&earlier, &later), Ok(Ordering::Less));
    }

    #[test]
    fn cross_kind_pairs_are_contract_violations() {
        let err = natural_cmp(&Value::from(3), &Value::from("3")).unwrap_err();
        assert_eq!(
            err,
            OrderError::NotComparable {
                lhs: ValueKind::Int,
                rhs: ValueKind::Text,
            }
        );
        // Numeric widening is deliberately absent on this path.
        assert!(natural_cmp(&Value::from(3), &Value::from(3.0)).is_err());
    }

    #[test]
    fn entries_have_no_natural_order() {
        let a = Value::from(Entry::new(Value::from(1), Value::from("a")));
        let b = Value::from(Entry::new(Value::from(2), Value::from("b")));
        assert_eq!(
            natural_cmp(&a, &b),
            Err(OrderError::NotComparable {
                lhs: ValueKind::Entry,
                rhs: ValueKind::Entry,
            })
        );
    }

    #[test]
    fn float_nan_ranks_greatest() {
        assert_eq!(
            natural_cmp(&Value::from(f64::NAN), &Value::from(f64::MAX)),
            Ok(Ordering::Greater)
        );
    }
}
