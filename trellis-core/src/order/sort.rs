//! Slice sorting under an ordering strategy.

use std::cmp::Ordering;

use trellis_model::Value;

use crate::error::Result;
use crate::order::shuffle::ShuffleSource;
use crate::order::strategy::Order;

/// Sort `items` in place under `order`.
///
/// [`Order::Shuffle`] permutes the slice directly instead of feeding a
/// non-transitive comparator through the sort algorithm. For every other
/// strategy the first contract violation encountered is captured and
/// returned after the pass; the violating pair ranks as equal during it, so
/// the slice stays a permutation of its input either way.
pub fn sort_values(items: &mut [Value], order: Order, source: &ShuffleSource) -> Result<()> {
    if order == Order::Shuffle {
        source.shuffle_slice(items);
        return Ok(());
    }

    let mut first_violation = None;
    items.sort_by(|a, b| match order.compare_with(source, a, b) {
        Ok(ord) => ord,
        Err(err) => {
            if first_violation.is_none() {
                first_violation = Some(err);
            }
            Ordering::Equal
        }
    });

    match first_violation {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OrderError;
    use trellis_model::ValueKind;

    #[test]
    fn sorts_mixed_numeric_representations_by_magnitude() {
        use trellis_model::num_bigint::BigInt;

        let mut items = vec![
            Value::from(10.5),
            Value::from(BigInt::from(i64::MAX) + 1),
            Value::from(2),
            Value::from(3.0),
        ];
        sort_values(&mut items, Order::Ascending, &ShuffleSource::seeded(0))
            .expect("numeric values are mutually comparable");
        assert_eq!(items[0], Value::from(2));
        assert_eq!(items[1], Value::from(3.0));
        assert_eq!(items[2], Value::from(10.5));
        assert_eq!(items[3].kind(), ValueKind::Big);
    }

    #[test]
    fn descending_reverses_the_ranking() {
        let mut items = vec![Value::from("b"), Value::from("c"), Value::from("a")];
        sort_values(&mut items, Order::Descending, &ShuffleSource::seeded(0))
            .expect("text values are mutually comparable");
        assert_eq!(
            items,
            vec![Value::from("c"), Value::from("b"), Value::from("a")]
        );
    }

    #[test]
    fn shuffle_permutes_without_losing_items() {
        let source = ShuffleSource::seeded(3);
        let original: Vec<Value> = (0..32).map(Value::from).collect();
        let mut items = original.clone();
        sort_values(&mut items, Order::Shuffle, &source).expect("shuffle cannot fail");

        let mut restored = items.clone();
        sort_values(&mut restored, Order::Ascending, &source)
            .expect("integers are mutually comparable");
        assert_eq!(restored, original);
    }

    #[test]
    fn first_violation_is_reported_after_the_pass() {
        let mut items = vec![Value::from(1), Value::from("one"), Value::from(2)];
        let err = sort_values(&mut items, Order::Ascending, &ShuffleSource::seeded(0))
            .unwrap_err();
        assert!(matches!(err, OrderError::NotComparable { .. }));
        assert_eq!(items.len(), 3);
    }
}
