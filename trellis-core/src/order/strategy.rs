//! The closed set of named ordering strategies.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use trellis_model::{Entry, Value};

use crate::error::{OrderError, Result};
use crate::order::natural::natural_cmp;
use crate::order::numeric::{as_num, cmp_magnitude};
use crate::order::shuffle::ShuffleSource;

/// A named, reusable comparison policy over traversal values.
///
/// The set is closed: no strategy is added at runtime, every strategy knows
/// its own inverse, and `reversed` is involutive for every variant except
/// [`Shuffle`](Order::Shuffle), which is its own fixed point.
///
/// [`Shuffle`](Order::Shuffle) satisfies the syntactic comparator contract
/// (it always returns one of the three outcomes) but is neither transitive
/// nor antisymmetric; engines requesting it must tolerate a randomized
/// permutation rather than a deterministic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(deprecated)]
pub enum Order {
    /// Natural increasing order; numeric operands compare by mathematical
    /// value across representations.
    Ascending,
    /// Natural decreasing order, defined as [`Ascending`](Order::Ascending)
    /// with the operands swapped.
    Descending,
    #[deprecated(
        note = "extract the key with `Entry::key` and compose with `Order::Ascending`"
    )]
    KeyAscending,
    #[deprecated(
        note = "extract the value with `Entry::value` and compose with `Order::Ascending`"
    )]
    ValueAscending,
    #[deprecated(
        note = "extract the key with `Entry::key` and compose with `Order::Descending`"
    )]
    KeyDescending,
    #[deprecated(
        note = "extract the value with `Entry::value` and compose with `Order::Descending`"
    )]
    ValueDescending,
    /// Non-deterministic order: a uniformly random `Less` or `Greater` on
    /// every invocation, never `Equal`.
    Shuffle,
}

#[allow(deprecated)]
impl Order {
    /// Every strategy, in declaration order.
    pub const ALL: [Order; 7] = [
        Order::Ascending,
        Order::Descending,
        Order::KeyAscending,
        Order::ValueAscending,
        Order::KeyDescending,
        Order::ValueDescending,
        Order::Shuffle,
    ];

    /// The identifier an engine uses to select this strategy.
    pub const fn name(self) -> &'static str {
        match self {
            Order::Ascending => "ascending",
            Order::Descending => "descending",
            Order::KeyAscending => "key_ascending",
            Order::ValueAscending => "value_ascending",
            Order::KeyDescending => "key_descending",
            Order::ValueDescending => "value_descending",
            Order::Shuffle => "shuffle",
        }
    }

    /// The strategy producing the exact opposite ranking.
    ///
    /// Pure table lookup; involutive for every variant except
    /// [`Shuffle`](Order::Shuffle), whose inverse is itself.
    pub const fn reversed(self) -> Order {
        match self {
            Order::Ascending => Order::Descending,
            Order::Descending => Order::Ascending,
            Order::KeyAscending => Order::KeyDescending,
            Order::KeyDescending => Order::KeyAscending,
            Order::ValueAscending => Order::ValueDescending,
            Order::ValueDescending => Order::ValueAscending,
            Order::Shuffle => Order::Shuffle,
        }
    }

    /// Three-way comparison of two traversal values.
    ///
    /// Shuffle draws from the process-wide random source; use
    /// [`compare_with`](Order::compare_with) to inject a seeded source.
    ///
    /// # Errors
    ///
    /// [`OrderError::NotComparable`] when the operands fall back to natural
    /// ordering and their kinds have none, and [`OrderError::NotAnEntry`]
    /// when a key/value strategy meets a non-entry operand.
    pub fn compare(&self, first: &Value, second: &Value) -> Result<Ordering> {
        self.compare_with(ShuffleSource::process_wide(), first, second)
    }

    /// [`compare`](Order::compare) with an explicitly injected random source.
    pub fn compare_with(
        &self,
        source: &ShuffleSource,
        first: &Value,
        second: &Value,
    ) -> Result<Ordering> {
        match self {
            Order::Ascending => cmp_values(first, second),
            // Swapped operands, not a negated result: ties and
            // special-value behavior stay identical to Ascending.
            Order::Descending => cmp_values(second, first),
            Order::KeyAscending => natural_cmp(entry_key(first)?, entry_key(second)?),
            Order::KeyDescending => natural_cmp(entry_key(second)?, entry_key(first)?),
            Order::ValueAscending => natural_cmp(entry_value(first)?, entry_value(second)?),
            Order::ValueDescending => natural_cmp(entry_value(second)?, entry_value(first)?),
            Order::Shuffle => Ok(source.coin_flip()),
        }
    }
}

/// Ascending comparison: numeric pairs rank by magnitude, everything else
/// falls back to the operands' natural ordering.
fn cmp_values(first: &Value, second: &Value) -> Result<Ordering> {
    match (as_num(first), as_num(second)) {
        (Some(a), Some(b)) => Ok(cmp_magnitude(a, b)),
        _ => natural_cmp(first, second),
    }
}

fn entry_of(value: &Value) -> Result<&Entry> {
    value.as_entry().ok_or_else(|| {
        trace!(kind = %value.kind(), "operand is not a key/value entry");
        OrderError::NotAnEntry(value.kind())
    })
}

fn entry_key(value: &Value) -> Result<&Value> {
    entry_of(value).map(Entry::key)
}

fn entry_value(value: &Value) -> Result<&Value> {
    entry_of(value).map(Entry::value)
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[allow(deprecated)]
impl FromStr for Order {
    type Err = OrderError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "ascending" => Ok(Order::Ascending),
            "descending" => Ok(Order::Descending),
            "key_ascending" => Ok(Order::KeyAscending),
            "value_ascending" => Ok(Order::ValueAscending),
            "key_descending" => Ok(Order::KeyDescending),
            "value_descending" => Ok(Order::ValueDescending),
            "shuffle" => Ok(Order::Shuffle),
            other => {
                debug!(order = other, "unknown order identifier");
                Err(OrderError::UnknownOrder(other.to_string()))
            }
        }
    }
}
