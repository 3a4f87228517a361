//! # Trellis Core
//!
//! Ordering strategies for the Trellis traversal engine: a closed family of
//! named comparison policies that rank two runtime values, compose with the
//! rest of a query, and each know their own inverse.
//!
//! ## Overview
//!
//! - **Named strategies**: [`Order`] enumerates the seven policies —
//!   ascending, descending, the four (deprecated) key/value entry variants,
//!   and shuffle — resolvable by identifier for query specifications
//! - **Numeric magnitude**: mixed representations (`i64`, `BigInt`, `f64`)
//!   compare by mathematical value with no precision loss in either
//!   direction
//! - **Natural fallback**: non-numeric operands use their kind's own
//!   ordering; incomparable kinds surface a contract violation
//! - **Inversion algebra**: `reversed` is a pure lookup, involutive for
//!   every strategy except shuffle, which is its own fixed point
//! - **Shuffle**: a randomized pseudo-comparator backed by one thread-safe,
//!   process-wide source, substitutable with a seeded source in tests
//!
//! ## Example
//!
//! ```
//! use trellis_core::{Order, model::Value};
//!
//! fn rank() -> Result<(), trellis_core::OrderError> {
//!     let order: Order = "descending".parse()?;
//!     assert_eq!(order.reversed(), Order::Ascending);
//!
//!     // 10 outranks 2.5 by mathematical value, so descending puts it first.
//!     let outcome = order.compare(&Value::from(10), &Value::from(2.5))?;
//!     assert_eq!(outcome, std::cmp::Ordering::Less);
//!     Ok(())
//! }
//!
//! rank().unwrap();
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Comparison-boundary error taxonomy
pub mod error;
/// Ordering strategies, numeric promotion, and the shuffle source
pub mod order;

pub use error::{OrderError, Result};
pub use order::{Order, ShuffleSource, sort_values};

/// Re-export of the runtime value model this crate compares.
pub use trellis_model as model;
