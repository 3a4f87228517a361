//! Ordering strategies for traversal results
//!
//! This module provides:
//! - The closed set of named comparison policies ([`Order`])
//! - Lossless numeric-magnitude comparison across representations
//! - Natural per-kind ordering with explicit contract violations
//! - A thread-safe, injectable random source for the shuffle strategy

mod natural;
mod numeric;
pub mod shuffle;
pub mod sort;
pub mod strategy;


pub use shuffle::ShuffleSource;
pub use sort::sort_values;
pub use strategy::Order;
