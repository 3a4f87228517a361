//! Runtime value model shared across Trellis traversal crates.
#![allow(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use ::chrono;
pub use ::num_bigint;

pub mod entry;
pub mod value;

// Intentionally curated re-exports for downstream consumers.
pub use entry::Entry;
pub use value::{Value, ValueKind};
