use thiserror::Error;
use trellis_model::ValueKind;

/// Errors surfaced at the comparison boundary.
///
/// Contract violations are fatal to the comparison that raised them; the
/// engine owning the sort decides whether to abort or partially complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("values of kind {lhs} and {rhs} have no mutual natural ordering")]
    NotComparable { lhs: ValueKind, rhs: ValueKind },

    #[error("expected a key/value entry, found {0}")]
    NotAnEntry(ValueKind),

    #[error("unknown order: {0}")]
    UnknownOrder(String),
}

pub type Result<T> = std::result::Result<T, OrderError>;
