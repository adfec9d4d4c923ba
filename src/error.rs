//! Errors raised by the membership oracle.

use thiserror::Error;

/// A violation of the set contract, detected while answering a membership query.
///
/// Both kinds propagate unchanged through every combinator and bounded operation. Evaluation is
/// deterministic, so a query that fails once fails every time it is repeated.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SetError {
    /// The operand presented as a set is not a predicate.
    #[error("set must be defined by a predicate function, found {found}")]
    InvalidSetKind {
        /// What was found instead.
        found: &'static str,
    },

    /// The predicate answered something other than a boolean.
    #[error("contains test returned non-boolean value ({found}) for element {element}")]
    InvalidPredicateResult {
        /// The queried element.
        element: i64,
        /// The kind of the answer that was returned.
        found: &'static str,
    },
}

/// Result of any operation that may query a set.
pub type Result<T> = std::result::Result<T, SetError>;
