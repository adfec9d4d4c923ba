//! The membership oracle.
//!
//! Every membership query goes through [`contains`] or [`Set::contains`], which reject operands
//! that aren't sets and predicates answering with anything but a boolean.

use crate::prelude::*;

/// Membership relation ∈ for an arbitrary operand.
///
/// Fails with [`SetError::InvalidSetKind`] if the operand is not a set, and with
/// [`SetError::InvalidPredicateResult`] if a predicate reached by the query answers a non-boolean.
/// Otherwise, returns the predicate's answer unchanged.
pub fn contains(set: &Operand, element: i64) -> Result<bool> {
    set.as_set()?.contains(element)
}
