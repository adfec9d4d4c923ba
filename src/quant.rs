//! Bounded quantifiers over the members of a set.
//!
//! A set may have members anywhere among the integers, so "for all" and "there exists" can only be
//! decided within a [`Window`]. Members outside of it are never examined: callers needing answers
//! beyond the default window must pass a wider one.

use crate::prelude::*;

/// Whether every member of `set` within `window` satisfies `test`.
///
/// The window is scanned in ascending order, stopping at the first member failing the test. `test`
/// is only evaluated on members. With no members in the window, the answer is vacuously `true`.
pub fn forall<T: Fn(i64) -> bool>(set: &Set, test: T, window: Window) -> Result<bool> {
    for i in window.iter() {
        if set.contains(i)? && !test(i) {
            tracing::trace!(counterexample = i, %window, "forall fails");
            return Ok(false);
        }
    }

    Ok(true)
}

/// Whether some member of `set` within `window` satisfies `test`.
///
/// This is the dual `¬∀x ¬test(x)` of [`forall`], and scans the window the same way. With no members
/// in the window, the answer is `false`.
pub fn exists<T: Fn(i64) -> bool>(set: &Set, test: T, window: Window) -> Result<bool> {
    forall(set, |x| !test(x), window).map(|b| !b)
}

impl Set {
    /// See [`forall`].
    pub fn forall<T: Fn(i64) -> bool>(&self, test: T, window: Window) -> Result<bool> {
        forall(self, test, window)
    }

    /// See [`exists`].
    pub fn exists<T: Fn(i64) -> bool>(&self, test: T, window: Window) -> Result<bool> {
        exists(self, test, window)
    }
}
