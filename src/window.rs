//! Bounded windows [`Window`] over the integers, and the [`Selection`] of a set within one.

use crate::prelude::*;
use std::ops::RangeInclusive;

/// The inclusive range `[low, high]` examined by a bounded operation.
///
/// Sets are predicates over all of the integers, so anything that must enumerate their elements
/// only ever sees the part of them within some window. The same set may be examined through
/// different windows and give different answers. A window with `low > high` is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    /// Smallest integer examined.
    pub low: i64,
    /// Largest integer examined.
    pub high: i64,
}

/// The window `[0, 10000]`.
impl Default for Window {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LOW, Self::DEFAULT_HIGH)
    }
}

impl From<RangeInclusive<i64>> for Window {
    fn from(range: RangeInclusive<i64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl From<Window> for RangeInclusive<i64> {
    fn from(window: Window) -> Self {
        window.iter()
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl Window {
    /// Default lower bound.
    pub const DEFAULT_LOW: i64 = 0;
    /// Default upper bound.
    pub const DEFAULT_HIGH: i64 = 10_000;

    /// The window `[low, high]`.
    #[must_use]
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Whether the window holds no integers at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.low > self.high
    }

    /// Whether `x` lies within the window.
    #[must_use]
    pub const fn contains(&self, x: i64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Iterates over the window in ascending order.
    #[must_use]
    pub fn iter(&self) -> RangeInclusive<i64> {
        self.low..=self.high
    }

    /// Scans the window once, recording which integers belong to `set`.
    pub fn select(self, set: &Set) -> Result<Selection> {
        tracing::trace!(window = %self, "selecting members");

        let mut mask = BitVec::new();
        for i in self.iter() {
            mask.push(set.contains(i)?);
        }

        Ok(Selection { window: self, mask })
    }
}

/// The members of a set within a [`Window`], as found by [`Window::select`].
///
/// Bit `i` of the mask records whether `low + i` is a member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// The scanned window.
    window: Window,
    /// Membership flags, one per integer in the window.
    mask: BitVec,
}

impl Selection {
    /// The scanned window.
    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Number of members found.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mask.count_ones()
    }

    /// Whether no members were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mask.not_any()
    }

    /// Whether `x` was found to be a member. Integers outside the window never are.
    #[must_use]
    pub fn contains(&self, x: i64) -> bool {
        self.window.contains(x)
            && usize::try_from(x.abs_diff(self.window.low))
                .ok()
                .and_then(|i| self.mask.get(i).map(|bit| *bit))
                .unwrap_or(false)
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        let low = self.window.low;
        self.mask
            .iter_ones()
            .map(move |i| low.wrapping_add_unsigned(i as u64))
    }
}

/// Members joined by `", "`, in ascending order.
impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for x in iter {
            write!(f, ", {x}")?;
        }
        Ok(())
    }
}
