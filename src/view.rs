//! Views of a set through a [`Window`]: rendering its members, and taking its [`Image`] under a
//! function.

use crate::prelude::*;
use std::collections::BTreeSet;

/// Renders the members of `set` within `window`, in ascending order and joined by `", "`.
///
/// The empty effective domain renders as the empty string.
pub fn to_string(set: &Set, window: Window) -> Result<String> {
    Ok(window.select(set)?.to_string())
}

/// The image of `set` under `func`, restricted to `window`.
///
/// The returned set contains `x` whenever some member `y` of `set` within `window` has
/// `func(y) == x`. Images of members outside the window are never seen. Every query scans the whole
/// window again; see [`Image::memoize`] for an eager alternative.
pub fn map<F: Fn(i64) -> i64 + 'static>(set: &Set, func: F, window: Window) -> Set {
    Set::Image(Image {
        source: Rc::new(set.clone()),
        func: Rc::new(func),
        window,
    })
}

impl Set {
    /// See [`to_string`].
    pub fn render(&self, window: Window) -> Result<String> {
        to_string(self, window)
    }

    /// See [`map`].
    #[must_use]
    pub fn map<F: Fn(i64) -> i64 + 'static>(&self, func: F, window: Window) -> Set {
        map(self, func, window)
    }
}

/// The lazily evaluated image of a set under a function, within a window.
#[derive(Clone)]
pub struct Image {
    /// The set being mapped.
    source: Rc<Set>,
    /// The mapping function.
    func: Rc<dyn Fn(i64) -> i64>,
    /// The window the source is read through.
    window: Window,
}

impl Debug for Image {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "map{}({:?})", self.window, self.source)
    }
}

impl Image {
    /// The set being mapped.
    #[must_use]
    pub fn source(&self) -> &Set {
        &self.source
    }

    /// The window the source is read through.
    #[must_use]
    pub const fn window(&self) -> Window {
        self.window
    }

    /// Whether some member `y` of the source within the window has `func(y) == x`.
    pub fn contains(&self, x: i64) -> Result<bool> {
        self.source.exists(|y| (self.func)(y) == x, self.window)
    }

    /// Computes the image once, returning a set with the same members that answers queries without
    /// scanning.
    ///
    /// Errors that the lazy image would raise on some query are raised here instead.
    pub fn memoize(&self) -> Result<Set> {
        let values: BTreeSet<_> = self
            .window
            .select(&self.source)?
            .iter()
            .map(|y| (self.func)(y))
            .collect();

        tracing::debug!(window = %self.window, len = values.len(), "memoized image");
        Ok(Set::Table(Table(Rc::new(values))))
    }
}

/// A finite set stored by its members. Built by [`Image::memoize`].
#[derive(Clone, PartialEq, Eq)]
pub struct Table(Rc<BTreeSet<i64>>);

impl Debug for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for x in iter {
            write!(f, ", {x}")?;
        }
        f.write_char('}')
    }
}

impl Table {
    /// Whether `x` is stored.
    #[must_use]
    pub fn contains(&self, x: i64) -> bool {
        self.0.contains(&x)
    }

    /// Number of stored members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no members are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }
}
