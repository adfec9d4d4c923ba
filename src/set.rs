//! Sets defined by membership predicates [`Set`].

use crate::prelude::*;

/// A raw membership predicate, as written by a caller.
///
/// The predicate may answer with anything convertible into an [`Answer`]. Whether that answer is a
/// boolean is only known once the predicate is queried.
#[derive(Clone)]
pub struct Pred(Rc<dyn Fn(i64) -> Answer>);

impl Debug for Pred {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("pred")
    }
}

impl Pred {
    /// Wraps a function as a predicate.
    pub fn new<A: Into<Answer>, F: Fn(i64) -> A + 'static>(func: F) -> Self {
        Self(Rc::new(move |x: i64| -> Answer { func(x).into() }))
    }

    /// Queries the predicate, rejecting non-boolean answers.
    pub fn test(&self, x: i64) -> Result<bool> {
        (self.0)(x).verdict(x)
    }
}

/// A set of integers, represented by the test deciding membership in it.
///
/// Sets are immutable. Every constructor builds a new set out of its operands, which are shared
/// rather than copied, so cloning a set is cheap. Membership is recomputed from the underlying
/// predicates on every query, and costs time proportional to the nesting depth of the set.
///
/// Operands are never validated when a set is built. A malformed predicate is only detected once a
/// query reaches it, which short-circuiting may prevent from ever happening.
#[derive(Clone)]
pub enum Set {
    /// The empty set Ø.
    Empty,
    /// The singleton {e}.
    Singleton(i64),
    /// Union x ∪ y, evaluated left to right.
    Union(Rc<(Set, Set)>),
    /// Intersection x ∩ y, evaluated left to right.
    Inter(Rc<(Set, Set)>),
    /// A raw predicate.
    Pred(Pred),
    /// The image of a set under a function, within a window. See [`Set::map`].
    Image(Image),
    /// A memoized image. See [`Image::memoize`].
    Table(Table),
}

impl Default for Set {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Pred> for Set {
    fn from(pred: Pred) -> Self {
        Self::Pred(pred)
    }
}

/// Writes out the structure of the set.
impl Debug for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Empty => f.write_char('Ø'),
            Self::Singleton(e) => write!(f, "{{{e}}}"),
            Self::Union(pair) => write!(f, "({:?} ∪ {:?})", pair.0, pair.1),
            Self::Inter(pair) => write!(f, "({:?} ∩ {:?})", pair.0, pair.1),
            Self::Pred(pred) => write!(f, "{pred:?}"),
            Self::Image(image) => write!(f, "{image:?}"),
            Self::Table(table) => write!(f, "{table:?}"),
        }
    }
}

/// Combines a slice of sets into a balanced tree, keeping their left-to-right order.
fn balance(sets: &[Set], join: fn(Set, Set) -> Set) -> Option<Set> {
    match sets {
        [] => None,
        [set] => Some(set.clone()),
        _ => {
            let (fst, snd) = sets.split_at(sets.len() / 2);
            Some(join(balance(fst, join)?, balance(snd, join)?))
        }
    }
}

impl Set {
    // -------------------- Constructions -------------------- //

    /// Empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Singleton set {e}.
    #[must_use]
    pub const fn singleton(e: i64) -> Self {
        Self::Singleton(e)
    }

    /// The set of integers for which `func` answers `true`.
    pub fn pred<A: Into<Answer>, F: Fn(i64) -> A + 'static>(func: F) -> Self {
        Self::Pred(Pred::new(func))
    }

    /// Union x ∪ y.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self::Union(Rc::new((self, other)))
    }

    /// Intersection x ∩ y.
    #[must_use]
    pub fn inter(self, other: Self) -> Self {
        Self::Inter(Rc::new((self, other)))
    }

    /// Set specification: the members of `self` satisfying `pred`.
    #[must_use]
    pub fn select<P: Fn(i64) -> bool + 'static>(self, pred: P) -> Self {
        self.inter(Self::pred(pred))
    }

    /// Union over an iterator. The empty union is Ø.
    ///
    /// The resulting tree is balanced, so queries take time logarithmic in the number of sets.
    pub fn union_all<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        let sets: SmallVec<Self> = iter.into_iter().collect();
        balance(&sets, Self::union).unwrap_or_default()
    }

    /// Intersection over an iterator. Returns `None` for the empty intersection, which would be the
    /// universal set.
    ///
    /// The resulting tree is balanced, so queries take time logarithmic in the number of sets.
    pub fn inter_all<I: IntoIterator<Item = Self>>(iter: I) -> Option<Self> {
        let sets: SmallVec<Self> = iter.into_iter().collect();
        balance(&sets, Self::inter)
    }

    // -------------------- Relations -------------------- //

    /// Membership relation ∈.
    ///
    /// Fails if a predicate reached while answering the query returns a non-boolean.
    pub fn contains(&self, x: i64) -> Result<bool> {
        match self {
            Self::Empty => Ok(false),
            Self::Singleton(e) => Ok(x == *e),
            Self::Union(pair) => Ok(pair.0.contains(x)? || pair.1.contains(x)?),
            Self::Inter(pair) => Ok(pair.0.contains(x)? && pair.1.contains(x)?),
            Self::Pred(pred) => pred.test(x),
            Self::Image(image) => image.contains(x),
            Self::Table(table) => Ok(table.contains(x)),
        }
    }
}
