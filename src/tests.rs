//! General library tests.

#![cfg(test)]

use crate::prelude::*;
use concat_idents::concat_idents;

/// Creates analogous tests for every [`Fixture`].
macro_rules! test {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = standard, $name {
                #[test]
                fn fn_name() {
                    Standard::$name();
                }
            });

            concat_idents!(fn_name = narrow, $name {
                #[test]
                fn fn_name() {
                    Narrow::$name();
                }
            });

            concat_idents!(fn_name = negative, $name {
                #[test]
                fn fn_name() {
                    Negative::$name();
                }
            });

            concat_idents!(fn_name = inverted, $name {
                #[test]
                fn fn_name() {
                    Inverted::$name();
                }
            });
        )*
    };
}

/// Integers coprime to 6.
fn coprime_six() -> Set {
    Set::pred(|x: i64| gcd::binary_u64(x.unsigned_abs(), 6) == 1)
}

/// A set, along with a reference membership test.
type Case = (Set, fn(i64) -> bool);

/// Pairs a set with its reference membership test.
fn case(set: Set, mem: fn(i64) -> bool) -> Case {
    (set, mem)
}

/// A variety of sets for general-purpose testing.
fn suite() -> Vec<Case> {
    vec![
        case(Set::empty(), |_| false),
        case(Set::singleton(4), |x| x == 4),
        case(Set::union_all((3..=6).map(Set::singleton)), |x| {
            (3..=6).contains(&x)
        }),
        case(Set::pred(|x| x % 2 == 0), |x| x % 2 == 0),
        case(coprime_six(), |x| x % 2 != 0 && x % 3 != 0),
        case(Set::pred(|x| x < 0).union(Set::singleton(7)), |x| {
            x < 0 || x == 7
        }),
        case(Set::pred(|x| x % 7 == 0).select(|x| x > 20), |x| {
            x % 7 == 0 && x > 20
        }),
    ]
}

/// Tests to run on sets, for use in [`forall`] and [`exists`].
const TESTS: &[fn(i64) -> bool] = &[|_| true, |_| false, |x| x % 2 == 0, |x| x > 4];

/// A window through which the whole library gets tested.
trait Fixture {
    /// The window under test.
    const WINDOW: Window;

    /// Test quantifiers and rendering on the empty set.
    fn _vacuous() {
        let nothing = Set::pred(|_| false);
        for test in TESTS {
            assert_eq!(forall(&nothing, test, Self::WINDOW), Ok(true));
            assert_eq!(exists(&nothing, test, Self::WINDOW), Ok(false));
        }
        assert_eq!(nothing.render(Self::WINDOW), Ok(String::new()));
    }

    /// Test that [`exists`] is the dual of [`forall`].
    fn _duality() {
        for (i, (set, _)) in suite().into_iter().enumerate() {
            for (j, test) in TESTS.iter().enumerate() {
                assert_eq!(
                    set.exists(test, Self::WINDOW),
                    set.forall(|x| !test(x), Self::WINDOW).map(|b| !b),
                    "duality fail at set {i}, test {j}: {set:?}"
                );
            }
        }
    }

    /// Test quantifiers against a direct count over the window.
    fn _quantifiers() {
        for (i, (set, mem)) in suite().into_iter().enumerate() {
            for (j, test) in TESTS.iter().enumerate() {
                let expected = Self::WINDOW.iter().filter(|&x| mem(x)).all(test);
                assert_eq!(
                    set.forall(test, Self::WINDOW),
                    Ok(expected),
                    "forall fail at set {i}, test {j}: {set:?}"
                );

                let expected = Self::WINDOW.iter().filter(|&x| mem(x)).any(test);
                assert_eq!(
                    set.exists(test, Self::WINDOW),
                    Ok(expected),
                    "exists fail at set {i}, test {j}: {set:?}"
                );
            }
        }
    }

    /// Test that rendering lists exactly the members in the window, in ascending order.
    fn _render() {
        for (i, (set, mem)) in suite().into_iter().enumerate() {
            let str = set.render(Self::WINDOW).unwrap();
            let members: Vec<i64> = if str.is_empty() {
                Vec::new()
            } else {
                str.split(", ").map(|x| x.parse().unwrap()).collect()
            };

            assert!(
                members.windows(2).all(|w| w[0] < w[1]),
                "render fail at set {i}: {str} not ascending"
            );
            let expected: Vec<_> = Self::WINDOW.iter().filter(|&x| mem(x)).collect();
            assert_eq!(members, expected, "render fail at set {i}: {set:?}");
        }
    }

    /// Test that union and intersection act pointwise.
    fn _pointwise() {
        for (i, (set_1, mem_1)) in suite().into_iter().enumerate() {
            for (j, (set_2, mem_2)) in suite().into_iter().enumerate() {
                let union = set_1.clone().union(set_2.clone());
                let inter = set_1.clone().inter(set_2);
                for x in Self::WINDOW.iter().take(200) {
                    assert_eq!(
                        union.contains(x),
                        Ok(mem_1(x) || mem_2(x)),
                        "union fail at {i}, {j}, element {x}"
                    );
                    assert_eq!(
                        inter.contains(x),
                        Ok(mem_1(x) && mem_2(x)),
                        "intersection fail at {i}, {j}, element {x}"
                    );
                }
            }
        }
    }

    /// Test that an image contains the image of every member in the window.
    fn _image() {
        let sparse = Set::pred(|x| x % 1000 == 0).union(Set::singleton(3));
        let funcs: [fn(i64) -> i64; 3] = [|x| x, |x| -x, |x| x / 7];

        for func in funcs {
            let image = sparse.map(func, Self::WINDOW);
            let members = Self::WINDOW.select(&sparse).unwrap();
            for y in members.iter() {
                assert_eq!(image.contains(func(y)), Ok(true), "image fail at {y}");
            }

            let Set::Image(lazy) = &image else {
                unreachable!()
            };
            let table = lazy.memoize().unwrap();
            for y in members.iter() {
                assert_eq!(table.contains(func(y)), Ok(true), "memoized image fail at {y}");
            }
        }
    }

    /// Test that the window bounds are inclusive, and nothing outside of them is seen.
    fn _bounds() {
        let Window { low, high } = Self::WINDOW;
        let outside = Set::singleton(low - 1).union(Set::singleton(high + 1));
        assert_eq!(outside.exists(|_| true, Self::WINDOW), Ok(false));
        assert_eq!(outside.render(Self::WINDOW), Ok(String::new()));

        let edges = Set::singleton(low).union(Set::singleton(high));
        let expected = if Self::WINDOW.is_empty() {
            String::new()
        } else if low == high {
            low.to_string()
        } else {
            format!("{low}, {high}")
        };
        assert_eq!(edges.render(Self::WINDOW), Ok(expected));
        assert_eq!(
            edges.exists(|_| true, Self::WINDOW),
            Ok(!Self::WINDOW.is_empty())
        );
    }
}

/// The default window.
struct Standard;

impl Fixture for Standard {
    const WINDOW: Window = Window::new(Window::DEFAULT_LOW, Window::DEFAULT_HIGH);
}

/// A window barely containing `{3, 4, 5, 6}`.
struct Narrow;

impl Fixture for Narrow {
    const WINDOW: Window = Window::new(3, 6);
}

/// A window straddling zero.
struct Negative;

impl Fixture for Negative {
    const WINDOW: Window = Window::new(-50, 50);
}

/// An empty window.
struct Inverted;

impl Fixture for Inverted {
    const WINDOW: Window = Window::new(10, -10);
}

test!(_vacuous, _duality, _quantifiers, _render, _pointwise, _image, _bounds);
