//! # Sets as predicates
//!
//! A [`Set`] is represented not by its elements, but by the test deciding whether an integer
//! belongs to it. This makes sets like "every even number" as easy to build as finite ones, at the
//! cost that anything which must look at the elements themselves (quantifiers, rendering, images)
//! only ever sees those within a finite [`Window`].
//!
//! ```
//! use fsets::prelude::*;
//!
//! let set = Set::union_all((3..=6).map(Set::singleton));
//! assert_eq!(set.render(Window::default()), Ok("3, 4, 5, 6".to_owned()));
//!
//! let evens = Set::pred(|x| x % 2 == 0);
//! assert_eq!(set.inter(evens).contains(4), Ok(true));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod answer;
pub mod error;
pub mod oracle;
pub mod prelude;
pub mod quant;
pub mod set;
pub mod view;
pub mod window;

mod tests;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 8]>;
