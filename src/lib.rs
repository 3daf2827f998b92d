#![cfg_attr(not(test), no_std)]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/fixed-collection/0.1.0")]

//! Immutable, fixed-size collections with per-variant element constraints.
//!
//! A [`Collection`] owns exactly as many elements as it was built with, and
//! never changes afterwards. Transformations ([`map`](Collection::map),
//! [`filter`](Collection::filter), [`unique`](Collection::unique),
//! [`sort`](Collection::sort), [`slice`](Collection::slice) and friends)
//! borrow the receiver and return a new collection of the same *variant*.
//!
//! A variant is a marker type implementing [`Constraint`] for the element
//! type, usually declared with [`element_constraint!`]. Every value entering a
//! collection is checked against it; rejected values surface as a
//! [`TypeConstraintViolation`]. The base variant [`Unconstrained`] admits
//! everything.
//!
//! # Examples
//! ```
//! use fixed_collection::{collection, element_constraint, AnyCollection, Collection};
//!
//! element_constraint!(Positive: i64 = |n| *n > 0);
//!
//! let c: Collection<i64, Positive> = collection![3, 1, 2, 3].unwrap();
//! let sorted = c.unique().sort();
//! assert_eq!(sorted, [1, 2, 3]);
//!
//! // Results of `map` must stay in the variant...
//! assert!(sorted.map(|n| -n).is_err());
//!
//! // ...unless the constraint is explicitly bypassed for one transformation.
//! let labels: AnyCollection<String> = sorted.disable_type_check().map(|n| format!("#{}", n));
//! assert_eq!(labels, ["#1", "#2", "#3"]);
//! ```
//!
//! # Features
//! - `serde` (enabled by default): collections serialize as sequences and
//!   re-validate their elements when deserialized.

extern crate alloc;

pub mod collection;
pub mod constraint;
pub mod error;
pub mod unchecked;
pub mod values;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(test)]
mod test_utils;

pub use crate::collection::Collection;
pub use crate::constraint::{Constraint, Unconstrained};
pub use crate::error::TypeConstraintViolation;
pub use crate::unchecked::Unchecked;
pub use crate::values::{Keyed, Nullable, Values};

/// A collection of the base variant, admitting every value of type `T`.
///
/// # Examples
/// ```
/// let c = fixed_collection::AnyCollection::from(vec!['a', 'b', 'a']);
/// assert_eq!(c.unique(), ['a', 'b']);
/// ```
pub type AnyCollection<T> = Collection<T, Unconstrained>;

/// Builds a [`Collection`] from a fixed list of elements.
///
/// Expands to [`Collection::new`], so the variant is taken from context and the
/// result is a `Result<Collection<_, _>, TypeConstraintViolation>`.
///
/// # Examples
/// ```
/// use fixed_collection::{collection, AnyCollection};
///
/// let c: AnyCollection<_> = collection!["a", "b", "c"].unwrap();
/// assert_eq!(c.slice(Some(1), 1), ["b"]);
/// ```
#[macro_export]
macro_rules! collection {
    ($($item:expr),* $(,)?) => {
        $crate::Collection::new([$($item),*])
    };
}
