//! Element constraints distinguishing collection variants.
//!
//! A [`Collection`](crate::Collection) is generic over a marker type
//! implementing [`Constraint`] for its element type. The marker never exists
//! at runtime; it only selects the predicate every stored element must
//! satisfy. [`Unconstrained`] is the base variant admitting every value.
//!
//! New variants are most easily declared with [`element_constraint!`].

use crate::error::TypeConstraintViolation;

/// A predicate over elements of type `T`, identifying a collection variant.
///
/// Implementations must be pure: `admits` is consulted once per element at
/// every insertion point, and the result is assumed to hold for as long as the
/// element is stored.
pub trait Constraint<T: ?Sized> {
    /// Human-readable name, reported in [`TypeConstraintViolation`]s.
    const NAME: &'static str;

    /// Returns `true` if `value` may be stored in a collection of this variant.
    fn admits(value: &T) -> bool;
}

/// The base variant, admitting every value of the element type.
///
/// # Examples
/// ```
/// use fixed_collection::{AnyCollection, Constraint, Unconstrained};
///
/// assert!(<Unconstrained as Constraint<i32>>::admits(&-1));
/// let c = AnyCollection::new([1, -2, 3]).unwrap();
/// assert_eq!(c.len(), 3);
/// ```
#[derive(Debug)]
pub enum Unconstrained {}

impl<T: ?Sized> Constraint<T> for Unconstrained {
    const NAME: &'static str = "Unconstrained";

    #[inline(always)]
    fn admits(_: &T) -> bool {
        true
    }
}

/// Checks `value`, which is about to be stored at `index`, against `C`.
#[inline]
pub(crate) fn check<T, C: Constraint<T>>(value: &T, index: usize) -> Result<(), TypeConstraintViolation> {
    if C::admits(value) {
        return Ok(());
    }

    tracing::debug!(constraint = C::NAME, index, "element rejected by collection variant");
    Err(TypeConstraintViolation::new(C::NAME, index))
}

/// Declares an uninhabited marker type implementing [`Constraint`].
///
/// The closure-like body receives the candidate element by reference.
///
/// # Examples
/// ```
/// use fixed_collection::{element_constraint, Collection};
///
/// element_constraint! {
///     /// Strings with at least one character.
///     pub NonEmpty: &'static str = |s| !s.is_empty()
/// }
///
/// assert!(Collection::<_, NonEmpty>::new(["a", "b"]).is_ok());
/// assert!(Collection::<_, NonEmpty>::new(["a", ""]).is_err());
/// ```
///
/// Markers for different variants are distinct types, so collections of
/// different variants cannot be mixed up:
/// ```compile_fail
/// use fixed_collection::{element_constraint, Collection};
///
/// element_constraint!(Small: u8 = |n| *n < 10);
/// element_constraint!(Large: u8 = |n| *n >= 10);
///
/// let small: Collection<u8, Small> = Collection::new([1, 2]).unwrap();
/// let large: Collection<u8, Large> = small;
/// ```
#[macro_export]
macro_rules! element_constraint {
    ($(#[$attr:meta])* $v:vis $name:ident: $elem:ty = |$arg:ident| $body:expr $(;)?) => {
        $(#[$attr])*
        #[derive(core::fmt::Debug)]
        $v enum $name {}

        impl $crate::Constraint<$elem> for $name {
            const NAME: &'static str = core::stringify!($name);

            #[inline]
            fn admits($arg: &$elem) -> bool {
                $body
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    element_constraint!(Positive: i64 = |n| *n > 0);

    #[test]
    fn declared_constraint_reports_its_name() {
        assert_eq!(<Positive as Constraint<i64>>::NAME, "Positive");
        assert!(<Positive as Constraint<i64>>::admits(&1));
        assert!(!<Positive as Constraint<i64>>::admits(&0));
    }

    #[test]
    fn check_reports_the_rejected_position() {
        assert!(check::<i64, Positive>(&5, 0).is_ok());

        let err = check::<i64, Positive>(&-5, 7).unwrap_err();
        assert_eq!(err.constraint(), "Positive");
        assert_eq!(err.index(), 7);
    }

    #[test]
    fn unconstrained_admits_everything() {
        assert!(check::<i64, Unconstrained>(&i64::MIN, 0).is_ok());
        assert!(<Unconstrained as Constraint<str>>::admits(""));
    }
}
