//! The single error kind raised by collection operations.

use thiserror::Error;

/// A value was offered to a collection variant whose constraint does not
/// admit it.
///
/// Raised by construction, [`add`](crate::Collection::add),
/// [`map`](crate::Collection::map), [`flat_map`](crate::Collection::flat_map),
/// [`flatten`](crate::Collection::flatten), [`narrow`](crate::Collection::narrow)
/// and deserialization. This indicates a defect at the call site rather than a
/// condition worth recovering from.
///
/// # Examples
/// ```
/// use fixed_collection::{element_constraint, Collection};
///
/// element_constraint!(pub Even: u32 = |n| n % 2 == 0);
///
/// let err = Collection::<u32, Even>::new([2, 4, 5]).unwrap_err();
/// assert_eq!(err.constraint(), "Even");
/// assert_eq!(err.index(), 2);
/// assert_eq!(err.to_string(), "element at index 2 violates the `Even` constraint");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("element at index {index} violates the `{constraint}` constraint")]
pub struct TypeConstraintViolation {
    constraint: &'static str,
    index: usize,
}

impl TypeConstraintViolation {
    pub(crate) fn new(constraint: &'static str, index: usize) -> Self {
        TypeConstraintViolation { constraint, index }
    }

    /// Returns the name of the constraint that rejected the element.
    #[inline]
    pub fn constraint(&self) -> &'static str {
        self.constraint
    }

    /// Returns the position the rejected element would have occupied in the
    /// collection under construction.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
}
