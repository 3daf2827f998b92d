//! The one-shot escape from a collection variant's constraint.

use crate::collection::Collection;
use crate::values::Values;

/// A copy of a collection's elements, exempt from its variant's constraint
/// for exactly one transformation.
///
/// Created by [`Collection::disable_type_check`]. Every transformation
/// consumes the view and yields an ordinary base-variant [`Collection`],
/// whose element type may differ from the original. There is no way to run a
/// second transformation on the same view.
///
/// # Examples
/// ```
/// use fixed_collection::{element_constraint, Collection};
///
/// element_constraint!(Word: String = |s| s.chars().all(char::is_alphabetic));
///
/// let words = Collection::<String, Word>::new(["to".into(), "be".into()]).unwrap();
/// let lengths = words.disable_type_check().map(|w| w.len());
/// assert_eq!(lengths, [2, 2]);
/// ```
///
/// ```compile_fail
/// use fixed_collection::AnyCollection;
///
/// let view = AnyCollection::from(vec![1, 2]).disable_type_check();
/// let a = view.map(|n| n + 1);
/// let b = view.map(|n| n - 1);
/// ```
#[derive(Debug)]
pub struct Unchecked<T> {
    inner: Collection<T>,
}

impl<T> Unchecked<T> {
    #[inline]
    pub(crate) fn new(inner: Collection<T>) -> Self {
        Unchecked { inner }
    }

    /// Returns the number of elements in the view.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the view contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Extracts a slice containing all elements of the view.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Applies `f` to every element in order.
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Collection<U> {
        self.inner.into_iter().map(f).collect()
    }

    /// Applies `f` to every element and concatenates the returned sources,
    /// one level deep and in order.
    pub fn flat_map<U, I, F>(self, f: F) -> Collection<U>
    where
        I: IntoIterator<Item = U>,
        F: FnMut(T) -> I,
    {
        self.inner.into_iter().flat_map(f).collect()
    }

    /// Concatenates the values of every element, discarding keys of keyed
    /// elements.
    pub fn flatten(self) -> Collection<T::Value>
    where
        T: Values,
    {
        self.inner.into_iter().flat_map(Values::into_values).collect()
    }

    /// Gives up the bypass, returning the elements as a base-variant
    /// collection.
    #[inline]
    pub fn into_collection(self) -> Collection<T> {
        self.inner
    }
}
