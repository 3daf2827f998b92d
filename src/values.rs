//! Uniform access to the values of ordered sources.
//!
//! Collections are built from the *values* of a source, in iteration order.
//! For plain sequences these are simply the elements; for keyed sources such
//! as [`BTreeMap`] or [`Keyed`] iterators the keys are discarded.

use alloc::collections::{btree_map, vec_deque, BTreeMap, VecDeque};
use alloc::vec::{self, Vec};
use core::iter::Map;

/// A finite source whose values can be taken in iteration order.
///
/// # Examples
/// ```
/// use fixed_collection::{AnyCollection, Values};
/// use std::collections::BTreeMap;
///
/// let mut prices = BTreeMap::new();
/// prices.insert("apple", 3);
/// prices.insert("banana", 1);
///
/// let c = AnyCollection::from_values(prices).unwrap();
/// assert_eq!(c, [3, 1]);
/// ```
pub trait Values {
    /// The type of the values produced.
    type Value;
    /// The iterator over the values.
    type IntoValues: Iterator<Item = Self::Value>;

    /// Consumes the source, returning its values in iteration order.
    fn into_values(self) -> Self::IntoValues;
}

impl<T> Values for Vec<T> {
    type Value = T;
    type IntoValues = vec::IntoIter<T>;

    #[inline]
    fn into_values(self) -> Self::IntoValues {
        self.into_iter()
    }
}

impl<T, const N: usize> Values for [T; N] {
    type Value = T;
    type IntoValues = core::array::IntoIter<T, N>;

    #[inline]
    fn into_values(self) -> Self::IntoValues {
        IntoIterator::into_iter(self)
    }
}

impl<T> Values for VecDeque<T> {
    type Value = T;
    type IntoValues = vec_deque::IntoIter<T>;

    #[inline]
    fn into_values(self) -> Self::IntoValues {
        self.into_iter()
    }
}

impl<K, V> Values for BTreeMap<K, V> {
    type Value = V;
    type IntoValues = btree_map::IntoValues<K, V>;

    #[inline]
    fn into_values(self) -> Self::IntoValues {
        BTreeMap::into_values(self)
    }
}

/// Adapts any iterator of key-value pairs into a [`Values`] source, e.g. a
/// lazily generated sequence of entries.
///
/// # Examples
/// ```
/// use fixed_collection::{AnyCollection, Keyed};
///
/// let entries = ["foo", "bar"].into_iter().map(|k| (k, k.len()));
/// let c = AnyCollection::from_values(Keyed(entries)).unwrap();
/// assert_eq!(c, [3, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct Keyed<I>(pub I);

impl<K, V, I: IntoIterator<Item = (K, V)>> Values for Keyed<I> {
    type Value = V;
    type IntoValues = Map<I::IntoIter, fn((K, V)) -> V>;

    #[inline]
    fn into_values(self) -> Self::IntoValues {
        fn value<K, V>((_, v): (K, V)) -> V {
            v
        }

        self.0.into_iter().map(value::<K, V> as fn((K, V)) -> V)
    }
}

/// Element types with a distinguished "nothing" value.
///
/// Used by [`Collection::compact`](crate::Collection::compact) to drop
/// absent elements.
pub trait Nullable {
    /// Returns `true` if this value stands for the absence of a value.
    fn is_null(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}
