//! Fixed-size collections with per-variant element constraints.
//!
//! A [`Collection`] is built once, from a fixed list or any finite source, and
//! never changes afterwards. Its capacity is exactly its length: the backing
//! storage is an owned slice that never reallocates. All transformations
//! borrow the receiver and produce a fresh collection, so instances can be
//! shared freely for reading.
//!
//! The second type parameter selects the *variant*, a [`Constraint`] every
//! element must satisfy. It is checked at every insertion point:
//! construction, [`add`](Collection::add), [`map`](Collection::map),
//! [`flat_map`](Collection::flat_map) and [`flatten`](Collection::flatten).
//! Operations that only select or reorder
//! existing elements cannot violate it and are infallible.
//!
//! To transform elements into values the variant does not admit, possibly of
//! a different type, go through [`disable_type_check`](Collection::disable_type_check).

use alloc::boxed::Box;
use alloc::vec::{self, Vec};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::slice::Iter;

use crate::constraint::{check, Constraint, Unconstrained};
use crate::error::TypeConstraintViolation;
use crate::unchecked::Unchecked;
use crate::values::{Nullable, Values};

/// An immutable, fixed-size, ordered sequence whose elements all satisfy the
/// constraint `C`.
///
/// See the [module-level documentation](crate::collection) for more.
pub struct Collection<T, C: Constraint<T> = Unconstrained> {
    items: Box<[T]>,
    variant: PhantomData<fn() -> C>,
}

impl<T, C: Constraint<T>> Collection<T, C> {
    /// Wraps elements that are already known to satisfy `C`.
    #[inline]
    pub(crate) fn from_admitted(items: Vec<T>) -> Self {
        Collection {
            items: items.into_boxed_slice(),
            variant: PhantomData,
        }
    }

    /// Creates an empty collection. Always succeeds, whatever the variant.
    #[inline]
    pub fn empty() -> Self {
        Self::from_admitted(Vec::new())
    }

    /// Builds a collection from a fixed list of elements, in the order given.
    ///
    /// See also the [`collection!`](crate::collection!) macro.
    ///
    /// # Errors
    /// Fails if any element is rejected by `C`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::{element_constraint, Collection};
    ///
    /// element_constraint!(Odd: i32 = |n| n % 2 != 0);
    ///
    /// let c = Collection::<_, Odd>::new([1, 3, 5]).unwrap();
    /// assert_eq!(c.len(), 3);
    /// assert!(Collection::<_, Odd>::new([1, 2]).is_err());
    /// ```
    #[inline]
    pub fn new<const N: usize>(items: [T; N]) -> Result<Self, TypeConstraintViolation> {
        Self::try_from_iter(items)
    }

    /// Materializes any finite source into a new collection, taking elements
    /// in iteration order.
    ///
    /// Lazy iterators are consumed up to the first rejected element.
    ///
    /// # Errors
    /// Fails if any element is rejected by `C`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::try_from_iter((1..=4).map(|n| n * n)).unwrap();
    /// assert_eq!(c, [1, 4, 9, 16]);
    /// assert_eq!(c.capacity(), 4);
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(source: I) -> Result<Self, TypeConstraintViolation> {
        let iter = source.into_iter();
        let mut items = Vec::with_capacity(iter.size_hint().0);
        for (index, item) in iter.enumerate() {
            check::<T, C>(&item, index)?;
            items.push(item);
        }

        Ok(Self::from_admitted(items))
    }

    /// Materializes the values of a possibly keyed source, discarding keys.
    ///
    /// # Errors
    /// Fails if any value is rejected by `C`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    /// use std::collections::BTreeMap;
    ///
    /// let map: BTreeMap<_, _> = [("bar", "baz"), ("foo", "bar")].into_iter().collect();
    /// let c = AnyCollection::from_values(map).unwrap();
    /// assert_eq!(c, ["baz", "bar"]);
    /// ```
    #[inline]
    pub fn from_values<V: Values<Value = T>>(source: V) -> Result<Self, TypeConstraintViolation> {
        Self::try_from_iter(source.into_values())
    }

    /// Re-validates the elements against another variant `D`.
    ///
    /// This is how the result of a type-check bypass is brought back under a
    /// constraint.
    ///
    /// # Errors
    /// Fails if any element is rejected by `D`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::{element_constraint, AnyCollection, Collection};
    ///
    /// element_constraint!(Short: &'static str = |s| s.len() < 4);
    ///
    /// let words = AnyCollection::from(vec!["ant", "bee"]);
    /// let short: Collection<_, Short> = words.narrow().unwrap();
    /// assert_eq!(short, ["ant", "bee"]);
    /// ```
    #[inline]
    pub fn narrow<D: Constraint<T>>(self) -> Result<Collection<T, D>, TypeConstraintViolation> {
        Collection::try_from_iter(self.into_vec())
    }

    /// Returns the number of elements the collection can hold, which is always
    /// equal to its length.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Alias for [`len`](Collection::len).
    #[inline]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if the collection contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Extracts a slice containing the entire collection.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements, in order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the element at index 0, or [`None`] if the collection is empty.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// assert_eq!(AnyCollection::from(vec![7, 8]).first(), Some(&7));
    /// assert_eq!(AnyCollection::<u8>::empty().first(), None);
    /// ```
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Converts the collection into a `Vec` without copying.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_vec()
    }

    /// Left-folds the elements in order, starting from `initial`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![1, 2, 3]);
    /// assert_eq!(c.reduce(10, |acc, n| acc + n), 16);
    /// assert_eq!(c.reduce(String::new(), |acc, n| acc + &n.to_string()), "123");
    /// ```
    #[inline]
    pub fn reduce<A, F: FnMut(A, &T) -> A>(&self, initial: A, f: F) -> A {
        self.items.iter().fold(initial, f)
    }

    /// Applies `f` to every element in order, collecting the results into a
    /// collection of the same variant.
    ///
    /// # Errors
    /// Fails if any result is rejected by `C`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::{element_constraint, Collection};
    ///
    /// element_constraint!(Positive: i32 = |n| *n > 0);
    ///
    /// let c = Collection::<_, Positive>::new([1, 2, 3]).unwrap();
    /// assert_eq!(c.map(|n| n * 10).unwrap(), [10, 20, 30]);
    /// assert!(c.map(|n| n - 2).is_err());
    /// ```
    #[inline]
    pub fn map<F: FnMut(&T) -> T>(&self, f: F) -> Result<Self, TypeConstraintViolation> {
        Self::try_from_iter(self.items.iter().map(f))
    }

    /// Applies `f` to every element and concatenates the returned sources, in
    /// order, into a collection of the same variant. Exactly one level is
    /// flattened.
    ///
    /// To flatten a keyed source, return its values, e.g. with
    /// [`Values::into_values`].
    ///
    /// # Errors
    /// Fails if any produced element is rejected by `C`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![1, 10]);
    /// let spread = c.flat_map(|n| [n - 1, *n, n + 1]).unwrap();
    /// assert_eq!(spread, [0, 1, 2, 9, 10, 11]);
    /// ```
    #[inline]
    pub fn flat_map<I, F>(&self, f: F) -> Result<Self, TypeConstraintViolation>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(&T) -> I,
    {
        Self::try_from_iter(self.items.iter().flat_map(f))
    }
}

impl<T: Clone, C: Constraint<T>> Collection<T, C> {
    /// Copies the elements into a `Vec`.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.items.to_vec()
    }

    /// Returns a copy of the elements that is exempt from the variant's
    /// constraint for exactly one transformation.
    ///
    /// The returned [`Unchecked`] view only offers consuming transformations,
    /// each producing a base-variant collection. Use
    /// [`narrow`](Collection::narrow) on the result to constrain it again.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::{element_constraint, AnyCollection, Collection};
    ///
    /// element_constraint!(Vowel: char = |c| "aeiou".contains(*c));
    ///
    /// let vowels = Collection::<_, Vowel>::new(['a', 'e']).unwrap();
    /// let upper: AnyCollection<char> = vowels
    ///     .disable_type_check()
    ///     .map(|c| c.to_ascii_uppercase());
    /// assert_eq!(upper, ['A', 'E']);
    /// ```
    pub fn disable_type_check(&self) -> Unchecked<T> {
        tracing::trace!(constraint = C::NAME, len = self.len(), "bypassing collection constraint");
        Unchecked::new(Collection::from_admitted(self.to_vec()))
    }

    /// Returns a new collection containing the elements for which `predicate`
    /// returns `true`, re-indexed from 0. The predicate receives each element
    /// together with its index in the receiver.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec!['a', 'b', 'c', 'd']);
    /// assert_eq!(c.filter(|_, i| i % 2 == 1), ['b', 'd']);
    /// assert_eq!(c.filter(|ch, _| *ch > 'b'), ['c', 'd']);
    /// ```
    pub fn filter<F: FnMut(&T, usize) -> bool>(&self, mut predicate: F) -> Self {
        let kept = self
            .items
            .iter()
            .enumerate()
            .filter(|&(i, item)| predicate(item, i))
            .map(|(_, item)| item.clone())
            .collect();

        Self::from_admitted(kept)
    }

    /// Returns a new collection with `item` appended at index `len()`.
    ///
    /// # Errors
    /// Fails if `item` is rejected by `C`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![1, 2, 3]);
    /// let d = c.add(5).unwrap().add(5).unwrap().add(3).unwrap();
    /// assert_eq!(d.count(), 6);
    /// assert_eq!(d, [1, 2, 3, 5, 5, 3]);
    /// assert_eq!(c, [1, 2, 3]);
    /// ```
    pub fn add(&self, item: T) -> Result<Self, TypeConstraintViolation> {
        let len = self.len();
        check::<T, C>(&item, len)?;

        let mut items = Vec::with_capacity(len + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Ok(Self::from_admitted(items))
    }

    /// Returns the elements in order, skipping the first `skip` and keeping at
    /// most `max_items` of the rest (all of them if `max_items` is [`None`]).
    ///
    /// Out-of-range arguments are tolerated and simply produce fewer elements.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec!['a', 'b', 'c', 'd', 'e']);
    /// assert_eq!(c.slice(Some(3), 2), ['c', 'd', 'e']);
    /// assert_eq!(c.slice(Some(2), 1), ['b', 'c']);
    /// assert_eq!(c.slice(None, 2), ['c', 'd', 'e']);
    /// assert!(c.slice(None, 9).is_empty());
    /// ```
    pub fn slice(&self, max_items: Option<usize>, skip: usize) -> Self {
        let rest = self.items.get(skip..).unwrap_or_default();
        let end = max_items.map_or(rest.len(), |max| max.min(rest.len()));
        Self::from_admitted(rest[..end].to_vec())
    }

    /// Returns a new collection containing only the first element of every
    /// class of elements that `same` considers equivalent, in order of first
    /// occurrence.
    ///
    /// Each candidate is compared against the elements accepted so far, from
    /// the most recently accepted one backwards, stopping at the first match.
    /// `same` is called as `same(accepted, candidate)` and must be reflexive
    /// and symmetric for the result to be independent of that scan order.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![10, 11, 20, 25, 13]);
    /// let by_decade = c.unique_by(|a, b| a / 10 == b / 10);
    /// assert_eq!(by_decade, [10, 20]);
    /// ```
    pub fn unique_by<F: FnMut(&T, &T) -> bool>(&self, mut same: F) -> Self {
        let mut accepted: Vec<&T> = Vec::with_capacity(self.len());

        'candidates: for candidate in self.items.iter() {
            for &kept in accepted.iter().rev() {
                if same(kept, candidate) {
                    continue 'candidates;
                }
            }

            accepted.push(candidate);
        }

        Self::from_admitted(accepted.into_iter().cloned().collect())
    }

    /// Returns a new collection with the elements sorted by `compare`.
    ///
    /// The sort is stable: equivalent elements keep their relative order.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec!["ccc", "a", "bb", "d"]);
    /// assert_eq!(c.sort_by(|a, b| a.len().cmp(&b.len())), ["a", "d", "bb", "ccc"]);
    /// ```
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&self, compare: F) -> Self {
        let mut items = self.to_vec();
        items.sort_by(compare);
        Self::from_admitted(items)
    }

    /// Returns a new collection without the elements for which `is_null`
    /// holds.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![Some(1), None, Some(0), None]);
    /// assert_eq!(c.compact(), [Some(1), Some(0)]);
    /// ```
    pub fn compact(&self) -> Self
    where
        T: Nullable,
    {
        self.filter(|item, _| !item.is_null())
    }

    /// Concatenates the values of every element, one level deep and in order,
    /// into a collection of the same variant. Keys of keyed elements are
    /// discarded.
    ///
    /// The variant must constrain the flattened values as well; to flatten
    /// without checking them, go through
    /// [`disable_type_check`](Collection::disable_type_check).
    ///
    /// # Errors
    /// Fails if any flattened value is rejected by `C`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![vec!['a', 'b'], vec!['c', 'd']]);
    /// assert_eq!(c.flatten().unwrap(), ['a', 'b', 'c', 'd']);
    /// ```
    pub fn flatten(&self) -> Result<Collection<T::Value, C>, TypeConstraintViolation>
    where
        T: Values,
        C: Constraint<T::Value>,
    {
        Collection::try_from_iter(self.items.iter().cloned().flat_map(Values::into_values))
    }
}

impl<T: Clone + PartialEq, C: Constraint<T>> Collection<T, C> {
    /// Returns a new collection without any element equal to `element`.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![1, 2, 1, 3]);
    /// assert_eq!(c.remove(&1), [2, 3]);
    /// assert_eq!(c.remove(&9), c);
    /// ```
    pub fn remove(&self, element: &T) -> Self {
        self.filter(|item, _| item != element)
    }

    /// Returns a new collection containing the first occurrence of every
    /// distinct element, in order.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![1, 2, 2, 3, 1]);
    /// assert_eq!(c.unique(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn unique(&self) -> Self {
        self.unique_by(|a, b| a == b)
    }
}

impl<T: Clone + Ord, C: Constraint<T>> Collection<T, C> {
    /// Returns a new collection with the elements in ascending order.
    ///
    /// # Examples
    /// ```
    /// use fixed_collection::AnyCollection;
    ///
    /// let c = AnyCollection::from(vec![3, 1, 2]);
    /// assert_eq!(c.sort(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn sort(&self) -> Self {
        self.sort_by(Ord::cmp)
    }
}

impl<T, C: Constraint<T>> Default for Collection<T, C> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone, C: Constraint<T>> Clone for Collection<T, C> {
    #[inline]
    fn clone(&self) -> Self {
        Self::from_admitted(self.to_vec())
    }
}

impl<T: core::fmt::Debug, C: Constraint<T>> core::fmt::Debug for Collection<T, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Debug::fmt(self.as_slice(), f)
    }
}

impl<T: Hash, C: Constraint<T>> Hash for Collection<T, C> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        Hash::hash(self.as_slice(), state);
    }
}

impl<T, C: Constraint<T>> core::ops::Deref for Collection<T, C> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T, C: Constraint<T>> AsRef<[T]> for Collection<T, C> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<AT, AC, BT, BC> PartialEq<Collection<BT, BC>> for Collection<AT, AC>
where
    AT: PartialEq<BT>,
    AC: Constraint<AT>,
    BC: Constraint<BT>,
{
    #[inline]
    fn eq(&self, other: &Collection<BT, BC>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, C: Constraint<T>> Eq for Collection<T, C> {}

impl<V, T: PartialEq<V>, C: Constraint<T>> PartialEq<[V]> for Collection<T, C> {
    #[inline]
    fn eq(&self, other: &[V]) -> bool {
        self.as_slice() == other
    }
}

impl<V, T: PartialEq<V>, C: Constraint<T>> PartialEq<&[V]> for Collection<T, C> {
    #[inline]
    fn eq(&self, other: &&[V]) -> bool {
        self.as_slice() == *other
    }
}

impl<V, T: PartialEq<V>, C: Constraint<T>, const N: usize> PartialEq<[V; N]> for Collection<T, C> {
    #[inline]
    fn eq(&self, other: &[V; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<V, T: PartialEq<V>, C: Constraint<T>> PartialEq<Vec<V>> for Collection<T, C> {
    #[inline]
    fn eq(&self, other: &Vec<V>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T> FromIterator<T> for Collection<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_admitted(iter.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::from_admitted(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Collection<T> {
    #[inline]
    fn from(items: [T; N]) -> Self {
        Self::from_admitted(Vec::from(items))
    }
}

impl<T, C: Constraint<T>> From<Collection<T, C>> for Vec<T> {
    #[inline]
    fn from(collection: Collection<T, C>) -> Self {
        collection.into_vec()
    }
}

impl<T, C: Constraint<T>> IntoIterator for Collection<T, C> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T, C: Constraint<T>> IntoIterator for &'a Collection<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T, C: Constraint<T>> Values for Collection<T, C> {
    type Value = T;
    type IntoValues = vec::IntoIter<T>;

    #[inline]
    fn into_values(self) -> Self::IntoValues {
        self.into_iter()
    }
}
