//! A generic, unordered collection of distinct elements.
//!
//! [`Set`] is backed by a [`HashSet`] and exposes the usual set algebra. Operations combining two
//! sets ([`union`](Set::union), [`intersection`](Set::intersection), ...) leave both operands
//! untouched and return a new set.

use core::fmt;
use core::hash::Hash;
use std::collections::{hash_set, HashSet};

use derive_more::From;

/// A set of distinct elements.
#[derive(Clone, From)]
pub struct Set<T> {
    data: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { data: HashSet::new() }
    }

    /// Adds an element, returning `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, element: T) -> bool {
        self.data.insert(element)
    }

    /// Adds every given element.
    #[inline]
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        self.data.extend(elements);
    }

    /// Removes an element, returning `false` if it was not present.
    #[inline]
    pub fn remove(&mut self, element: &T) -> bool {
        self.data.remove(element)
    }

    /// Removes every given element. Absent elements are ignored.
    #[inline]
    pub fn remove_all<'elements, I: IntoIterator<Item = &'elements T>>(&mut self, elements: I)
    where
        T: 'elements,
    {
        for element in elements {
            self.data.remove(element);
        }
    }

    /// Returns `true` if `element` belongs to the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.data.contains(element)
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the set has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Iterates over the elements, in no particular order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns `true` if every element of `self` belongs to `other`.
    #[inline]
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.data.is_subset(&other.data)
    }

    /// Returns `true` if every element of `other` belongs to `self`.
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.data.is_superset(&other.data)
    }

    /// Returns `true` if the sets have no element in common.
    #[inline]
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.data.is_disjoint(&other.data)
    }
}

impl<T: Clone + Eq + Hash> Set<T> {
    /// Returns the elements, in no particular order.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.data.iter().cloned().collect()
    }

    /// Adds every element of `other` to `self`.
    #[inline]
    pub fn merge(&mut self, other: &Self) {
        self.data.extend(other.data.iter().cloned());
    }

    /// Returns the elements belonging to `self` or `other`.
    #[inline]
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.merge(other);
        result
    }

    /// Returns the elements belonging to both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.data.intersection(&other.data).cloned().collect()
    }

    /// Returns the elements of `self` that do not belong to `other`.
    #[inline]
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.data.difference(&other.data).cloned().collect()
    }

    /// Returns the elements belonging to exactly one of `self` and `other`.
    #[inline]
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.data.symmetric_difference(&other.data).cloned().collect()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Two sets are equal when they have the same elements.
impl<T: Eq + Hash> PartialEq for Set<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.data.iter().all(|element| other.contains(element))
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.data.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'set, T> IntoIterator for &'set Set<T> {
    type Item = &'set T;
    type IntoIter = hash_set::Iter<'set, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
