//! Generic collections and stack-traced errors.
//!
//! This crate gathers the [`set`] and [`traceback`] crates behind a single dependency.

pub use set::Set;
pub use traceback;

/// Creates a [`Set`] holding the given elements.
///
/// ```
/// let set = collections::new_set([1, 2, 3]);
///
/// assert!(set.contains(&2));
/// assert_eq!(set, collections::Set::from([3, 2, 1]));
/// ```
#[inline]
#[must_use]
pub fn new_set<T, I>(elements: I) -> Set<T>
where
    T: Eq + core::hash::Hash,
    I: IntoIterator<Item = T>,
{
    elements.into_iter().collect()
}
