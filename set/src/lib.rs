//! An unordered collection of unique elements that renders deterministically.

mod element;

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasherDefault, Hash};

use rustc_hash::FxHasher;

pub use element::{Address, Element, Text};

// Insertion order of the storage is incidental. Removal swaps the last element
// into the hole, so nothing downstream may depend on iteration order.
type Storage<E> = indexmap::IndexSet<E, BuildHasherDefault<FxHasher>>;

/// A collection holding each distinct element at most once.
///
/// Membership is key presence in the storage; an absent key is the only
/// "not present" state. [`Display`](fmt::Display) sorts the rendered elements,
/// which makes the output independent of insertion order.
#[derive(Clone)]
pub struct Set<E> {
    elements: Storage<E>,
}

impl<E> Default for Set<E> {
    fn default() -> Self {
        Self {
            elements: Storage::default(),
        }
    }
}

impl<E> Set<E> {
    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates in unspecified order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, E> {
        self.elements.iter()
    }
}

impl<E: Element> Set<E> {
    /// Builds a set from `elements`; later duplicates collapse into the first.
    pub fn new(elements: impl IntoIterator<Item = E>) -> Self {
        elements.into_iter().collect()
    }

    /// Returns `false` and leaves the set untouched if `element` is already present.
    pub fn insert(&mut self, element: E) -> bool {
        self.elements.insert(element)
    }

    /// Returns `false` if `element` was not present.
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.swap_remove(element)
    }

    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }

    /// Copies the elements into a fresh vector, in unspecified order.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.elements.iter().cloned().collect()
    }
}

impl<E: Element> fmt::Display for Set<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = self
            .elements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        rendered.sort_unstable();
        f.write_str(&rendered.join(", "))
    }
}

impl<E: fmt::Debug> fmt::Debug for Set<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.elements).finish()
    }
}

impl<E: Element> PartialEq for Set<E> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<E: Element> Eq for Set<E> {}

impl<E: Element> FromIterator<E> for Set<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<E: Element> Extend<E> for Set<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<E: Element, const N: usize> From<[E; N]> for Set<E> {
    fn from(elements: [E; N]) -> Self {
        Self::new(elements)
    }
}

impl<E> IntoIterator for Set<E> {
    type Item = E;
    type IntoIter = indexmap::set::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a Set<E> {
    type Item = &'a E;
    type IntoIter = indexmap::set::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
