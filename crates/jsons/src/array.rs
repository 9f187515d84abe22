//! Ordered sequence of nodes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::ops::Index;

use crate::Node;

/// A JSON array.
///
/// Wraps `Vec<Node>` and adds the bounds-checked, never-panicking helpers
/// the document model needs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Array(Vec<Node>);

impl Array {
    #[inline]
    pub const fn new() -> Self {
        Array(Vec::new())
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Array(Vec::with_capacity(capacity))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.0.capacity()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.0.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.0.get_mut(index)
    }

    pub fn push(&mut self, value: impl Into<Node>) {
        self.0.push(value.into());
    }

    /// Move every element of `other` onto the end of `self`.
    pub fn append(&mut self, other: Array) {
        self.0.extend(other.0);
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left. Out of range returns `None` and leaves the array unchanged.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Copy of the elements in `begin..end`, with both bounds clamped to
    /// the array length.
    ///
    /// ```
    /// use jsons::Array;
    ///
    /// let a: Array = vec![1i64, 2, 3].into();
    /// assert_eq!(a.slice(1, 10).len(), 2);
    /// assert!(a.slice(3, 1).is_empty());
    /// ```
    pub fn slice(&self, begin: usize, end: usize) -> Array {
        let end = end.min(self.0.len());
        let begin = begin.min(end);
        Array(self.0[begin..end].to_vec())
    }

    /// Position of the first element structurally equal to `value`.
    pub fn index_of(&self, value: &Node) -> Option<usize> {
        self.0.iter().position(|v| v == value)
    }

    pub fn contains(&self, value: &Node) -> bool {
        self.index_of(value).is_some()
    }

    pub fn reverse(&mut self) {
        self.0.reverse();
    }

    /// Stable in-place sort.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Node, &Node) -> Ordering,
    {
        self.0.sort_by(compare);
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Node> {
        self.0.iter_mut()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Node> {
        self.0
    }
}

impl Index<usize> for Array {
    type Output = Node;

    /// Out-of-range indices yield `null` rather than panicking.
    fn index(&self, index: usize) -> &Node {
        self.0.get(index).unwrap_or(&crate::node::NULL)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Array {
    fn from(items: Vec<T>) -> Self {
        Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> FromIterator<T> for Array {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> Extend<T> for Array {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Node;
    type IntoIter = std::vec::IntoIter<Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Array {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Array {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Node>::deserialize(deserializer).map(Array)
    }
}
