//! Owned navigation paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

use crate::Key;

/// An ordered sequence of [`Key`]s identifying a descendant of a document.
///
/// Derefs to `[Key]`, so a `&Path` can be passed anywhere a `&[Key]` is
/// expected.
///
/// ```
/// use jsons_path::{path, Key, Path};
///
/// let built = Path::root().key("users").index(0).key("name");
/// assert_eq!(built, path!("users", 0, "name"));
/// assert_eq!(built.to_string(), "$.users[0].name");
/// assert_eq!(built[1], Key::Index(0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Key>);

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The empty path, addressing the document root.
    #[inline]
    pub fn root() -> Self {
        Self::new()
    }

    #[inline]
    pub fn from_keys(keys: Vec<Key>) -> Self {
        Self(keys)
    }

    /// Append a field segment (builder).
    #[inline]
    pub fn key(mut self, name: impl Into<String>) -> Self {
        self.0.push(Key::Field(name.into()));
        self
    }

    /// Append an index segment (builder).
    #[inline]
    pub fn index(mut self, i: usize) -> Self {
        self.0.push(Key::Index(i));
        self
    }

    #[inline]
    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Key> {
        self.0.pop()
    }

    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    #[inline]
    pub fn into_keys(self) -> Vec<Key> {
        self.0
    }

    /// The path without its last segment, or `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        match self.0.split_last() {
            Some((_, init)) => Some(Path(init.to_vec())),
            None => None,
        }
    }

    /// Concatenate two paths.
    pub fn join(&self, other: &[Key]) -> Path {
        let mut keys = Vec::with_capacity(self.0.len() + other.len());
        keys.extend_from_slice(&self.0);
        keys.extend_from_slice(other);
        Path(keys)
    }

    /// Check whether `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &[Key]) -> bool {
        other.starts_with(&self.0)
    }
}

impl Deref for Path {
    type Target = [Key];

    fn deref(&self) -> &[Key] {
        &self.0
    }
}

impl AsRef<[Key]> for Path {
    fn as_ref(&self) -> &[Key] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for key in &self.0 {
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl From<Vec<Key>> for Path {
    fn from(keys: Vec<Key>) -> Self {
        Path(keys)
    }
}

impl From<&[Key]> for Path {
    fn from(keys: &[Key]) -> Self {
        Path(keys.to_vec())
    }
}

impl FromIterator<Key> for Path {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl IntoIterator for Path {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build a [`Path`] from string (field) and `usize` (index) segments.
///
/// ```
/// use jsons_path::{path, Key};
///
/// let p = path!("key", 1, 1, "name");
/// assert_eq!(p.len(), 4);
/// assert_eq!(p[0], Key::field("key"));
/// assert_eq!(p[2], Key::Index(1));
/// assert!(path!().is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($crate::Key::from($seg));
        )+
        p
    }};
}
