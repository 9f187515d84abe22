//! Path navigation over a [`Node`] tree.
//!
//! Keys are consumed left to right. An index key descends into an array
//! element that is in range, a field key descends into an object member
//! that exists, and every other combination is "missing". Navigation never
//! fails; it only reports absence.

use jsons_path::{Key, Path};

use crate::error::PathError;
use crate::node::NULL;
use crate::{Node, NodeType};

fn step<'a>(node: &'a Node, key: &Key) -> Option<&'a Node> {
    match (node, key) {
        (Node::Array(a), Key::Index(i)) => a.get(*i),
        (Node::Object(o), Key::Field(name)) => o.get(name.as_str()),
        _ => None,
    }
}

fn step_mut<'a>(node: &'a mut Node, key: &Key) -> Option<&'a mut Node> {
    match (node, key) {
        (Node::Array(a), Key::Index(i)) => a.get_mut(*i),
        (Node::Object(o), Key::Field(name)) => o.get_mut(name.as_str()),
        _ => None,
    }
}

impl Node {
    /// Locate a descendant, or `None` when any step is missing.
    ///
    /// The empty path resolves to `self`.
    pub fn find(&self, path: &[Key]) -> Option<&Node> {
        path.iter().try_fold(self, step)
    }

    /// Locate a descendant, or a shared `null` when the path is missing.
    ///
    /// ```
    /// use jsons::{path, Node};
    ///
    /// let doc = Node::decode_str(r#"{"a": [10, {"b": "x"}]}"#).unwrap();
    /// assert_eq!(doc.get(&path!("a", 1, "b")).to_str(), "x");
    /// assert!(doc.get(&path!("a", 5)).is_null());
    /// ```
    pub fn get(&self, path: &[Key]) -> &Node {
        self.find(path).unwrap_or(&NULL)
    }

    pub fn get_mut(&mut self, path: &[Key]) -> Option<&mut Node> {
        path.iter().try_fold(self, step_mut)
    }

    /// True when every step of `path` resolves. A member holding `null`
    /// exists; the empty path always exists.
    pub fn exist(&self, path: &[Key]) -> bool {
        self.find(path).is_some()
    }

    /// The type at `path`, or [`NodeType::Undefined`] when it is missing.
    pub fn type_of(&self, path: &[Key]) -> NodeType {
        self.find(path).map_or(NodeType::Undefined, Node::kind)
    }

    /// [`Node::len`] of the node at `path`; 0 when missing.
    pub fn len_at(&self, path: &[Key]) -> usize {
        self.get(path).len()
    }

    /// Write `value` at `path`.
    ///
    /// The parent of the last key must already exist. An object parent
    /// gains or overwrites the member; an array parent has the slot
    /// assigned only when the index is in range. The empty path replaces
    /// the whole document. Intermediate containers are never created.
    ///
    /// Rejected writes leave the tree unchanged; see [`Node::try_set`] for
    /// the reason.
    ///
    /// ```
    /// use jsons::{path, Node, Object};
    ///
    /// let mut doc = Node::Object(Object::new());
    /// doc.set(&path!("a", "b"), "c");
    /// assert!(!doc.exist(&path!("a")));
    ///
    /// doc.set(&path!("a"), Object::new());
    /// doc.set(&path!("a", "b"), "c");
    /// assert_eq!(doc.get(&path!("a", "b")).to_str(), "c");
    /// ```
    pub fn set(&mut self, path: &[Key], value: impl Into<Node>) {
        if let Err(e) = self.try_set(path, value) {
            tracing::trace!(error = %e, path = %Path::from(path), "set ignored");
        }
    }

    /// Like [`Node::set`], but reports why a write was rejected.
    pub fn try_set(&mut self, path: &[Key], value: impl Into<Node>) -> Result<(), PathError> {
        let Some((last, parent_path)) = path.split_last() else {
            *self = value.into();
            return Ok(());
        };
        let parent = self.get_mut(parent_path).ok_or(PathError::MissingParent)?;
        match (parent, last) {
            (Node::Object(o), Key::Field(name)) => {
                o.insert(name.as_str(), value);
                Ok(())
            }
            (Node::Array(a), Key::Index(i)) => {
                let len = a.len();
                let slot = a
                    .get_mut(*i)
                    .ok_or(PathError::IndexOutOfRange { index: *i, len })?;
                *slot = value.into();
                Ok(())
            }
            (parent, key) => Err(PathError::KindMismatch {
                key: key.clone(),
                found: parent.kind(),
            }),
        }
    }

    /// Remove the node at `path` and return it.
    ///
    /// Object members are removed by key. Array elements are removed with
    /// later elements shifting left. A missing target is a no-op. The empty
    /// path resets the document to `null`.
    pub fn delete(&mut self, path: &[Key]) -> Option<Node> {
        let Some((last, parent_path)) = path.split_last() else {
            return Some(self.take());
        };
        match (self.get_mut(parent_path)?, last) {
            (Node::Object(o), Key::Field(name)) => o.remove(name.as_str()),
            (Node::Array(a), Key::Index(i)) => a.remove(*i),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsons_path::path;

    fn doc() -> Node {
        Node::decode_str(r#"{"key": ["hello", [1024, {"name": "seven", "age": 10240}]], "nil": null}"#)
            .unwrap()
    }

    #[test]
    fn test_find_and_get() {
        let d = doc();
        assert_eq!(d.get(&path!("key", 1, 1, "name")).to_str(), "seven");
        assert_eq!(d.find(&path!()), Some(&d));
        assert!(d.find(&path!("key", 9)).is_none());
        assert!(d.find(&path!("key", "0")).is_none());
        assert!(d.find(&path!("key", 0, 0)).is_none());
        assert!(d.get(&path!("missing", "deeper", 3)).is_null());
    }

    #[test]
    fn test_exist_and_type_of() {
        let d = doc();
        assert!(d.exist(&path!()));
        assert!(d.exist(&path!("nil")));
        assert!(!d.exist(&path!("key", 1, 2)));
        assert_eq!(d.type_of(&path!("nil")), NodeType::Null);
        assert_eq!(d.type_of(&path!("key")), NodeType::Array);
        assert_eq!(d.type_of(&path!("key", 1, 1)), NodeType::Object);
        assert_eq!(d.type_of(&path!("nope")), NodeType::Undefined);
    }

    #[test]
    fn test_len_at() {
        let d = doc();
        assert_eq!(d.len_at(&path!("key")), 2);
        assert_eq!(d.len_at(&path!("key", 0)), 5);
        assert_eq!(d.len_at(&path!("key", 1, 1)), 2);
        assert_eq!(d.len_at(&path!("missing")), 0);
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut d = doc();
        if let Some(n) = d.get_mut(&path!("key", 0)) {
            *n = Node::from("bye");
        }
        assert_eq!(d.get(&path!("key", 0)).to_str(), "bye");
    }

    #[test]
    fn test_try_set_reasons() {
        let mut d = doc();
        assert_eq!(d.try_set(&path!("x", "y"), 1i64), Err(PathError::MissingParent));
        assert_eq!(
            d.try_set(&path!("key", 7), 1i64),
            Err(PathError::IndexOutOfRange { index: 7, len: 2 })
        );
        assert_eq!(
            d.try_set(&path!("key", "name"), 1i64),
            Err(PathError::KindMismatch {
                key: Key::field("name"),
                found: NodeType::Array
            })
        );
        assert_eq!(d.try_set(&path!("key", 0), 1i64), Ok(()));
        assert_eq!(d.get(&path!("key", 0)).to_int(), 1);
    }

    #[test]
    fn test_set_root() {
        let mut d = doc();
        d.set(&path!(), "replaced");
        assert_eq!(d, Node::from("replaced"));
    }

    #[test]
    fn test_delete() {
        let mut d = doc();
        assert_eq!(d.delete(&path!("key", 0)), Some(Node::from("hello")));
        assert_eq!(d.len_at(&path!("key")), 1);
        assert!(d.get(&path!("key", 0)).is_array());

        assert_eq!(d.delete(&path!("key", 4)), None);
        assert_eq!(d.len_at(&path!("key")), 1);

        assert_eq!(d.delete(&path!("nil")), Some(Node::Null));
        assert!(!d.exist(&path!("nil")));

        assert_eq!(d.delete(&path!("missing", "x")), None);

        d.delete(&path!());
        assert!(d.is_null());
    }
}
