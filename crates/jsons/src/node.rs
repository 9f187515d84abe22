//! The document value.

use std::cmp::Ordering;
use std::ops::ControlFlow;
use std::sync::OnceLock;

use jsons_path::KeyRef;

use crate::{Array, NodeType, Number, Object};

pub(crate) static NULL: Node = Node::Null;
static EMPTY_ARRAY: Array = Array::new();
static EMPTY_OBJECT: OnceLock<Object> = OnceLock::new();
static ZERO: OnceLock<Number> = OnceLock::new();

/// Any JSON value.
///
/// A node is exactly one of six variants and owns all of its children.
/// `clone()` produces a fully independent deep copy.
///
/// Projections such as [`Node::as_array`] or [`Node::to_str`] never fail:
/// on a variant mismatch they hand back the zero value of the requested
/// shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Node {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Array),
    Object(Object),
}

impl Node {
    pub fn kind(&self) -> NodeType {
        match self {
            Node::Null => NodeType::Null,
            Node::Bool(_) => NodeType::Bool,
            Node::Number(_) => NodeType::Number,
            Node::String(_) => NodeType::String,
            Node::Array(_) => NodeType::Array,
            Node::Object(_) => NodeType::Object,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Node::Bool(_))
    }

    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Node::String(_))
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Element count for arrays, key count for objects, byte length for
    /// strings and 0 for everything else.
    pub fn len(&self) -> usize {
        match self {
            Node::String(s) => s.len(),
            Node::Array(a) => a.len(),
            Node::Object(o) => o.len(),
            Node::Null | Node::Bool(_) | Node::Number(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The array, or a shared empty array for any other variant.
    pub fn as_array(&self) -> &Array {
        match self {
            Node::Array(a) => a,
            _ => &EMPTY_ARRAY,
        }
    }

    /// The object, or a shared empty object for any other variant.
    pub fn as_object(&self) -> &Object {
        match self {
            Node::Object(o) => o,
            _ => EMPTY_OBJECT.get_or_init(Object::new),
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Node::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Node::Object(o) => Some(o),
            _ => None,
        }
    }

    /// String content, or `""`.
    pub fn to_str(&self) -> &str {
        match self {
            Node::String(s) => s.as_str(),
            _ => "",
        }
    }

    /// Boolean content, or `false`.
    pub fn to_bool(&self) -> bool {
        matches!(self, Node::Bool(true))
    }

    /// The number itself, or `0`. Numeric strings are not converted here;
    /// see [`Node::try_to_number`] for that.
    pub fn to_number(&self) -> &Number {
        match self {
            Node::Number(n) => n,
            _ => ZERO.get_or_init(Number::zero),
        }
    }

    /// Visit the direct children of a container.
    ///
    /// Arrays are visited in index order, objects in map order. Returning
    /// `ControlFlow::Break` stops the walk. The result is `true` when every
    /// child was visited and `false` when the visitor broke early or the
    /// node is not a container.
    ///
    /// ```
    /// use jsons::Node;
    /// use std::ops::ControlFlow;
    ///
    /// let doc = Node::decode_str("[1, 2, 3]").unwrap();
    /// let mut seen = 0;
    /// let done = doc.range(|_, v| {
    ///     seen += 1;
    ///     if v.to_int() == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
    /// });
    /// assert!(!done);
    /// assert_eq!(seen, 2);
    /// ```
    pub fn range<F>(&self, mut visit: F) -> bool
    where
        F: FnMut(KeyRef<'_>, &Node) -> ControlFlow<()>,
    {
        let flow = match self {
            Node::Array(a) => a
                .iter()
                .enumerate()
                .try_for_each(|(i, v)| visit(KeyRef::Index(i), v)),
            Node::Object(o) => o
                .iter()
                .try_for_each(|(k, v)| visit(KeyRef::Field(k.as_str()), v)),
            _ => return false,
        };
        flow.is_continue()
    }

    /// Sort an array in place. No-op on other variants.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Node, &Node) -> Ordering,
    {
        if let Node::Array(a) = self {
            a.sort_by(compare);
        }
    }

    /// Reverse an array in place. No-op on other variants.
    pub fn reverse(&mut self) {
        if let Node::Array(a) = self {
            a.reverse();
        }
    }

    /// Replace the node with `Null`, returning the previous value.
    pub fn take(&mut self) -> Node {
        std::mem::take(self)
    }
}
