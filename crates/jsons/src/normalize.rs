//! Conversions from native Rust values into [`Node`].
//!
//! Plain values go through `From`. Anything implementing `Serialize`
//! (records, enums, nested collections) goes through [`normalize`], which
//! maps structs to objects keyed by field name.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::error::NormalizeError;
use crate::{Array, Node, Number, Object};

/// Convert any serializable value into a node.
///
/// Never fails: a value serde cannot represent as JSON (a map with
/// non-string keys that cannot be stringified, a failing `Serialize`
/// impl) becomes `null`. Use [`try_normalize`] to see the error.
///
/// ```
/// use jsons::{normalize, path};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct User { name: &'static str, tags: Vec<u8> }
///
/// let node = normalize(&User { name: "ann", tags: vec![1, 2] });
/// assert_eq!(node.string(&path!("name")), "ann");
/// assert_eq!(node.int(&path!("tags", 1)), 2);
/// ```
pub fn normalize<T: Serialize + ?Sized>(value: &T) -> Node {
    try_normalize(value).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "normalize fell back to null");
        Node::Null
    })
}

pub fn try_normalize<T: Serialize + ?Sized>(value: &T) -> Result<Node, NormalizeError> {
    serde_json::to_value(value)
        .map(Node::from)
        .map_err(|e| NormalizeError(e.to_string()))
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Node {
                fn from(i: $t) -> Self {
                    Node::Number(Number::from(i))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Non-finite values become `null`.
impl From<f64> for Node {
    fn from(f: f64) -> Self {
        Number::from_f64(f).map_or(Node::Null, Node::Number)
    }
}

/// Non-finite values become `null`. Uses the shortest `f32` text, so
/// `0.1f32` is `0.1` rather than its widened `f64` expansion.
impl From<f32> for Node {
    fn from(f: f32) -> Self {
        if !f.is_finite() {
            return Node::Null;
        }
        f.to_string().parse().map_or(Node::Null, Node::Number)
    }
}

impl From<Number> for Node {
    fn from(n: Number) -> Self {
        Node::Number(n)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_owned())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

impl From<&String> for Node {
    fn from(s: &String) -> Self {
        Node::String(s.clone())
    }
}

impl From<Array> for Node {
    fn from(a: Array) -> Self {
        Node::Array(a)
    }
}

impl From<Object> for Node {
    fn from(o: Object) -> Self {
        Node::Object(o)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(items: Vec<T>) -> Self {
        Node::Array(Array::from(items))
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(value: Option<T>) -> Self {
        value.map_or(Node::Null, Into::into)
    }
}

impl<K: Into<String>, V: Into<Node>, S: BuildHasher> From<HashMap<K, V, S>> for Node {
    fn from(map: HashMap<K, V, S>) -> Self {
        Node::Object(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Node>> From<BTreeMap<K, V>> for Node {
    fn from(map: BTreeMap<K, V>) -> Self {
        Node::Object(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Node>, S: BuildHasher> From<IndexMap<K, V, S>> for Node {
    fn from(map: IndexMap<K, V, S>) -> Self {
        Node::Object(map.into_iter().collect())
    }
}

impl<T: Into<Node>> FromIterator<T> for Node {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Node::Array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsons_path::path;
    use serde::ser::{Error as _, Serializer};
    use std::collections::BTreeMap;

    #[test]
    fn test_from_scalars() {
        assert_eq!(Node::from(true), Node::Bool(true));
        assert_eq!(Node::from(7u8).to_json_string(), "7");
        assert_eq!(Node::from(-7i32).to_json_string(), "-7");
        assert_eq!(Node::from(u64::MAX).to_json_string(), "18446744073709551615");
        assert_eq!(Node::from(1.5f64).to_json_string(), "1.5");
        assert_eq!(Node::from(0.1f32).to_json_string(), "0.1");
        assert!(Node::from(f64::NAN).is_null());
        assert!(Node::from(f32::NEG_INFINITY).is_null());
        assert_eq!(Node::from(None::<i64>), Node::Null);
        assert_eq!(Node::from(Some("x")), Node::from("x"));
    }

    #[test]
    fn test_from_collections() {
        let mut map = BTreeMap::new();
        map.insert("b", vec![1i64, 2]);
        map.insert("a", vec![]);
        let node = Node::from(map);
        assert_eq!(node.to_json_string(), r#"{"a":[],"b":[1,2]}"#);

        let node: Node = ["x", "y"].into_iter().collect();
        assert_eq!(node.to_json_string(), r#"["x","y"]"#);
    }

    #[derive(Serialize)]
    struct Attrs {
        color: String,
        size: Option<u32>,
        nested: Inner,
    }

    #[derive(Serialize)]
    struct Inner {
        weights: Vec<f64>,
    }

    #[test]
    fn test_normalize_record() {
        let node = normalize(&Attrs {
            color: "red".into(),
            size: None,
            nested: Inner {
                weights: vec![0.5, 2.0],
            },
        });
        assert_eq!(node.string(&path!("color")), "red");
        assert!(node.exist(&path!("size")));
        assert!(node.get(&path!("size")).is_null());
        assert_eq!(node.float(&path!("nested", "weights", 0)), 0.5);
    }

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("unsupported"))
        }
    }

    #[test]
    fn test_normalize_failure() {
        assert!(normalize(&Broken).is_null());
        let err = try_normalize(&Broken).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }
}
