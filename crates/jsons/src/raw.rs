//! Lazily parsed JSON.
//!
//! A [`Raw`] holds JSON text that has not been decoded. Type checks look at
//! the first significant byte only. Path lookups descend one level at a
//! time, splitting the current container into borrowed sub-buffers and
//! keeping the selected child; sibling branches are never parsed. Scalar
//! accessors decode at the point of use and fall back to the zero value.

use indexmap::IndexMap;
use jsons_path::Key;
use serde::de::IgnoredAny;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

use crate::error::DecodeError;
use crate::number::is_json_number;
use crate::{Node, NodeType, Number};

fn is_whitespace(b: &u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Strip the JSON whitespace set from both ends.
fn trim(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !is_whitespace(b))
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !is_whitespace(b))
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

/// Classify by the first significant byte. `None` when the bytes cannot
/// be any JSON value.
fn classify(bytes: &[u8]) -> Option<NodeType> {
    let bytes = trim(bytes);
    match bytes.first() {
        None => Some(NodeType::Null),
        Some(b'{') => Some(NodeType::Object),
        Some(b'[') => Some(NodeType::Array),
        Some(b'"') => Some(NodeType::String),
        Some(b'-' | b'0'..=b'9') => is_json_number(bytes).then_some(NodeType::Number),
        Some(_) => match bytes {
            b"true" | b"false" => Some(NodeType::Bool),
            b"null" => Some(NodeType::Null),
            _ => None,
        },
    }
}

fn parse<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Option<T> {
    match serde_json::from_slice(bytes) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::trace!(error = %e, "raw decode failed");
            None
        }
    }
}

fn elements(bytes: &[u8]) -> Option<Vec<&RawValue>> {
    let bytes = trim(bytes);
    if bytes.first() != Some(&b'[') {
        return None;
    }
    parse(bytes)
}

fn members(bytes: &[u8]) -> Option<IndexMap<String, &RawValue>> {
    let bytes = trim(bytes);
    if bytes.first() != Some(&b'{') {
        return None;
    }
    parse(bytes)
}

fn child<'a>(bytes: &'a [u8], key: &Key) -> Option<&'a [u8]> {
    let raw = match key {
        Key::Index(i) => elements(bytes)?.get(*i).copied(),
        Key::Field(name) => members(bytes)?.get(name.as_str()).copied(),
    };
    raw.map(|r| r.get().as_bytes())
}

fn locate<'a>(bytes: &'a [u8], path: &[Key]) -> Option<&'a [u8]> {
    path.iter().try_fold(bytes, child)
}

fn decode_lossy(bytes: &[u8]) -> Node {
    let bytes = trim(bytes);
    if bytes.is_empty() {
        return Node::Null;
    }
    parse(bytes).unwrap_or_default()
}

/// Undecoded JSON bytes.
///
/// An empty (or whitespace-only) buffer reads as `null`. A buffer is not
/// validated on construction; [`Raw::is_valid`] performs a full syntax
/// check.
///
/// ```
/// use jsons::{path, Raw};
///
/// let raw = Raw::from(r#"{"user": {"id": 42, "tags": ["a", "b"]}, "blob": [1, 2, 3]}"#);
/// assert!(raw.is_object());
/// assert_eq!(raw.int(&path!("user", "id")), 42);
/// assert_eq!(raw.get(&path!("user", "tags")).as_bytes(), br#"["a", "b"]"#);
/// assert!(!raw.exist(&path!("user", "name")));
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Raw(Vec<u8>);

impl Raw {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Raw(bytes.into())
    }

    /// The literal `null`.
    pub fn null() -> Self {
        Raw(b"null".to_vec())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// True when the buffer holds only whitespace.
    pub fn is_blank(&self) -> bool {
        trim(&self.0).is_empty()
    }

    /// Full syntax check of the whole buffer.
    pub fn is_valid(&self) -> bool {
        serde_json::from_slice::<IgnoredAny>(&self.0).is_ok()
    }

    /// Type of the buffer, judged lexically. Unclassifiable bytes are
    /// [`NodeType::Undefined`].
    pub fn kind(&self) -> NodeType {
        classify(&self.0).unwrap_or(NodeType::Undefined)
    }

    pub fn is_null(&self) -> bool {
        self.kind() == NodeType::Null
    }

    pub fn is_bool(&self) -> bool {
        self.kind() == NodeType::Bool
    }

    pub fn is_number(&self) -> bool {
        self.kind() == NodeType::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind() == NodeType::String
    }

    pub fn is_array(&self) -> bool {
        self.kind() == NodeType::Array
    }

    pub fn is_object(&self) -> bool {
        self.kind() == NodeType::Object
    }

    /// The sub-buffer at `path`, or `None` when it does not resolve.
    pub fn find(&self, path: &[Key]) -> Option<Raw> {
        locate(&self.0, path).map(|b| Raw(b.to_vec()))
    }

    /// The sub-buffer at `path`, or an empty buffer.
    pub fn get(&self, path: &[Key]) -> Raw {
        self.find(path).unwrap_or_default()
    }

    pub fn exist(&self, path: &[Key]) -> bool {
        locate(&self.0, path).is_some()
    }

    pub fn type_of(&self, path: &[Key]) -> NodeType {
        locate(&self.0, path)
            .and_then(classify)
            .unwrap_or(NodeType::Undefined)
    }

    fn node_at(&self, path: &[Key]) -> Node {
        locate(&self.0, path).map_or(Node::Null, decode_lossy)
    }

    pub fn bool(&self, path: &[Key]) -> bool {
        self.node_at(path).to_bool()
    }

    pub fn int(&self, path: &[Key]) -> i64 {
        self.node_at(path).to_int()
    }

    pub fn uint(&self, path: &[Key]) -> u64 {
        self.node_at(path).to_uint()
    }

    pub fn float(&self, path: &[Key]) -> f64 {
        self.node_at(path).to_float()
    }

    pub fn number(&self, path: &[Key]) -> Number {
        self.node_at(path).to_number().clone()
    }

    pub fn string(&self, path: &[Key]) -> String {
        match self.node_at(path) {
            Node::String(s) => s,
            _ => String::new(),
        }
    }

    /// Elements of the array at `path`, each left undecoded.
    pub fn array(&self, path: &[Key]) -> Vec<Raw> {
        locate(&self.0, path)
            .and_then(elements)
            .map(|items| {
                items
                    .into_iter()
                    .map(|r| Raw::from(r.get()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Members of the object at `path`, each left undecoded.
    pub fn object(&self, path: &[Key]) -> IndexMap<String, Raw> {
        locate(&self.0, path)
            .and_then(members)
            .map(|map| {
                map.into_iter()
                    .map(|(k, r)| (k, Raw::from(r.get())))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Same rule as [`Node::len`], applied at `path`.
    pub fn len(&self, path: &[Key]) -> usize {
        let Some(bytes) = locate(&self.0, path) else {
            return 0;
        };
        match classify(bytes) {
            Some(NodeType::Array) => elements(bytes).map_or(0, |v| v.len()),
            Some(NodeType::Object) => members(bytes).map_or(0, |m| m.len()),
            Some(NodeType::String) => parse::<String>(trim(bytes)).map_or(0, |s| s.len()),
            _ => 0,
        }
    }

    /// Member names of the object at `path`.
    pub fn keys(&self, path: &[Key]) -> Vec<String> {
        locate(&self.0, path)
            .and_then(members)
            .map(|m| m.into_keys().collect())
            .unwrap_or_default()
    }

    /// Decode the whole buffer, or `null` when it does not parse.
    pub fn to_node(&self) -> Node {
        decode_lossy(&self.0)
    }

    /// Decode the whole buffer. A blank buffer is `null`.
    pub fn try_to_node(&self) -> Result<Node, DecodeError> {
        if self.is_blank() {
            return Ok(Node::Null);
        }
        Node::decode(&self.0)
    }

    /// The buffer, with a blank buffer reading as `null`.
    pub fn json(&self) -> &[u8] {
        if self.is_blank() {
            b"null"
        } else {
            &self.0
        }
    }
}

impl Node {
    /// Encode into a [`Raw`].
    pub fn to_raw(&self) -> Raw {
        Raw(self.to_json())
    }
}

impl From<&Node> for Raw {
    fn from(node: &Node) -> Self {
        node.to_raw()
    }
}

impl From<Vec<u8>> for Raw {
    fn from(bytes: Vec<u8>) -> Self {
        Raw(bytes)
    }
}

impl From<&[u8]> for Raw {
    fn from(bytes: &[u8]) -> Self {
        Raw(bytes.to_vec())
    }
}

impl From<&str> for Raw {
    fn from(text: &str) -> Self {
        Raw(text.as_bytes().to_vec())
    }
}

impl From<String> for Raw {
    fn from(text: String) -> Self {
        Raw(text.into_bytes())
    }
}

impl fmt::Debug for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Raw({})", String::from_utf8_lossy(&self.0))
    }
}

/// Embedded verbatim. A blank buffer serializes as `null`.
impl Serialize for Raw {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_blank() {
            return serializer.serialize_unit();
        }
        let text = std::str::from_utf8(&self.0).map_err(S::Error::custom)?;
        let raw = RawValue::from_string(text.to_owned()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Raw {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Ok(Raw::from(raw.get()))
    }
}
