//! JSON text encoding and decoding.
//!
//! Decoding walks the document through borrowed `RawValue` slices, one
//! container level at a time, so every number is stored as the exact text
//! it was written with and re-encodes unchanged.

use indexmap::IndexMap;
use serde::de::{DeserializeOwned, Error as _};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value;
use std::fmt;

use crate::error::{DecodeError, EncodeError};
use crate::{Array, Node, Number, Object};

/// Output options for [`Node::encode_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Indent with two spaces and put each member on its own line.
    pub pretty: bool,
    /// Emit object members ordered by key, for byte-stable output.
    pub sort_keys: bool,
}

impl EncodeOptions {
    pub fn pretty() -> Self {
        EncodeOptions {
            pretty: true,
            ..Default::default()
        }
    }

    pub fn sorted() -> Self {
        EncodeOptions {
            sort_keys: true,
            ..Default::default()
        }
    }
}

impl Node {
    /// Parse a complete JSON document. Trailing non-whitespace is an error.
    pub fn decode(bytes: &[u8]) -> Result<Node, DecodeError> {
        let raw: &RawValue = serde_json::from_slice(bytes)?;
        Ok(Node::from_raw_value(raw)?)
    }

    pub fn decode_str(text: &str) -> Result<Node, DecodeError> {
        Node::decode(text.as_bytes())
    }

    /// Compact JSON bytes.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        self.encode_with(&EncodeOptions::default())
    }

    pub fn encode_with(&self, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
        if options.sort_keys {
            write(&SortedKeys(self), options.pretty)
        } else {
            write(self, options.pretty)
        }
    }

    /// Compact JSON bytes, or `null` if encoding fails.
    pub fn to_json(&self) -> Vec<u8> {
        self.encode().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "encode failed, writing null");
            b"null".to_vec()
        })
    }

    pub fn to_json_string(&self) -> String {
        String::from_utf8(self.to_json()).unwrap_or_else(|_| String::from("null"))
    }

    /// Decode into a typed record, the reverse of [`crate::normalize`].
    ///
    /// ```
    /// use jsons::{path, Node};
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct User { name: String, age: u32 }
    ///
    /// let doc = Node::decode_str(r#"{"user": {"name": "ann", "age": 30}}"#).unwrap();
    /// let user: User = doc.get(&path!("user")).to_typed().unwrap();
    /// assert_eq!(user.name, "ann");
    /// assert_eq!(user.age, 30);
    /// ```
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        Ok(serde_json::from_slice(&self.to_json())?)
    }

    /// Build a node from one already validated JSON value.
    fn from_raw_value(raw: &RawValue) -> Result<Node, serde_json::Error> {
        let text = raw.get();
        match text.as_bytes().first() {
            Some(b'{') => {
                let members: IndexMap<String, &RawValue> = serde_json::from_str(text)?;
                members
                    .into_iter()
                    .map(|(k, v)| Node::from_raw_value(v).map(|node| (k, node)))
                    .collect::<Result<Object, _>>()
                    .map(Node::Object)
            }
            Some(b'[') => {
                let items: Vec<&RawValue> = serde_json::from_str(text)?;
                items
                    .into_iter()
                    .map(Node::from_raw_value)
                    .collect::<Result<Array, _>>()
                    .map(Node::Array)
            }
            Some(b'"') => serde_json::from_str(text).map(Node::String),
            Some(b't') => Ok(Node::Bool(true)),
            Some(b'f') => Ok(Node::Bool(false)),
            Some(b'n') => Ok(Node::Null),
            _ => text
                .parse()
                .map(Node::Number)
                .map_err(serde_json::Error::custom),
        }
    }

    /// Convert to a `serde_json::Value`. Numbers keep their value; exponent
    /// literals come back in serde_json's spelling (`1e3` as `1e+3`).
    pub fn to_value(&self) -> Value {
        match self {
            Node::Null => Value::Null,
            Node::Bool(b) => Value::Bool(*b),
            Node::Number(n) => n.to_serde().map_or(Value::Null, Value::Number),
            Node::String(s) => Value::String(s.clone()),
            Node::Array(a) => Value::Array(a.iter().map(Node::to_value).collect()),
            Node::Object(o) => Value::Object(
                o.iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect(),
            ),
        }
    }
}

fn write<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>, EncodeError> {
    let out = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    Ok(out)
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Array(a) => a.serialize(serializer),
            Node::Object(o) => o.serialize(serializer),
        }
    }
}

/// Serializes a node with every object's members ordered by key.
struct SortedKeys<'a>(&'a Node);

impl Serialize for SortedKeys<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Node::Array(a) => {
                let mut seq = serializer.serialize_seq(Some(a.len()))?;
                for item in a {
                    seq.serialize_element(&SortedKeys(item))?;
                }
                seq.end()
            }
            Node::Object(o) => {
                let mut map = serializer.serialize_map(Some(o.len()))?;
                for (k, v) in o.sorted() {
                    map.serialize_entry(k, &SortedKeys(v))?;
                }
                map.end()
            }
            other => other.serialize(serializer),
        }
    }
}

/// Works with serde_json deserializers, including `Value`.
impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Node::from_raw_value(&raw).map_err(D::Error::custom)
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => Node::Number(Number::from_serde(&n)),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => Node::Object(map.into_iter().collect()),
        }
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.to_value()
    }
}

/// Compact JSON.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
