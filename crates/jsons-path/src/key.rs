//! Path segments.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// A single navigation step: an array index or an object field name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// Array element access.
    Index(usize),
    /// Object member access.
    Field(String),
}

impl Key {
    /// Create a field segment.
    #[inline]
    pub fn field(name: impl Into<String>) -> Self {
        Key::Field(name.into())
    }

    /// Create an index segment.
    #[inline]
    pub fn index(i: usize) -> Self {
        Key::Index(i)
    }

    #[inline]
    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    #[inline]
    pub fn is_field(&self) -> bool {
        matches!(self, Key::Field(_))
    }

    #[inline]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Field(_) => None,
        }
    }

    #[inline]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Key::Field(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    /// Borrow this key as a [`KeyRef`].
    #[inline]
    pub fn as_key_ref(&self) -> KeyRef<'_> {
        match self {
            Key::Index(i) => KeyRef::Index(*i),
            Key::Field(name) => KeyRef::Field(name),
        }
    }

    /// Interpret a dynamic JSON value as a path segment.
    ///
    /// Strings become fields and non-negative integers become indices.
    /// Everything else (negative or fractional numbers, booleans, null,
    /// containers) has no segment form and yields `None`.
    ///
    /// ```
    /// use jsons_path::Key;
    /// use serde_json::json;
    ///
    /// assert_eq!(Key::from_value(&json!("a")), Some(Key::field("a")));
    /// assert_eq!(Key::from_value(&json!(3)), Some(Key::Index(3)));
    /// assert_eq!(Key::from_value(&json!(-1)), None);
    /// assert_eq!(Key::from_value(&json!(1.5)), None);
    /// ```
    pub fn from_value(value: &Value) -> Option<Key> {
        match value {
            Value::String(s) => Some(Key::Field(s.clone())),
            Value::Number(n) => n
                .as_u64()
                .and_then(|u| usize::try_from(u).ok())
                .map(Key::Index),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_key_ref().fmt(f)
    }
}

// Serialized as a bare string or integer. Deserialization goes through
// `Value` so it keeps working when `arbitrary_precision` is enabled.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Key::Index(i) => serializer.serialize_u64(*i as u64),
            Key::Field(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Key::from_value(&value)
            .ok_or_else(|| D::Error::custom("expected a string or non-negative integer segment"))
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Field(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Field(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Field(s.clone())
    }
}

impl From<KeyRef<'_>> for Key {
    fn from(k: KeyRef<'_>) -> Self {
        k.to_key()
    }
}

/// A borrowed path segment, handed to iteration visitors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyRef<'a> {
    Index(usize),
    Field(&'a str),
}

impl KeyRef<'_> {
    pub fn to_key(self) -> Key {
        match self {
            KeyRef::Index(i) => Key::Index(i),
            KeyRef::Field(name) => Key::Field(name.to_owned()),
        }
    }
}

impl fmt::Display for KeyRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRef::Index(i) => write!(f, "[{i}]"),
            KeyRef::Field(name) => write!(f, ".{name}"),
        }
    }
}
