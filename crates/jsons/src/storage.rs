//! Persistence boundary for relational JSON columns.
//!
//! A column value is JSON bytes, or absent (SQL `NULL`). Absent columns
//! load as the zero value of the target type.

use crate::error::{DecodeError, EncodeError};
use crate::{Array, Node, Number, Object, Raw};

/// A value stored in a JSON column.
///
/// ```
/// use jsons::{Node, Storage};
///
/// assert_eq!(<Node as Storage>::KIND, "json");
/// let node = Node::from_storage(Some(br#"{"a": 1}"#.as_slice())).unwrap();
/// assert_eq!(node.to_storage().unwrap(), br#"{"a":1}"#);
/// assert!(Node::from_storage(None).unwrap().is_null());
/// ```
pub trait Storage: Sized {
    /// Column type to declare in schemas.
    const KIND: &'static str = "json";

    fn to_storage(&self) -> Result<Vec<u8>, EncodeError>;

    /// Load from column bytes; `None` stands for SQL `NULL`.
    fn from_storage(src: Option<&[u8]>) -> Result<Self, DecodeError>;
}

macro_rules! impl_storage {
    ($($t:ty),*) => {
        $(
            impl Storage for $t {
                fn to_storage(&self) -> Result<Vec<u8>, EncodeError> {
                    Ok(serde_json::to_vec(self)?)
                }

                fn from_storage(src: Option<&[u8]>) -> Result<Self, DecodeError> {
                    match src {
                        Some(bytes) => Ok(serde_json::from_slice(bytes)?),
                        None => Ok(<$t>::default()),
                    }
                }
            }
        )*
    };
}

impl_storage!(Node, Number, Array, Object, bool, String);

/// Bytes are stored as given after a syntax check; a blank buffer stores
/// as `null`.
impl Storage for Raw {
    fn to_storage(&self) -> Result<Vec<u8>, EncodeError> {
        if self.is_blank() {
            return Ok(b"null".to_vec());
        }
        serde_json::from_slice::<serde::de::IgnoredAny>(self.as_bytes())?;
        Ok(self.as_bytes().to_vec())
    }

    fn from_storage(src: Option<&[u8]>) -> Result<Self, DecodeError> {
        match src {
            Some(bytes) => {
                serde_json::from_slice::<serde::de::IgnoredAny>(bytes)?;
                Ok(Raw::from(bytes))
            }
            None => Ok(Raw::null()),
        }
    }
}
