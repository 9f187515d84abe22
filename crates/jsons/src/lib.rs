//! Dynamic, path-addressable JSON documents.
//!
//! [`Node`] holds any JSON value. Nested values are addressed with a path
//! of mixed array-index and object-field [`Key`]s, read with total
//! accessors that return a zero value instead of failing, and written in
//! place. [`Raw`] offers the same reads over undecoded bytes.
//!
//! # Example
//!
//! ```
//! use jsons::{path, Node};
//!
//! let mut doc = Node::decode_str(
//!     r#"{"key": ["hello", [1024, {"name": "seven", "age": 10240}]]}"#,
//! ).unwrap();
//!
//! assert_eq!(doc.string(&path!("key", 1, 1, "name")), "seven");
//! assert_eq!(doc.int(&path!("key", 1, 1, "age")), 10240);
//! assert!(!doc.exist(&path!("key", 1, 2)));
//!
//! doc.set(&path!("key", 0), "bye");
//! doc.delete(&path!("key", 1, 0));
//! assert_eq!(doc.to_json_string(), r#"{"key":["bye",[{"name":"seven","age":10240}]]}"#);
//! ```
//!
//! Numbers keep their literal text through decode and encode, so large
//! integers and long decimals round-trip exactly.

pub mod array;
pub mod cli;
pub mod codec;
mod coerce;
pub mod error;
pub mod kind;
mod navigate;
pub mod node;
pub mod normalize;
pub mod number;
pub mod object;
pub mod raw;
pub mod storage;

pub use array::Array;
pub use codec::EncodeOptions;
pub use error::{
    CoerceError, DecodeError, DecodeErrorCategory, EncodeError, NormalizeError, ParseNumberError,
    PathError,
};
pub use kind::NodeType;
pub use node::Node;
pub use normalize::{normalize, try_normalize};
pub use number::{is_json_number, Number};
pub use object::Object;
pub use raw::Raw;
pub use storage::Storage;

pub use jsons_path::{
    json_pointer, mysql_path, mysql_path_lossy, parse_segment, path, Key, KeyRef, Path,
};
