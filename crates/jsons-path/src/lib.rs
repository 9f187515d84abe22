//! Path segments for `jsons` documents.
//!
//! A path is an ordered sequence of [`Key`]s, each either an array index or
//! an object field name. This crate owns the segment types and the pure
//! formatting utilities that turn a path into another syntax.
//!
//! # Example
//!
//! ```
//! use jsons_path::{json_pointer, mysql_path, path, Path};
//!
//! let p = path!("a", 1, "b");
//! assert_eq!(mysql_path(&p), r#"'$."a".[1]."b"'"#);
//! assert_eq!(json_pointer(&p), "/a/1/b");
//! assert_eq!(Path::parse_pointer("/a/1/b"), p);
//! ```

pub mod key;
pub mod mysql;
pub mod path;
pub mod pointer;

pub use key::{Key, KeyRef};
pub use mysql::{mysql_path, mysql_path_lossy};
pub use path::Path;
pub use pointer::{escape_component, is_valid_index, json_pointer, parse_segment, unescape_component};
