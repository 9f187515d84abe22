//! Error types.
//!
//! Only the codec boundary (decode, encode, normalize, storage) produces
//! errors on the default code paths. Navigation and coercion are total; the
//! strict `try_*` variants report [`CoerceError`] and [`PathError`] for
//! callers who need to tell "absent" from "wrong type".

use jsons_path::Key;
use thiserror::Error;

use crate::kind::NodeType;

/// Malformed JSON input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeError {
    /// 1-based line of the offending byte, 0 when unknown.
    pub line: usize,
    /// 1-based column of the offending byte, 0 when unknown.
    pub column: usize,
    pub category: DecodeErrorCategory,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorCategory {
    /// Input is not syntactically valid JSON.
    Syntax,
    /// Valid JSON of the wrong shape for the requested type.
    Data,
    /// Input ended before a complete value.
    Eof,
    Io,
}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;
        let category = match e.classify() {
            Category::Syntax => DecodeErrorCategory::Syntax,
            Category::Data => DecodeErrorCategory::Data,
            Category::Eof => DecodeErrorCategory::Eof,
            Category::Io => DecodeErrorCategory::Io,
        };
        DecodeError {
            line: e.line(),
            column: e.column(),
            category,
            message: e.to_string(),
        }
    }
}

/// A value that could not be serialized.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ENCODE: {0}")]
pub struct EncodeError(pub String);

impl From<serde_json::Error> for EncodeError {
    fn from(e: serde_json::Error) -> Self {
        EncodeError(e.to_string())
    }
}

/// A native value with no document representation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("NORMALIZE: {0}")]
pub struct NormalizeError(pub String);

/// Text that does not satisfy the JSON number grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid JSON number literal: {0:?}")]
pub struct ParseNumberError(pub String);

/// Why a strict coercion failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoerceError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("TYPE_MISMATCH: expected {expected}, found {found}")]
    TypeMismatch { expected: NodeType, found: NodeType },
    #[error("OUT_OF_RANGE: {literal} does not fit {target}")]
    OutOfRange {
        literal: String,
        target: &'static str,
    },
}

/// Why a strict write was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("MISSING_PARENT")]
    MissingParent,
    #[error("KIND_MISMATCH: key {key} against {found}")]
    KindMismatch { key: Key, found: NodeType },
    #[error("INDEX_OUT_OF_RANGE: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
