//! Total coercions to native types.
//!
//! Every `to_*` conversion and every path accessor (`int`, `string`, ...)
//! returns the zero value of its target when the node is missing or has
//! the wrong shape. The `try_*` forms report [`CoerceError`] instead.
//!
//! Numbers coerce to integers by exact parse first, then through a float
//! that must be integral and in range, so `1e3` is `1000` and `1.5` is not
//! an integer. Strings that satisfy the JSON number grammar coerce the same
//! way. Nothing else is numeric.

use jsons_path::Key;

use crate::error::CoerceError;
use crate::number::{is_json_number, parse_f64, parse_i64, parse_u64};
use crate::{Array, Node, NodeType, Number, Object};

impl Node {
    fn numeric_text(&self) -> Result<&str, CoerceError> {
        match self {
            Node::Number(n) => Ok(n.as_str()),
            Node::String(s) if is_json_number(s.as_bytes()) => Ok(s.as_str()),
            other => Err(CoerceError::TypeMismatch {
                expected: NodeType::Number,
                found: other.kind(),
            }),
        }
    }

    pub fn try_to_int(&self) -> Result<i64, CoerceError> {
        let text = self.numeric_text()?;
        parse_i64(text).ok_or_else(|| CoerceError::OutOfRange {
            literal: text.to_string(),
            target: "i64",
        })
    }

    pub fn try_to_uint(&self) -> Result<u64, CoerceError> {
        let text = self.numeric_text()?;
        parse_u64(text).ok_or_else(|| CoerceError::OutOfRange {
            literal: text.to_string(),
            target: "u64",
        })
    }

    pub fn try_to_float(&self) -> Result<f64, CoerceError> {
        let text = self.numeric_text()?;
        parse_f64(text).ok_or_else(|| CoerceError::OutOfRange {
            literal: text.to_string(),
            target: "f64",
        })
    }

    /// The number, or a numeric string read as one.
    pub fn try_to_number(&self) -> Result<Number, CoerceError> {
        match self {
            Node::Number(n) => Ok(n.clone()),
            other => {
                let text = other.numeric_text()?;
                text.parse().map_err(|_| CoerceError::TypeMismatch {
                    expected: NodeType::Number,
                    found: NodeType::String,
                })
            }
        }
    }

    pub fn try_to_bool(&self) -> Result<bool, CoerceError> {
        match self {
            Node::Bool(b) => Ok(*b),
            other => Err(CoerceError::TypeMismatch {
                expected: NodeType::Bool,
                found: other.kind(),
            }),
        }
    }

    pub fn try_to_str(&self) -> Result<&str, CoerceError> {
        match self {
            Node::String(s) => Ok(s.as_str()),
            other => Err(CoerceError::TypeMismatch {
                expected: NodeType::String,
                found: other.kind(),
            }),
        }
    }

    /// Integer value, or 0.
    pub fn to_int(&self) -> i64 {
        self.try_to_int().unwrap_or_default()
    }

    /// Unsigned integer value, or 0. Negative numbers are 0.
    pub fn to_uint(&self) -> u64 {
        self.try_to_uint().unwrap_or_default()
    }

    /// Float value, or 0.0.
    pub fn to_float(&self) -> f64 {
        self.try_to_float().unwrap_or_default()
    }

    pub fn bool(&self, path: &[Key]) -> bool {
        self.get(path).to_bool()
    }

    pub fn int(&self, path: &[Key]) -> i64 {
        self.get(path).to_int()
    }

    pub fn uint(&self, path: &[Key]) -> u64 {
        self.get(path).to_uint()
    }

    pub fn float(&self, path: &[Key]) -> f64 {
        self.get(path).to_float()
    }

    pub fn number(&self, path: &[Key]) -> &Number {
        self.get(path).to_number()
    }

    pub fn string(&self, path: &[Key]) -> &str {
        self.get(path).to_str()
    }

    pub fn array(&self, path: &[Key]) -> &Array {
        self.get(path).as_array()
    }

    pub fn object(&self, path: &[Key]) -> &Object {
        self.get(path).as_object()
    }

    fn resolve(&self, path: &[Key]) -> Result<&Node, CoerceError> {
        self.find(path).ok_or(CoerceError::NotFound)
    }

    pub fn try_bool(&self, path: &[Key]) -> Result<bool, CoerceError> {
        self.resolve(path)?.try_to_bool()
    }

    /// Strict integer lookup.
    ///
    /// ```
    /// use jsons::{path, CoerceError, Node};
    ///
    /// let doc = Node::decode_str(r#"{"n": "42", "s": "x"}"#).unwrap();
    /// assert_eq!(doc.try_int(&path!("n")), Ok(42));
    /// assert!(matches!(doc.try_int(&path!("s")), Err(CoerceError::TypeMismatch { .. })));
    /// assert_eq!(doc.try_int(&path!("z")), Err(CoerceError::NotFound));
    /// ```
    pub fn try_int(&self, path: &[Key]) -> Result<i64, CoerceError> {
        self.resolve(path)?.try_to_int()
    }

    pub fn try_uint(&self, path: &[Key]) -> Result<u64, CoerceError> {
        self.resolve(path)?.try_to_uint()
    }

    pub fn try_float(&self, path: &[Key]) -> Result<f64, CoerceError> {
        self.resolve(path)?.try_to_float()
    }

    pub fn try_number(&self, path: &[Key]) -> Result<Number, CoerceError> {
        self.resolve(path)?.try_to_number()
    }

    pub fn try_string(&self, path: &[Key]) -> Result<&str, CoerceError> {
        self.resolve(path)?.try_to_str()
    }
}
