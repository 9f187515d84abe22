//! Node type classification.

use std::fmt;

/// Classification of a resolved path.
///
/// `Undefined` means the path resolved to nothing at all, which is distinct
/// from a present JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
    Undefined,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Object => "object",
            NodeType::Array => "array",
            NodeType::String => "string",
            NodeType::Number => "number",
            NodeType::Bool => "bool",
            NodeType::Null => "null",
            NodeType::Undefined => "undefined",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
