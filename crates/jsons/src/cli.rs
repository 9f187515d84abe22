//! Core logic of the `jsons-get` binary.
//!
//! `jsons-get [--type] <segment>...` reads a document from stdin and prints
//! the node at the given path. Segments that are canonical non-negative
//! integers address array elements; everything else is a member name.

use jsons_path::{parse_segment, Path};
use thiserror::Error;

use crate::codec::EncodeOptions;
use crate::error::{DecodeError, EncodeError};
use crate::{Node, NodeType};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("{0}")]
    Encode(#[from] EncodeError),
    /// The path does not resolve; the binary prints `undefined`.
    #[error("undefined")]
    Undefined,
}

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Print the node type instead of the value.
    pub type_only: bool,
    pub path: Path,
}

impl Args {
    /// `--type` may appear anywhere; `--` ends flag parsing so a member can
    /// be literally named `--type`.
    pub fn parse<I, S>(args: I) -> Args
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Args::default();
        let mut flags = true;
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--type" if flags => parsed.type_only = true,
                "--" if flags => flags = false,
                segment => parsed.path.push(parse_segment(segment)),
            }
        }
        parsed
    }
}

/// Resolve `args.path` in `doc` and render the result.
pub fn lookup(doc: &[u8], args: &Args) -> Result<String, CliError> {
    let root = Node::decode(doc)?;
    if args.type_only {
        return match root.type_of(&args.path) {
            NodeType::Undefined => Err(CliError::Undefined),
            kind => Ok(kind.to_string()),
        };
    }
    let node = root.find(&args.path).ok_or(CliError::Undefined)?;
    let out = node.encode_with(&EncodeOptions::pretty())?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsons_path::{path, Key};

    const DOC: &[u8] = br#"{"key": ["hello", [1024, {"name": "seven", "age": 10240}]], "01": true}"#;

    #[test]
    fn test_parse_args() {
        let args = Args::parse(["key", "--type", "1", "01", "--", "--type"]);
        assert!(args.type_only);
        assert_eq!(
            args.path,
            path!("key", 1, "01", "--type")
        );
        assert_eq!(args.path[2], Key::field("01"));
    }

    #[test]
    fn test_lookup_value_and_type() {
        let args = Args::parse(["key", "1", "1", "name"]);
        assert_eq!(lookup(DOC, &args).unwrap(), "\"seven\"");

        let args = Args::parse(["--type", "key", "1"]);
        assert_eq!(lookup(DOC, &args).unwrap(), "array");

        let args = Args::parse(["01"]);
        assert_eq!(lookup(DOC, &args).unwrap(), "true");

        let args = Args::parse(["key", "1", "0"]);
        assert_eq!(lookup(DOC, &args).unwrap(), "1024");
    }

    #[test]
    fn test_lookup_pretty_prints_containers() {
        let args = Args::parse(["key", "1", "1"]);
        assert_eq!(
            lookup(DOC, &args).unwrap(),
            "{\n  \"name\": \"seven\",\n  \"age\": 10240\n}"
        );
    }

    #[test]
    fn test_lookup_errors() {
        let args = Args::parse(["key", "9"]);
        assert!(matches!(lookup(DOC, &args), Err(CliError::Undefined)));
        assert_eq!(CliError::Undefined.to_string(), "undefined");

        let args = Args::parse(["--type", "nope"]);
        assert!(matches!(lookup(DOC, &args), Err(CliError::Undefined)));

        assert!(matches!(lookup(b"{", &Args::default()), Err(CliError::Decode(_))));
    }
}
