//! MySQL JSON path expressions.
//!
//! A path renders as a single-quoted SQL literal starting at `$`, with
//! fields as quoted member names and indices in brackets, for example
//! `'$."a".[1]."b"'`. The empty path renders as the empty string so the
//! caller can omit the argument altogether.

use serde_json::Value;
use std::fmt;

use crate::Key;

/// Render keys as a MySQL JSON path literal.
///
/// ```
/// use jsons_path::{mysql_path, path};
///
/// assert_eq!(mysql_path(&path!()), "");
/// assert_eq!(mysql_path(&path!("a", 1, "b")), r#"'$."a".[1]."b"'"#);
/// ```
pub fn mysql_path(keys: &[Key]) -> String {
    if keys.is_empty() {
        return String::new();
    }
    let mut out = String::from("'$");
    for key in keys {
        push_segment(&mut out, key);
    }
    out.push('\'');
    out
}

/// Render dynamic segments as a MySQL JSON path literal.
///
/// Strings render as members and integers (negative ones included) as
/// indices. Any other segment is skipped. A non-empty input always renders
/// at least `'$'`.
///
/// ```
/// use jsons_path::mysql_path_lossy;
/// use serde_json::json;
///
/// assert_eq!(mysql_path_lossy(&[json!(true)]), "'$'");
/// assert_eq!(mysql_path_lossy(&[json!("a"), json!(1.2), json!(1)]), r#"'$."a".[1]'"#);
/// assert_eq!(mysql_path_lossy(&[json!(-1), json!("a")]), r#"'$.[-1]."a"'"#);
/// ```
pub fn mysql_path_lossy(segments: &[Value]) -> String {
    if segments.is_empty() {
        return String::new();
    }
    let mut out = String::from("'$");
    for segment in segments {
        match segment {
            Value::String(name) => push_field(&mut out, name),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    push_index(&mut out, i);
                } else if let Some(u) = n.as_u64() {
                    push_index(&mut out, u);
                }
            }
            _ => {}
        }
    }
    out.push('\'');
    out
}

fn push_segment(out: &mut String, key: &Key) {
    match key {
        Key::Index(i) => push_index(out, i),
        Key::Field(name) => push_field(out, name),
    }
}

fn push_index(out: &mut String, i: impl fmt::Display) {
    out.push_str(&format!(".[{i}]"));
}

fn push_field(out: &mut String, name: &str) {
    out.push('.');
    out.push_str(&quote(name));
}

/// Double-quote a member name with JSON string escapes. A single quote
/// would terminate the surrounding SQL literal, so it is escaped as well.
fn quote(name: &str) -> String {
    let quoted = match serde_json::to_string(name) {
        Ok(s) => s,
        Err(_) => format!("\"{name}\""),
    };
    quoted.replace('\'', "\\u0027")
}
