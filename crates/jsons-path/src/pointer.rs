//! JSON Pointer (RFC 6901) formatting and parsing for [`Key`] paths.

use crate::{Key, Path};

/// Unescape a pointer component: `~1` becomes `/`, `~0` becomes `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escape a pointer component: `~` becomes `~0`, `/` becomes `~1`.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Check if a component is a canonical non-negative array index
/// (no sign, no leading zeros).
pub fn is_valid_index(component: &str) -> bool {
    if component.is_empty() {
        return false;
    }
    let bytes = component.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}

/// Interpret a free-form segment: canonical integers become indices,
/// everything else is a field name.
pub fn parse_segment(segment: &str) -> Key {
    if is_valid_index(segment) {
        if let Ok(i) = segment.parse::<usize>() {
            return Key::Index(i);
        }
    }
    Key::Field(segment.to_string())
}

/// Format keys as a JSON Pointer. The root path formats as `""`.
///
/// ```
/// use jsons_path::{json_pointer, path};
///
/// assert_eq!(json_pointer(&path!()), "");
/// assert_eq!(json_pointer(&path!("a/b", 0, "~")), "/a~1b/0/~0");
/// ```
pub fn json_pointer(keys: &[Key]) -> String {
    let mut out = String::new();
    for key in keys {
        out.push('/');
        match key {
            Key::Index(i) => out.push_str(&i.to_string()),
            Key::Field(name) => out.push_str(&escape_component(name)),
        }
    }
    out
}

impl Path {
    /// Parse a JSON Pointer into a path.
    ///
    /// Components that look like canonical array indices become
    /// [`Key::Index`]; since a pointer does not say whether `"0"` addresses
    /// an array slot or an object member, navigating such a path against
    /// an object keyed `"0"` reports absence. A pointer without a leading
    /// `/` is read as if it had one.
    ///
    /// ```
    /// use jsons_path::{path, Path};
    ///
    /// assert_eq!(Path::parse_pointer(""), path!());
    /// assert_eq!(Path::parse_pointer("/a/0/b~1c"), path!("a", 0, "b/c"));
    /// assert_eq!(Path::parse_pointer("/a/-1"), path!("a", "-1"));
    /// ```
    pub fn parse_pointer(pointer: &str) -> Path {
        if pointer.is_empty() {
            return Path::root();
        }
        let body = pointer.strip_prefix('/').unwrap_or(pointer);
        body.split('/')
            .map(|c| parse_segment(&unescape_component(c)))
            .collect()
    }
}
