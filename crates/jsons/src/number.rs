//! Decimal-preserving JSON numbers.
//!
//! A [`Number`] keeps the literal text it was decoded from, so large
//! integers and long fractions survive a decode/encode round trip
//! character for character. Conversions to native numeric types happen on
//! demand.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseNumberError;

/// Check `bytes` against the JSON number grammar:
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`.
///
/// No surrounding whitespace is accepted.
pub fn is_json_number(bytes: &[u8]) -> bool {
    let mut pos = 0;
    let peek = |pos: usize| bytes.get(pos).copied();

    if peek(pos) == Some(b'-') {
        pos += 1;
    }

    // Integer part
    match peek(pos) {
        Some(b'0') => {
            pos += 1;
        }
        Some(b'1'..=b'9') => {
            pos += 1;
            while let Some(b'0'..=b'9') = peek(pos) {
                pos += 1;
            }
        }
        _ => return false,
    }

    // Fraction
    if peek(pos) == Some(b'.') {
        pos += 1;
        if !matches!(peek(pos), Some(b'0'..=b'9')) {
            return false;
        }
        while let Some(b'0'..=b'9') = peek(pos) {
            pos += 1;
        }
    }

    // Exponent
    if let Some(b'e') | Some(b'E') = peek(pos) {
        pos += 1;
        if let Some(b'+') | Some(b'-') = peek(pos) {
            pos += 1;
        }
        if !matches!(peek(pos), Some(b'0'..=b'9')) {
            return false;
        }
        while let Some(b'0'..=b'9') = peek(pos) {
            pos += 1;
        }
    }

    pos == bytes.len()
}

// i64::MIN is exactly representable; i64::MAX + 1 is the exclusive bound.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;
const U64_UPPER: f64 = 18_446_744_073_709_551_616.0;

fn integral(text: &str) -> Option<f64> {
    let f = text.parse::<f64>().ok()?;
    (f.is_finite() && f.fract() == 0.0).then_some(f)
}

/// Parse a number literal as `i64`. Integral floats (`1e3`, `2.0`) are
/// accepted when in range.
pub(crate) fn parse_i64(text: &str) -> Option<i64> {
    if let Ok(i) = text.parse::<i64>() {
        return Some(i);
    }
    let f = integral(text)?;
    (I64_LOWER..I64_UPPER).contains(&f).then_some(f as i64)
}

/// Parse a number literal as `u64`, with the same integral-float rule.
pub(crate) fn parse_u64(text: &str) -> Option<u64> {
    if let Ok(u) = text.parse::<u64>() {
        return Some(u);
    }
    let f = integral(text)?;
    (0.0..U64_UPPER).contains(&f).then_some(f as u64)
}

pub(crate) fn parse_f64(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// A JSON number held as its literal text.
///
/// The text always satisfies [`is_json_number`]. The default value is `0`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// The literal `0`, returned by total coercions on mismatch.
    pub fn zero() -> Self {
        Number("0".to_string())
    }

    /// Build from a float. Non-finite values have no JSON form.
    pub fn from_f64(f: f64) -> Option<Self> {
        serde_json::Number::from_f64(f).map(|n| Number(n.to_string()))
    }

    pub(crate) fn from_serde(n: &serde_json::Number) -> Self {
        Number(n.to_string())
    }

    pub(crate) fn to_serde(&self) -> Option<serde_json::Number> {
        serde_json::from_str(&self.0).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True when the literal has no fraction or exponent part.
    pub fn is_integer(&self) -> bool {
        !self.0.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }

    pub fn to_i64(&self) -> Option<i64> {
        parse_i64(&self.0)
    }

    pub fn to_u64(&self) -> Option<u64> {
        parse_u64(&self.0)
    }

    pub fn to_f64(&self) -> Option<f64> {
        parse_f64(&self.0)
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::zero()
    }
}

impl FromStr for Number {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_json_number(s.as_bytes()) {
            Ok(Number(s.to_string()))
        } else {
            Err(ParseNumberError(s.to_string()))
        }
    }
}

impl TryFrom<String> for Number {
    type Error = ParseNumberError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_json_number(s.as_bytes()) {
            Ok(Number(s))
        } else {
            Err(ParseNumberError(s))
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.0)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(i: $t) -> Self {
                    Number(i.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Written verbatim by serde_json serializers.
impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.0.clone()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        raw.get().parse().map_err(D::Error::custom)
    }
}
