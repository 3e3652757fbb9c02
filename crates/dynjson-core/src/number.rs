//! Exact numeric storage and coercion.
//!
//! A [`Number`] keeps the decimal literal's digits exactly as they were decoded,
//! so integers wider than an `f64` mantissa survive untouched until a caller
//! asks for a concrete type. Exponents are stored in the decoder's spelling
//! (lowercase `e` with an explicit sign), whichever way a number was built. Integer coercions are exact: the literal must denote a whole
//! number (after applying any exponent) that fits the target width. The only
//! lossy path is [`Number::to_f64`].
//!
//! Numbers built from a native `f64` (see [`Number::from_f64`]) remember that
//! origin. Asking one of those for an integer truncates toward zero instead of
//! failing, so `2.9` becomes `2` and `-2.9` becomes `-2`.

use crate::error::{DynJsonError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A JSON number stored as its exact decimal literal.
#[derive(Debug, Clone)]
pub struct Number {
    text: String,
    native_float: bool,
}

impl Number {
    /// Wrap a literal the JSON decoder has already validated.
    pub(crate) fn from_literal(text: String) -> Self {
        Self {
            text,
            native_float: false,
        }
    }

    /// Build a float-typed number. Returns `None` for NaN and infinities,
    /// which JSON cannot represent.
    pub fn from_f64(f: f64) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }
        let text = f.to_string();
        Some(Self {
            text: canonical(&text).unwrap_or(text),
            native_float: true,
        })
    }

    /// The literal text, exactly as stored.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether this number was built from a native `f64`.
    pub fn is_native_float(&self) -> bool {
        self.native_float
    }

    /// Signed 64-bit coercion.
    pub fn to_i64(&self) -> Result<i64> {
        if self.native_float {
            let t = self.truncated()?;
            if (-9_223_372_036_854_775_808.0..9_223_372_036_854_775_808.0).contains(&t) {
                return Ok(t as i64);
            }
            return Err(mismatch("i64"));
        }
        exact_integer(&self.text)
            .and_then(|n| i64::try_from(n).ok())
            .ok_or_else(|| mismatch("i64"))
    }

    /// Unsigned 64-bit coercion. Negative values fail.
    pub fn to_u64(&self) -> Result<u64> {
        if self.native_float {
            let t = self.truncated()?;
            if (0.0..18_446_744_073_709_551_616.0).contains(&t) {
                return Ok(t as u64);
            }
            return Err(mismatch("u64"));
        }
        exact_integer(&self.text)
            .and_then(|n| u64::try_from(n).ok())
            .ok_or_else(|| mismatch("u64"))
    }

    /// Unsigned 32-bit coercion. Negative or wider values fail.
    pub fn to_u32(&self) -> Result<u32> {
        self.to_u64()
            .ok()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| mismatch("u32"))
    }

    /// Float coercion. Never fails for a well-formed literal; literals past the
    /// `f64` range become infinities and wide integers lose precision.
    pub fn to_f64(&self) -> Result<f64> {
        self.text.parse::<f64>().map_err(|_| mismatch("f64"))
    }

    fn truncated(&self) -> Result<f64> {
        Ok(self.to_f64()?.trunc())
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        serde_json::from_str::<serde_json::Number>(&self.text)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

fn mismatch(expected: &'static str) -> DynJsonError {
    DynJsonError::TypeMismatch {
        expected,
        actual: "number",
    }
}

/// Evaluate a JSON number literal as an exact integer.
///
/// Returns `None` when the literal has a non-zero fractional part after the
/// exponent is applied, or when its magnitude does not fit in 128 bits.
fn exact_integer(text: &str) -> Option<i128> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(pos) => (&rest[..pos], rest[pos + 1..].parse::<i64>().ok()?),
        None => (rest, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes()).collect();
    let mut scale = exponent.checked_sub(i64::try_from(frac_part.len()).ok()?)?;
    while digits.last() == Some(&b'0') {
        digits.pop();
        scale += 1;
    }
    if digits.iter().all(|d| *d == b'0') {
        return Some(0);
    }
    if scale < 0 {
        return None;
    }

    let mut magnitude: u128 = 0;
    for d in digits {
        if !d.is_ascii_digit() {
            return None;
        }
        magnitude = magnitude
            .checked_mul(10)?
            .checked_add(u128::from(d - b'0'))?;
    }
    // magnitude is non-zero here, so this overflows within 39 rounds
    for _ in 0..scale {
        magnitude = magnitude.checked_mul(10)?;
    }
    let magnitude = i128::try_from(magnitude).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Check a literal against the JSON number grammar:
/// `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
fn is_json_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    if bytes.get(i) == Some(&b'-') {
        i += 1;
    }
    match bytes.get(i) {
        Some(b'0') => i += 1,
        Some(b'1'..=b'9') => i = digits_from(i + 1),
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        let end = digits_from(i + 1);
        if end == i + 1 {
            return false;
        }
        i = end;
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let end = digits_from(i);
        if end == i {
            return false;
        }
        i = end;
    }
    i == bytes.len()
}

/// Respell a literal the way the decoder stores it, so `1.5E5` and a decoded
/// `1.5E5` hold the same text.
fn canonical(text: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Number>(text)
        .ok()
        .map(|n| n.to_string())
}

impl FromStr for Number {
    type Err = DynJsonError;

    fn from_str(s: &str) -> Result<Self> {
        match canonical(s) {
            Some(text) if is_json_number(s) => Ok(Self::from_literal(text)),
            _ => Err(DynJsonError::Parse(format!("invalid number literal: {s:?}"))),
        }
    }
}

/// Numbers compare by literal text. The float-origin flag is not part of
/// equality, so a float-typed node equals its decoded re-encoding.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Number {}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serde_json::from_str::<serde_json::Number>(&self.text)
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Self::from_literal(n.to_string())
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Number {
        s.parse().unwrap()
    }

    #[test]
    fn exact_integer_accepts_whole_values() {
        assert_eq!(exact_integer("0"), Some(0));
        assert_eq!(exact_integer("-0"), Some(0));
        assert_eq!(exact_integer("1.0"), Some(1));
        assert_eq!(exact_integer("1e3"), Some(1000));
        assert_eq!(exact_integer("1.5e1"), Some(15));
        assert_eq!(exact_integer("-120E-1"), Some(-12));
        assert_eq!(exact_integer("0.0e99999"), Some(0));
    }

    #[test]
    fn exact_integer_rejects_fractions() {
        assert_eq!(exact_integer("2.9"), None);
        assert_eq!(exact_integer("1.25e1"), None);
        assert_eq!(exact_integer("5e-1"), None);
    }

    #[test]
    fn exact_integer_rejects_overflow() {
        assert_eq!(exact_integer("1e40"), None);
        assert_eq!(exact_integer("1234567890123456789012345678901234567890"), None);
    }

    #[test]
    fn grammar_matches_json() {
        for ok in ["0", "-0", "12", "1.5", "1e5", "1E+5", "-3.25e-10"] {
            assert!(is_json_number(ok), "{ok} should be accepted");
        }
        for bad in ["", "-", "01", "1.", ".5", "1e", "+1", "NaN", "1.5.5", " 1"] {
            assert!(!is_json_number(bad), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn i64_bounds_are_exact() {
        assert_eq!(lit("9223372036854775807").to_i64().unwrap(), i64::MAX);
        assert_eq!(lit("-9223372036854775808").to_i64().unwrap(), i64::MIN);
        assert!(lit("9223372036854775808").to_i64().is_err());
    }

    #[test]
    fn unsigned_rejects_negative_and_wide() {
        assert_eq!(lit("18446744073709551615").to_u64().unwrap(), u64::MAX);
        assert!(lit("-1").to_u64().is_err());
        assert_eq!(lit("4294967295").to_u32().unwrap(), u32::MAX);
        assert!(lit("4294967296").to_u32().is_err());
    }

    #[test]
    fn native_float_truncates_toward_zero() {
        assert_eq!(Number::from_f64(2.9).unwrap().to_i64().unwrap(), 2);
        assert_eq!(Number::from_f64(-2.9).unwrap().to_i64().unwrap(), -2);
        assert_eq!(Number::from_f64(7.99).unwrap().to_u32().unwrap(), 7);
        assert!(Number::from_f64(-3.5).unwrap().to_u64().is_err());
        assert!(Number::from_f64(1e300).unwrap().to_i64().is_err());
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert!(Number::from_f64(f64::NAN).is_none());
        assert!(Number::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn parsed_exponents_use_decoder_spelling() {
        assert_eq!(lit("1.5E5").as_str(), "1.5e+5");
        assert_eq!(lit("1e3").as_str(), "1e+3");
        assert_eq!(lit("12.5e-1").as_str(), "12.5e-1");
        assert_eq!(lit("1.50").as_str(), "1.50");
        assert_eq!(lit("-0").as_str(), "-0");
        assert_eq!(lit("1E+2"), lit("1e2"));
        assert!(" 1".parse::<Number>().is_err());
    }

    #[test]
    fn equality_ignores_origin() {
        assert_eq!(Number::from_f64(2.5).unwrap(), lit("2.5"));
        assert_ne!(lit("1.0"), lit("1"));
    }
}
