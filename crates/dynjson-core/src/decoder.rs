//! JSON text → [`Value`] tree.
//!
//! Both entry points accept text or bytes. Input that is empty or only whitespace
//! decodes to an empty container instead of failing: `{}` for [`decode`] and `[]`
//! for [`decode_array`]. Anything else must be a single complete JSON document;
//! trailing content is a parse error.
//!
//! Numeric literals keep their digits (serde_json's `arbitrary_precision`), so
//! `9223372036854775807` or `1.50` come back out exactly as written. Exponents
//! are respelled with a lowercase `e` and an explicit sign: `1E3` reads back as
//! `1e+3`.

use crate::error::{DynJsonError, Result};
use crate::types::{Map, Value};

/// Decode a JSON document. Blank input yields an empty object.
///
/// # Examples
///
/// ```
/// use dynjson_core::decode;
///
/// let doc = decode(r#"{"name":"Alice","age":30}"#).unwrap();
/// assert_eq!(doc.get("age").to_i64().unwrap(), 30);
/// assert!(decode("  \n").unwrap().is_map());
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Result<Value> {
    let bytes = input.as_ref().trim_ascii();
    if bytes.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    parse(bytes)
}

/// Decode a document whose root must be an array. Blank input yields an empty
/// array; any other root fails with `TypeMismatch`.
pub fn decode_array(input: impl AsRef<[u8]>) -> Result<Value> {
    let bytes = input.as_ref().trim_ascii();
    if bytes.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }
    let value = parse(bytes)?;
    if !value.is_array() {
        return Err(DynJsonError::TypeMismatch {
            expected: "array",
            actual: value.kind(),
        });
    }
    Ok(value)
}

fn parse(bytes: &[u8]) -> Result<Value> {
    let raw: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| DynJsonError::Parse(e.to_string()))?;
    Ok(Value::from(raw))
}
