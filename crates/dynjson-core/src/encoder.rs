//! [`Value`] tree → JSON text.
//!
//! Object keys are written in sorted order, not in the order they were decoded.
//! Only tree-level equality with the input is guaranteed: `decode(encode(x)) == x`.

use crate::error::{DynJsonError, Result};
use crate::types::Value;

/// Compact JSON text.
///
/// # Examples
///
/// ```
/// use dynjson_core::{decode, encode};
///
/// let doc = decode(r#"{"b":[1,2.50],"a":null}"#).unwrap();
/// assert_eq!(encode(&doc).unwrap(), r#"{"a":null,"b":[1,2.50]}"#);
/// ```
pub fn encode(value: &Value) -> Result<String> {
    serde_json::to_string(value).map_err(encode_error)
}

/// Compact JSON bytes.
pub fn encode_to_vec(value: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(encode_error)
}

/// Indented JSON text.
pub fn encode_pretty(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(encode_error)
}

fn encode_error(err: serde_json::Error) -> DynJsonError {
    DynJsonError::Encode(err.to_string())
}
