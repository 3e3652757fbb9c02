//! Type-checked conversions from a [`Value`] into concrete Rust types.
//!
//! Each scalar target comes in three forms:
//!
//! - `to_x()` returns `Result`, failing with [`DynJsonError::TypeMismatch`]
//! - `to_x_or(default)` returns the coerced value or `default`
//! - `to_x_or_default()` returns the coerced value or the type's zero value
//!
//! Array targets coerce element-wise and fail on the first element that does
//! not convert. Partial results are discarded.

use crate::error::{DynJsonError, Result};
use crate::types::{Map, Value};

static EMPTY_MAP: Map = Map::new();

impl Value {
    fn mismatch(&self, expected: &'static str) -> DynJsonError {
        DynJsonError::TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }

    pub fn to_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("boolean")),
        }
    }

    pub fn to_i64(&self) -> Result<i64> {
        match self {
            Value::Number(n) => n.to_i64(),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn to_u64(&self) -> Result<u64> {
        match self {
            Value::Number(n) => n.to_u64(),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn to_u32(&self) -> Result<u32> {
        match self {
            Value::Number(n) => n.to_u32(),
            other => Err(other.mismatch("number")),
        }
    }

    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Value::Number(n) => n.to_f64(),
            other => Err(other.mismatch("number")),
        }
    }

    /// Borrow the string contents. Numbers are not stringified.
    pub fn to_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn to_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn to_map(&self) -> Result<&Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Ok(arr),
            other => Err(other.mismatch("array")),
        }
    }

    pub fn as_map_mut(&mut self) -> Result<&mut Map> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other.mismatch("object")),
        }
    }

    pub fn to_i64_array(&self) -> Result<Vec<i64>> {
        self.to_array()?.iter().map(Value::to_i64).collect()
    }

    pub fn to_f64_array(&self) -> Result<Vec<f64>> {
        self.to_array()?.iter().map(Value::to_f64).collect()
    }

    pub fn to_string_array(&self) -> Result<Vec<&str>> {
        self.to_array()?.iter().map(Value::to_str).collect()
    }

    /// Element-wise object coercion. `null` elements read as empty objects.
    pub fn to_object_array(&self) -> Result<Vec<&Map>> {
        self.to_array()?
            .iter()
            .map(|item| match item {
                Value::Null => Ok(&EMPTY_MAP),
                other => other.to_map(),
            })
            .collect()
    }

    /// Array contents, or an empty slice for any other tag.
    pub fn array_or_empty(&self) -> &[Value] {
        self.to_array().unwrap_or(&[])
    }

    /// Object contents, or an empty map for any other tag.
    pub fn map_or_empty(&self) -> &Map {
        self.to_map().unwrap_or(&EMPTY_MAP)
    }

    pub fn to_bool_or(&self, default: bool) -> bool {
        self.to_bool().unwrap_or(default)
    }

    pub fn to_bool_or_default(&self) -> bool {
        self.to_bool_or(false)
    }

    pub fn to_i64_or(&self, default: i64) -> i64 {
        self.to_i64().unwrap_or(default)
    }

    pub fn to_i64_or_default(&self) -> i64 {
        self.to_i64_or(0)
    }

    pub fn to_u64_or(&self, default: u64) -> u64 {
        self.to_u64().unwrap_or(default)
    }

    pub fn to_u64_or_default(&self) -> u64 {
        self.to_u64_or(0)
    }

    pub fn to_u32_or(&self, default: u32) -> u32 {
        self.to_u32().unwrap_or(default)
    }

    pub fn to_u32_or_default(&self) -> u32 {
        self.to_u32_or(0)
    }

    pub fn to_f64_or(&self, default: f64) -> f64 {
        self.to_f64().unwrap_or(default)
    }

    pub fn to_f64_or_default(&self) -> f64 {
        self.to_f64_or(0.0)
    }

    pub fn to_str_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.to_str().unwrap_or(default)
    }

    pub fn to_str_or_default(&self) -> &str {
        self.to_str_or("")
    }

    /// String coercion with surrounding whitespace trimmed; the default is
    /// trimmed too.
    pub fn to_str_trimmed_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.to_str_or(default).trim()
    }

    pub fn to_i64_array_or_default(&self) -> Vec<i64> {
        self.to_i64_array().unwrap_or_default()
    }

    pub fn to_f64_array_or_default(&self) -> Vec<f64> {
        self.to_f64_array().unwrap_or_default()
    }

    pub fn to_string_array_or_default(&self) -> Vec<&str> {
        self.to_string_array().unwrap_or_default()
    }

    pub fn to_object_array_or_default(&self) -> Vec<&Map> {
        self.to_object_array().unwrap_or_default()
    }

    /// Force any node to text: strings yield their contents, numbers their
    /// literal, everything else compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.as_str().to_string(),
            other => other.to_string(),
        }
    }
}
