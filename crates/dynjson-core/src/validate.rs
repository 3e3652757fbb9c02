//! Fail-fast validation of untrusted object payloads.
//!
//! Rules can be applied one at a time through the free functions in this module,
//! or described as data with [`Rule`] / [`RuleSet`] (both deserialize from JSON,
//! so a rule set can live in a config file). Every rule stops at the first
//! violation it finds.
//!
//! Per-key rules treat keys as optional: an absent key passes, a present key must
//! satisfy the rule.
//!
//! # Example
//!
//! ```
//! use dynjson_core::{decode, validate::{self, Rule, Shape}};
//!
//! let doc = decode(r#"{"name":"Alice","age":30}"#).unwrap();
//! let rules = [
//!     Rule::KeysPresent { keys: vec!["name".into()] },
//!     Rule::Type { keys: vec!["age".into()], shape: Shape::Int64 },
//!     Rule::Int64Range { key: "age".into(), min: 0, max: 17 },
//! ];
//! let err = validate::validate(&doc, &rules).unwrap_err();
//! assert_eq!(err.to_string(), "age invalid");
//! ```

use crate::error::{DynJsonError, Result};
use crate::types::Value;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Lowercase-only address pattern. Uppercase letters are rejected.
const EMAIL_PATTERN: &str = r"^([a-z0-9_.-]+)@([a-z0-9.-]+)\.([a-z.]{2,6})$";

/// Which rule a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    NotAllowed,
    NotString,
    NotInt,
    NotArray,
    NotObjectArray,
    NotStringArray,
    NotIntArray,
    Length,
    Range,
    Email,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Violation::NotAllowed => "is not valid key",
            Violation::NotString => "is not string",
            Violation::NotInt => "is not int",
            Violation::NotArray => "is not array",
            Violation::NotObjectArray => "is not valid array",
            Violation::NotStringArray => "is not string array",
            Violation::NotIntArray => "is not int array",
            Violation::Length => "length error",
            Violation::Range => "invalid",
            Violation::Email => "is not valid email",
        };
        f.write_str(text)
    }
}

/// Target type of a per-key type rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    String,
    Int64,
    Array,
    ObjectArray,
    StringArray,
    Int64Array,
}

impl Shape {
    /// Whether `value` coerces to this shape.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Shape::String => value.to_str().is_ok(),
            Shape::Int64 => value.to_i64().is_ok(),
            Shape::Array => value.to_array().is_ok(),
            Shape::ObjectArray => value.to_object_array().is_ok(),
            Shape::StringArray => value.to_string_array().is_ok(),
            Shape::Int64Array => value.to_i64_array().is_ok(),
        }
    }

    fn violation(self) -> Violation {
        match self {
            Shape::String => Violation::NotString,
            Shape::Int64 => Violation::NotInt,
            Shape::Array => Violation::NotArray,
            Shape::ObjectArray => Violation::NotObjectArray,
            Shape::StringArray => Violation::NotStringArray,
            Shape::Int64Array => Violation::NotIntArray,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Int64 => "int64",
            Shape::Array => "array",
            Shape::ObjectArray => "object array",
            Shape::StringArray => "string array",
            Shape::Int64Array => "int64 array",
        }
    }
}

fn violation(key: &str, rule: Violation) -> DynJsonError {
    DynJsonError::Validation {
        key: key.to_string(),
        rule,
    }
}

/// Every key of the object must be one of `allowed`. Keys are visited in sorted
/// order, so the reported key is the smallest offending one.
pub fn keys_subset_of<K: AsRef<str>>(value: &Value, allowed: &[K]) -> Result<()> {
    let map = value.to_map()?;
    for key in map.keys() {
        if !allowed.iter().any(|a| AsRef::<str>::as_ref(a) == key.as_str()) {
            return Err(violation(key, Violation::NotAllowed));
        }
    }
    Ok(())
}

/// Every listed key must exist. Reports the first missing key in list order.
pub fn keys_present<K: AsRef<str>>(value: &Value, keys: &[K]) -> Result<()> {
    let map = value.to_map()?;
    for key in keys {
        let key: &str = key.as_ref();
        if !map.contains_key(key) {
            return Err(DynJsonError::KeyMissing(key.to_string()));
        }
    }
    Ok(())
}

/// Every listed key that is present must coerce to `shape`.
pub fn keys_of_shape<K: AsRef<str>>(value: &Value, keys: &[K], shape: Shape) -> Result<()> {
    for key in keys {
        let key: &str = key.as_ref();
        if value.is_key_exist(key) && !shape.matches(value.get(key)) {
            return Err(violation(key, shape.violation()));
        }
    }
    Ok(())
}

/// The receiver itself must coerce to `shape`.
pub fn is_shape(value: &Value, shape: Shape) -> Result<()> {
    if shape.matches(value) {
        Ok(())
    } else {
        Err(DynJsonError::TypeMismatch {
            expected: shape.name(),
            actual: value.kind(),
        })
    }
}

/// If present, `key` must hold a string whose UTF-8 byte length is within
/// `[min, max]`.
pub fn string_length_in_range(value: &Value, key: &str, min: usize, max: usize) -> Result<()> {
    if !value.is_key_exist(key) {
        return Ok(());
    }
    let s = value
        .get(key)
        .to_str()
        .map_err(|_| violation(key, Violation::NotString))?;
    if (min..=max).contains(&s.len()) {
        Ok(())
    } else {
        Err(violation(key, Violation::Length))
    }
}

/// If present, `key` must coerce to an `i64` within `[min, max]`.
pub fn int64_range(value: &Value, key: &str, min: i64, max: i64) -> Result<()> {
    if !value.is_key_exist(key) {
        return Ok(());
    }
    let n = value
        .get(key)
        .to_i64()
        .map_err(|_| violation(key, Violation::NotInt))?;
    if (min..=max).contains(&n) {
        Ok(())
    } else {
        Err(violation(key, Violation::Range))
    }
}

/// If present, `key` must hold a string that looks like a lowercase email address.
pub fn email_format(value: &Value, key: &str) -> Result<()> {
    if !value.is_key_exist(key) {
        return Ok(());
    }
    match value.get(key).to_str() {
        Ok(s) if is_email(s) => Ok(()),
        _ => Err(violation(key, Violation::Email)),
    }
}

/// Case-sensitive email check.
pub fn is_email(s: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"))
        .is_match(s)
}

/// One declarative rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    KeysSubsetOf { keys: Vec<String> },
    KeysPresent { keys: Vec<String> },
    Type { keys: Vec<String>, shape: Shape },
    Is { shape: Shape },
    StringLengthInRange { key: String, min: usize, max: usize },
    Int64Range { key: String, min: i64, max: i64 },
    EmailFormat { key: String },
}

impl Rule {
    pub fn check(&self, value: &Value) -> Result<()> {
        match self {
            Rule::KeysSubsetOf { keys } => keys_subset_of(value, keys),
            Rule::KeysPresent { keys } => keys_present(value, keys),
            Rule::Type { keys, shape } => keys_of_shape(value, keys, *shape),
            Rule::Is { shape } => is_shape(value, *shape),
            Rule::StringLengthInRange { key, min, max } => {
                string_length_in_range(value, key, *min, *max)
            }
            Rule::Int64Range { key, min, max } => int64_range(value, key, *min, *max),
            Rule::EmailFormat { key } => email_format(value, key),
        }
    }
}

/// Apply `rules` in order, stopping at the first failure.
pub fn validate(value: &Value, rules: &[Rule]) -> Result<()> {
    rules.iter().try_for_each(|rule| rule.check(value))
}

/// An ordered list of rules, loadable from JSON such as
/// `{"rules":[{"rule":"keys_present","keys":["name"]}]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| DynJsonError::Parse(e.to_string()))
    }

    pub fn check(&self, value: &Value) -> Result<()> {
        validate(value, &self.rules)
    }
}
