//! # dynjson-core
//!
//! Dynamically-typed JSON values for code that has to handle untrusted payloads
//! without a schema.
//!
//! A decoded document is a [`Value`] tree. Navigation never fails (missing keys
//! and out-of-range indices read as `Null`), leaves are coerced into concrete
//! types with exact-or-error semantics, containers are edited in place, and the
//! [`validate`] module checks payload shape and ranges with fail-fast rules.
//!
//! ## Quick start
//!
//! ```rust
//! use dynjson_core::{decode, encode, validate};
//!
//! let mut doc = decode(r#"{"name":"Alice","age":30,"tags":[]}"#).unwrap();
//! assert_eq!(doc.get("age").to_i64().unwrap(), 30);
//! assert!(doc.get("missing").to_i64().is_err());
//!
//! doc.get_mut("tags").unwrap().push_back("admin").unwrap();
//! validate::string_length_in_range(&doc, "name", 1, 10).unwrap();
//!
//! assert_eq!(encode(&doc).unwrap(), r#"{"age":30,"name":"Alice","tags":["admin"]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: `Value` tree and navigation
//! - [`number`]: exact numeric literal storage and integer/float coercion
//! - [`coerce`]: typed accessors on `Value` (strict, or-default, array forms)
//! - [`mutate`]: set/del, push/pop, nil-to-container, seeded shuffle
//! - [`validate`]: fail-fast rules and rule sets
//! - [`decoder`] / [`encoder`]: JSON text in and out
//! - [`io`]: file-backed documents
//! - [`error`]: error types

pub mod coerce;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod io;
pub mod mutate;
pub mod number;
pub mod types;
pub mod validate;

pub use decoder::{decode, decode_array};
pub use encoder::{encode, encode_pretty, encode_to_vec};
pub use error::{DynJsonError, Result};
pub use number::Number;
pub use types::{attach, Map, Value};
pub use validate::{Rule, RuleSet, Shape};
