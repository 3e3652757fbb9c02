//! Coercion tests: exact integers, float fallbacks, array forms and defaults.
use dynjson_core::{decode, DynJsonError, Value};

fn num(literal: &str) -> Value {
    decode(literal).unwrap()
}

// ============================================================================
// Integer coercion
// ============================================================================

#[test]
fn i64_max_literal_is_exact() {
    let v = num("9223372036854775807");
    assert_eq!(v.to_i64().unwrap(), 9_223_372_036_854_775_807);
    assert!(v.to_f64().is_ok());
}

#[test]
fn i64_rejects_fractional_literal() {
    assert_eq!(
        num("2.9").to_i64(),
        Err(DynJsonError::TypeMismatch {
            expected: "i64",
            actual: "number"
        })
    );
}

#[test]
fn i64_accepts_whole_literal_with_exponent() {
    assert_eq!(num("12e2").to_i64().unwrap(), 1200);
    assert_eq!(num("4.0").to_i64().unwrap(), 4);
    assert!(num("1.5e-1").to_i64().is_err());
}

#[test]
fn i64_rejects_overflow() {
    assert!(num("9223372036854775808").to_i64().is_err());
    assert!(num("-9223372036854775809").to_i64().is_err());
}

#[test]
fn native_float_truncates_toward_zero() {
    assert_eq!(Value::from(2.9).to_i64().unwrap(), 2);
    assert_eq!(Value::from(-2.9).to_i64().unwrap(), -2);
    assert_eq!(Value::from(0.5).to_u64().unwrap(), 0);
}

#[test]
fn unsigned_rules() {
    assert_eq!(num("18446744073709551615").to_u64().unwrap(), u64::MAX);
    assert!(num("-1").to_u64().is_err());
    assert!(num("-1").to_u32().is_err());
    assert!(num("4294967296").to_u32().is_err());
    assert_eq!(num("4294967295").to_u32().unwrap(), u32::MAX);
}

#[test]
fn f64_always_succeeds_for_numbers() {
    assert_eq!(num("2.5").to_f64().unwrap(), 2.5);
    assert_eq!(num("30").to_f64().unwrap(), 30.0);
    assert_eq!(
        num("12345678901234567890123").to_f64().unwrap(),
        12_345_678_901_234_567_890_123.0_f64
    );
}

#[test]
fn non_numbers_fail_every_numeric_coercion() {
    for v in [
        Value::from(true),
        Value::from("30"),
        Value::from(vec![Value::from(1)]),
        decode("{}").unwrap(),
        Value::Null,
    ] {
        let kind = v.kind();
        let expected = DynJsonError::TypeMismatch {
            expected: "number",
            actual: kind,
        };
        assert_eq!(v.to_i64().unwrap_err(), expected);
        assert_eq!(v.to_u64().unwrap_err(), expected);
        assert_eq!(v.to_u32().unwrap_err(), expected);
        assert!(v.to_f64().is_err(), "{kind} should not coerce to f64");
    }
}

// ============================================================================
// Scalar non-number coercion
// ============================================================================

#[test]
fn str_does_not_stringify_numbers() {
    assert!(num("1").to_str().is_err());
    assert_eq!(Value::from("x").to_str().unwrap(), "x");
}

#[test]
fn bool_coercion() {
    assert!(Value::from(true).to_bool().unwrap());
    assert!(num("1").to_bool().is_err());
}

#[test]
fn to_text_forces_any_node() {
    assert_eq!(Value::from("hi").to_text(), "hi");
    assert_eq!(num("1.50").to_text(), "1.50");
    assert_eq!(Value::from(false).to_text(), "false");
    assert_eq!(Value::Null.to_text(), "null");
    assert_eq!(decode(r#"{"a":[1]}"#).unwrap().to_text(), r#"{"a":[1]}"#);
}

// ============================================================================
// Array coercion
// ============================================================================

#[test]
fn int64_array_coerces_every_element() {
    let v = decode("[1, 2, 3e0]").unwrap();
    assert_eq!(v.to_i64_array().unwrap(), vec![1, 2, 3]);
}

#[test]
fn int64_array_fails_on_first_bad_element() {
    let v = decode(r#"[1, "two", 3]"#).unwrap();
    assert_eq!(
        v.to_i64_array(),
        Err(DynJsonError::TypeMismatch {
            expected: "number",
            actual: "string"
        })
    );
    assert!(v.to_i64_array_or_default().is_empty());
}

#[test]
fn float64_array() {
    let v = decode("[1, 2.5, -3]").unwrap();
    assert_eq!(v.to_f64_array().unwrap(), vec![1.0, 2.5, -3.0]);
    assert!(decode("[1, null]").unwrap().to_f64_array().is_err());
}

#[test]
fn string_array() {
    let v = decode(r#"["a", "b"]"#).unwrap();
    assert_eq!(v.to_string_array().unwrap(), vec!["a", "b"]);
    assert!(decode(r#"["a", 1]"#).unwrap().to_string_array().is_err());
    assert!(decode(r#"{"a": "b"}"#).unwrap().to_string_array().is_err());
}

#[test]
fn object_array_treats_null_as_empty_object() {
    let v = decode(r#"[{"a":1}, null, {}]"#).unwrap();
    let maps = v.to_object_array().unwrap();
    assert_eq!(maps.len(), 3);
    assert!(maps[1].is_empty());
    assert!(decode(r#"[{"a":1}, 2]"#).unwrap().to_object_array().is_err());
}

#[test]
fn container_fallbacks() {
    let s = Value::from("x");
    assert!(s.array_or_empty().is_empty());
    assert!(s.map_or_empty().is_empty());
    assert!(s.to_array().is_err());
    assert!(s.to_map().is_err());
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn or_returns_the_given_default_on_failure() {
    let missing = Value::Null;
    assert_eq!(missing.to_i64_or(-7), -7);
    assert_eq!(missing.to_u64_or(7), 7);
    assert_eq!(missing.to_u32_or(8), 8);
    assert_eq!(missing.to_f64_or(1.5), 1.5);
    assert!(missing.to_bool_or(true));
    assert_eq!(missing.to_str_or("dflt"), "dflt");
}

#[test]
fn or_returns_coerced_value_on_success() {
    assert_eq!(num("42").to_i64_or(-1), 42);
    assert_eq!(Value::from("x").to_str_or("dflt"), "x");
}

#[test]
fn or_default_returns_zero_values() {
    let missing = Value::Null;
    assert_eq!(missing.to_i64_or_default(), 0);
    assert_eq!(missing.to_u64_or_default(), 0);
    assert_eq!(missing.to_u32_or_default(), 0);
    assert_eq!(missing.to_f64_or_default(), 0.0);
    assert!(!missing.to_bool_or_default());
    assert_eq!(missing.to_str_or_default(), "");
    assert!(missing.to_string_array_or_default().is_empty());
    assert!(missing.to_object_array_or_default().is_empty());
    assert!(missing.to_f64_array_or_default().is_empty());
}

#[test]
fn trimmed_string_accessor() {
    assert_eq!(Value::from("  padded \n").to_str_trimmed_or(""), "padded");
    assert_eq!(Value::Null.to_str_trimmed_or("  d "), "d");
}

#[test]
fn alice_example() {
    let doc = decode(r#"{"name": "Alice", "age": 30}"#).unwrap();
    assert_eq!(doc.get("age").to_i64().unwrap(), 30);
    assert!(matches!(
        doc.get("missing").to_i64(),
        Err(DynJsonError::TypeMismatch { .. })
    ));
}
