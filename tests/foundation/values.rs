//! Integration tests for Value types
//!
//! Tests Value variants, kind tags, equality, and conversions.

use cellcodec_foundation::{BigInt, Decimal, TypeTag, Value};
use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_null_from_none() {
    assert_eq!(Value::from(None::<&str>), Value::Null);
    assert_eq!(Value::from(Some(5i32)), Value::Int(5));
}

#[test]
fn value_string_shares_buffer() {
    let text: Arc<str> = Arc::from("shared");
    let v = Value::from(Arc::clone(&text));
    let copy = v.clone();
    match (&v, &copy) {
        (Value::String(a), Value::String(b)) => assert!(Arc::ptr_eq(a, b)),
        _ => panic!("Expected String"),
    }
}

#[test]
fn every_tag_has_a_variant() {
    let values = [
        Value::Null,
        Value::Bool(true),
        Value::Byte(1),
        Value::Short(1),
        Value::Int(1),
        Value::Long(1),
        Value::Float(1.0),
        Value::Double(1.0),
        Value::Char('1'),
        Value::from("1"),
        Value::BigInteger(BigInt::from(1)),
        Value::BigDecimal(Decimal::new(1, 0)),
    ];
    let tags: Vec<TypeTag> = values.iter().map(Value::tag).collect();
    assert_eq!(tags, TypeTag::ALL);
}

// =============================================================================
// Value Equality
// =============================================================================

#[test]
fn equal_numbers_of_different_kinds_differ() {
    let values = [
        Value::Byte(1),
        Value::Short(1),
        Value::Int(1),
        Value::Long(1),
        Value::Float(1.0),
        Value::Double(1.0),
        Value::BigInteger(BigInt::from(1)),
        Value::BigDecimal(Decimal::new(1, 0)),
    ];
    let set: HashSet<&Value> = values.iter().collect();
    assert_eq!(set.len(), values.len());
}

#[test]
fn nan_equals_itself() {
    let v = Value::Double(f64::NAN);
    assert_eq!(v, v.clone());
}

#[test]
fn negative_zero_differs_from_zero() {
    assert_ne!(Value::Double(0.0), Value::Double(-0.0));
}

#[test]
fn decimal_scale_is_part_of_equality() {
    assert_ne!(
        Value::BigDecimal(Decimal::new(10, 1)),
        Value::BigDecimal(Decimal::new(1, 0))
    );
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_scalars() {
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Byte(-128).to_string(), "-128");
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(
        Value::BigInteger("-123456789012345678901234567890".parse().unwrap()).to_string(),
        "-123456789012345678901234567890"
    );
}
