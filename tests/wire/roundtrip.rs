//! Round-trip tests at kind boundaries
//!
//! Every decoded value must equal its input and keep its kind tag.

use cellcodec_foundation::{BigInt, Decimal, Value};
use cellcodec_wire::{decode, encode};

fn assert_roundtrip(value: &Value) {
    let frame = encode(value).unwrap();
    let back = decode(&frame).unwrap();
    assert_eq!(back.tag(), value.tag(), "kind changed for {value:?}");
    assert_eq!(&back, value);
}

// =============================================================================
// Fixed-Width Kinds
// =============================================================================

#[test]
fn null() {
    assert_roundtrip(&Value::Null);
}

#[test]
fn bools() {
    assert_roundtrip(&Value::Bool(true));
    assert_roundtrip(&Value::Bool(false));
}

#[test]
fn integer_extremes() {
    for n in [i8::MIN, -1, 0, 1, i8::MAX] {
        assert_roundtrip(&Value::Byte(n));
    }
    for n in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert_roundtrip(&Value::Int(n));
    }
    for n in [i64::MIN, -1, 0, 1, i64::MAX] {
        assert_roundtrip(&Value::Long(n));
    }
}

#[test]
fn double_special_values() {
    let specials = [
        0.0,
        -0.0,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        f64::from_bits(0x7FF0_0000_0000_0001), // signalling NaN payload
        f64::from_bits(1),                     // smallest subnormal
    ];
    for f in specials {
        let frame = encode(&Value::Double(f)).unwrap();
        let back = decode(&frame).unwrap().as_double().unwrap();
        assert_eq!(back.to_bits(), f.to_bits());
    }
}

// =============================================================================
// Variable-Length Kinds
// =============================================================================

#[test]
fn strings() {
    assert_roundtrip(&Value::from(""));
    assert_roundtrip(&Value::from("plain ascii"));
    assert_roundtrip(&Value::from("ünïcødé ✓ 𝄞 \0 nul"));
    assert_roundtrip(&Value::from("x".repeat(70_000)));
}

#[test]
fn big_integers() {
    for text in [
        "0",
        "1",
        "-1",
        "127",
        "128",
        "-128",
        "-129",
        "9223372036854775807",
        "9223372036854775808",
        "-9223372036854775809",
        "123456789012345678901234567890",
    ] {
        assert_roundtrip(&Value::BigInteger(text.parse().unwrap()));
    }
    let huge = BigInt::from(7).pow(1000);
    assert_roundtrip(&Value::BigInteger(huge.clone()));
    assert_roundtrip(&Value::BigInteger(-huge));
}

#[test]
fn big_decimals() {
    let cases = [
        (0, 0),
        (0, 5),
        (1, 0),
        (-1, 0),
        (15, -3),
        (-999, i32::MAX),
        (7, i32::MIN),
    ];
    for (unscaled, scale) in cases {
        assert_roundtrip(&Value::BigDecimal(Decimal::new(unscaled, scale)));
    }
    let precise: Decimal = format!("-{}.{}", "3".repeat(200), "1".repeat(200)).parse().unwrap();
    assert_roundtrip(&Value::BigDecimal(precise));
}

#[test]
fn equal_values_encode_identically() {
    let a = Value::BigDecimal("1.50".parse().unwrap());
    let b = Value::BigDecimal(Decimal::new(150, 2));
    assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());

    let c = Value::BigDecimal(Decimal::new(15, 1));
    assert_ne!(encode(&a).unwrap(), encode(&c).unwrap());
}
