//! Frame encoder.
//!
//! A frame is the tag byte followed by the kind's payload:
//!
//! ```text
//! null         | 0 |
//! bool         | 1 | 0x00 or 0x01 |
//! byte         | 2 | i8 |
//! int          | 4 | i32 BE |
//! long         | 5 | i64 BE |
//! double       | 7 | IEEE-754 bits, u64 BE |
//! string       | 9 | len i32 BE | UTF-8 bytes |
//! big-integer  | 10 | len i32 BE | minimal two's-complement BE |
//! big-decimal  | 11 | scale i32 BE | len i32 BE | minimal two's-complement BE |
//! ```
//!
//! The encoder always produces the canonical frame, so equal values encode
//! to identical bytes.

use std::io::Write;

use cellcodec_foundation::{BigInt, Error, Result, TypeTag, Value};

use crate::primitive::{INT_SIZE, LONG_SIZE, len_prefix, put_i32, put_i64, put_len_prefixed};

/// Encodes a value into a new frame.
///
/// # Errors
///
/// Returns `UnsupportedKind` for reserved kinds and `PayloadTooLarge` for
/// text or big numbers longer than `i32::MAX` bytes.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(fixed_capacity(value));
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Appends the frame for `value` to `out`.
///
/// On error `out` is left as it was.
///
/// # Errors
///
/// See [`encode`].
pub fn encode_into(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    let start = out.len();
    let result = write_value(value, out);
    if let Err(err) = &result {
        out.truncate(start);
        tracing::debug!(tag = %value.tag(), error = %err, "rejected value on encode");
    }
    result
}

/// Returns the length of the frame `value` would encode to.
///
/// # Errors
///
/// Same as [`encode`].
pub fn encoded_len(value: &Value) -> Result<usize> {
    let payload = match value {
        Value::Null => 0,
        Value::Bool(_) | Value::Byte(_) => 1,
        Value::Int(_) => INT_SIZE,
        Value::Long(_) | Value::Double(_) => LONG_SIZE,
        Value::String(s) => {
            len_prefix(s.len())?;
            INT_SIZE + s.len()
        }
        Value::BigInteger(n) => big_integer_len(n)?,
        Value::BigDecimal(d) => INT_SIZE + big_integer_len(d.unscaled())?,
        Value::Short(_) | Value::Float(_) | Value::Char(_) => {
            return Err(Error::unsupported_kind(value.tag()));
        }
    };
    Ok(1 + payload)
}

/// Encodes `value` and writes the frame to `writer`.
///
/// # Errors
///
/// Returns encode errors, or `IoError` if the write fails.
pub fn write_frame<W: Write>(value: &Value, mut writer: W) -> Result<()> {
    let frame = encode(value)?;
    writer.write_all(&frame)?;
    Ok(())
}

fn write_value(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    let tag = value.tag();
    if tag.is_reserved() {
        return Err(Error::unsupported_kind(tag));
    }
    out.push(tag.code());

    match value {
        Value::Null => {}
        Value::Bool(b) => out.push(u8::from(*b)),
        Value::Byte(n) => out.extend_from_slice(&n.to_be_bytes()),
        Value::Int(n) => put_i32(out, *n),
        Value::Long(n) => put_i64(out, *n),
        Value::Double(n) => out.extend_from_slice(&n.to_bits().to_be_bytes()),
        Value::String(s) => put_len_prefixed(out, s.as_bytes())?,
        Value::BigInteger(n) => put_big_integer(out, n)?,
        Value::BigDecimal(d) => {
            put_i32(out, d.scale());
            put_big_integer(out, d.unscaled())?;
        }
        Value::Short(_) | Value::Float(_) | Value::Char(_) => {
            return Err(Error::unsupported_kind(tag));
        }
    }
    Ok(())
}

fn put_big_integer(out: &mut Vec<u8>, n: &BigInt) -> Result<()> {
    put_len_prefixed(out, &n.to_signed_bytes_be())
}

fn big_integer_len(n: &BigInt) -> Result<usize> {
    let len = n.to_signed_bytes_be().len();
    len_prefix(len)?;
    Ok(INT_SIZE + len)
}

fn fixed_capacity(value: &Value) -> usize {
    1 + value.tag().fixed_payload_len().unwrap_or(INT_SIZE)
}
