//! Multi-frame buffers and stream reads, as used by storage layers that
//! write cell values back to back.

use cellcodec_foundation::{BigInt, Decimal, TypeTag, Value};
use cellcodec_wire::primitive::ByteReader;
use cellcodec_wire::{DecodeConfig, Decoder, encode_into, write_frame};

fn row() -> Vec<Value> {
    vec![
        Value::from("name"),
        Value::Int(42),
        Value::Null,
        Value::Double(-1.5),
        Value::BigInteger(BigInt::from(-12_345_678_901_234i64)),
        Value::BigDecimal(Decimal::new(19_999, 2)),
        Value::Bool(false),
    ]
}

#[test]
fn frames_decode_a_whole_row() {
    let mut bytes = Vec::new();
    for value in row() {
        encode_into(&value, &mut bytes).unwrap();
    }

    let decoder = Decoder::default();
    let decoded: Vec<Value> = decoder.frames(&bytes).map(Result::unwrap).collect();
    assert_eq!(decoded, row());
}

#[test]
fn frames_track_position() {
    let mut bytes = Vec::new();
    encode_into(&Value::Int(1), &mut bytes).unwrap();
    encode_into(&Value::Null, &mut bytes).unwrap();

    let decoder = Decoder::default();
    let mut frames = decoder.frames(&bytes);
    assert_eq!(frames.position(), 0);
    frames.next().unwrap().unwrap();
    assert_eq!(frames.position(), 5);
    frames.next().unwrap().unwrap();
    assert_eq!(frames.position(), 6);
    assert!(frames.next().is_none());
}

#[test]
fn prefix_decoding_walks_a_buffer() {
    let mut bytes = Vec::new();
    for value in row() {
        encode_into(&value, &mut bytes).unwrap();
    }

    let decoder = Decoder::default();
    let mut rest = &bytes[..];
    let mut decoded = Vec::new();
    while !rest.is_empty() {
        let (value, used) = decoder.decode_prefix(rest).unwrap();
        decoded.push(value);
        rest = &rest[used..];
    }
    assert_eq!(decoded, row());
}

#[test]
fn separately_stored_tags() {
    // Storage that keeps tags in one column and payloads in another.
    let mut tags = Vec::new();
    let mut payloads = Vec::new();
    for value in row() {
        let mut frame = Vec::new();
        encode_into(&value, &mut frame).unwrap();
        tags.push(frame[0]);
        payloads.extend_from_slice(&frame[1..]);
    }

    let decoder = Decoder::default();
    let mut reader = ByteReader::new(&payloads);
    let decoded: Vec<Value> = tags
        .iter()
        .map(|&code| {
            let tag = TypeTag::try_from(code).unwrap();
            decoder.decode_payload(tag, &mut reader).unwrap()
        })
        .collect();
    assert_eq!(decoded, row());
    assert!(reader.is_empty());
}

#[test]
fn stream_roundtrip() {
    let mut sink = Vec::new();
    for value in row() {
        write_frame(&value, &mut sink).unwrap();
    }

    let decoder = Decoder::new(DecodeConfig::bounded(64));
    let mut source = &sink[..];
    let mut decoded = Vec::new();
    while let Some(value) = decoder.read_frame(&mut source).unwrap() {
        decoded.push(value);
    }
    assert_eq!(decoded, row());
}
