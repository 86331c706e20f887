//! Integration tests for the type tag enumeration
//!
//! The tag numbering is a persisted contract, so these tests pin every code.

use cellcodec_foundation::{ErrorKind, TypeTag};
use std::collections::HashSet;

// =============================================================================
// Stable Numbering
// =============================================================================

#[test]
fn codes_are_pinned() {
    let expected = [
        (TypeTag::Null, 0),
        (TypeTag::Bool, 1),
        (TypeTag::Byte, 2),
        (TypeTag::Short, 3),
        (TypeTag::Int, 4),
        (TypeTag::Long, 5),
        (TypeTag::Float, 6),
        (TypeTag::Double, 7),
        (TypeTag::Char, 8),
        (TypeTag::String, 9),
        (TypeTag::BigInteger, 10),
        (TypeTag::BigDecimal, 11),
    ];
    for (tag, code) in expected {
        assert_eq!(tag.code(), code, "{tag:?}");
        assert_eq!(u8::from(tag), code);
    }
}

#[test]
fn cardinality_is_twelve() {
    assert_eq!(TypeTag::COUNT, 12);
    assert_eq!(TypeTag::ALL.len(), TypeTag::COUNT);
}

#[test]
fn all_tags_are_distinct() {
    let tags: HashSet<TypeTag> = TypeTag::ALL.into_iter().collect();
    assert_eq!(tags.len(), TypeTag::COUNT);
}

#[test]
fn range_is_contiguous() {
    for code in 0..=u8::MAX {
        let defined = TypeTag::from_code(code).is_some();
        assert_eq!(defined, usize::from(code) < TypeTag::COUNT, "code {code}");
    }
}

// =============================================================================
// Reserved Slots
// =============================================================================

#[test]
fn exactly_three_reserved() {
    let reserved: Vec<TypeTag> = TypeTag::ALL.into_iter().filter(|t| t.is_reserved()).collect();
    assert_eq!(reserved, [TypeTag::Short, TypeTag::Float, TypeTag::Char]);
}

#[test]
fn reserved_have_no_payload_width() {
    for tag in TypeTag::ALL.into_iter().filter(|t| t.is_reserved()) {
        assert_eq!(tag.fixed_payload_len(), None);
    }
}

// =============================================================================
// Conversion
// =============================================================================

#[test]
fn try_from_rejects_out_of_range() {
    let err = TypeTag::try_from(12u8).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownTag(12)));
    assert!(err.is_unknown_tag());
}

#[test]
fn try_from_accepts_reserved() {
    // Reserved tags are real members; rejecting them is the codec's job.
    assert_eq!(TypeTag::try_from(6u8).unwrap(), TypeTag::Float);
}
