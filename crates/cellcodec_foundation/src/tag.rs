//! Type tags identifying the logical kind of an encoded value.
//!
//! The numeric code of every tag is part of the wire contract. Codes are
//! never renumbered or reused; new kinds take a reserved slot or extend the
//! range upward.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};

/// The logical kind of a value, as written in the first byte of a frame.
///
/// `Short`, `Float` and `Char` are reserved: the value model can hold them,
/// but no payload format exists yet and the codec refuses them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum TypeTag {
    /// Absence of a value.
    Null = 0,
    /// Boolean.
    Bool = 1,
    /// 8-bit signed integer.
    Byte = 2,
    /// 16-bit signed integer (reserved).
    Short = 3,
    /// 32-bit signed integer.
    Int = 4,
    /// 64-bit signed integer.
    Long = 5,
    /// 32-bit floating point (reserved).
    Float = 6,
    /// 64-bit floating point.
    Double = 7,
    /// Single character (reserved).
    Char = 8,
    /// UTF-8 text.
    String = 9,
    /// Arbitrary-precision integer.
    BigInteger = 10,
    /// Arbitrary-precision decimal.
    BigDecimal = 11,
}

impl TypeTag {
    /// Number of defined tags. Codes occupy `0..COUNT`.
    pub const COUNT: usize = 12;

    /// Every tag, in code order.
    pub const ALL: [TypeTag; Self::COUNT] = [
        Self::Null,
        Self::Bool,
        Self::Byte,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Char,
        Self::String,
        Self::BigInteger,
        Self::BigDecimal,
    ];

    /// Returns the wire code of this tag.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up the tag for a wire code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        if (code as usize) < Self::COUNT {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }

    /// Returns true if this tag has no payload format yet.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        matches!(self, Self::Short | Self::Float | Self::Char)
    }

    /// Returns the payload size for fixed-width kinds.
    ///
    /// Variable-length and reserved kinds return `None`.
    #[must_use]
    pub const fn fixed_payload_len(self) -> Option<usize> {
        match self {
            Self::Null => Some(0),
            Self::Bool | Self::Byte => Some(1),
            Self::Int => Some(4),
            Self::Long | Self::Double => Some(8),
            Self::Short
            | Self::Float
            | Self::Char
            | Self::String
            | Self::BigInteger
            | Self::BigDecimal => None,
        }
    }

    /// Returns true if frames of this kind always have the same length.
    #[must_use]
    pub const fn is_fixed_width(self) -> bool {
        self.fixed_payload_len().is_some()
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
            Self::String => "string",
            Self::BigInteger => "big-integer",
            Self::BigDecimal => "big-decimal",
        }
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| Error::new(ErrorKind::UnknownTag(code)))
    }
}

impl From<TypeTag> for u8 {
    fn from(tag: TypeTag) -> Self {
        tag.code()
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.code())
    }
}
