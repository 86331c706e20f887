//! Scalar cell values.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decimal::Decimal;
use crate::tag::TypeTag;

/// A scalar value held by a cell.
///
/// Each variant corresponds to exactly one [`TypeTag`]. Values are immutable;
/// cloning a string shares the underlying buffer.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Absence of a value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 8-bit signed integer.
    Byte(i8),
    /// 16-bit signed integer. No wire format yet.
    Short(i16),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Long(i64),
    /// 32-bit floating point. No wire format yet.
    Float(f32),
    /// 64-bit floating point.
    Double(f64),
    /// Single character. No wire format yet.
    Char(char),
    /// Text value.
    String(Arc<str>),
    /// Arbitrary-precision integer.
    BigInteger(BigInt),
    /// Arbitrary-precision decimal.
    BigDecimal(Decimal),
}

impl Value {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Null => TypeTag::Null,
            Self::Bool(_) => TypeTag::Bool,
            Self::Byte(_) => TypeTag::Byte,
            Self::Short(_) => TypeTag::Short,
            Self::Int(_) => TypeTag::Int,
            Self::Long(_) => TypeTag::Long,
            Self::Float(_) => TypeTag::Float,
            Self::Double(_) => TypeTag::Double,
            Self::Char(_) => TypeTag::Char,
            Self::String(_) => TypeTag::String,
            Self::BigInteger(_) => TypeTag::BigInteger,
            Self::BigDecimal(_) => TypeTag::BigDecimal,
        }
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an 8-bit integer.
    #[must_use]
    pub const fn as_byte(&self) -> Option<i8> {
        match self {
            Self::Byte(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a 32-bit integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a 64-bit integer.
    #[must_use]
    pub const fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a 64-bit float.
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a big integer reference.
    #[must_use]
    pub const fn as_big_integer(&self) -> Option<&BigInt> {
        match self {
            Self::BigInteger(n) => Some(n),
            _ => None,
        }
    }

    /// Attempts to extract a decimal reference.
    #[must_use]
    pub const fn as_big_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::BigDecimal(d) => Some(d),
            _ => None,
        }
    }
}

// Floats compare by bit pattern so that Eq stays reflexive for NaN
// and encoded bytes agree with equality.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Byte(a), Self::Byte(b)) => a == b,
            (Self::Short(a), Self::Short(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Double(a), Self::Double(b)) => a.to_bits() == b.to_bits(),
            (Self::Char(a), Self::Char(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::BigInteger(a), Self::BigInteger(b)) => a == b,
            (Self::BigDecimal(a), Self::BigDecimal(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Null => {}
            Self::Bool(b) => b.hash(state),
            Self::Byte(n) => n.hash(state),
            Self::Short(n) => n.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Long(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::Double(n) => n.to_bits().hash(state),
            Self::Char(c) => c.hash(state),
            Self::String(s) => s.hash(state),
            Self::BigInteger(n) => n.hash(state),
            Self::BigDecimal(d) => d.hash(state),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Byte(n) => write!(f, "{n}b"),
            Self::Short(n) => write!(f, "{n}s"),
            Self::Int(n) => write!(f, "{n}i"),
            Self::Long(n) => write!(f, "{n}L"),
            Self::Float(n) => write!(f, "{n:?}f"),
            Self::Double(n) => write!(f, "{n:?}"),
            Self::Char(c) => write!(f, "{c:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::BigInteger(n) => write!(f, "{n}N"),
            Self::BigDecimal(d) => write!(f, "{d}M"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Byte(n) => write!(f, "{n}"),
            Self::Short(n) => write!(f, "{n}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s}"),
            Self::BigInteger(n) => write!(f, "{n}"),
            Self::BigDecimal(d) => write!(f, "{d}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i8> for Value {
    fn from(n: i8) -> Self {
        Self::Byte(n)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Self::Short(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Long(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Float(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Double(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl From<BigInt> for Value {
    fn from(n: BigInt) -> Self {
        Self::BigInteger(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Self::BigDecimal(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}
