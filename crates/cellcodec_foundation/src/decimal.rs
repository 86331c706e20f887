//! Arbitrary-precision decimal numbers.
//!
//! A [`Decimal`] is an unscaled [`BigInt`] together with a 32-bit scale,
//! representing `unscaled × 10^(−scale)`. Two decimals are equal only when
//! both parts are equal, so `1.0` and `1.00` are distinct values.
//!
//! `Display` prints the plain form unless it would need more than
//! [`MAX_PLAIN_ZEROS`] padding zeros, in which case it switches to
//! exponent notation (`7E+2147483648`). `FromStr` accepts both.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Most padding zeros `Display` writes before switching to exponent notation.
pub const MAX_PLAIN_ZEROS: u64 = 100;

/// Arbitrary-precision decimal: `unscaled × 10^(−scale)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decimal {
    unscaled: BigInt,
    scale: i32,
}

impl Decimal {
    /// Creates a decimal from its unscaled value and scale.
    #[must_use]
    pub fn new(unscaled: impl Into<BigInt>, scale: i32) -> Self {
        Self {
            unscaled: unscaled.into(),
            scale,
        }
    }

    /// Returns the unscaled integer value.
    #[must_use]
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Returns the scale (number of digits right of the decimal point).
    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Splits the decimal into its unscaled value and scale.
    #[must_use]
    pub fn into_parts(self) -> (BigInt, i32) {
        (self.unscaled, self.scale)
    }

    /// Returns true if the unscaled value is zero, whatever the scale.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Converts a float through its shortest round-trip decimal rendering.
    ///
    /// `0.1` becomes unscaled `1` with scale `1`, not the exact binary
    /// expansion of the float.
    ///
    /// # Errors
    ///
    /// Returns an error if the float is NaN or infinite.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::invalid_decimal(format!("{value} is not finite")));
        }
        format!("{value}").parse()
    }

    /// Multiplies two decimals exactly, returning `None` if the scale overflows.
    #[must_use]
    pub fn checked_mul(&self, other: &Decimal) -> Option<Decimal> {
        let scale = self.scale.checked_add(other.scale)?;
        Some(Decimal {
            unscaled: &self.unscaled * &other.unscaled,
            scale,
        })
    }
}

impl From<BigInt> for Decimal {
    fn from(unscaled: BigInt) -> Self {
        Self::new(unscaled, 0)
    }
}

impl From<i64> for Decimal {
    fn from(n: i64) -> Self {
        Self::new(n, 0)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::invalid_decimal(format!("{s:?}"));

        let (negative, rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(pos) => {
                let exp: i64 = rest[pos + 1..].parse().map_err(|_| invalid())?;
                (&rest[..pos], exp)
            }
            None => (rest, 0),
        };

        let (int_part, frac_part) = match mantissa.split_once('.') {
            Some((i, f)) => (i, f),
            None => (mantissa, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (int_part.is_empty() && frac_part.is_empty())
            || !all_digits(int_part)
            || !all_digits(frac_part)
        {
            return Err(invalid());
        }

        let frac_len = i64::try_from(frac_part.len()).map_err(|_| invalid())?;
        let scale = frac_len
            .checked_sub(exponent)
            .and_then(|scale| i32::try_from(scale).ok())
            .ok_or_else(invalid)?;

        let digits = format!("{int_part}{frac_part}");
        let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        let unscaled = if negative { -magnitude } else { magnitude };

        Ok(Self { unscaled, scale })
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled.sign() == Sign::Minus {
            "-"
        } else {
            ""
        };
        let digits = self.unscaled.magnitude().to_string();
        let scale = i64::from(self.scale);
        let len = i64::try_from(digits.len()).unwrap_or(i64::MAX);

        let padding = if scale <= 0 { -scale } else { scale - len };
        if u64::try_from(padding).is_ok_and(|zeros| zeros > MAX_PLAIN_ZEROS) {
            let exponent = (len - 1) - scale;
            let (lead, tail) = digits.split_at(1);
            return if tail.is_empty() {
                write!(f, "{sign}{lead}E{exponent:+}")
            } else {
                write!(f, "{sign}{lead}.{tail}E{exponent:+}")
            };
        }

        if scale <= 0 {
            if self.unscaled.is_zero() {
                return write!(f, "0");
            }
            let zeros = "0".repeat(self.scale.unsigned_abs() as usize);
            return write!(f, "{sign}{digits}{zeros}");
        }

        let scale = self.scale.unsigned_abs() as usize;
        if digits.len() > scale {
            let (int_part, frac_part) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{int_part}.{frac_part}")
        } else {
            let zeros = "0".repeat(scale - digits.len());
            write!(f, "{sign}0.{zeros}{digits}")
        }
    }
}
