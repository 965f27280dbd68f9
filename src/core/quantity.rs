//! Fixed-point decimal quantities
//!
//! Shipped quantities are decimals in the source data (TPC-H `l_quantity` is
//! `DECIMAL(15,2)`). They are stored as fixed-point millionths
//! (`1_000_000` = 1.0), so text with up to six fractional digits is held
//! exactly. Comparisons against half a quantity double the other side
//! instead of halving, which keeps them exact too.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Millionths per whole unit
const SCALE: i64 = 1_000_000;

/// Digits kept after the decimal point when parsing
pub const MAX_FRACTION_DIGITS: usize = 6;

/// A non-integral quantity in fixed-point millionths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityParseError {
    #[error("'{0}' is not a decimal number")]
    Invalid(String),

    #[error("'{0}' has more than {max} fractional digits", max = MAX_FRACTION_DIGITS)]
    TooPrecise(String),

    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Build a quantity from a whole number of units
    pub fn whole(units: i64) -> Self {
        Self(units.saturating_mul(SCALE))
    }

    /// Build a quantity from raw millionths
    pub fn from_millionths(millionths: i64) -> Self {
        Self(millionths)
    }

    /// Raw value in millionths
    pub fn millionths(self) -> i64 {
        self.0
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Add two quantities, `None` on overflow
    pub fn checked_add(self, other: Quantity) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Whether `units` whole units are strictly more than half of this quantity
    pub fn half_is_below(self, units: i64) -> bool {
        2 * i128::from(units) * i128::from(SCALE) > i128::from(self.0)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / SCALE as u64;
        let fraction = magnitude % SCALE as u64;
        let sign = if self.0 < 0 { "-" } else { "" };

        if fraction == 0 {
            write!(f, "{}{}", sign, whole)
        } else {
            let digits = format!("{:06}", fraction);
            write!(f, "{}{}.{}", sign, whole, digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for Quantity {
    type Err = QuantityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(QuantityParseError::Invalid(s.to_string()));
        }
        if fraction.len() > MAX_FRACTION_DIGITS {
            return Err(QuantityParseError::TooPrecise(s.to_string()));
        }

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| QuantityParseError::OutOfRange(s.to_string()))?
        };
        let fraction_millionths = fraction
            .bytes()
            .fold(0_i64, |acc, b| acc * 10 + i64::from(b - b'0'))
            * 10_i64.pow((6 - fraction.len()) as u32);

        let magnitude = whole_units
            .checked_mul(SCALE)
            .and_then(|v| v.checked_add(fraction_millionths))
            .ok_or_else(|| QuantityParseError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct QuantityVisitor;

        impl Visitor<'_> for QuantityVisitor {
            type Value = Quantity;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a decimal quantity such as \"17.25\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Quantity, E> {
                v.parse().map_err(E::custom)
            }
        }

        // Ask for a string so csv never routes "17.50" through f64
        deserializer.deserialize_str(QuantityVisitor)
    }
}
