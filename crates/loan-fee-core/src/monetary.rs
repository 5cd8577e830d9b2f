//! Exact fixed-point currency amounts.
//!
//! A [`Monetary`] is stored as a whole number of cents. Every constructor
//! rounds to the cent (half away from zero) at the boundary, so no rounding
//! error can build up across later comparisons or arithmetic.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LoanFeeError;
use crate::fees::schedule::breakpoint_bounds;
use crate::LoanFeeResult;

/// Number of cents in one currency unit.
const CENTS_PER_UNIT: Decimal = dec!(100);
const DECIMAL_PLACES: u32 = 2;
/// Magnitude bounds of what a `Decimal` can hold, as floats.
const DECIMAL_LIMIT: f64 = 7.9e28;
const DECIMAL_EPSILON: f64 = 1e-28;

/// An immutable currency amount held as an integer count of cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monetary {
    cents: i64,
}

impl Monetary {
    pub const ZERO: Monetary = Monetary { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Monetary { cents }
    }

    /// Round `value` to the nearest cent, halves away from zero.
    pub fn from_decimal(value: Decimal) -> LoanFeeResult<Self> {
        value
            .checked_mul(CENTS_PER_UNIT)
            .map(|c| c.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|c| c.to_i64())
            .map(Monetary::from_cents)
            .ok_or_else(|| LoanFeeError::InvalidAmountFormat {
                input: value.to_string(),
            })
    }

    /// Build from a binary float. NaN, infinities and values too large for
    /// a cent count are rejected.
    pub fn from_f64(value: f64) -> LoanFeeResult<Self> {
        let decimal = Decimal::from_f64(value).ok_or_else(|| LoanFeeError::InvalidAmountFormat {
            input: value.to_string(),
        })?;
        Self::from_decimal(decimal)
    }

    /// Parse a human-entered amount such as `"11,500.00"` or `" 1 200 "`.
    ///
    /// Whitespace and thousands separators are stripped before parsing;
    /// anything that is then not a decimal number is rejected. Numbers too
    /// large to hold in cents fail with [`LoanFeeError::AmountOutOfRange`].
    pub fn parse(text: &str) -> LoanFeeResult<Self> {
        let value = Self::parse_decimal(text)?;
        Self::from_decimal(value).map_err(|_| {
            let (min, max) = breakpoint_bounds();
            LoanFeeError::out_of_range(min, max)
        })
    }

    /// Clean and parse `text` as a decimal, rounded to the cent.
    ///
    /// Only non-numeric text is an error. Finite numbers beyond the range of
    /// [`Decimal`] saturate to [`Decimal::MAX`] / [`Decimal::MIN`], and ones
    /// too small to represent become zero, so callers can range-check them.
    pub fn parse_decimal(text: &str) -> LoanFeeResult<Decimal> {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .collect();

        let invalid = || LoanFeeError::InvalidAmountFormat {
            input: text.to_string(),
        };
        if cleaned.is_empty() {
            return Err(invalid());
        }

        let value = match Decimal::from_str(&cleaned).or_else(|_| Decimal::from_scientific(&cleaned)) {
            Ok(value) => value,
            Err(_) => match cleaned.parse::<f64>() {
                Ok(f) if f.is_finite() && f.abs() > DECIMAL_LIMIT => {
                    if f > 0.0 {
                        Decimal::MAX
                    } else {
                        Decimal::MIN
                    }
                }
                Ok(f) if f.is_finite() && f.abs() < DECIMAL_EPSILON => Decimal::ZERO,
                Ok(f) if f.is_finite() => Decimal::from_f64(f).ok_or_else(invalid)?,
                _ => return Err(invalid()),
            },
        };
        Ok(Self::round_to_cents(value))
    }

    /// Round to two decimal places, halves away from zero.
    pub fn round_to_cents(value: Decimal) -> Decimal {
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// The exact decimal value (cents / 100).
    pub fn value(&self) -> Decimal {
        Decimal::new(self.cents, DECIMAL_PLACES)
    }

    /// Fixed two-decimal rendering with no separators or symbol.
    pub fn format(&self) -> String {
        format!("{:.2}", self.value())
    }

    /// Format an arbitrary decimal the way a [`Monetary`] would print it.
    pub fn format_value(value: Decimal) -> String {
        format!("{:.2}", Self::round_to_cents(value))
    }

    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }
}

impl fmt::Display for Monetary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for Monetary {
    type Err = LoanFeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Monetary::parse(s)
    }
}

impl Serialize for Monetary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MonetaryVisitor)
    }
}

struct MonetaryVisitor;

impl<'de> Visitor<'de> for MonetaryVisitor {
    type Value = Monetary;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a monetary amount as a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Monetary, E> {
        Monetary::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Monetary, E> {
        Monetary::from_decimal(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Monetary, E> {
        Monetary::from_decimal(Decimal::from(v)).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Monetary, E> {
        Monetary::from_f64(v).map_err(E::custom)
    }
}
