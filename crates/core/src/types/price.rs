//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {amount})")]
    Negative {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A non-negative monetary amount.
///
/// Prices use decimal arithmetic, never floats. The zero amount is valid;
/// negative amounts are rejected at construction, so every `Price` in the
/// system is known to be non-negative.
///
/// ## Examples
///
/// ```
/// use megashop_core::Price;
/// use rust_decimal::Decimal;
///
/// let unit = Price::from_units(19);
/// assert_eq!(unit.to_string(), "$19.00");
///
/// // Line totals stay closed over non-negative amounts
/// assert_eq!((unit * 3).amount(), Decimal::from(57));
///
/// assert!(Price::new(Decimal::from(-1)).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// The zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative { amount });
        }
        Ok(Self(amount))
    }

    /// Create a price from whole currency units (e.g., dollars).
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Create a price from the smallest currency unit (e.g., cents).
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether this is the zero price.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// Sums and quantity products of non-negative amounts are non-negative, so
// these stay closed over Price without revalidation.

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, qty: u32) -> Self {
        Self(self.0 * Decimal::from(qty))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    /// Format for display with two decimal places (e.g., "$19.99").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        let err = Price::new(Decimal::from(-5)).unwrap_err();
        assert!(matches!(err, PriceError::Negative { .. }));
    }

    #[test]
    fn test_new_accepts_zero() {
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(2499);
        assert_eq!(price.to_string(), "$24.99");
    }

    #[test]
    fn test_display_pads_whole_units() {
        assert_eq!(Price::from_units(5).to_string(), "$5.00");
    }

    #[test]
    fn test_mul_by_quantity() {
        let price = Price::from_cents(1050) * 3;
        assert_eq!(price.to_string(), "$31.50");
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_units(1), Price::from_units(2), Price::ZERO]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_units(3));
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::from_cents(999);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_serde_rejects_negative_amounts() {
        assert!(serde_json::from_str::<Price>("\"-5\"").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_units(5) < Price::from_units(6));
    }
}
