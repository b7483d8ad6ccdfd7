//! Money type for representing monetary values.
//!
//! The catalog publishes prices as floating-point dollars. Everything the
//! storefront derives from them (line totals, cart totals, bucket checks)
//! runs on integer cents so sums are exact.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// A US dollar amount in cents.
///
/// Arithmetic saturates instead of overflowing; cart quantities have no
/// upper bound, so a pathological cart pins at the extremes rather than
/// wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    pub const ZERO: Money = Money::usd(0);

    /// Create a value from cents.
    pub const fn usd(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Convert a published dollar price, rounding to the nearest cent.
    ///
    /// ```
    /// use shop_commerce::Money;
    /// assert_eq!(Money::from_dollars(109.95).amount_cents, 10995);
    /// ```
    pub fn from_dollars(amount: f64) -> Self {
        Self::usd((amount * 100.0).round() as i64)
    }

    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format for display (e.g., "$49.99", "-$21.00").
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!("{}${}.{:02}", sign, cents / 100, cents % 100)
    }

    /// Format with an explicit sign for adjustments (e.g., "+$15.00").
    ///
    /// Zero renders without a sign.
    pub fn display_signed(&self) -> String {
        if self.amount_cents > 0 {
            format!("+{}", self.display())
        } else {
            self.display()
        }
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::usd(self.amount_cents.saturating_mul(factor))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::usd(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::usd(self.amount_cents.saturating_sub(other.amount_cents))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::usd(self.amount_cents.saturating_neg())
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars() {
        assert_eq!(Money::from_dollars(109.95).amount_cents, 10995);
        assert_eq!(Money::from_dollars(22.3).amount_cents, 2230);
        assert_eq!(Money::from_dollars(0.1 + 0.2).amount_cents, 30);
        assert_eq!(Money::from_dollars(-21.0).amount_cents, -2100);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::usd(4999).display(), "$49.99");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::usd(-2100).display(), "-$21.00");
        assert_eq!(Money::usd(-5).to_string(), "-$0.05");
        assert_eq!(Money::usd(i64::MIN).display(), "-$92233720368547758.08");
    }

    #[test]
    fn test_display_signed() {
        assert_eq!(Money::usd(1500).display_signed(), "+$15.00");
        assert_eq!(Money::usd(0).display_signed(), "$0.00");
        assert_eq!(Money::usd(-2100).display_signed(), "-$21.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::usd(1000);
        let b = Money::usd(500);
        assert_eq!((a + b).amount_cents, 1500);
        assert_eq!((a - b).amount_cents, 500);
        assert_eq!((a * 3).amount_cents, 3000);
        assert_eq!((-a).amount_cents, -1000);
    }

    #[test]
    fn test_saturates() {
        let big = Money::usd(i64::MAX / 2);
        assert_eq!(big.multiply(4).amount_cents, i64::MAX);
        assert_eq!((big + big + big).amount_cents, i64::MAX);
    }

    #[test]
    fn test_sum() {
        let values = [Money::usd(100), Money::usd(250), Money::usd(-50)];
        let total: Money = values.into_iter().sum();
        assert_eq!(total.amount_cents, 300);
    }
}
