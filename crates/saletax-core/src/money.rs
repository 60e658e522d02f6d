//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Two Representations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UNIT PRICES: rust_decimal::Decimal (exact base-10, any precision)      │
//! │    "10.005" stays 10.005; nothing is lost at parse time                 │
//! │                                                                         │
//! │  RECEIPT AMOUNTS: Money (integer cents)                                 │
//! │    taxes are multiples of 0.05, amounts are rounded to 2 decimals       │
//! │                                                                         │
//! │  With binary floats, 0.05 × 20 may land on 1.0000000000000002 and      │
//! │  ceil() jumps a whole nickel. Neither type has that problem:           │
//! │    14.99 × 10% = 1.499 (exact) → 150 cents → 150 cents                 │
//! │                        ceil to cent ─┘        └─ up to nickel          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use saletax_core::money::{round_tax, Money};
//!
//! // 14.99 × 10% = 1.499 → 1.50
//! let tax = round_tax(Decimal::new(1499, 3)).unwrap();
//! assert_eq!(tax, Money::from_cents(150));
//! assert_eq!(tax.to_string(), "1.50");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tax is always rounded up to a multiple of this many cents.
pub const TAX_ROUNDING_CENTS: i64 = 5;

/// Decimal places kept on receipt amounts.
const CENT_DECIMAL_PLACES: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Same width as quantities, so scaling is one checked_mul
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serializes as cents**: `{"total": 4232}` in JSON receipts
/// - **Checked arithmetic only**: overflow surfaces as `None`, never a panic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use saletax_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds a decimal amount to the nearest cent, midpoints away from zero.
    ///
    /// Returns `None` if the result doesn't fit in i64 cents.
    ///
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use saletax_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_rounded(Decimal::new(11055, 3)), Some(Money::from_cents(1106)));
    /// assert_eq!(Money::from_decimal_rounded(Decimal::new(11054, 3)), Some(Money::from_cents(1105)));
    /// ```
    pub fn from_decimal_rounded(amount: Decimal) -> Option<Money> {
        amount
            .round_dp_with_strategy(CENT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money)
    }

    /// Rounds a decimal amount UP to the next whole cent.
    pub fn from_decimal_ceil(amount: Decimal) -> Option<Money> {
        amount.checked_mul(Decimal::ONE_HUNDRED)?.ceil().to_i64().map(Money)
    }

    /// Returns the value as an exact decimal (`1249` cents → `12.49`).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, CENT_DECIMAL_PLACES)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Rounds UP to the nearest multiple of 0.05.
    ///
    /// This is the rounding step of [`round_tax`]. Returns `None` only when
    /// the bump would overflow i64 cents.
    ///
    /// ## Examples
    /// ```text
    ///   0.06 → 0.10
    ///   0.11 → 0.15
    ///   0.50 → 0.50  (already exact)
    /// ```
    ///
    /// ```rust
    /// use saletax_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(6).round_up_to_nickel(), Some(Money::from_cents(10)));
    /// assert_eq!(Money::from_cents(50).round_up_to_nickel(), Some(Money::from_cents(50)));
    /// ```
    pub fn round_up_to_nickel(&self) -> Option<Money> {
        match self.0.rem_euclid(TAX_ROUNDING_CENTS) {
            0 => Some(*self),
            rem => self.0.checked_add(TAX_ROUNDING_CENTS - rem).map(Money),
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }
}

/// Rounds an exact tax amount UP to the nearest 0.05.
///
/// The amount is first taken up to the next whole cent, then up to the next
/// nickel with [`Money::round_up_to_nickel`]. Every multiple of 0.05 is a
/// whole number of cents, so the first step never changes the outcome.
///
/// ## User Workflow
/// ```text
/// Unit price: 47.50, imported
///      │
///      ▼
/// 47.50 × 5% = 2.375 (exact decimal)
///      │
///      ▼
/// round_tax ← THIS FUNCTION
///      │
///      ▼
/// 2.375 → 238 cents → 240 cents
/// ```
///
/// Returns `None` if the rounded tax doesn't fit in i64 cents.
pub fn round_tax(amount: Decimal) -> Option<Money> {
    Money::from_decimal_ceil(amount)?.round_up_to_nickel()
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain two-decimal rendering as printed on receipts: `24.98`, `-5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_exact(s).unwrap()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(2498).to_string(), "24.98");
        assert_eq!(Money::from_cents(85).to_string(), "0.85");
        assert_eq!(Money::from_cents(500).to_string(), "5.00");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
        assert_eq!(Money::zero().to_string(), "0.00");
    }

    #[test]
    fn test_decimal_conversions() {
        assert_eq!(Money::from_cents(1249).to_decimal(), dec("12.49"));

        assert_eq!(Money::from_decimal_rounded(dec("11.055")), Some(Money::from_cents(1106)));
        assert_eq!(Money::from_decimal_rounded(dec("11.0549")), Some(Money::from_cents(1105)));
        assert_eq!(Money::from_decimal_rounded(dec("42.32")), Some(Money::from_cents(4232)));

        assert_eq!(Money::from_decimal_ceil(dec("1.0001")), Some(Money::from_cents(101)));
        assert_eq!(Money::from_decimal_ceil(dec("1.00")), Some(Money::from_cents(100)));
    }

    #[test]
    fn test_decimal_conversions_out_of_range() {
        let huge = Decimal::from(i64::MAX);
        assert_eq!(Money::from_decimal_rounded(huge), None);
        assert_eq!(Money::from_decimal_ceil(huge), None);
    }

    #[test]
    fn test_round_up_to_nickel() {
        let nickel = |c: i64| Money::from_cents(c).round_up_to_nickel().map(|m| m.cents());
        assert_eq!(nickel(6), Some(10));
        assert_eq!(nickel(11), Some(15));
        assert_eq!(nickel(50), Some(50));
        assert_eq!(nickel(0), Some(0));
        assert_eq!(nickel(-6), Some(-5));
        assert_eq!(nickel(i64::MAX), None);
    }

    #[test]
    fn test_round_tax() {
        // 14.99 × 10% = 1.499 → 1.50
        assert_eq!(round_tax(dec("1.499")), Some(Money::from_cents(150)));
        // 47.50 × 5% = 2.375 → 2.40
        assert_eq!(round_tax(dec("2.375")), Some(Money::from_cents(240)));
        // 0.50 exactly, no bump
        assert_eq!(round_tax(dec("0.500")), Some(Money::from_cents(50)));
        // 10.005 × 10% = 1.0005 → 1.05
        assert_eq!(round_tax(dec("1.0005")), Some(Money::from_cents(105)));
        assert_eq!(round_tax(Decimal::ZERO), Some(Money::zero()));
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Money::from_cents(1000);
        assert_eq!(a.checked_add(Money::from_cents(500)), Some(Money::from_cents(1500)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);

        assert_eq!(
            Money::from_cents(299).checked_multiply_quantity(3),
            Some(Money::from_cents(897))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    }
}
