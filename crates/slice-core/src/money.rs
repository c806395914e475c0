//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Minor Units                                      │
//! │    Base price 200, topping 40 → subtotal 240, exactly                  │
//! │                                                                         │
//! │  Floats appear in exactly ONE place: the effective tax percentage,     │
//! │  which is fractional by definition. The result is rounded half-up      │
//! │  back to integer minor units immediately.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use slice_core::money::Money;
//!
//! // Create from minor units (preferred)
//! let price = Money::from_cents(240);
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_cents(90);
//! assert_eq!(total.cents(), 330);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative intermediate values in callers' math
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for configuration tables
///
/// EVERY monetary value in the engine flows through this type: base price,
/// per-serving catalog prices, layer costs, subtotals, and the final price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (cents for USD).
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::money::Money;
    ///
    /// let price = Money::from_cents(200);
    /// assert_eq!(price.cents(), 200);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::money::Money;
    ///
    /// let per_serving = Money::from_cents(30);
    /// let line_total = per_serving.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 90);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Applies an effective tax percentage and rounds half-up to minor units.
    ///
    /// ## Rounding Policy
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND HALF-UP                                                      │
    /// │                                                                     │
    /// │  total = amount + amount × pct / 100   (computed in f64)            │
    /// │  result = floor(total + 0.5)                                        │
    /// │                                                                     │
    /// │  425 @ 5.0%  → 446.25 → 446                                         │
    /// │  1   @ 50.0% → 1.50   → 2   (half rounds up)                        │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::money::Money;
    /// use slice_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(200);
    /// let total = subtotal.with_tax_percent(TaxRate::from_percent(10));
    /// assert_eq!(total.cents(), 220);
    /// ```
    pub fn with_tax_percent(&self, rate: TaxRate) -> Money {
        let amount = self.0 as f64;
        let total = amount + amount * rate.percent() / 100.0;
        Money((total + 0.5).floor() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Currency formatting for end users is
/// explicitly out of scope for this engine.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, (self.0 / 100).abs(), (self.0 % 100).abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for serving counts).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(240);
        assert_eq!(money.cents(), 240);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let per_serving = Money::from_cents(40);
        let line_total = per_serving.multiply_quantity(2);
        assert_eq!(line_total.cents(), 80);
    }

    #[test]
    fn test_tax_basic() {
        // 200 at 10% = 220, exact
        let amount = Money::from_cents(200);
        let total = amount.with_tax_percent(TaxRate::from_percent(10));
        assert_eq!(total.cents(), 220);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 425 at 5.0% = 446.25 → 446
        let amount = Money::from_cents(425);
        let total = amount.with_tax_percent(TaxRate::from_percent(5));
        assert_eq!(total.cents(), 446);

        // 1 at 50% = 1.5 → 2 (ties round away from zero for positive values)
        let amount = Money::from_cents(1);
        let total = amount.with_tax_percent(TaxRate::from_percent(50));
        assert_eq!(total.cents(), 2);
    }

    #[test]
    fn test_tax_fractional_rate() {
        // 240 at 9% (10% discounted by 10%) = 261.6 → 262
        let amount = Money::from_cents(240);
        let total = amount.with_tax_percent(TaxRate::from_percent_f64(9.0));
        assert_eq!(total.cents(), 262);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
    }
}
