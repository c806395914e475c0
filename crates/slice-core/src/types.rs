//! # Domain Types
//!
//! Core domain types used throughout the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    PizzaSize    │   │     TaxRate     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Small          │   │  percent (f64)  │                             │
//! │  │  Medium         │   │  10.0 = 10%     │                             │
//! │  │  Large          │   │                 │                             │
//! │  │  Unspecified    │   │  running value  │                             │
//! │  └─────────────────┘   │  of the tax     │                             │
//! │                        │  pipeline       │                             │
//! │                        └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Pizza Size
// =============================================================================

/// The size of a pizza.
///
/// ## Lenient Parsing
/// The engine does not validate size spelling: any string that is not
/// exactly `small`, `medium` or `large` maps to [`PizzaSize::Unspecified`],
/// which every rule treats as its fall-through case:
///
/// - serving caps: unbounded (same as large)
/// - tiered pricing: base per-unit fee (same as small)
/// - small-only restrictions: not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
    /// Catch-all for unrecognized size strings (see [`PizzaSize::parse`]).
    Unspecified,
}

impl PizzaSize {
    /// Parses a size string leniently (never fails).
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::types::PizzaSize;
    ///
    /// assert_eq!(PizzaSize::parse("medium"), PizzaSize::Medium);
    /// assert_eq!(PizzaSize::parse("party"), PizzaSize::Unspecified);
    /// ```
    pub fn parse(size: &str) -> Self {
        match size {
            "small" => PizzaSize::Small,
            "medium" => PizzaSize::Medium,
            "large" => PizzaSize::Large,
            _ => PizzaSize::Unspecified,
        }
    }

    /// Returns the canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PizzaSize::Small => "small",
            PizzaSize::Medium => "medium",
            PizzaSize::Large => "large",
            PizzaSize::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PizzaSize {
    fn from(size: &str) -> Self {
        PizzaSize::parse(size)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// An effective tax rate as a percentage.
///
/// ## Why f64?
/// The base tax is an integer percentage, but the tax pipeline adjusts the
/// running value multiplicatively (−10%, +30% of current value), so the
/// effective rate is fractional. The rate is only ever applied once, at
/// final-price time, where the result is rounded half-up back to integer
/// minor units (see [`crate::money::Money::with_tax_percent`]).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TaxRate(f64);

impl TaxRate {
    /// Creates a tax rate from an integer percentage (10 = 10%).
    #[inline]
    pub fn from_percent(pct: i64) -> Self {
        TaxRate(pct as f64)
    }

    /// Creates a tax rate from a fractional percentage (9.0 = 9%).
    #[inline]
    pub const fn from_percent_f64(pct: f64) -> Self {
        TaxRate(pct)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percent(&self) -> f64 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0.0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_parse() {
        assert_eq!(PizzaSize::parse("small"), PizzaSize::Small);
        assert_eq!(PizzaSize::parse("medium"), PizzaSize::Medium);
        assert_eq!(PizzaSize::parse("large"), PizzaSize::Large);

        // Unrecognized spellings fall through, they are not an error
        assert_eq!(PizzaSize::parse("LARGE"), PizzaSize::Unspecified);
        assert_eq!(PizzaSize::parse("family"), PizzaSize::Unspecified);
        assert_eq!(PizzaSize::parse(""), PizzaSize::Unspecified);
    }

    #[test]
    fn test_size_display() {
        assert_eq!(PizzaSize::Small.to_string(), "small");
        assert_eq!(PizzaSize::Unspecified.to_string(), "unspecified");
    }

    #[test]
    fn test_tax_rate() {
        let rate = TaxRate::from_percent(10);
        assert_eq!(rate.percent(), 10.0);
        assert!(!rate.is_zero());
        assert!(TaxRate::zero().is_zero());
        assert_eq!(rate.to_string(), "10%");
    }
}
