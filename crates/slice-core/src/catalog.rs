//! # Pricing Catalog
//!
//! The injectable configuration table for the pricing engine: flat
//! per-serving prices, the tiered-pricing schedule for the one special
//! topping, and the rule constants the pipelines read.
//!
//! ## Configuration Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PricingConfig                                    │
//! │                                                                         │
//! │  flat_prices                 tiered (cheeseburst)                       │
//! │  ───────────────             ─────────────────────────────              │
//! │  mushroom   40               first_serving   50  (medium, 1st event)   │
//! │  onion      30               extra_serving   40  (medium, per unit)    │
//! │  corn       50               large_serving   20  (large, per unit)     │
//! │  capsicum   50               base_serving    50  (other sizes)         │
//! │  pineapple  60               caps: small 1, medium 2, large ∞          │
//! │                              conflicts_with: mushroom                   │
//! │                                                                         │
//! │  small_blocked_topping: pineapple                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All constants are baked into `PricingConfig::default()`; tests and
//! embedders may substitute their own table via
//! [`crate::session::PricingSession::with_config`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::money::Money;
use crate::types::PizzaSize;

// =============================================================================
// Default Menu Constants
// =============================================================================

/// Default flat per-serving prices, in minor units.
const DEFAULT_FLAT_PRICES: &[(&str, i64)] = &[
    ("mushroom", 40),
    ("onion", 30),
    ("corn", 50),
    ("capsicum", 50),
    ("pineapple", 60),
];

// =============================================================================
// Tiered Pricing Schedule
// =============================================================================

/// Pricing schedule and rule constants for the tiered topping.
///
/// ## Tier Policy
/// - `medium`, first-ever addition event: the first unit costs
///   `first_serving`, each additional unit in the same call costs
///   `extra_serving`. Subsequent calls price every unit at `extra_serving`.
/// - `large`: every unit costs `large_serving`, no tiering.
/// - any other size: every unit costs `base_serving`, no tiering.
///
/// The tiered topping also carries the mutual-exclusion partner and the
/// per-size cumulative serving caps enforced by the validator pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredPricing {
    /// Name of the tiered topping.
    pub topping: String,

    /// Topping that is mutually exclusive with the tiered topping.
    pub conflicts_with: String,

    /// Premium fee for the first unit of the first-ever addition (medium).
    pub first_serving: Money,

    /// Per-unit fee for additional units on medium.
    pub extra_serving: Money,

    /// Per-unit fee on large, no tiering.
    pub large_serving: Money,

    /// Per-unit fee on any other size, no tiering.
    pub base_serving: Money,

    /// Maximum cumulative servings on a small pizza.
    pub small_cap: i64,

    /// Maximum cumulative servings on a medium pizza.
    pub medium_cap: i64,
}

impl TieredPricing {
    /// Returns the cumulative serving cap for a size, `None` if unbounded.
    ///
    /// Large pizzas are uncapped; so are unrecognized sizes, matching the
    /// fall-through behavior of size handling everywhere else.
    pub fn cap_for(&self, size: PizzaSize) -> Option<i64> {
        match size {
            PizzaSize::Small => Some(self.small_cap),
            PizzaSize::Medium => Some(self.medium_cap),
            PizzaSize::Large | PizzaSize::Unspecified => None,
        }
    }
}

impl Default for TieredPricing {
    fn default() -> Self {
        TieredPricing {
            topping: "cheeseburst".to_string(),
            conflicts_with: "mushroom".to_string(),
            first_serving: Money::from_cents(50),
            extra_serving: Money::from_cents(40),
            large_serving: Money::from_cents(20),
            base_serving: Money::from_cents(50),
            small_cap: 1,
            medium_cap: 2,
        }
    }
}

// =============================================================================
// Pricing Config
// =============================================================================

/// The full injectable pricing table.
///
/// One `PricingConfig` is baked into a pricing session at construction and
/// never changes afterwards (prices already committed to the layer list are
/// locked in regardless).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Flat per-serving prices for every topping except the tiered one.
    pub flat_prices: HashMap<String, Money>,

    /// Schedule and rule constants for the tiered topping.
    pub tiered: TieredPricing,

    /// Premium topping rejected on small pizzas.
    pub small_blocked_topping: String,
}

impl PricingConfig {
    /// Returns the flat per-serving price for a topping, if it has one.
    pub fn flat_price(&self, topping: &str) -> Option<Money> {
        self.flat_prices.get(topping).copied()
    }

    /// Checks whether a topping is the tiered one.
    pub fn is_tiered(&self, topping: &str) -> bool {
        self.tiered.topping == topping
    }

    /// Checks whether the engine can price a topping at all.
    pub fn knows(&self, topping: &str) -> bool {
        self.is_tiered(topping) || self.flat_prices.contains_key(topping)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            flat_prices: DEFAULT_FLAT_PRICES
                .iter()
                .map(|(name, cents)| (name.to_string(), Money::from_cents(*cents)))
                .collect(),
            tiered: TieredPricing::default(),
            small_blocked_topping: "pineapple".to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu() {
        let config = PricingConfig::default();

        assert_eq!(config.flat_price("mushroom"), Some(Money::from_cents(40)));
        assert_eq!(config.flat_price("onion"), Some(Money::from_cents(30)));
        assert_eq!(config.flat_price("anchovy"), None);

        assert!(config.is_tiered("cheeseburst"));
        assert!(!config.is_tiered("mushroom"));

        assert!(config.knows("cheeseburst"));
        assert!(config.knows("capsicum"));
        assert!(!config.knows("anchovy"));
    }

    #[test]
    fn test_caps_by_size() {
        let tiered = TieredPricing::default();

        assert_eq!(tiered.cap_for(PizzaSize::Small), Some(1));
        assert_eq!(tiered.cap_for(PizzaSize::Medium), Some(2));
        assert_eq!(tiered.cap_for(PizzaSize::Large), None);
        assert_eq!(tiered.cap_for(PizzaSize::Unspecified), None);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        // The table is injectable; embedders may load it from JSON
        let config = PricingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PricingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
