//! # Tax Pipeline
//!
//! The ordered list of rules that adjust the effective tax rate based on
//! pizza composition.
//!
//! ## Pipeline Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tax Pipeline                                      │
//! │                                                                         │
//! │  base tax 10%                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. ConflictDiscount   conflicting topping present?                    │
//! │       │                tax -= tax × 0.10                                │
//! │       ▼                                                                 │
//! │  2. TieredSurcharge    tiered topping present?                         │
//! │       │                tax += tax × 0.30                                │
//! │       ▼                                                                 │
//! │  effective rate → applied once to the subtotal                         │
//! │                                                                         │
//! │  Each rule folds the RUNNING value, not the original base, so the      │
//! │  registered order is semantically significant. (The validator          │
//! │  pipeline makes the two toppings mutually exclusive, but this          │
//! │  pipeline does not rely on that.)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::PricingConfig;
use crate::pizza::Pizza;
use crate::types::TaxRate;

// =============================================================================
// Tax Rules
// =============================================================================

/// Fraction of the running rate discounted when the conflicting topping is
/// present.
const CONFLICT_DISCOUNT: f64 = 0.10;

/// Fraction of the running rate surcharged when the tiered topping is
/// present.
const TIERED_SURCHARGE: f64 = 0.30;

/// One stateless tax adjustment rule.
///
/// Same tagged-variant shape as [`crate::rules::ToppingRule`]: a closed set
/// with the pipeline order visible as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxRule {
    /// Conflicting topping present → tax decreases by 10% of current value.
    ConflictDiscount,

    /// Tiered topping present → tax increases by 30% of current value.
    TieredSurcharge,
}

impl TaxRule {
    /// Folds this rule over the running tax rate.
    pub fn apply(&self, config: &PricingConfig, pizza: &Pizza, tax: TaxRate) -> TaxRate {
        match self {
            TaxRule::ConflictDiscount => {
                if pizza.is_topping_present(&config.tiered.conflicts_with) {
                    TaxRate::from_percent_f64(tax.percent() - tax.percent() * CONFLICT_DISCOUNT)
                } else {
                    tax
                }
            }
            TaxRule::TieredSurcharge => {
                if pizza.is_topping_present(&config.tiered.topping) {
                    TaxRate::from_percent_f64(tax.percent() + tax.percent() * TIERED_SURCHARGE)
                } else {
                    tax
                }
            }
        }
    }
}

// =============================================================================
// Tax Pipeline
// =============================================================================

/// The full ordered tax-rule list.
#[derive(Debug, Clone)]
pub struct TaxPipeline {
    rules: Vec<TaxRule>,
}

impl TaxPipeline {
    /// Builds a pipeline with an explicit rule order.
    pub fn new(rules: Vec<TaxRule>) -> Self {
        TaxPipeline { rules }
    }

    /// Computes the effective tax rate for the current pizza composition.
    ///
    /// Starts from the base rate and folds every rule, in order, over the
    /// running value.
    pub fn calculate(&self, config: &PricingConfig, pizza: &Pizza, base: TaxRate) -> TaxRate {
        self.rules
            .iter()
            .fold(base, |tax, rule| rule.apply(config, pizza, tax))
    }
}

impl Default for TaxPipeline {
    /// The registered rule order: discount first, then surcharge.
    fn default() -> Self {
        TaxPipeline::new(vec![TaxRule::ConflictDiscount, TaxRule::TieredSurcharge])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::PizzaSize;

    fn pizza() -> Pizza {
        Pizza::new(Money::from_cents(200), PizzaSize::Large)
    }

    #[test]
    fn test_no_special_toppings_leaves_base_rate() {
        let config = PricingConfig::default();
        let pizza = pizza();
        pizza.add_topping("onion", 2);

        let rate = TaxPipeline::default().calculate(&config, &pizza, TaxRate::from_percent(10));
        assert_eq!(rate.percent(), 10.0);
    }

    #[test]
    fn test_conflict_discount() {
        let config = PricingConfig::default();
        let pizza = pizza();
        pizza.add_topping("mushroom", 1);

        let rate = TaxPipeline::default().calculate(&config, &pizza, TaxRate::from_percent(10));
        assert_eq!(rate.percent(), 9.0);
    }

    #[test]
    fn test_tiered_surcharge() {
        let config = PricingConfig::default();
        let pizza = pizza();
        pizza.add_topping("cheeseburst", 1);

        let rate = TaxPipeline::default().calculate(&config, &pizza, TaxRate::from_percent(10));
        assert_eq!(rate.percent(), 13.0);
    }

    #[test]
    fn test_rules_fold_the_running_value() {
        // The validator pipeline makes this composition unreachable through
        // the facade; the tax pipeline still has defined behavior for it.
        let config = PricingConfig::default();
        let pizza = pizza();
        pizza.add_topping("mushroom", 1);
        pizza.add_topping("cheeseburst", 1);

        // 10 → 9 (discount) → 11.7 (surcharge on the running value)
        let rate = TaxPipeline::default().calculate(&config, &pizza, TaxRate::from_percent(10));
        assert!((rate.percent() - 11.7).abs() < 1e-9);
    }

    #[test]
    fn test_zero_base_rate_stays_zero() {
        let config = PricingConfig::default();
        let pizza = pizza();
        pizza.add_topping("cheeseburst", 1);

        let rate = TaxPipeline::default().calculate(&config, &pizza, TaxRate::zero());
        assert!(rate.is_zero());
    }
}
