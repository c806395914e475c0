//! # Validator Pipeline
//!
//! The ordered list of rules that gate every topping addition.
//!
//! ## Pipeline Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Validator Pipeline                                   │
//! │                                                                         │
//! │  add_topping("cheeseburst", 1)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. TieredCap        governs the tiered topping only                   │
//! │       │              conflict present? size cap exceeded?              │
//! │       ▼                                                                 │
//! │  2. MutualExclusion  governs the conflicting topping only              │
//! │       │              tiered topping already present?                   │
//! │       ▼                                                                 │
//! │  3. SizeRestriction  governs the small-blocked topping only            │
//! │       │              pizza is small?                                   │
//! │       ▼                                                                 │
//! │  Ok(()) → commit the addition                                          │
//! │                                                                         │
//! │  Each rule returns Ok immediately for toppings it does not govern,     │
//! │  so the pipeline is an AND over independent per-topping constraints.   │
//! │  Evaluation short-circuits on the first failure.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::catalog::PricingConfig;
use crate::error::{CoreError, CoreResult};
use crate::pizza::Pizza;
use crate::types::PizzaSize;

// =============================================================================
// Topping Rules
// =============================================================================

/// One stateless validation rule.
///
/// Rules are tagged variants rather than trait objects: the set is closed,
/// the dispatch is a match, and the pipeline order stays visible as plain
/// data in [`ValidatorPipeline::default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToppingRule {
    /// Rejects the tiered topping when its conflict partner is present, or
    /// when the cumulative serving count would exceed the per-size cap.
    TieredCap,

    /// Rejects the conflicting topping when the tiered topping is present.
    /// Together with `TieredCap` this makes the exclusion mutual,
    /// independent of which topping is added first.
    MutualExclusion,

    /// Rejects the designated premium topping on small pizzas.
    SizeRestriction,
}

impl ToppingRule {
    /// Checks one candidate addition against this rule.
    ///
    /// Returns `Ok(())` for toppings the rule does not govern.
    pub fn check(
        &self,
        config: &PricingConfig,
        pizza: &Pizza,
        topping: &str,
        servings: i64,
    ) -> CoreResult<()> {
        match self {
            ToppingRule::TieredCap => {
                if !config.is_tiered(topping) {
                    return Ok(());
                }

                if pizza.is_topping_present(&config.tiered.conflicts_with) {
                    return Err(CoreError::ToppingConflict {
                        topping: topping.to_string(),
                        conflicts_with: config.tiered.conflicts_with.clone(),
                    });
                }

                if let Some(max) = config.tiered.cap_for(pizza.size()) {
                    let current = pizza.topping_count(topping);
                    if current + servings > max {
                        return Err(CoreError::ServingLimitExceeded {
                            topping: topping.to_string(),
                            size: pizza.size(),
                            max,
                            current,
                            requested: servings,
                        });
                    }
                }

                Ok(())
            }

            ToppingRule::MutualExclusion => {
                if topping != config.tiered.conflicts_with {
                    return Ok(());
                }

                if pizza.is_topping_present(&config.tiered.topping) {
                    return Err(CoreError::ToppingConflict {
                        topping: topping.to_string(),
                        conflicts_with: config.tiered.topping.clone(),
                    });
                }

                Ok(())
            }

            ToppingRule::SizeRestriction => {
                if topping != config.small_blocked_topping {
                    return Ok(());
                }

                if pizza.size() == PizzaSize::Small {
                    return Err(CoreError::SizeRestricted {
                        topping: topping.to_string(),
                        size: pizza.size(),
                    });
                }

                Ok(())
            }
        }
    }
}

// =============================================================================
// Validator Pipeline
// =============================================================================

/// The full ordered rule list, evaluated front to back.
#[derive(Debug, Clone)]
pub struct ValidatorPipeline {
    rules: Vec<ToppingRule>,
}

impl ValidatorPipeline {
    /// Builds a pipeline with an explicit rule order.
    pub fn new(rules: Vec<ToppingRule>) -> Self {
        ValidatorPipeline { rules }
    }

    /// Runs every rule against a candidate addition.
    ///
    /// Short-circuits on the first failing rule; returns `Ok(())` only if
    /// all rules pass.
    pub fn validate(
        &self,
        config: &PricingConfig,
        pizza: &Pizza,
        topping: &str,
        servings: i64,
    ) -> CoreResult<()> {
        for rule in &self.rules {
            rule.check(config, pizza, topping, servings)?;
        }
        Ok(())
    }
}

impl Default for ValidatorPipeline {
    /// The registered rule order. Order-independent in practice (each rule
    /// governs a different topping) but fixed all the same.
    fn default() -> Self {
        ValidatorPipeline::new(vec![
            ToppingRule::TieredCap,
            ToppingRule::MutualExclusion,
            ToppingRule::SizeRestriction,
        ])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
