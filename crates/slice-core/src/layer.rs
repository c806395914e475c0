//! # Subtotal Layers
//!
//! The decorator chain, flattened: an ordered list of immutable cost
//! records on top of the pizza's base price.
//!
//! ## Locked-In Pricing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Layer List Semantics                               │
//! │                                                                         │
//! │  base price 200                                                         │
//! │  ├── FlatRate  mushroom   cost 40   (1 × 40)                           │
//! │  ├── FlatRate  onion      cost 90   (3 × 30)                           │
//! │  └── FlatRate  mushroom   cost 80   (2 × 40)                           │
//! │                                                                         │
//! │  subtotal = 200 + 40 + 90 + 80 = 410                                   │
//! │                                                                         │
//! │  Each cost is computed ONCE, at the moment the topping is added,       │
//! │  from the serving counts at that moment. A later addition of the       │
//! │  same topping appends a NEW record; it never revisits an old one.      │
//! │  Historical tier decisions are therefore locked in.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::TieredPricing;
use crate::money::Money;
use crate::types::PizzaSize;

// =============================================================================
// Topping Layer
// =============================================================================

/// One immutable cost contribution in the subtotal chain.
///
/// The two variants mirror the two pricing policies: flat per-serving
/// pricing for catalog toppings, and the size/first-event tier schedule for
/// the one tiered topping. Both store their cost fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToppingLayer {
    /// Flat per-serving pricing: `cost = per_serving × servings`.
    FlatRate { topping: String, cost: Money },

    /// Tier-schedule pricing, resolved at construction time.
    Tiered { topping: String, cost: Money },
}

impl ToppingLayer {
    /// Builds a flat-rate layer for one addition call.
    pub fn flat_rate(topping: &str, per_serving: Money, servings: i64) -> Self {
        ToppingLayer::FlatRate {
            topping: topping.to_string(),
            cost: per_serving.multiply_quantity(servings),
        }
    }

    /// Builds a tiered layer for one addition call.
    ///
    /// `previous_servings` is the cumulative count *before* this call; the
    /// promotional first-unit fee only applies when it is zero and the pizza
    /// is medium.
    pub fn tiered(
        pricing: &TieredPricing,
        size: PizzaSize,
        new_servings: i64,
        previous_servings: i64,
    ) -> Self {
        let cost = match size {
            PizzaSize::Medium => {
                if previous_servings == 0 {
                    // First-ever addition event: premium first unit, the
                    // rest of this call at the lower per-unit fee
                    pricing.first_serving
                        + pricing.extra_serving.multiply_quantity(new_servings - 1)
                } else {
                    pricing.extra_serving.multiply_quantity(new_servings)
                }
            }
            PizzaSize::Large => pricing.large_serving.multiply_quantity(new_servings),
            PizzaSize::Small | PizzaSize::Unspecified => {
                pricing.base_serving.multiply_quantity(new_servings)
            }
        };

        ToppingLayer::Tiered {
            topping: pricing.topping.clone(),
            cost,
        }
    }

    /// Returns the fixed cost contribution of this layer.
    pub fn cost(&self) -> Money {
        match self {
            ToppingLayer::FlatRate { cost, .. } | ToppingLayer::Tiered { cost, .. } => *cost,
        }
    }

    /// Returns the topping this layer was created for.
    pub fn topping(&self) -> &str {
        match self {
            ToppingLayer::FlatRate { topping, .. } | ToppingLayer::Tiered { topping, .. } => {
                topping
            }
        }
    }
}

/// Walks the chain: base price plus every layer's fixed contribution.
pub fn chain_subtotal(base_price: Money, layers: &[ToppingLayer]) -> Money {
    layers
        .iter()
        .fold(base_price, |total, layer| total + layer.cost())
}

// =============================================================================
// Unit Tests
// =============================================================================
