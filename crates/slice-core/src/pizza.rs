//! # Pizza State
//!
//! The mutable base state of one pizza: base price, size, and cumulative
//! serving counts per topping.
//!
//! ## Thread Safety
//! The topping map sits behind a `Mutex` so simultaneous reads and writes
//! cannot race on the map itself. That protects the map, not multi-step
//! sequences: the facade's validate → commit → append-layer flow is only
//! atomic when callers go through a single critical section (see
//! [`crate::session::SharedSession`]).
//!
//! ## Invariants
//! - A topping's count only increases; there is no removal operation.
//! - No bounds are enforced here. Caps, conflicts and sign checks are
//!   validator concerns, so `add_topping` accepts any integer.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::money::Money;
use crate::types::PizzaSize;

// =============================================================================
// Pizza
// =============================================================================

/// Base state of a pizza being priced.
///
/// Owned by exactly one [`crate::session::PricingSession`]; topping cost
/// contributions live in the session's layer list, not here, so
/// [`Pizza::subtotal`] returns the base price only.
#[derive(Debug)]
pub struct Pizza {
    /// Base price, fixed at creation.
    base_price: Money,

    /// Size, fixed at creation.
    size: PizzaSize,

    /// Cumulative serving count per topping name.
    toppings: Mutex<HashMap<String, i64>>,
}

impl Pizza {
    /// Creates a new pizza with no toppings.
    pub fn new(base_price: Money, size: PizzaSize) -> Self {
        Pizza {
            base_price,
            size,
            toppings: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the innermost subtotal: the base price only.
    ///
    /// Topping contributions are added by the layer list on top of this.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.base_price
    }

    /// Checks whether a topping has ever been added.
    pub fn is_topping_present(&self, topping: &str) -> bool {
        self.toppings
            .lock()
            .expect("topping map mutex poisoned")
            .contains_key(topping)
    }

    /// Increments the stored count for a topping.
    ///
    /// No bounds or sign checks here; this layer records whatever the
    /// caller committed.
    pub fn add_topping(&self, topping: &str, serving_count: i64) {
        let mut toppings = self.toppings.lock().expect("topping map mutex poisoned");
        *toppings.entry(topping.to_string()).or_insert(0) += serving_count;
    }

    /// Returns the pizza size.
    #[inline]
    pub fn size(&self) -> PizzaSize {
        self.size
    }

    /// Returns the cumulative serving count for a topping, 0 if absent.
    pub fn topping_count(&self, topping: &str) -> i64 {
        self.toppings
            .lock()
            .expect("topping map mutex poisoned")
            .get(topping)
            .copied()
            .unwrap_or(0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
