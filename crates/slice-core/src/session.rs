//! # Pricing Session
//!
//! The facade that orchestrates one pricing computation lifetime.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    add_topping("mushroom", 2)                           │
//! │                                                                         │
//! │  input validation (name, servings > 0)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price lookup (unknown topping → UnknownTopping)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validator pipeline (caps, exclusion, size restriction)                │
//! │       │                                                                 │
//! │       ▼  ── any failure: return Err, state untouched ──                │
//! │                                                                         │
//! │  read previous count → commit count → append cost layer                │
//! │                                                                         │
//! │                    final_price()                                        │
//! │                                                                         │
//! │  subtotal = base + Σ layer costs                                       │
//! │  rate     = tax pipeline over composition                              │
//! │  price    = round-half-up(subtotal × (1 + rate/100))                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! A `PricingSession` is not designed for concurrent mutation: the topping
//! map is internally safe, but validate → commit → append is a multi-step
//! sequence. Concurrent callers must serialize through [`SharedSession`],
//! which guards the whole sequence behind one mutex.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::debug;
use uuid::Uuid;

use crate::catalog::PricingConfig;
use crate::error::{CoreError, CoreResult};
use crate::layer::{chain_subtotal, ToppingLayer};
use crate::money::Money;
use crate::pizza::Pizza;
use crate::rules::ValidatorPipeline;
use crate::tax::TaxPipeline;
use crate::types::{PizzaSize, TaxRate};
use crate::validation;

// =============================================================================
// Pricing Session
// =============================================================================

/// One pricing computation lifetime: a pizza, its cost layers, and the rule
/// pipelines, from construction to final price query.
///
/// ## Lifecycle
/// Construction creates the pizza state and both pipelines; each successful
/// `add_topping` commits a count and appends a layer; the whole object graph
/// is dropped when the session ends (no external resources held).
#[derive(Debug)]
pub struct PricingSession {
    /// Session identity, for log correlation only.
    id: Uuid,

    /// When the session was created.
    created_at: DateTime<Utc>,

    /// Base pizza state (price, size, topping counts).
    pizza: Pizza,

    /// Ordered cost contributions, one per successful addition call.
    layers: Vec<ToppingLayer>,

    /// Configured base tax percentage.
    base_tax: TaxRate,

    /// Pricing tables and rule constants.
    config: PricingConfig,

    validators: ValidatorPipeline,
    tax_rules: TaxPipeline,
}

impl PricingSession {
    /// Creates a session with the default menu.
    ///
    /// ## Arguments
    /// * `base_price` - minor units, must be non-negative
    /// * `tax_percentage` - integer percent, must be non-negative
    /// * `size` - parsed leniently; unrecognized spellings fall through to
    ///   every rule's default branch
    ///
    /// ## Example
    /// ```rust
    /// use slice_core::session::PricingSession;
    ///
    /// let mut session = PricingSession::new(200, 10, "small").unwrap();
    /// assert_eq!(session.final_price(), 220);
    ///
    /// assert!(session.add_topping("mushroom", 1).is_ok());
    /// assert_eq!(session.final_price(), 262);
    /// ```
    pub fn new(base_price: i64, tax_percentage: i64, size: &str) -> CoreResult<Self> {
        Self::with_config(base_price, tax_percentage, size, PricingConfig::default())
    }

    /// Creates a session with an injected pricing table (spec'd for test
    /// substitution and embedders with their own menus).
    pub fn with_config(
        base_price: i64,
        tax_percentage: i64,
        size: &str,
        config: PricingConfig,
    ) -> CoreResult<Self> {
        validation::validate_base_price_cents(base_price)?;
        validation::validate_tax_percent(tax_percentage)?;

        let session = PricingSession {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            pizza: Pizza::new(Money::from_cents(base_price), PizzaSize::parse(size)),
            layers: Vec::new(),
            base_tax: TaxRate::from_percent(tax_percentage),
            config,
            validators: ValidatorPipeline::default(),
            tax_rules: TaxPipeline::default(),
        };

        debug!(
            session = %session.id,
            base_price = base_price,
            tax = tax_percentage,
            size = %session.pizza.size(),
            "pricing session created"
        );

        Ok(session)
    }

    /// Adds servings of a topping, all-or-nothing.
    ///
    /// On any failure the session is exactly as it was: no count change, no
    /// new layer. On success the increment is committed and a cost layer is
    /// appended, priced from the serving counts *before* this call (that is
    /// what locks historical tier decisions in).
    pub fn add_topping(&mut self, topping: &str, servings: i64) -> CoreResult<()> {
        let outcome = self.try_commit(topping, servings);

        match &outcome {
            Ok(()) => {
                debug!(
                    session = %self.id,
                    topping = topping,
                    servings = servings,
                    subtotal = %self.subtotal(),
                    "topping added"
                );
            }
            Err(err) => {
                debug!(
                    session = %self.id,
                    topping = topping,
                    servings = servings,
                    error = %err,
                    "topping rejected"
                );
            }
        }

        outcome
    }

    /// The boolean contract: `true` iff the addition was committed.
    ///
    /// Collapses the rejection taxonomy to pass/fail for callers that do
    /// not care why.
    pub fn try_add_topping(&mut self, topping: &str, servings: i64) -> bool {
        self.add_topping(topping, servings).is_ok()
    }

    fn try_commit(&mut self, topping: &str, servings: i64) -> CoreResult<()> {
        validation::validate_topping_name(topping)?;
        validation::validate_servings(servings)?;

        // Resolve the price up front so every fallible step runs before any
        // state change
        let per_serving = if self.config.is_tiered(topping) {
            None
        } else {
            Some(
                self.config
                    .flat_price(topping)
                    .ok_or_else(|| CoreError::UnknownTopping {
                        topping: topping.to_string(),
                    })?,
            )
        };

        self.validators
            .validate(&self.config, &self.pizza, topping, servings)?;

        let previous = self.pizza.topping_count(topping);
        self.pizza.add_topping(topping, servings);

        let layer = match per_serving {
            Some(price) => ToppingLayer::flat_rate(topping, price, servings),
            None => ToppingLayer::tiered(&self.config.tiered, self.pizza.size(), servings, previous),
        };
        self.layers.push(layer);

        Ok(())
    }

    /// Walks the full chain: base price plus every layer's contribution.
    pub fn subtotal(&self) -> Money {
        chain_subtotal(self.pizza.subtotal(), &self.layers)
    }

    /// The effective tax rate for the current composition.
    pub fn effective_tax(&self) -> TaxRate {
        self.tax_rules
            .calculate(&self.config, &self.pizza, self.base_tax)
    }

    /// Computes the final price in minor units.
    ///
    /// `total = subtotal + subtotal × tax / 100`, rounded half-up.
    pub fn final_price(&self) -> i64 {
        let subtotal = self.subtotal();
        let rate = self.effective_tax();
        let total = subtotal.with_tax_percent(rate);

        debug!(
            session = %self.id,
            subtotal = %subtotal,
            rate = %rate,
            total = %total,
            "final price computed"
        );

        total.cents()
    }

    /// Cumulative serving count for a topping, 0 if absent.
    pub fn topping_count(&self, topping: &str) -> i64 {
        self.pizza.topping_count(topping)
    }

    /// The pizza size this session prices.
    pub fn size(&self) -> PizzaSize {
        self.pizza.size()
    }

    /// Session identity.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the session was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =============================================================================
// Shared Session
// =============================================================================

/// A pricing session shareable across threads.
///
/// ## Why One Mutex?
/// The session's add path is validate → commit → append; two threads that
/// both read "previous count" before either commits would corrupt the
/// layer/state consistency. The mutex makes the whole sequence one critical
/// section. Reads of the final price are taken under the same lock, so they
/// land between mutations.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<PricingSession>>,
}

impl SharedSession {
    /// Wraps a session for shared use.
    pub fn new(session: PricingSession) -> Self {
        SharedSession {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let price = shared.with_session(|s| s.final_price());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PricingSession) -> R,
    {
        let session = self.inner.lock().expect("session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// shared.with_session_mut(|s| s.add_topping("onion", 3))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PricingSession) -> R,
    {
        let mut session = self.inner.lock().expect("session mutex poisoned");
        f(&mut session)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        let mut session = PricingSession::new(200, 10, "small").unwrap();
        assert_eq!(session.final_price(), 220);

        assert!(session.add_topping("mushroom", 1).is_ok());
        assert_eq!(session.final_price(), 262);

        // Blocked by the mushroom conflict; price unchanged
        assert!(session.add_topping("cheeseburst", 1).is_err());
        assert_eq!(session.final_price(), 262);

        assert!(session.add_topping("onion", 3).is_ok());
        assert_eq!(session.final_price(), 360);

        assert!(session.add_topping("mushroom", 2).is_ok());
        assert_eq!(session.final_price(), 447);
    }

    #[test]
    fn test_boolean_contract() {
        let mut session = PricingSession::new(200, 10, "small").unwrap();

        assert!(session.try_add_topping("mushroom", 1));
        assert!(!session.try_add_topping("cheeseburst", 1));
        assert!(!session.try_add_topping("anchovy", 1));
    }

    #[test]
    fn test_price_is_monotonic_across_successful_adds() {
        let mut session = PricingSession::new(300, 7, "large").unwrap();
        let mut last = session.final_price();

        for (topping, servings) in [
            ("cheeseburst", 2),
            ("onion", 1),
            ("corn", 3),
            ("cheeseburst", 5),
            ("capsicum", 2),
        ] {
            session.add_topping(topping, servings).unwrap();
            let price = session.final_price();
            assert!(price >= last, "{topping}: {price} < {last}");
            last = price;
        }
    }

    #[test]
    fn test_rejection_leaves_state_untouched() {
        let mut session = PricingSession::new(200, 10, "small").unwrap();
        session.add_topping("mushroom", 1).unwrap();

        let price_before = session.final_price();
        let subtotal_before = session.subtotal();

        assert!(session.add_topping("cheeseburst", 1).is_err());
        assert!(session.add_topping("pineapple", 1).is_err());
        assert!(session.add_topping("onion", 0).is_err());
        assert!(session.add_topping("onion", -4).is_err());
        assert!(session.add_topping("anchovy", 2).is_err());

        assert_eq!(session.final_price(), price_before);
        assert_eq!(session.subtotal(), subtotal_before);
        assert_eq!(session.topping_count("cheeseburst"), 0);
        assert_eq!(session.topping_count("pineapple"), 0);
        assert_eq!(session.topping_count("onion"), 0);
        assert_eq!(session.topping_count("anchovy"), 0);
    }

    #[test]
    fn test_mutual_exclusion_both_orders() {
        let mut session = PricingSession::new(200, 10, "large").unwrap();
        session.add_topping("cheeseburst", 1).unwrap();
        assert!(matches!(
            session.add_topping("mushroom", 1),
            Err(CoreError::ToppingConflict { .. })
        ));

        let mut session = PricingSession::new(200, 10, "large").unwrap();
        session.add_topping("mushroom", 1).unwrap();
        assert!(matches!(
            session.add_topping("cheeseburst", 1),
            Err(CoreError::ToppingConflict { .. })
        ));
    }

    #[test]
    fn test_small_cap_holds_across_calls() {
        let mut session = PricingSession::new(200, 0, "small").unwrap();

        assert!(session.add_topping("cheeseburst", 1).is_ok());
        assert!(session.add_topping("cheeseburst", 1).is_err());
        assert_eq!(session.topping_count("cheeseburst"), 1);
    }

    #[test]
    fn test_unknown_topping_is_an_explicit_error() {
        let mut session = PricingSession::new(200, 10, "medium").unwrap();
        assert!(matches!(
            session.add_topping("anchovy", 1),
            Err(CoreError::UnknownTopping { .. })
        ));
    }

    #[test]
    fn test_non_positive_servings_are_input_errors() {
        let mut session = PricingSession::new(200, 10, "medium").unwrap();
        assert!(matches!(
            session.add_topping("onion", 0),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            session.add_topping("onion", -1),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            session.add_topping("", 1),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_medium_premium_applies_to_first_event_only() {
        // Tax 0 keeps the final price equal to the subtotal
        let mut session = PricingSession::new(100, 0, "medium").unwrap();

        session.add_topping("cheeseburst", 1).unwrap();
        assert_eq!(session.final_price(), 150); // premium first unit

        session.add_topping("cheeseburst", 1).unwrap();
        assert_eq!(session.final_price(), 190); // lower fee, premium locked in
    }

    #[test]
    fn test_unrecognized_size_falls_through_everywhere() {
        let mut session = PricingSession::new(100, 0, "party").unwrap();
        assert_eq!(session.size(), PizzaSize::Unspecified);

        // No small restriction
        assert!(session.add_topping("pineapple", 1).is_ok());

        // Unbounded cap, base tier fee of 50 per unit
        assert!(session.add_topping("cheeseburst", 4).is_ok());
        assert_eq!(session.subtotal(), Money::from_cents(100 + 60 + 200));
    }

    #[test]
    fn test_construction_rejects_negative_inputs() {
        assert!(PricingSession::new(-1, 10, "small").is_err());
        assert!(PricingSession::new(200, -1, "small").is_err());
        assert!(PricingSession::new(0, 0, "small").is_ok());
    }

    #[test]
    fn test_injected_config_is_honored() {
        let mut config = PricingConfig::default();
        config
            .flat_prices
            .insert("truffle".to_string(), Money::from_cents(500));

        let mut session = PricingSession::with_config(1000, 0, "large", config).unwrap();
        session.add_topping("truffle", 2).unwrap();
        assert_eq!(session.final_price(), 2000);
    }

    #[test]
    fn test_shared_session_serializes_mutations() {
        let session = PricingSession::new(200, 0, "large").unwrap();
        let shared = SharedSession::new(session);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    shared.with_session_mut(|s| s.add_topping("onion", 1)).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.with_session(|s| s.topping_count("onion")), 4);
        assert_eq!(shared.with_session(|s| s.final_price()), 200 + 4 * 30);
    }
}
