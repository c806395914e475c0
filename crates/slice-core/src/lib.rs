//! # slice-core: Pure Pricing Logic for Slice
//!
//! This crate is the **heart** of Slice. It computes the final price of a
//! customizable pizza order as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Slice Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Embedding Application                           │   │
//! │  │    builds a session ──► adds toppings ──► reads final price    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ slice-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  session  │  │   layer   │  │   rules   │  │    tax    │  │   │
//! │  │   │  facade   │  │ cost chain│  │ validators│  │ pipeline  │  │   │
//! │  │   └─────┬─────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │         │                                                      │   │
//! │  │   ┌─────▼─────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   pizza   │  │  catalog  │  │   money   │  │   types   │  │   │
//! │  │   │   state   │  │  config   │  │   Money   │  │ Size, Tax │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`session`] - The pricing facade: validate → commit → price
//! - [`layer`] - Immutable cost contributions (the flattened decorator chain)
//! - [`rules`] - Validator pipeline gating topping additions
//! - [`tax`] - Tax pipeline adjusting the effective rate
//! - [`pizza`] - Base pizza state with a thread-safe topping map
//! - [`catalog`] - Injectable pricing tables and rule constants
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`types`] - `PizzaSize`, `TaxRate`
//! - [`error`] - Domain error types
//! - [`validation`] - Input-shape validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every computation is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64)
//! 4. **Explicit Errors**: Rejections are typed, never bare booleans
//!    (callers that want pass/fail use `try_add_topping`)
//! 5. **Locked-In Costs**: A committed cost layer is never recomputed
//!
//! ## Example Usage
//!
//! ```rust
//! use slice_core::session::PricingSession;
//!
//! let mut session = PricingSession::new(200, 10, "small").unwrap();
//! assert_eq!(session.final_price(), 220);
//!
//! session.add_topping("mushroom", 1).unwrap();
//! assert_eq!(session.final_price(), 262);
//!
//! // Mutually exclusive with mushroom: rejected, price unchanged
//! assert!(session.add_topping("cheeseburst", 1).is_err());
//! assert_eq!(session.final_price(), 262);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod layer;
pub mod money;
pub mod pizza;
pub mod rules;
pub mod session;
pub mod tax;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use slice_core::PricingSession` instead of
// `use slice_core::session::PricingSession`

pub use catalog::{PricingConfig, TieredPricing};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::{PricingSession, SharedSession};
pub use types::{PizzaSize, TaxRate};
