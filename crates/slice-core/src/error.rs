//! # Error Types
//!
//! Domain-specific error types for slice-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  slice-core errors (this file)                                         │
//! │  ├── CoreError        - Topping rejection / domain errors              │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller                            │
//! │                                                                         │
//! │  Callers that only need pass/fail use                                  │
//! │  PricingSession::try_add_topping, which collapses the taxonomy         │
//! │  to a boolean.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (topping, size, counts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::PizzaSize;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
///
/// These errors represent business rule violations raised while adding a
/// topping. They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Topping name is not in the catalog and is not the tiered topping.
    ///
    /// ## When This Occurs
    /// - Caller passes a misspelled or unsupported topping name
    ///
    /// A topping without a price must be rejected up front, otherwise it
    /// would silently contribute nothing to the subtotal.
    #[error("Unknown topping: {topping}")]
    UnknownTopping { topping: String },

    /// Two mutually exclusive toppings were requested on the same pizza.
    ///
    /// ## When This Occurs
    /// - Adding the tiered topping when its conflicting topping is present
    /// - Adding the conflicting topping when the tiered topping is present
    #[error("Topping {topping} cannot be combined with {conflicts_with}")]
    ToppingConflict {
        topping: String,
        conflicts_with: String,
    },

    /// Cumulative servings of a capped topping would exceed the size limit.
    ///
    /// ## User Workflow
    /// ```text
    /// add_topping("cheeseburst", 2) on a small pizza
    ///      │
    ///      ▼
    /// cap for small = 1, current = 0, requested = 2
    ///      │
    ///      ▼
    /// ServingLimitExceeded { max: 1, current: 0, requested: 2 }
    /// ```
    #[error("{topping} limited to {max} serving(s) on a {size} pizza: have {current}, requested {requested}")]
    ServingLimitExceeded {
        topping: String,
        size: PizzaSize,
        max: i64,
        current: i64,
        requested: i64,
    },

    /// Topping is not available on this pizza size.
    #[error("{topping} is not available on a {size} pizza")]
    SizeRestricted { topping: String, size: PizzaSize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business rules run.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ServingLimitExceeded {
            topping: "cheeseburst".to_string(),
            size: PizzaSize::Small,
            max: 1,
            current: 0,
            requested: 2,
        };
        assert_eq!(
            err.to_string(),
            "cheeseburst limited to 1 serving(s) on a small pizza: have 0, requested 2"
        );

        let err = CoreError::UnknownTopping {
            topping: "anchovy".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown topping: anchovy");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "topping".to_string(),
        };
        assert_eq!(err.to_string(), "topping is required");

        let err = ValidationError::MustBePositive {
            field: "servings".to_string(),
        };
        assert_eq!(err.to_string(), "servings must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "servings".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
