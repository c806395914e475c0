//! # Validation Module
//!
//! Input validation utilities for the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE - input shape                                    │
//! │  ├── topping name non-empty                                            │
//! │  ├── servings strictly positive                                        │
//! │  └── base price / base tax non-negative                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: rules module - business constraints                          │
//! │  ├── serving caps per size                                             │
//! │  ├── mutual exclusion                                                  │
//! │  └── size restrictions                                                 │
//! │                                                                         │
//! │  Input-shape errors never reach the rule pipeline.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a topping name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
///
/// Name *recognition* (catalog membership) is a separate concern handled by
/// the session, which reports `UnknownTopping` with full context.
pub fn validate_topping_name(topping: &str) -> ValidationResult<()> {
    if topping.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "topping".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a serving count for one addition call.
///
/// ## Rules
/// - Must be strictly positive (> 0)
///
/// Zero and negative counts are input errors: the state layer would happily
/// record them, and a negative count would silently shrink the bill.
///
/// ## Example
/// ```rust
/// use slice_core::validation::validate_servings;
///
/// assert!(validate_servings(1).is_ok());
/// assert!(validate_servings(0).is_err());
/// assert!(validate_servings(-3).is_err());
/// ```
pub fn validate_servings(servings: i64) -> ValidationResult<()> {
    if servings <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "servings".to_string(),
        });
    }

    Ok(())
}

/// Validates a base price in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed
pub fn validate_base_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "base price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a base tax percentage.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - No upper bound: tax pipelines may push the effective rate past any
///   fixed ceiling anyway
pub fn validate_tax_percent(percent: i64) -> ValidationResult<()> {
    if percent < 0 {
        return Err(ValidationError::OutOfRange {
            field: "tax percentage".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_topping_name() {
        assert!(validate_topping_name("mushroom").is_ok());
        assert!(validate_topping_name("cheeseburst").is_ok());

        assert!(validate_topping_name("").is_err());
        assert!(validate_topping_name("   ").is_err());
    }

    #[test]
    fn test_validate_servings() {
        assert!(validate_servings(1).is_ok());
        assert!(validate_servings(100).is_ok());

        assert!(validate_servings(0).is_err());
        assert!(validate_servings(-1).is_err());
    }

    #[test]
    fn test_validate_base_price_cents() {
        assert!(validate_base_price_cents(0).is_ok());
        assert!(validate_base_price_cents(200).is_ok());
        assert!(validate_base_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_tax_percent() {
        assert!(validate_tax_percent(0).is_ok());
        assert!(validate_tax_percent(10).is_ok());
        assert!(validate_tax_percent(-5).is_err());
    }
}
