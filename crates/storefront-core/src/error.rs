//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart rule violations                           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-db errors       └── DbError       - Storage failures       │
//! │  storefront-catalog errors  └── CatalogError  - Catalog failures       │
//! │  storefront-cart errors     └── CartError     - What callers see       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CartError → caller                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Cart rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Merging a quantity into an existing line would overflow.
    #[error("Quantity for product {product_id} overflows: {current} + {added}")]
    QuantityOverflow {
        product_id: u64,
        current: i64,
        added: i64,
    },

    /// A line total does not fit at this quantity.
    #[error("Totals for product {product_id} overflow at quantity {quantity}")]
    LineOverflow { product_id: u64, quantity: i64 },

    /// A cart aggregate does not fit. The cart is left as it was.
    #[error("Cart {0} overflows")]
    TotalsOverflow(&'static str),

    /// A line with this product id is already in the cart.
    #[error("Product {0} is already in the cart")]
    DuplicateLine(u64),

    /// A stored cart record breaks one of the cart invariants.
    ///
    /// ## When This Occurs
    /// - Two lines share a product id
    /// - A line has quantity ≤ 0
    /// - A price is negative or a discount is outside `0..=100`
    #[error("Inconsistent cart record: {reason}")]
    InconsistentCart { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InconsistentCart error.
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        CoreError::InconsistentCart {
            reason: reason.into(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::QuantityOverflow {
            product_id: 42,
            current: i64::MAX,
            added: 1,
        };
        assert_eq!(
            err.to_string(),
            format!("Quantity for product 42 overflows: {} + 1", i64::MAX)
        );

        let err = CoreError::TotalsOverflow("total quantity");
        assert_eq!(err.to_string(), "Cart total quantity overflows");

        let err = ValidationError::OutOfRange {
            field: "discount_percentage".to_string(),
            min: 0,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "discount_percentage must be between 0 and 100"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
