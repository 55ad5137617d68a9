//! # Validation Module
//!
//! Input validation for cart operations and catalog metadata.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI / front end                                              │
//! │  └── Type validation (argument parsing)                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: CartStore                                                    │
//! │  └── THIS MODULE: product id, add quantity                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart record load                                             │
//! │  └── Cart::repair (ids unique, totals recomputed)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that `update_quantity` deliberately takes any integer: zero or a
//! negative value deletes the line, so it is not validated here.

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{DiscountPercentage, ProductId};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a raw product id and wraps it.
///
/// ```rust
/// use storefront_core::validation::validate_product_id;
///
/// assert_eq!(validate_product_id(42).unwrap().get(), 42);
/// assert!(validate_product_id(0).is_err());
/// ```
pub fn validate_product_id(id: u64) -> ValidationResult<ProductId> {
    if id == 0 {
        return Err(ValidationError::MustBePositive {
            field: "product_id".to_string(),
        });
    }

    Ok(ProductId::new(id))
}

/// Validates the quantity passed to an add.
///
/// ## Rules
/// - Must be at least 1 (a line never holds quantity ≤ 0)
pub fn validate_add_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price: zero is fine (placeholder lines), negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage is within `0..=100`.
pub fn validate_discount_percentage(discount: DiscountPercentage) -> ValidationResult<()> {
    let pct = discount.percent();
    if pct < Decimal::ZERO || pct > Decimal::ONE_HUNDRED {
        return Err(ValidationError::OutOfRange {
            field: "discount_percentage".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}
