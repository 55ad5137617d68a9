//! # Cart Error Types
//!
//! ## Error Sources
//! ```text
//! DbError (read/write failed)        ──► CartError::Storage
//! ValidationError (bad id/quantity)  ──► CartError::Validation
//! CoreError (overflow, …)            ──► CartError::Core
//! place_order on an empty cart       ──► CartError::EmptyCart
//! ```
//!
//! Catalog failures never surface here; they become placeholder lines.

use storefront_core::{CoreError, ValidationError};
use storefront_db::DbError;
use thiserror::Error;

/// Cart store errors.
#[derive(Debug, Error)]
pub enum CartError {
    /// The storage medium failed. A corrupt record is not reported here.
    #[error("Cart storage failed: {0}")]
    Storage(#[from] DbError),

    /// Caller input was rejected before the cart was touched.
    #[error("Invalid cart input: {0}")]
    Validation(#[from] ValidationError),

    /// A cart rule was violated.
    #[error(transparent)]
    Core(CoreError),

    /// Orders need at least one line.
    #[error("Cannot place an order for an empty cart")]
    EmptyCart,
}

impl From<CoreError> for CartError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(v) => CartError::Validation(v),
            other => CartError::Core(other),
        }
    }
}

/// Result type for cart operations.
pub type CartResult<T> = Result<T, CartError>;
