//! # storefront-core: Pure Cart Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It owns the cart aggregate
//! and its totals arithmetic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storefront CLI / web front end                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          storefront-cart (CartStore: read-modify-write)         │   │
//! │  └──────────────┬──────────────────────────────────┬───────────────┘   │
//! │                 │                                  │                    │
//! │  ┌──────────────▼───────────────┐   ┌──────────────▼───────────────┐   │
//! │  │ storefront-db (key/value)    │   │ storefront-catalog (HTTP)    │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │   types: ProductId, DiscountPercentage, ProductDetails          │   │
//! │  │   money: Money (exact decimal)                                  │   │
//! │  │   cart:  Cart, CartLineItem, CartTotals                         │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Identifiers, discount percentage, catalog metadata
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`cart`] - The cart aggregate and its derived totals
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Cart, DiscountPercentage, Money, ProductDetails, ProductId};
//!
//! let shirt = ProductDetails {
//!     title: "Shirt".to_string(),
//!     thumbnail: String::new(),
//!     price: Money::new(1999, 2),
//!     discount_percentage: DiscountPercentage::new(10, 0),
//! };
//!
//! let mut cart = Cart::empty();
//! cart.insert_line(ProductId::new(42), &shirt, 2).unwrap();
//!
//! assert_eq!(cart.total(), Money::new(3998, 2));
//! assert_eq!(cart.discounted_total(), Money::new(35982, 3));
//! ```

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartLineItem, CartTotals};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Id of the single cart.
///
/// One cart per store instance; there is no multi-cart support.
pub const CART_ID: u64 = 1;

/// Owner recorded on the cart record.
pub const DEFAULT_USER_ID: u64 = 1;

/// Storage key the cart record lives under.
pub const CART_STORAGE_KEY: &str = "localCart";
