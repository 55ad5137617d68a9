//! # Domain Types
//!
//! Core domain types shared by the cart, the catalog client and storage.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌──────────────────┐ │
//! │  │   ProductId     │   │ DiscountPercentage   │   │ ProductDetails   │ │
//! │  │  ─────────────  │   │  ──────────────────  │   │  ──────────────  │ │
//! │  │  u64, > 0       │   │  decimal 0..=100     │   │  title           │ │
//! │  │  line key       │   │  10 = 10 % off       │   │  thumbnail       │ │
//! │  └─────────────────┘   └──────────────────────┘   │  price           │ │
//! │                                                    │  discount        │ │
//! │                                                    └──────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog product identifier. Also the key of a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(#[ts(type = "number")] u64);

impl ProductId {
    /// Wraps a raw id. Use [`crate::validation::validate_product_id`] on
    /// untrusted input.
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Discount Percentage
// =============================================================================

/// Percentage discount, `0..=100`.
///
/// Kept as a decimal because the catalog publishes values like `7.17`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountPercentage(#[ts(type = "string")] Decimal);

impl DiscountPercentage {
    /// Creates a percentage from a mantissa and scale: `new(717, 2)` is 7.17 %.
    #[inline]
    pub fn new(num: i64, scale: u32) -> Self {
        DiscountPercentage(Decimal::new(num, scale))
    }

    /// Wraps a decimal percentage.
    #[inline]
    pub const fn from_decimal(pct: Decimal) -> Self {
        DiscountPercentage(pct)
    }

    /// No discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountPercentage(Decimal::ZERO)
    }

    /// Returns the percentage value (10 for 10 %).
    #[inline]
    pub const fn percent(&self) -> Decimal {
        self.0
    }

    /// Multiplier applied to a total: `1 − pct / 100`.
    #[inline]
    pub fn factor(&self) -> Decimal {
        (Decimal::ONE - self.0 / Decimal::ONE_HUNDRED).normalize()
    }

    /// Checks if there is no discount.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for DiscountPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}

// =============================================================================
// Product Details
// =============================================================================

/// The catalog metadata a cart line caches when it is first added.
///
/// Never re-synced: later price changes in the catalog do not reach lines
/// already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDetails {
    /// Display title.
    pub title: String,

    /// Thumbnail URL, empty when unknown.
    pub thumbnail: String,

    /// Unit price.
    pub price: Money,

    /// Discount applied to the line total.
    pub discount_percentage: DiscountPercentage,
}

impl ProductDetails {
    /// Stand-in metadata for a product the catalog could not deliver.
    ///
    /// Price 0, no discount, no thumbnail, title `"Product {id}"`. Visibly
    /// wrong on purpose so a degraded line is easy to spot.
    pub fn placeholder(id: ProductId) -> Self {
        ProductDetails {
            title: format!("Product {}", id),
            thumbnail: String::new(),
            price: Money::zero(),
            discount_percentage: DiscountPercentage::zero(),
        }
    }
}
