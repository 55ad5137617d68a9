//! # Cart Aggregate
//!
//! The single cart and its line items, with totals that are always derived.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Mutations                                       │
//! │                                                                         │
//! │  Operation              Change to a copy of the lines    Then           │
//! │  ─────────              ─────────────────────────────    ────           │
//! │                                                                         │
//! │  insert_line() ───────► copy.push(line) ───────────┐                    │
//! │  increase_quantity() ─► copy[i].qty += n ──────────┤                    │
//! │  set_quantity() ──────► copy[i].qty = n (n ≤ 0: ✗) ┼─► replace_lines()  │
//! │  remove_line() ───────► copy.remove(i) ────────────┤                    │
//! │  repair() ────────────► copy[i] totals recomputed ─┘                    │
//! │  clear() ─────────────► products.clear(), zero totals                   │
//! │                                                                         │
//! │  NOTE: totals have no setters. replace_lines() recomputes them over    │
//! │        the copy with checked arithmetic and only then swaps it in.     │
//! │        An overflow returns an error and leaves the cart as it was.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id, in insertion order
//! - A stored line has quantity ≥ 1
//! - `total`, `discounted_total`, `total_products`, `total_quantity` equal a
//!   fresh [`CartTotals::compute`] over the lines

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DiscountPercentage, ProductDetails, ProductId};
use crate::validation::{validate_add_quantity, validate_discount_percentage, validate_price};
use crate::{CART_ID, DEFAULT_USER_ID};

// =============================================================================
// Cart Line Item
// =============================================================================

/// One product entry in the cart.
///
/// Title, thumbnail, price and discount are frozen when the line is first
/// added. `total` and `discounted_total` are stored for display and are
/// refreshed whenever the quantity changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    id: ProductId,
    title: String,
    price: Money,
    #[ts(type = "number")]
    quantity: i64,
    total: Money,
    discount_percentage: DiscountPercentage,
    discounted_total: Money,
    thumbnail: String,
}

impl CartLineItem {
    /// Creates a line from catalog metadata.
    ///
    /// Fails with `LineOverflow` if `price × quantity` does not fit.
    pub fn new(id: ProductId, details: &ProductDetails, quantity: i64) -> CoreResult<Self> {
        let mut line = CartLineItem {
            id,
            title: details.title.clone(),
            price: details.price,
            quantity,
            total: Money::zero(),
            discount_percentage: details.discount_percentage,
            discounted_total: Money::zero(),
            thumbnail: details.thumbnail.clone(),
        };
        line.apply_quantity(quantity)?;
        Ok(line)
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn discount_percentage(&self) -> DiscountPercentage {
        self.discount_percentage
    }

    /// `price × quantity`.
    pub fn total(&self) -> Money {
        self.total
    }

    /// `total × (1 − discount / 100)`.
    pub fn discounted_total(&self) -> Money {
        self.discounted_total
    }

    /// Sets the quantity and refreshes both stored totals from the cached
    /// price and discount. On overflow the line is not modified.
    fn apply_quantity(&mut self, quantity: i64) -> CoreResult<()> {
        let overflow = CoreError::LineOverflow {
            product_id: self.id.get(),
            quantity,
        };
        let Some(total) = self.price.checked_mul_quantity(quantity) else {
            return Err(overflow);
        };
        let Some(discounted_total) = total.checked_apply_discount(self.discount_percentage) else {
            return Err(overflow);
        };

        self.quantity = quantity;
        self.total = total;
        self.discounted_total = discounted_total;
        Ok(())
    }

    /// Checks the fields that are stored as given, not derived.
    fn validate_stored(&self) -> CoreResult<()> {
        if self.quantity < 1 {
            return Err(CoreError::inconsistent(format!(
                "line {} has quantity {}",
                self.id, self.quantity
            )));
        }
        validate_price(self.price)?;
        validate_discount_percentage(self.discount_percentage)?;
        Ok(())
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// The cart-level aggregates, derived purely from the lines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Σ line totals.
    pub total: Money,

    /// Σ line discounted totals.
    pub discounted_total: Money,

    /// Number of distinct lines.
    #[ts(type = "number")]
    pub total_products: usize,

    /// Σ line quantities.
    #[ts(type = "number")]
    pub total_quantity: i64,
}

impl CartTotals {
    /// Full recompute over every line.
    ///
    /// ## Errors
    /// `TotalsOverflow` naming the first aggregate that does not fit.
    pub fn compute(lines: &[CartLineItem]) -> CoreResult<Self> {
        let total = Money::checked_sum(lines.iter().map(|l| l.total))
            .ok_or(CoreError::TotalsOverflow("total"))?;
        let discounted_total = Money::checked_sum(lines.iter().map(|l| l.discounted_total))
            .ok_or(CoreError::TotalsOverflow("discounted total"))?;
        let total_quantity = lines
            .iter()
            .try_fold(0i64, |acc, l| acc.checked_add(l.quantity))
            .ok_or(CoreError::TotalsOverflow("total quantity"))?;

        Ok(CartTotals {
            total,
            discounted_total,
            total_products: lines.len(),
            total_quantity,
        })
    }

    /// How much the discounts take off: `total − discounted_total`.
    pub fn savings(&self) -> Money {
        self.total - self.discounted_total
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Field order and names follow the persisted record:
/// `{ id, products, total, discountedTotal, userId, totalProducts, totalQuantity }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    #[ts(type = "number")]
    id: u64,
    products: Vec<CartLineItem>,
    total: Money,
    discounted_total: Money,
    #[ts(type = "number")]
    user_id: u64,
    #[ts(type = "number")]
    total_products: usize,
    #[ts(type = "number")]
    total_quantity: i64,
}

impl Default for Cart {
    fn default() -> Self {
        Cart::empty()
    }
}

impl Cart {
    /// A fresh cart: fixed id, no lines, zero aggregates.
    pub fn empty() -> Self {
        Cart {
            id: CART_ID,
            products: Vec::new(),
            total: Money::zero(),
            discounted_total: Money::zero(),
            user_id: DEFAULT_USER_ID,
            total_products: 0,
            total_quantity: 0,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// Lines in insertion order.
    pub fn products(&self) -> &[CartLineItem] {
        &self.products
    }

    /// Looks up the line for a product.
    pub fn line(&self, id: ProductId) -> Option<&CartLineItem> {
        self.products.iter().find(|l| l.id == id)
    }

    /// Checks if a product has a line in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.line(id).is_some()
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn discounted_total(&self) -> Money {
        self.discounted_total
    }

    pub fn total_products(&self) -> usize {
        self.total_products
    }

    pub fn total_quantity(&self) -> i64 {
        self.total_quantity
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Current aggregates as a value.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            total: self.total,
            discounted_total: self.discounted_total,
            total_products: self.total_products,
            total_quantity: self.total_quantity,
        }
    }

    /// Appends a new line at the end of the cart.
    ///
    /// ## Returns
    /// - `Err(DuplicateLine)` if the product already has a line; use
    ///   [`Cart::increase_quantity`] for that
    /// - `Err(Validation)` if `quantity < 1`
    /// - `Err(LineOverflow)` or `Err(TotalsOverflow)` if an amount does not
    ///   fit; the cart is unchanged
    pub fn insert_line(
        &mut self,
        id: ProductId,
        details: &ProductDetails,
        quantity: i64,
    ) -> CoreResult<()> {
        validate_add_quantity(quantity)?;
        if self.contains(id) {
            return Err(CoreError::DuplicateLine(id.get()));
        }

        let mut products = self.products.clone();
        products.push(CartLineItem::new(id, details, quantity)?);
        self.replace_lines(products)
    }

    /// Adds to the quantity of an existing line, keeping its position.
    ///
    /// Totals come from the line's cached price and discount.
    ///
    /// ## Returns
    /// - `Ok(true)` if the line existed and was updated
    /// - `Ok(false)` if there is no line for the product (nothing changed)
    /// - `Err(QuantityOverflow)` if the line's quantity would overflow
    pub fn increase_quantity(&mut self, id: ProductId, by: i64) -> CoreResult<bool> {
        validate_add_quantity(by)?;
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        let mut products = self.products.clone();
        let line = &mut products[index];
        let new_qty = line
            .quantity
            .checked_add(by)
            .ok_or(CoreError::QuantityOverflow {
                product_id: id.get(),
                current: line.quantity,
                added: by,
            })?;
        line.apply_quantity(new_qty)?;

        self.replace_lines(products)?;
        Ok(true)
    }

    /// Sets the absolute quantity of a line.
    ///
    /// ## Behavior
    /// - No line for the product: nothing changes, returns `false`
    /// - `quantity ≤ 0`: the line is deleted
    /// - Otherwise: the line's totals are recomputed at the new quantity
    ///
    /// An overflow at the new quantity is an error and the cart keeps its
    /// previous state.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> CoreResult<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };

        let mut products = self.products.clone();
        if quantity <= 0 {
            products.remove(index);
        } else {
            products[index].apply_quantity(quantity)?;
        }

        self.replace_lines(products)?;
        Ok(true)
    }

    /// Deletes a line. Same as `set_quantity(id, 0)`.
    pub fn remove_line(&mut self, id: ProductId) -> CoreResult<bool> {
        self.set_quantity(id, 0)
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.products.clear();
        self.set_totals(CartTotals::default());
    }

    /// Brings a cart loaded from storage back in line with its own lines.
    ///
    /// Every derived amount (both line totals and all four aggregates) is
    /// recomputed from price, quantity and discount. A record written with
    /// binary-float amounts such as `0.30000000000000004` therefore keeps its
    /// lines and gets exact totals.
    ///
    /// ## Errors
    /// `InconsistentCart` or `Validation` for damage a recompute cannot fix:
    /// - Two lines share a product id
    /// - A line has quantity ≤ 0
    /// - A price is negative or a discount is outside `0..=100`
    ///
    /// ## Returns
    /// Whether any stored amount differed from the recompute.
    pub fn repair(&mut self) -> CoreResult<bool> {
        let mut seen = HashSet::with_capacity(self.products.len());
        let mut products = self.products.clone();
        for line in &mut products {
            if !seen.insert(line.id) {
                return Err(CoreError::inconsistent(format!(
                    "product {} appears twice",
                    line.id
                )));
            }
            line.validate_stored()?;
            let quantity = line.quantity;
            line.apply_quantity(quantity)?;
        }

        let totals = CartTotals::compute(&products)?;
        let changed = products != self.products || totals != self.totals();
        self.products = products;
        self.set_totals(totals);
        Ok(changed)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|l| l.id == id)
    }

    /// Installs `products` once their totals are known to fit.
    fn replace_lines(&mut self, products: Vec<CartLineItem>) -> CoreResult<()> {
        let totals = CartTotals::compute(&products)?;
        self.products = products;
        self.set_totals(totals);
        Ok(())
    }

    fn set_totals(&mut self, totals: CartTotals) {
        self.total = totals.total;
        self.discounted_total = totals.discounted_total;
        self.total_products = totals.total_products;
        self.total_quantity = totals.total_quantity;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
