//! # Cart Store
//!
//! The service every cart operation goes through.
//!
//! ## Operations
//! ```text
//! ┌────────────────────────────┬────────────────────────────────────────────┐
//! │ get()                      │ stored cart, or a fresh one (persisted)    │
//! │ add_item(id, qty)          │ merge into line / new line via catalog     │
//! │ update_quantity(id, qty)   │ qty ≤ 0 deletes; absent line is a no-op    │
//! │ remove_item(id)            │ update_quantity(id, 0)                     │
//! │ clear()                    │ fresh empty cart, persisted                │
//! │ cart_id() / totals()       │ fixed id / aggregates of the current cart  │
//! └────────────────────────────┴────────────────────────────────────────────┘
//! ```
//!
//! Every mutating operation ends with a full write of the cart record and
//! returns the cart as written. Operations are not atomic across processes:
//! the last writer wins.

use std::sync::Arc;
use tracing::{debug, info, warn};

use storefront_catalog::Catalog;
use storefront_core::validation::{validate_add_quantity, validate_product_id};
use storefront_core::{Cart, CartTotals, ProductId, CART_ID, CART_STORAGE_KEY};
use storefront_db::{get_item, set_item, KeyValueStore};

use crate::error::CartResult;
use crate::lookup::ProductLookup;

/// Read-modify-write service over the persisted cart.
///
/// ## Usage
/// ```rust,ignore
/// let store = CartStore::new(Arc::new(db.kv_store()), Arc::new(catalog));
///
/// let cart = store.add_item(42, 2).await?;
/// println!("{} items, {}", cart.total_quantity(), cart.discounted_total());
/// ```
#[derive(Clone)]
pub struct CartStore {
    storage: Arc<dyn KeyValueStore>,
    catalog: Arc<dyn Catalog>,
}

impl CartStore {
    /// Creates a store over the given storage and catalog handles.
    pub fn new(storage: Arc<dyn KeyValueStore>, catalog: Arc<dyn Catalog>) -> Self {
        CartStore { storage, catalog }
    }

    /// Id of the one cart this store manages.
    pub fn cart_id(&self) -> u64 {
        CART_ID
    }

    /// Returns the current cart.
    ///
    /// ## Behavior
    /// - Stored: returned with its totals recomputed from the lines, nothing
    ///   written (the next mutation persists the recomputed amounts)
    /// - Absent, unparseable, or structurally broken (see [`Cart::repair`]):
    ///   a fresh empty cart is persisted and returned
    /// - Storage read failure: the error is returned and nothing is written
    pub async fn get(&self) -> CartResult<Cart> {
        match get_item::<Cart, _>(self.storage.as_ref(), CART_STORAGE_KEY).await {
            Ok(Some(mut cart)) => match cart.repair() {
                Ok(changed) => {
                    if changed {
                        debug!("Stored cart totals recomputed from its lines");
                    }
                    return Ok(cart);
                }
                Err(err) => warn!(error = %err, "Stored cart is inconsistent, starting fresh"),
            },
            Ok(None) => debug!("No stored cart, creating one"),
            Err(err) if err.is_corrupt_record() => {
                warn!(error = %err, "Stored cart is corrupt, starting fresh");
            }
            Err(err) => return Err(err.into()),
        }

        let cart = Cart::empty();
        self.persist(&cart).await?;
        Ok(cart)
    }

    /// Adds `quantity` units of a product.
    ///
    /// An existing line keeps its cached price and discount; only its
    /// quantity grows and the catalog is not asked. A new line is resolved
    /// through the catalog and falls back to a placeholder if that fails.
    ///
    /// ## Errors
    /// - `CartError::Validation` if `product_id` is 0 or `quantity < 1`
    /// - `CartError::Core` if the merged quantity or any total overflows;
    ///   nothing is written
    /// - `CartError::Storage` if the cart can't be read or written
    pub async fn add_item(&self, product_id: u64, quantity: i64) -> CartResult<Cart> {
        let id = validate_product_id(product_id)?;
        validate_add_quantity(quantity)?;

        let mut cart = self.get().await?;

        if cart.increase_quantity(id, quantity)? {
            debug!(product_id = %id, added = quantity, "Merged into existing line");
        } else {
            let lookup = ProductLookup::resolve(self.catalog.as_ref(), id).await;
            cart.insert_line(id, lookup.details(), quantity)?;
            debug!(
                product_id = %id,
                quantity,
                placeholder = lookup.is_placeholder(),
                "Added new line"
            );
        }

        self.persist(&cart).await?;
        Ok(cart)
    }

    /// Sets the quantity of a line; `quantity ≤ 0` deletes it.
    ///
    /// Without a line for `product_id` the current cart is returned and
    /// nothing is written. Neither is anything written when a total overflows
    /// at the new quantity.
    pub async fn update_quantity(&self, product_id: u64, quantity: i64) -> CartResult<Cart> {
        let id = ProductId::new(product_id);
        let mut cart = self.get().await?;

        if !cart.set_quantity(id, quantity)? {
            debug!(product_id = %id, "No line for product, nothing to update");
            return Ok(cart);
        }

        debug!(product_id = %id, quantity, "Updated line quantity");
        self.persist(&cart).await?;
        Ok(cart)
    }

    /// Deletes a line. Idempotent.
    pub async fn remove_item(&self, product_id: u64) -> CartResult<Cart> {
        self.update_quantity(product_id, 0).await
    }

    /// Replaces the stored cart with an empty one.
    pub async fn clear(&self) -> CartResult<Cart> {
        let cart = Cart::empty();
        self.persist(&cart).await?;
        info!("Cart cleared");
        Ok(cart)
    }

    /// Aggregates of the current cart.
    pub async fn totals(&self) -> CartResult<CartTotals> {
        Ok(self.get().await?.totals())
    }

    async fn persist(&self, cart: &Cart) -> CartResult<()> {
        set_item(self.storage.as_ref(), CART_STORAGE_KEY, cart).await?;
        debug!(
            total_products = cart.total_products(),
            total_quantity = cart.total_quantity(),
            "Cart persisted"
        );
        Ok(())
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("cart_id", &CART_ID)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
