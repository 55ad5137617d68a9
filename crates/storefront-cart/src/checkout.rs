//! # Checkout
//!
//! Turns the current cart into an order confirmation and empties the cart.
//!
//! ```text
//! place_order(store, now)
//!     │
//!     ├── cart empty? ──► CartError::EmptyCart
//!     │
//!     ├── order number  EC + last 6 digits of epoch millis + 3 random digits
//!     ├── delivery      now + DELIVERY_LEAD_DAYS
//!     │
//!     └── store.clear() ──► OrderConfirmation { …, cart as ordered }
//! ```
//!
//! Orders are not sent anywhere; the confirmation is all there is.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::info;

use storefront_core::Cart;

use crate::error::{CartError, CartResult};
use crate::store::CartStore;

/// Days between placing an order and its estimated delivery.
pub const DELIVERY_LEAD_DAYS: i64 = 5;

/// What the customer sees after placing an order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order_number: String,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
    /// The cart as it was when the order was placed.
    pub cart: Cart,
}

/// Formats an order number from a timestamp and a suffix in `0..1000`.
pub fn order_number(placed_at: DateTime<Utc>, suffix: u16) -> String {
    let millis = placed_at.timestamp_millis().rem_euclid(1_000_000);
    format!("EC{millis:06}{:03}", suffix % 1000)
}

/// Places an order for the current cart and clears it.
///
/// ## Errors
/// - `CartError::EmptyCart` if the cart has no lines (nothing is written)
/// - `CartError::Storage` if the cart can't be read or cleared
pub async fn place_order(store: &CartStore, now: DateTime<Utc>) -> CartResult<OrderConfirmation> {
    let cart = store.get().await?;
    if cart.is_empty() {
        return Err(CartError::EmptyCart);
    }

    let suffix: u16 = rand::thread_rng().gen_range(0..1000);
    let confirmation = OrderConfirmation {
        order_number: order_number(now, suffix),
        placed_at: now,
        estimated_delivery: now + Duration::days(DELIVERY_LEAD_DAYS),
        cart,
    };

    store.clear().await?;

    info!(
        order_number = %confirmation.order_number,
        total = %confirmation.cart.discounted_total(),
        items = confirmation.cart.total_quantity(),
        "Order placed"
    );
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;
    use storefront_catalog::MockCatalog;
    use storefront_core::{DiscountPercentage, Money, ProductDetails};
    use storefront_db::MemoryKvStore;

    fn store() -> CartStore {
        let mut catalog = MockCatalog::new();
        catalog.expect_fetch_product().returning(|_| {
            Ok(ProductDetails {
                title: "Shirt".to_string(),
                thumbnail: String::new(),
                price: Money::new(1999, 2),
                discount_percentage: DiscountPercentage::new(10, 0),
            })
        });
        CartStore::new(Arc::new(MemoryKvStore::new()), Arc::new(catalog))
    }

    #[test]
    fn test_order_number_format() {
        // 1_700_000_123_456 ms → last six digits 123456
        let at = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
        assert_eq!(order_number(at, 7), "EC123456007");

        // Leading zeros survive on both parts.
        let at = Utc.timestamp_millis_opt(1_700_000_000_042).unwrap();
        assert_eq!(order_number(at, 999), "EC000042999");
    }

    #[tokio::test]
    async fn test_place_order_on_empty_cart_fails() {
        let store = store();
        let now = Utc::now();

        assert!(matches!(
            place_order(&store, now).await,
            Err(CartError::EmptyCart)
        ));
    }

    #[tokio::test]
    async fn test_place_order_confirms_and_clears() {
        let store = store();
        store.add_item(42, 2).await.unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let confirmation = place_order(&store, now).await.unwrap();

        let number = &confirmation.order_number;
        assert_eq!(number.len(), 11);
        assert!(number.starts_with("EC"));
        assert!(number[2..].chars().all(|c| c.is_ascii_digit()));

        assert_eq!(confirmation.placed_at, now);
        assert_eq!(
            confirmation.estimated_delivery,
            Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap()
        );
        assert_eq!(confirmation.cart.discounted_total(), Money::new(35982, 3));

        assert!(store.get().await.unwrap().is_empty());
    }
}
