//! # Cart Commands
//!
//! Thin wrappers over [`CartStore`]: call, then render the resulting cart.

use anyhow::Context;
use chrono::Utc;
use tracing::info;

use storefront_cart::{place_order, CartError, CartStore};

use crate::render;

/// `storefront cart`
pub async fn show(store: &CartStore) -> anyhow::Result<String> {
    let cart = store.get().await.context("Failed to load cart")?;
    Ok(render::cart(&cart))
}

/// `storefront add <id> [-q N]`
pub async fn add(store: &CartStore, id: u64, quantity: i64) -> anyhow::Result<String> {
    info!(product_id = id, quantity, "Adding to cart");

    let cart = store
        .add_item(id, quantity)
        .await
        .with_context(|| format!("Failed to add product {id}"))?;
    Ok(render::cart(&cart))
}

/// `storefront update <id> <qty>`
pub async fn update(store: &CartStore, id: u64, quantity: i64) -> anyhow::Result<String> {
    let cart = store
        .update_quantity(id, quantity)
        .await
        .with_context(|| format!("Failed to update product {id}"))?;
    Ok(render::cart(&cart))
}

/// `storefront remove <id>`
pub async fn remove(store: &CartStore, id: u64) -> anyhow::Result<String> {
    let cart = store
        .remove_item(id)
        .await
        .with_context(|| format!("Failed to remove product {id}"))?;
    Ok(render::cart(&cart))
}

/// `storefront clear`
pub async fn clear(store: &CartStore) -> anyhow::Result<String> {
    let cart = store.clear().await.context("Failed to clear cart")?;
    Ok(render::cart(&cart))
}

/// `storefront checkout`
pub async fn checkout(store: &CartStore) -> anyhow::Result<String> {
    match place_order(store, Utc::now()).await {
        Ok(order) => Ok(render::confirmation(&order)),
        Err(CartError::EmptyCart) => Ok("Your cart is empty. Add products before checking out.\n".to_string()),
        Err(err) => Err(err).context("Checkout failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use storefront_catalog::{CatalogError, MockCatalog};
    use storefront_core::{DiscountPercentage, Money, ProductDetails};
    use storefront_db::MemoryKvStore;

    fn store() -> CartStore {
        let mut catalog = MockCatalog::new();
        catalog.expect_fetch_product().returning(|id| match id.get() {
            42 => Ok(ProductDetails {
                title: "Shirt".to_string(),
                thumbnail: String::new(),
                price: Money::new(1999, 2),
                discount_percentage: DiscountPercentage::new(10, 0),
            }),
            other => Err(CatalogError::Transport {
                url: format!("https://dummyjson.com/products/{other}"),
                reason: "connection refused".to_string(),
            }),
        });
        CartStore::new(Arc::new(MemoryKvStore::new()), Arc::new(catalog))
    }

    #[tokio::test]
    async fn test_add_update_remove_flow() {
        let store = store();

        let out = add(&store, 42, 2).await.unwrap();
        assert!(out.contains("2 items"));
        assert!(out.contains("$35.98"));

        let out = add(&store, 99, 1).await.unwrap();
        assert!(out.contains("Product 99"));

        let out = update(&store, 42, 1).await.unwrap();
        assert!(out.contains("2 items"));

        remove(&store, 42).await.unwrap();
        let out = remove(&store, 99).await.unwrap();
        assert_eq!(out, "Cart #1 is empty.\n");
    }

    #[tokio::test]
    async fn test_add_invalid_quantity_fails() {
        let store = store();
        let err = add(&store, 42, 0).await.unwrap_err();
        assert!(err.to_string().contains("Failed to add product 42"));
    }

    #[tokio::test]
    async fn test_checkout() {
        let store = store();

        let out = checkout(&store).await.unwrap();
        assert!(out.contains("cart is empty"));

        add(&store, 42, 2).await.unwrap();
        let out = checkout(&store).await.unwrap();
        assert!(out.contains("Order Number:       #EC"));

        assert_eq!(show(&store).await.unwrap(), "Cart #1 is empty.\n");
    }
}
