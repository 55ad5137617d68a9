//! The product lookup the cart store depends on.

use async_trait::async_trait;
use mockall::automock;
use storefront_core::{ProductDetails, ProductId};

use crate::client::HttpCatalog;
use crate::error::CatalogResult;

/// Product metadata source.
///
/// Any error means "the catalog could not deliver this product"; the cart
/// store does not distinguish between failure kinds.
#[automock]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetches the metadata a new cart line caches.
    async fn fetch_product(&self, id: ProductId) -> CatalogResult<ProductDetails>;
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn fetch_product(&self, id: ProductId) -> CatalogResult<ProductDetails> {
        self.product(id).await?.details()
    }
}
