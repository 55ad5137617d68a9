//! Catalog lookup with placeholder fallback.

use tracing::{debug, warn};

use storefront_catalog::Catalog;
use storefront_core::{ProductDetails, ProductId};

/// Outcome of resolving a product for a new cart line.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductLookup {
    /// The catalog delivered the product.
    Found(ProductDetails),

    /// The catalog failed; the line is added with stand-in metadata.
    Placeholder {
        details: ProductDetails,
        reason: String,
    },
}

impl ProductLookup {
    /// Asks the catalog for `id`, substituting a placeholder on any failure.
    pub async fn resolve(catalog: &dyn Catalog, id: ProductId) -> Self {
        match catalog.fetch_product(id).await {
            Ok(details) => {
                debug!(product_id = %id, title = %details.title, "Product resolved");
                ProductLookup::Found(details)
            }
            Err(err) => {
                warn!(
                    product_id = %id,
                    error = %err,
                    "Catalog lookup failed, adding placeholder line"
                );
                ProductLookup::Placeholder {
                    details: ProductDetails::placeholder(id),
                    reason: err.to_string(),
                }
            }
        }
    }

    /// The metadata the new line will cache.
    pub fn details(&self) -> &ProductDetails {
        match self {
            ProductLookup::Found(details) => details,
            ProductLookup::Placeholder { details, .. } => details,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ProductLookup::Placeholder { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{CatalogError, MockCatalog};
    use storefront_core::{DiscountPercentage, Money};

    #[tokio::test]
    async fn test_found() {
        let mut catalog = MockCatalog::new();
        catalog.expect_fetch_product().times(1).returning(|_| {
            Ok(ProductDetails {
                title: "Shirt".to_string(),
                thumbnail: String::new(),
                price: Money::new(1999, 2),
                discount_percentage: DiscountPercentage::new(10, 0),
            })
        });

        let lookup = ProductLookup::resolve(&catalog, ProductId::new(42)).await;
        assert!(!lookup.is_placeholder());
        assert_eq!(lookup.details().title, "Shirt");
    }

    #[tokio::test]
    async fn test_failure_yields_placeholder() {
        let mut catalog = MockCatalog::new();
        catalog.expect_fetch_product().times(1).returning(|_| {
            Err(CatalogError::Status {
                status: 503,
                url: "https://dummyjson.com/products/99".to_string(),
            })
        });

        let lookup = ProductLookup::resolve(&catalog, ProductId::new(99)).await;

        assert!(lookup.is_placeholder());
        assert_eq!(lookup.details(), &ProductDetails::placeholder(ProductId::new(99)));
        let ProductLookup::Placeholder { reason, .. } = lookup else {
            unreachable!()
        };
        assert!(reason.contains("503"));
    }
}
