//! # Catalog Payloads
//!
//! The subset of the DummyJSON product shape the storefront reads. Unknown
//! fields are ignored; optional ones default.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use storefront_core::validation::{validate_discount_percentage, validate_price};
use storefront_core::{DiscountPercentage, Money, ProductDetails, ProductId};

use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Products
// =============================================================================

/// A product as the catalog publishes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: Money,
    #[serde(default)]
    pub discount_percentage: DiscountPercentage,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl CatalogProduct {
    /// The metadata a cart line caches for this product.
    ///
    /// ## Errors
    /// `CatalogError::InvalidProduct` if the price is negative or the
    /// discount is outside `0..=100`.
    pub fn details(&self) -> CatalogResult<ProductDetails> {
        let invalid = |source| CatalogError::InvalidProduct {
            id: self.id.get(),
            source,
        };

        validate_price(self.price).map_err(invalid)?;
        validate_discount_percentage(self.discount_percentage).map_err(invalid)?;

        Ok(ProductDetails {
            title: self.title.clone(),
            thumbnail: self.thumbnail.clone(),
            price: self.price,
            discount_percentage: self.discount_percentage,
        })
    }

    /// Unit price after the catalog discount.
    pub fn discounted_price(&self) -> Money {
        self.price.apply_discount(self.discount_percentage)
    }
}

/// One page of products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<CatalogProduct>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

// =============================================================================
// Categories
// =============================================================================

/// A product category.
///
/// Older catalog versions list categories as bare slugs; newer ones as
/// `{slug, name, url}` objects. Both decode to this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Category {
    fn from_slug(slug: &str) -> Self {
        Category {
            slug: slug.to_string(),
            name: slug.to_string(),
            url: None,
        }
    }
}

/// Normalizes a `/products/categories` body.
///
/// ## Accepted Shapes
/// ```text
/// ["beauty", "fragrances"]
/// [{"slug": "beauty", "name": "Beauty", "url": "…"}]
/// {"categories": [ …either of the above… ]}
/// {"data": [ …either of the above… ]}
/// ```
/// Anything else yields an empty list. Entries that are neither a string nor
/// a category object are skipped.
pub fn parse_categories(body: Value) -> Vec<Category> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map
            .remove("categories")
            .or_else(|| map.remove("data"))
        {
            Some(Value::Array(entries)) => entries,
            _ => {
                warn!("Categories response object has no category list");
                return Vec::new();
            }
        },
        other => {
            warn!(kind = %json_kind(&other), "Unexpected categories response format");
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(slug) => Some(Category::from_slug(&slug)),
            obj @ Value::Object(_) => serde_json::from_value(obj).ok(),
            _ => None,
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
