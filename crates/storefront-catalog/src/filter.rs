//! # Category Filter
//!
//! Narrows an already fetched category listing by brand and price.
//!
//! ```text
//! brands = {}              → any brand, products without one included
//! brands = {"Essence", …}  → only products whose brand is selected
//! min_price ≤ price ≤ max_price, both ends inclusive, undiscounted price
//! ```

use std::collections::BTreeSet;

use storefront_core::Money;

use crate::models::CatalogProduct;

/// Lower bound of the price range when nothing else is chosen.
pub const DEFAULT_MIN_PRICE: u32 = 1;

/// Upper bound of the price range when nothing else is chosen.
pub const DEFAULT_MAX_PRICE: u32 = 2000;

/// Brand and price criteria for a category listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    /// Selected brands. Empty selects every product.
    pub brands: BTreeSet<String>,
    pub min_price: Money,
    pub max_price: Money,
}

impl Default for ProductFilter {
    fn default() -> Self {
        ProductFilter {
            brands: BTreeSet::new(),
            min_price: Money::new(i64::from(DEFAULT_MIN_PRICE), 0),
            max_price: Money::new(i64::from(DEFAULT_MAX_PRICE), 0),
        }
    }
}

impl ProductFilter {
    /// Adds a brand to the selection.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    /// Replaces the price range.
    pub fn with_price_range(mut self, min_price: Money, max_price: Money) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    /// Checks one product against both criteria.
    pub fn matches(&self, product: &CatalogProduct) -> bool {
        let brand_match = self.brands.is_empty()
            || product
                .brand
                .as_ref()
                .is_some_and(|brand| self.brands.contains(brand));
        let price_match = product.price >= self.min_price && product.price <= self.max_price;

        brand_match && price_match
    }

    /// Matching products, in listing order.
    pub fn apply<'a>(&self, products: &'a [CatalogProduct]) -> Vec<&'a CatalogProduct> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Back to every brand and the default price range.
    pub fn reset(&mut self) {
        *self = ProductFilter::default();
    }
}

/// The brands offered by a listing, sorted and de-duplicated.
///
/// Products without a brand contribute nothing.
pub fn brands(products: &[CatalogProduct]) -> Vec<String> {
    products
        .iter()
        .filter_map(|p| p.brand.as_deref())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
