//! Catalog browsing commands.

use anyhow::Context;

use storefront_catalog::{brands, HttpCatalog, ProductFilter};
use storefront_core::validation::validate_product_id;

use crate::render;

/// `storefront products [--limit N] [--skip N]`
pub async fn products(catalog: &HttpCatalog, limit: u32, skip: u32) -> anyhow::Result<String> {
    let page = catalog
        .products(limit, skip)
        .await
        .context("Failed to load products")?;

    let listed: Vec<_> = page.products.iter().collect();
    Ok(render::product_list(&listed, Some(page.total)))
}

/// `storefront product <id>`
pub async fn product(catalog: &HttpCatalog, id: u64) -> anyhow::Result<String> {
    let id = validate_product_id(id)?;
    let product = catalog
        .product(id)
        .await
        .with_context(|| format!("Failed to load product {id}"))?;
    Ok(render::product(&product))
}

/// `storefront search <query>`
pub async fn search(catalog: &HttpCatalog, query: &str) -> anyhow::Result<String> {
    let page = catalog
        .search(query)
        .await
        .with_context(|| format!("Search for '{query}' failed"))?;

    let found: Vec<_> = page.products.iter().collect();
    Ok(render::product_list(&found, Some(page.total)))
}

/// `storefront categories`
pub async fn categories(catalog: &HttpCatalog) -> anyhow::Result<String> {
    let categories = catalog
        .categories()
        .await
        .context("Failed to load categories")?;
    Ok(render::categories(&categories))
}

/// `storefront category <slug> [--brand B].. [--min N] [--max N]`
pub async fn category(
    catalog: &HttpCatalog,
    slug: &str,
    filter: &ProductFilter,
) -> anyhow::Result<String> {
    let page = catalog
        .products_by_category(slug)
        .await
        .with_context(|| format!("Failed to load category '{slug}'"))?;

    let listed = filter.apply(&page.products);
    Ok(render::category(
        slug,
        &brands(&page.products),
        &listed,
        page.products.len(),
    ))
}
