//! # storefront-catalog: Remote Product Catalog Client
//!
//! Reads products and categories from a DummyJSON-compatible REST catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  CartStore::add_item(new id)        CLI: products / search / category  │
//! │       │                                   │                             │
//! │       │ Catalog::fetch_product(id)        │ HttpCatalog::products(..)   │
//! │       ▼                                   ▼                             │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               storefront-catalog (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   Catalog (trait) ◄── HttpCatalog ──► reqwest::Client           │   │
//! │  │        ▲                                                        │   │
//! │  │        └── MockCatalog (tests)                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                      GET https://dummyjson.com/products/…              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`catalog`] - The `Catalog` trait consumed by the cart store
//! - [`client`] - `HttpCatalog` and its configuration
//! - [`models`] - Wire payloads (products, pages, categories)
//! - [`filter`] - Brand and price filter for a category listing
//! - [`error`] - Catalog error types

pub mod catalog;
pub mod client;
pub mod error;
pub mod filter;
pub mod models;

pub use catalog::{Catalog, MockCatalog};
pub use client::{CatalogConfig, HttpCatalog, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use error::{CatalogError, CatalogResult};
pub use filter::{brands, ProductFilter, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
pub use models::{CatalogProduct, Category, ProductsResponse};
