//! # storefront-cart: The Cart Store
//!
//! One cart, persisted as a JSON record under `localCart`, mutated through a
//! read-modify-write cycle that recomputes every aggregate.
//!
//! ## Operation Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CartStore Operation                               │
//! │                                                                         │
//! │   add_item / update_quantity / remove_item / clear                     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   get() ──► KeyValueStore::read("localCart")                           │
//! │        │       absent / corrupt ──► fresh empty cart, persisted        │
//! │        │       read error ────────► CartError::Storage (no write)      │
//! │        ▼                                                                │
//! │   mutate Cart (storefront-core)                                        │
//! │        │       new line? ──► Catalog::fetch_product(id)                │
//! │        │                        failure ──► ProductLookup::Placeholder │
//! │        ▼                                                                │
//! │   recompute totals ──► KeyValueStore::write("localCart") ──► return    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `CartStore`, the service
//! - [`lookup`] - Catalog lookup with placeholder fallback
//! - [`checkout`] - Order placement and confirmation
//! - [`error`] - Cart error types

pub mod checkout;
pub mod error;
pub mod lookup;
pub mod store;

pub use checkout::{order_number, place_order, OrderConfirmation, DELIVERY_LEAD_DAYS};
pub use error::{CartError, CartResult};
pub use lookup::ProductLookup;
pub use store::CartStore;
