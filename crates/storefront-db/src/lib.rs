//! # storefront-db: Key/Value Persistence for the Storefront
//!
//! The storefront keeps its state as JSON records under string keys, the way
//! a browser keeps `localStorage` and `sessionStorage`. This crate provides
//! that contract and two backings for it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Storefront Data Flow                              │
//! │                                                                         │
//! │  CartStore::add_item()                                                 │
//! │       │  get_item::<Cart>("localCart") / set_item("localCart", &cart)  │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  storefront-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐   ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │ KeyValueStore  │   │ SqliteKvStore  │   │ MemoryKvStore│   │   │
//! │  │   │ (trait)        │◄──│ "local" area   │   │ "session"    │   │   │
//! │  │   │ read/write/rm  │◄──┼────────────────┼───│ area         │   │   │
//! │  │   └────────────────┘   └───────┬────────┘   └──────────────┘   │   │
//! │  └────────────────────────────────┼────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │                      SQLite file (kv_store table)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Schema for the key/value table
//! - [`error`] - Storage error types
//! - [`store`] - The key/value contract, its backings and typed helpers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_db::{get_item, set_item, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("storefront.db")).await?;
//! let store = db.kv_store();
//!
//! set_item(&store, "greeting", &"hello").await?;
//! let value: Option<String> = get_item(&store, "greeting").await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod store;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use store::memory::MemoryKvStore;
pub use store::sqlite::SqliteKvStore;
pub use store::{get_item, remove_item, set_item, KeyValueStore, MockKeyValueStore};
