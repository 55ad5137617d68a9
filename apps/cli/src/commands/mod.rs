//! # CLI Commands
//!
//! ## Command Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront Commands                             │
//! │                                                                         │
//! │  ┌────────────────────┐          ┌──────────────────────────────────┐  │
//! │  │  cart.rs           │          │  catalog.rs                      │  │
//! │  │  ──────────────    │          │  ───────────                     │  │
//! │  │  cart              │          │  products [--limit] [--skip]     │  │
//! │  │  add <id> [-q N]   │          │  product <id>                    │  │
//! │  │  update <id> <qty> │          │  search <query>                  │  │
//! │  │  remove <id>       │          │  categories                      │  │
//! │  │  clear             │          │  category <slug> [--brand B]..   │  │
//! │  │  checkout          │          │           [--min N] [--max N]    │  │
//! │  └────────────────────┘          └──────────────────────────────────┘  │
//! │                                                                         │
//! │  Every handler returns the text to print; main prints it.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;

use clap::Subcommand;

use storefront_catalog::{ProductFilter, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE, DEFAULT_PAGE_SIZE};
use storefront_core::Money;

use crate::App;

/// Storefront subcommands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show the cart
    Cart,

    /// Add a product to the cart
    Add {
        /// Product id
        id: u64,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: i64,
    },

    /// Set the quantity of a cart line (0 or less removes it)
    Update {
        /// Product id
        id: u64,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove a product from the cart
    Remove {
        /// Product id
        id: u64,
    },

    /// Empty the cart
    Clear,

    /// Place an order for the cart
    Checkout,

    /// List catalog products
    Products {
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,

        #[arg(long, default_value_t = 0)]
        skip: u32,
    },

    /// Show one catalog product
    Product {
        /// Product id
        id: u64,
    },

    /// Search the catalog
    Search {
        query: String,
    },

    /// List product categories
    Categories,

    /// List the products of a category, optionally filtered by brand and price
    Category {
        /// Category slug, e.g. `beauty`
        slug: String,

        /// Keep only this brand (repeatable; none keeps every brand)
        #[arg(long = "brand", value_name = "BRAND")]
        brands: Vec<String>,

        /// Lowest price, inclusive
        #[arg(long, default_value_t = DEFAULT_MIN_PRICE)]
        min: u32,

        /// Highest price, inclusive
        #[arg(long, default_value_t = DEFAULT_MAX_PRICE)]
        max: u32,
    },
}

/// Runs one command and returns its output.
pub async fn execute(app: &App, command: Command) -> anyhow::Result<String> {
    match command {
        Command::Cart => cart::show(&app.cart).await,
        Command::Add { id, quantity } => cart::add(&app.cart, id, quantity).await,
        Command::Update { id, quantity } => cart::update(&app.cart, id, quantity).await,
        Command::Remove { id } => cart::remove(&app.cart, id).await,
        Command::Clear => cart::clear(&app.cart).await,
        Command::Checkout => cart::checkout(&app.cart).await,
        Command::Products { limit, skip } => catalog::products(&app.catalog, limit, skip).await,
        Command::Product { id } => catalog::product(&app.catalog, id).await,
        Command::Search { query } => catalog::search(&app.catalog, &query).await,
        Command::Categories => catalog::categories(&app.catalog).await,
        Command::Category {
            slug,
            brands,
            min,
            max,
        } => {
            let filter = ProductFilter {
                brands: brands.into_iter().collect(),
                min_price: Money::new(i64::from(min), 0),
                max_price: Money::new(i64::from(max), 0),
            };
            catalog::category(&app.catalog, &slug, &filter).await
        }
    }
}
