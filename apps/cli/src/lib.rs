//! # Storefront CLI
//!
//! Browse the catalog, manage the cart and check out from a terminal.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CLI Startup                                       │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr            │
//! │     • Default: info,storefront=debug,sqlx=warn (RUST_LOG overrides)    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • StorefrontConfig::from_env() (STOREFRONT_* variables)            │
//! │                                                                         │
//! │  3. Open Storage ─────────────────────────────────────────────────────► │
//! │     • SQLite file with migrations, or memory when session-only         │
//! │                                                                         │
//! │  4. Build Catalog Client + CartStore ─────────────────────────────────► │
//! │                                                                         │
//! │  5. Execute One Command, print its output ────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod render;

use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use storefront_cart::CartStore;
use storefront_catalog::HttpCatalog;
use storefront_db::{Database, KeyValueStore, MemoryKvStore};

use commands::Command;
use config::StorefrontConfig;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Browse the catalog and manage your cart")]
pub struct Cli {
    /// Keep the cart in memory for this run only
    #[arg(long, global = true)]
    pub session_only: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Everything a command may need.
pub struct App {
    pub cart: CartStore,
    pub catalog: HttpCatalog,
    db: Option<Database>,
}

impl App {
    /// Opens storage and builds the catalog client.
    pub async fn open(config: &StorefrontConfig) -> anyhow::Result<Self> {
        let catalog = HttpCatalog::new(config.catalog_config())?;

        let (storage, db): (Arc<dyn KeyValueStore>, Option<Database>) = if config.session_only {
            info!("Session-only mode, cart kept in memory");
            (Arc::new(MemoryKvStore::new()), None)
        } else {
            let db = Database::new(config.db_config()).await?;
            info!(path = %config.db_path.display(), "Database ready");
            (Arc::new(db.kv_store()), Some(db))
        };

        let cart = CartStore::new(storage, Arc::new(catalog.clone()));
        Ok(App { cart, catalog, db })
    }

    /// Closes the database pool, if any.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}

/// Parses arguments, runs the command and prints its output.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = StorefrontConfig::from_env()?;
    config.session_only |= cli.session_only;
    debug!(?config, "Configuration loaded");

    let app = App::open(&config).await?;
    let result = commands::execute(&app, cli.command).await;
    app.close().await;

    print!("{}", result?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_cart=trace` - Trace one crate
/// - Default: `info,storefront=debug,sqlx=warn`
///
/// Logs go to stderr so command output stays clean on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
