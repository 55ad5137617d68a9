//! # CLI Configuration
//!
//! Loaded once at startup from environment variables over defaults.
//!
//! ## Environment Variables
//! ```text
//! ┌──────────────────────────────────┬──────────────────────────────────────┐
//! │ Variable                         │ Default                              │
//! ├──────────────────────────────────┼──────────────────────────────────────┤
//! │ STOREFRONT_DATA_DIR              │ platform data dir (ProjectDirs)      │
//! │ STOREFRONT_DB_PATH               │ $STOREFRONT_DATA_DIR/storefront.db   │
//! │ STOREFRONT_CATALOG_URL           │ https://dummyjson.com                │
//! │ STOREFRONT_CATALOG_TIMEOUT_SECS  │ 10                                   │
//! │ STOREFRONT_SESSION_ONLY          │ false (true: keep the cart in memory)│
//! └──────────────────────────────────┴──────────────────────────────────────┘
//! ```

use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

use storefront_catalog::{CatalogConfig, DEFAULT_BASE_URL};
use storefront_db::DbConfig;

const DB_FILE_NAME: &str = "storefront.db";
const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

/// CLI configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Directory holding the database file.
    pub data_dir: PathBuf,

    /// SQLite file backing the "local" store.
    pub db_path: PathBuf,

    /// Catalog base URL.
    pub catalog_url: String,

    /// Catalog request timeout.
    pub catalog_timeout: Duration,

    /// Keep the cart in process memory instead of SQLite.
    pub session_only: bool,
}

impl StorefrontConfig {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a
    /// variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = match lookup("STOREFRONT_DATA_DIR") {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };

        let db_path = lookup("STOREFRONT_DB_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(DB_FILE_NAME));

        let catalog_url = lookup("STOREFRONT_CATALOG_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        if !(catalog_url.starts_with("http://") || catalog_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("STOREFRONT_CATALOG_URL".to_string()));
        }

        let timeout_secs: u64 = match lookup("STOREFRONT_CATALOG_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::InvalidValue("STOREFRONT_CATALOG_TIMEOUT_SECS".to_string())
                })?,
            None => DEFAULT_CATALOG_TIMEOUT_SECS,
        };

        let session_only = match lookup("STOREFRONT_SESSION_ONLY") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| ConfigError::InvalidValue("STOREFRONT_SESSION_ONLY".to_string()))?,
            None => false,
        };

        Ok(StorefrontConfig {
            data_dir,
            db_path,
            catalog_url,
            catalog_timeout: Duration::from_secs(timeout_secs),
            session_only,
        })
    }

    /// Pool configuration for the database file.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.db_path)
    }

    /// Catalog client configuration.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(&self.catalog_url).timeout(self.catalog_timeout)
    }
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("com", "storefront", "storefront")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or(ConfigError::NoDataDir)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine the app data directory; set STOREFRONT_DATA_DIR")]
    NoDataDir,
}
