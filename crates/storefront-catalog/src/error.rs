//! # Catalog Error Types

use storefront_core::ValidationError;
use thiserror::Error;

/// Catalog access errors.
///
/// ## Error Categories
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Transport       → no response at all (DNS, refused, timeout)          │
/// │  Status          → response with a non-2xx status                      │
/// │  Decode          → 2xx response whose body isn't the expected JSON     │
/// │  InvalidProduct  → decoded product with a negative price or a          │
/// │                    discount outside 0..=100                            │
/// │  Config          → bad base URL or HTTP client could not be built      │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Could not decode catalog response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("Catalog product {id} is invalid: {source}")]
    InvalidProduct {
        id: u64,
        #[source]
        source: ValidationError,
    },

    #[error("Invalid catalog configuration: {0}")]
    Config(String),
}

impl CatalogError {
    pub(crate) fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        CatalogError::Transport {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn decode(url: &str, err: impl std::fmt::Display) -> Self {
        CatalogError::Decode {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }

    /// True for a 404 from the catalog.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Status { status: 404, .. })
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
