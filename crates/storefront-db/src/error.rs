//! # Storage Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error) / serde_json::Error                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartError::Storage (storefront-cart) ← What callers see               │
//! │                                                                         │
//! │  Exception: DbError::CorruptRecord is not a failure of the medium.     │
//! │  The cart store treats it as "no record" and starts a fresh cart.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// A stored record could not be decoded into the requested type.
    ///
    /// ## When This Occurs
    /// - The value is not valid JSON
    /// - The JSON has a different shape (missing fields, wrong types)
    #[error("Corrupt record under '{key}': {reason}")]
    CorruptRecord { key: String, reason: String },

    /// A value could not be encoded for storage.
    #[error("Failed to serialize record for '{key}': {reason}")]
    Serialization { key: String, reason: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a CorruptRecord error for a key.
    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        DbError::CorruptRecord {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// True when the medium worked but the stored value was unreadable.
    pub fn is_corrupt_record(&self) -> bool {
        matches!(self, DbError::CorruptRecord { .. })
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_record_message() {
        let err = DbError::corrupt("localCart", "expected value at line 1 column 1");
        assert!(err.is_corrupt_record());
        assert_eq!(
            err.to_string(),
            "Corrupt record under 'localCart': expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_pool_closed_maps_to_connection_failed() {
        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
        assert!(!err.is_corrupt_record());
    }
}
