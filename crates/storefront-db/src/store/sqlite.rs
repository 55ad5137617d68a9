//! # SQLite Key/Value Store
//!
//! The durable "local" area. One row per key in `kv_store`; writes are
//! upserts so a value is always replaced whole.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use super::KeyValueStore;
use crate::error::DbResult;

/// Key/value store over the `kv_store` table.
///
/// ## Usage
/// ```rust,ignore
/// let store = db.kv_store();
/// store.write("localCart", &json).await?;
/// let raw = store.read("localCart").await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteKvStore {
    pool: SqlitePool,
}

impl SqliteKvStore {
    /// Creates a store over an already-migrated pool.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteKvStore { pool }
    }

    /// Lists stored keys in order.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }
}

#[async_trait]
impl KeyValueStore for SqliteKvStore {
    async fn read(&self, key: &str) -> DbResult<Option<String>> {
        debug!(key = %key, "Reading record");

        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM kv_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, removed = result.rows_affected(), "Removed record");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbError;
    use crate::pool::{Database, DbConfig};

    async fn store() -> SqliteKvStore {
        Database::new(DbConfig::in_memory()).await.unwrap().kv_store()
    }

    #[tokio::test]
    async fn test_read_absent_key() {
        let store = store().await;
        assert_eq!(store.read("localCart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_overwrite() {
        let store = store().await;

        store.write("localCart", r#"{"id":1}"#).await.unwrap();
        store.write("localCart", r#"{"id":2}"#).await.unwrap();

        assert_eq!(
            store.read("localCart").await.unwrap().as_deref(),
            Some(r#"{"id":2}"#)
        );
        assert_eq!(store.keys().await.unwrap(), vec!["localCart".to_string()]);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = store().await;

        store.write("a", "1").await.unwrap();
        store.write("b", "2").await.unwrap();
        store.remove("a").await.unwrap();
        store.remove("missing").await.unwrap();

        assert_eq!(store.read("a").await.unwrap(), None);
        assert_eq!(store.keys().await.unwrap(), vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.db");

        {
            let db = Database::new(DbConfig::new(&path)).await.unwrap();
            db.kv_store().write("localCart", "{}").await.unwrap();
            db.close().await;
        }

        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(
            db.kv_store().read("localCart").await.unwrap().as_deref(),
            Some("{}")
        );
    }

    #[tokio::test]
    async fn test_closed_pool_read_fails() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = db.kv_store();
        db.close().await;

        let err = store.read("localCart").await.unwrap_err();
        assert!(matches!(err, DbError::ConnectionFailed(_)));
    }
}
