//! Schema for the SQLite key/value store.
//!
//! The SQL files under `migrations/sqlite/` at the workspace root are
//! compiled in. [`Database::new`](crate::Database::new) applies them unless
//! `DbConfig::run_migrations` is off.

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Brings the schema up to date. A database that is already current is left
/// untouched.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    let pending = pending_migrations(pool).await?;
    if pending == 0 {
        debug!("Schema up to date");
        return Ok(());
    }

    MIGRATOR.run(pool).await?;
    info!(applied = pending, "Schema migrated");
    Ok(())
}

/// Number of compiled-in migrations the database has not recorded yet.
pub async fn pending_migrations(pool: &SqlitePool) -> DbResult<usize> {
    let tracked: bool = sqlx::query_scalar(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations')",
    )
    .fetch_one(pool)
    .await?;
    if !tracked {
        return Ok(MIGRATOR.migrations.len());
    }

    let applied: Vec<i64> =
        sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(pool)
            .await?;

    Ok(MIGRATOR
        .migrations
        .iter()
        .filter(|m| !applied.contains(&m.version))
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_unmigrated_database_gets_kv_table() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();
        assert_eq!(
            pending_migrations(db.pool()).await.unwrap(),
            MIGRATOR.migrations.len()
        );

        run_migrations(db.pool()).await.unwrap();
        run_migrations(db.pool()).await.unwrap();

        assert_eq!(pending_migrations(db.pool()).await.unwrap(), 0);
        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(tables, 1);
    }
}
