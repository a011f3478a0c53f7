//! `SQLite` connection pool setup and schema bootstrap.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Table definitions, each safe to run against an existing database.
///
/// `field_id` columns reference `fields(id)`; foreign keys are switched on
/// for every pooled connection.
const SCHEMA: [&str; 3] = [
    r"
    CREATE TABLE IF NOT EXISTS fields (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        area_ha REAL NOT NULL,
        region TEXT NOT NULL
    )",
    r"
    CREATE TABLE IF NOT EXISTS sowings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        field_id INTEGER NOT NULL REFERENCES fields(id),
        crop TEXT NOT NULL,
        sowed_at TEXT NOT NULL
    )",
    r"
    CREATE TABLE IF NOT EXISTS harvests (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        field_id INTEGER NOT NULL REFERENCES fields(id),
        crop TEXT NOT NULL,
        yield_t_per_ha REAL NOT NULL
    )",
];

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:data.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or schema creation fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(options).await?;

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Create the `fields`, `sowings` and `harvests` tables if absent.
    ///
    /// Running it again against the same database is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if a statement is rejected.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::debug!("schema ready");
        Ok(())
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> Database {
        Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap()
    }

    async fn table_names(db: &Database) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn should_create_all_tables_when_using_memory_db() {
        let db = memory_db().await;

        assert_eq!(table_names(&db).await, ["fields", "harvests", "sowings"]);
    }

    #[tokio::test]
    async fn should_not_fail_or_duplicate_when_schema_ensured_twice() {
        let db = memory_db().await;

        db.ensure_schema().await.unwrap();

        assert_eq!(table_names(&db).await, ["fields", "harvests", "sowings"]);
    }

    #[tokio::test]
    async fn should_fail_when_database_cannot_be_opened() {
        let result = Config {
            database_url: "sqlite:/nonexistent-croptrack-dir/data.db".to_string(),
        }
        .build()
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_reject_rows_referencing_unknown_field() {
        let db = memory_db().await;

        let result = sqlx::query("INSERT INTO sowings (field_id, crop, sowed_at) VALUES (?, ?, ?)")
            .bind(42_i64)
            .bind("Wheat")
            .bind("2025-04-01")
            .execute(db.pool())
            .await;

        assert!(result.is_err());
    }
}
