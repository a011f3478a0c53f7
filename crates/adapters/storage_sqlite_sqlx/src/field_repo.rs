//! `SQLite` implementation of [`FieldRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use croptrack_app::ports::FieldRepository;
use croptrack_domain::error::CropTrackError;
use croptrack_domain::field::{Field, NewField};
use croptrack_domain::id::FieldId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Field`].
struct Wrapper(Field);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Field {
            id: FieldId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            area_ha: row.try_get("area_ha")?,
            region: row.try_get("region")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO fields (name, area_ha, region) VALUES (?, ?, ?)";
const EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM fields WHERE id = ?)";
const SELECT_ALL: &str = "SELECT id, name, area_ha, region FROM fields ORDER BY id ASC";

/// `SQLite`-backed field repository.
#[derive(Clone)]
pub struct SqliteFieldRepository {
    pool: SqlitePool,
}

impl SqliteFieldRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FieldRepository for SqliteFieldRepository {
    fn create(&self, field: NewField) -> impl Future<Output = Result<Field, CropTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&field.name)
                .bind(field.area_ha)
                .bind(&field.region)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(field.into_field(FieldId::new(result.last_insert_rowid())))
        }
    }

    fn exists(&self, id: FieldId) -> impl Future<Output = Result<bool, CropTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let found: i64 = sqlx::query_scalar(EXISTS)
                .bind(id.get())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found != 0)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Field>, CropTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteFieldRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteFieldRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_starting_at_one() {
        let repo = setup().await;

        let first = repo
            .create(NewField::new("North", 12.5, "East"))
            .await
            .unwrap();
        let second = repo
            .create(NewField::new("South", 3.0, "West"))
            .await
            .unwrap();

        assert_eq!(first.id.get(), 1);
        assert_eq!(second.id.get(), 2);
    }

    #[tokio::test]
    async fn should_report_existence_by_primary_key() {
        let repo = setup().await;
        let field = repo
            .create(NewField::new("North", 12.5, "East"))
            .await
            .unwrap();

        assert!(repo.exists(field.id).await.unwrap());
        assert!(!repo.exists(FieldId::new(2)).await.unwrap());
    }

    #[tokio::test]
    async fn should_return_empty_list_when_no_fields() {
        let repo = setup().await;
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_fields_ordered_by_id() {
        let repo = setup().await;
        let north = repo
            .create(NewField::new("North", 12.5, "East"))
            .await
            .unwrap();
        let south = repo
            .create(NewField::new("South", 3.0, "West"))
            .await
            .unwrap();

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![north, south]);
    }

    #[tokio::test]
    async fn should_fail_with_storage_error_when_pool_closed() {
        let repo = setup().await;
        repo.pool.close().await;

        let result = repo.get_all().await;
        assert!(matches!(result, Err(CropTrackError::Storage(_))));
    }
}
