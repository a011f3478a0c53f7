//! `SQLite` implementation of [`SowingRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use croptrack_app::ports::SowingRepository;
use croptrack_domain::error::CropTrackError;
use croptrack_domain::id::{FieldId, SowingId};
use croptrack_domain::sowing::{NewSowing, Sowing};

use crate::error::StorageError;

struct Wrapper(Sowing);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Sowing {
            id: SowingId::new(row.try_get("id")?),
            field_id: FieldId::new(row.try_get("field_id")?),
            crop: row.try_get("crop")?,
            sowed_at: row.try_get("sowed_at")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO sowings (field_id, crop, sowed_at) VALUES (?, ?, ?)";
const SELECT_ALL: &str = "SELECT id, field_id, crop, sowed_at FROM sowings ORDER BY id ASC";

/// `SQLite`-backed sowing repository.
#[derive(Clone)]
pub struct SqliteSowingRepository {
    pool: SqlitePool,
}

impl SqliteSowingRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SowingRepository for SqliteSowingRepository {
    fn create(
        &self,
        sowing: NewSowing,
    ) -> impl Future<Output = Result<Sowing, CropTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(sowing.field_id.get())
                .bind(&sowing.crop)
                .bind(&sowing.sowed_at)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(sowing.into_sowing(SowingId::new(result.last_insert_rowid())))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sowing>, CropTrackError>> + Send {
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
