//! `SQLite` implementation of [`HarvestRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use croptrack_app::ports::HarvestRepository;
use croptrack_domain::error::CropTrackError;
use croptrack_domain::harvest::{Harvest, NewHarvest};
use croptrack_domain::id::{FieldId, HarvestId};

use crate::error::StorageError;

struct Wrapper(Harvest);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Harvest {
            id: HarvestId::new(row.try_get("id")?),
            field_id: FieldId::new(row.try_get("field_id")?),
            crop: row.try_get("crop")?,
            yield_t_per_ha: row.try_get("yield_t_per_ha")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO harvests (field_id, crop, yield_t_per_ha) VALUES (?, ?, ?)";
const SELECT_ALL: &str =
    "SELECT id, field_id, crop, yield_t_per_ha FROM harvests ORDER BY id ASC";

/// `SQLite`-backed harvest repository.
#[derive(Clone)]
pub struct SqliteHarvestRepository {
    pool: SqlitePool,
}

impl SqliteHarvestRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl HarvestRepository for SqliteHarvestRepository {
    fn create(
        &self,
        harvest: NewHarvest,
    ) -> impl Future<Output = Result<Harvest, CropTrackError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(harvest.field_id.get())
                .bind(&harvest.crop)
                .bind(harvest.yield_t_per_ha)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(harvest.into_harvest(HarvestId::new(result.last_insert_rowid())))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Harvest>, CropTrackError>> + Send {
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
