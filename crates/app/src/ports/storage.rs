//! Storage port — append-only repository traits for persistence.
//!
//! Identities are assigned by the implementation on insert. No trait exposes
//! update or delete.

use std::future::Future;

use croptrack_domain::error::CropTrackError;
use croptrack_domain::field::{Field, NewField};
use croptrack_domain::harvest::{Harvest, NewHarvest};
use croptrack_domain::id::FieldId;
use croptrack_domain::sowing::{NewSowing, Sowing};

/// Repository for persisting and querying [`Field`]s.
pub trait FieldRepository {
    /// Append a field and return it with its assigned identity.
    fn create(&self, field: NewField) -> impl Future<Output = Result<Field, CropTrackError>> + Send;

    /// Whether a field with the given identity is stored.
    fn exists(&self, id: FieldId) -> impl Future<Output = Result<bool, CropTrackError>> + Send;

    /// Every stored field, ordered by identity ascending.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Field>, CropTrackError>> + Send;
}

/// Repository for persisting and querying [`Sowing`]s.
pub trait SowingRepository {
    /// Append a sowing and return it with its assigned identity.
    fn create(
        &self,
        sowing: NewSowing,
    ) -> impl Future<Output = Result<Sowing, CropTrackError>> + Send;

    /// Every stored sowing, ordered by identity ascending.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Sowing>, CropTrackError>> + Send;
}

/// Repository for persisting and querying [`Harvest`]s.
pub trait HarvestRepository {
    /// Append a harvest and return it with its assigned identity.
    fn create(
        &self,
        harvest: NewHarvest,
    ) -> impl Future<Output = Result<Harvest, CropTrackError>> + Send;

    /// Every stored harvest, ordered by identity ascending.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Harvest>, CropTrackError>> + Send;
}
