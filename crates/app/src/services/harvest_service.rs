//! Harvest service — use-cases for recording harvests.

use croptrack_domain::error::{CropTrackError, ValidationError};
use croptrack_domain::harvest::{Harvest, NewHarvest};

use crate::ports::{FieldRepository, HarvestRepository};

/// Application service for creating and listing harvests.
pub struct HarvestService<H, F> {
    repo: H,
    fields: F,
}

impl<H: HarvestRepository, F: FieldRepository> HarvestService<H, F> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: H, fields: F) -> Self {
        Self { repo, fields }
    }

    /// Validate and store a new harvest.
    ///
    /// # Errors
    ///
    /// Returns [`CropTrackError::Validation`] if invariants fail or the field
    /// does not exist, or a storage error propagated from either repository.
    #[tracing::instrument(skip(self, harvest), fields(field_id = %harvest.field_id, crop = %harvest.crop))]
    pub async fn create_harvest(&self, harvest: NewHarvest) -> Result<Harvest, CropTrackError> {
        harvest.validate()?;
        if !self.fields.exists(harvest.field_id).await? {
            return Err(ValidationError::FieldNotFound(harvest.field_id).into());
        }
        let harvest = self.repo.create(harvest).await?;
        tracing::debug!(harvest_id = %harvest.id, "harvest created");
        Ok(harvest)
    }

    /// List all harvests in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_harvests(&self) -> Result<Vec<Harvest>, CropTrackError> {
        self.repo.get_all().await
    }
}
