//! Field service — use-cases for managing fields.

use croptrack_domain::error::CropTrackError;
use croptrack_domain::field::{Field, NewField};

use crate::ports::FieldRepository;

/// Application service for creating and listing fields.
pub struct FieldService<R> {
    repo: R,
}

impl<R: FieldRepository> FieldService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and store a new field.
    ///
    /// # Errors
    ///
    /// Returns [`CropTrackError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, field), fields(field_name = %field.name))]
    pub async fn create_field(&self, field: NewField) -> Result<Field, CropTrackError> {
        field.validate()?;
        let field = self.repo.create(field).await?;
        tracing::debug!(field_id = %field.id, "field created");
        Ok(field)
    }

    /// List all fields in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_fields(&self) -> Result<Vec<Field>, CropTrackError> {
        self.repo.get_all().await
    }
}
