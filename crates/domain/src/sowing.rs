//! Sowing — a crop planted on a field.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{FieldId, SowingId};

/// A persisted planting event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sowing {
    pub id: SowingId,
    pub field_id: FieldId,
    pub crop: String,
    /// Free-form date token, stored as submitted.
    pub sowed_at: String,
}

/// A sowing that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewSowing {
    pub field_id: FieldId,
    pub crop: String,
    pub sowed_at: String,
}

impl NewSowing {
    #[must_use]
    pub fn new(field_id: FieldId, crop: impl Into<String>, sowed_at: impl Into<String>) -> Self {
        Self {
            field_id,
            crop: crop.into(),
            sowed_at: sowed_at.into(),
        }
    }

    /// Check the record's shape. Whether `field_id` names a stored field is
    /// not checked here.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidFieldReference`] when `field_id` is not positive
    /// - [`ValidationError::EmptyCrop`] when `crop` is empty
    /// - [`ValidationError::EmptySowedAt`] when `sowed_at` is empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.field_id.is_positive() {
            return Err(ValidationError::InvalidFieldReference);
        }
        if self.crop.is_empty() {
            return Err(ValidationError::EmptyCrop);
        }
        if self.sowed_at.is_empty() {
            return Err(ValidationError::EmptySowedAt);
        }
        Ok(())
    }

    /// Attach the identity assigned by storage.
    #[must_use]
    pub fn into_sowing(self, id: SowingId) -> Sowing {
        Sowing {
            id,
            field_id: self.field_id,
            crop: self.crop,
            sowed_at: self.sowed_at,
        }
    }
}
