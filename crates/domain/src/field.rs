//! Field — a land parcel tracked by the system.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::FieldId;

/// A persisted land parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub area_ha: f64,
    pub region: String,
}

/// A field that has not been stored yet and therefore has no identity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewField {
    pub name: String,
    pub area_ha: f64,
    pub region: String,
}

impl NewField {
    #[must_use]
    pub fn new(name: impl Into<String>, area_ha: f64, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            area_ha,
            region: region.into(),
        }
    }

    /// Check domain invariants, reporting the first failure in declaration
    /// order.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyName`] when `name` is empty
    /// - [`ValidationError::NonPositiveArea`] when `area_ha` is zero, negative or NaN
    /// - [`ValidationError::EmptyRegion`] when `region` is empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.area_ha.is_nan() || self.area_ha <= 0.0 {
            return Err(ValidationError::NonPositiveArea);
        }
        if self.region.is_empty() {
            return Err(ValidationError::EmptyRegion);
        }
        Ok(())
    }

    /// Attach the identity assigned by storage.
    #[must_use]
    pub fn into_field(self, id: FieldId) -> Field {
        Field {
            id,
            name: self.name,
            area_ha: self.area_ha,
            region: self.region,
        }
    }
}
