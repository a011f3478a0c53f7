//! Harvest — a yield recorded for a crop on a field.
//!
//! A harvest does not point at a sowing; the crop name is recorded on its own.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{FieldId, HarvestId};

/// A persisted yield record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Harvest {
    pub id: HarvestId,
    pub field_id: FieldId,
    pub crop: String,
    pub yield_t_per_ha: f64,
}

/// A harvest that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewHarvest {
    pub field_id: FieldId,
    pub crop: String,
    pub yield_t_per_ha: f64,
}

impl NewHarvest {
    #[must_use]
    pub fn new(field_id: FieldId, crop: impl Into<String>, yield_t_per_ha: f64) -> Self {
        Self {
            field_id,
            crop: crop.into(),
            yield_t_per_ha,
        }
    }

    /// Check the record's shape. A zero yield is legal.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::InvalidFieldReference`] when `field_id` is not positive
    /// - [`ValidationError::EmptyCrop`] when `crop` is empty
    /// - [`ValidationError::NegativeYield`] when `yield_t_per_ha` is negative or NaN
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.field_id.is_positive() {
            return Err(ValidationError::InvalidFieldReference);
        }
        if self.crop.is_empty() {
            return Err(ValidationError::EmptyCrop);
        }
        if self.yield_t_per_ha.is_nan() || self.yield_t_per_ha < 0.0 {
            return Err(ValidationError::NegativeYield);
        }
        Ok(())
    }

    /// Attach the identity assigned by storage.
    #[must_use]
    pub fn into_harvest(self, id: HarvestId) -> Harvest {
        Harvest {
            id,
            field_id: self.field_id,
            crop: self.crop,
            yield_t_per_ha: self.yield_t_per_ha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewHarvest {
        NewHarvest::new(FieldId::new(1), "Wheat", 4.5)
    }

    #[test]
    fn should_accept_valid_harvest() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn should_accept_zero_yield() {
        let harvest = NewHarvest {
            yield_t_per_ha: 0.0,
            ..valid()
        };
        assert_eq!(harvest.validate(), Ok(()));
    }

    #[test]
    fn should_reject_negative_yield() {
        let harvest = NewHarvest {
            yield_t_per_ha: -0.1,
            ..valid()
        };
        assert_eq!(harvest.validate(), Err(ValidationError::NegativeYield));
    }

    #[test]
    fn should_reject_missing_field_reference() {
        let harvest = NewHarvest {
            field_id: FieldId::default(),
            ..valid()
        };
        assert_eq!(
            harvest.validate(),
            Err(ValidationError::InvalidFieldReference)
        );
    }

    #[test]
    fn should_report_crop_before_yield() {
        let harvest = NewHarvest {
            crop: String::new(),
            yield_t_per_ha: -1.0,
            ..valid()
        };
        assert_eq!(harvest.validate(), Err(ValidationError::EmptyCrop));
    }
}
