//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`CropTrackError`] via `From`, so services expose a single error type.

use crate::id::FieldId;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum CropTrackError {
    /// A record broke a shape or referential rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence layer could not complete a read or write.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A domain rule violated by a candidate record.
///
/// The messages are part of the public HTTP contract.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("area_ha must be positive")]
    NonPositiveArea,

    #[error("region is required")]
    EmptyRegion,

    #[error("field_id is required and must be positive")]
    InvalidFieldReference,

    #[error("crop is required")]
    EmptyCrop,

    #[error("sowed_at is required")]
    EmptySowedAt,

    #[error("yield_t_per_ha must be non-negative")]
    NegativeYield,

    /// The referenced field is not in storage.
    #[error("field does not exist")]
    FieldNotFound(FieldId),
}
