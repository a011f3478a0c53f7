//! Sowing service — use-cases for recording sowings.

use croptrack_domain::error::{CropTrackError, ValidationError};
use croptrack_domain::sowing::{NewSowing, Sowing};

use crate::ports::{FieldRepository, SowingRepository};

/// Application service for creating and listing sowings.
///
/// Holds a field repository so it can check that the referenced field exists.
pub struct SowingService<S, F> {
    repo: S,
    fields: F,
}

impl<S: SowingRepository, F: FieldRepository> SowingService<S, F> {
    /// Create a new service backed by the given repositories.
    pub fn new(repo: S, fields: F) -> Self {
        Self { repo, fields }
    }

    /// Validate and store a new sowing.
    ///
    /// Shape validation runs first; the field existence check is only
    /// performed for well-formed records. The check and the insert are two
    /// separate storage calls.
    ///
    /// # Errors
    ///
    /// Returns [`CropTrackError::Validation`] if invariants fail or the field
    /// does not exist, or a storage error propagated from either repository.
    #[tracing::instrument(skip(self, sowing), fields(field_id = %sowing.field_id, crop = %sowing.crop))]
    pub async fn create_sowing(&self, sowing: NewSowing) -> Result<Sowing, CropTrackError> {
        sowing.validate()?;
        if !self.fields.exists(sowing.field_id).await? {
            return Err(ValidationError::FieldNotFound(sowing.field_id).into());
        }
        let sowing = self.repo.create(sowing).await?;
        tracing::debug!(sowing_id = %sowing.id, "sowing created");
        Ok(sowing)
    }

    /// List all sowings in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sowings(&self) -> Result<Vec<Sowing>, CropTrackError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory::{BrokenRepo, InMemoryFieldRepo, InMemorySowingRepo};
    use croptrack_domain::field::NewField;
    use croptrack_domain::id::FieldId;

    async fn make_service() -> SowingService<InMemorySowingRepo, InMemoryFieldRepo> {
        let fields = InMemoryFieldRepo::default();
        fields
            .create(NewField::new("North", 12.5, "East"))
            .await
            .unwrap();
        SowingService::new(InMemorySowingRepo::default(), fields)
    }

    fn valid_sowing() -> NewSowing {
        NewSowing::new(FieldId::new(1), "Wheat", "2025-04-01")
    }

    #[tokio::test]
    async fn should_create_sowing_when_field_exists() {
        let svc = make_service().await;

        let created = svc.create_sowing(valid_sowing()).await.unwrap();
        assert_eq!(created.id.get(), 1);
        assert_eq!(created.field_id, FieldId::new(1));
        assert_eq!(created.sowed_at, "2025-04-01");
    }

    #[tokio::test]
    async fn should_reject_sowing_when_field_missing() {
        let svc = make_service().await;
        let sowing = NewSowing {
            field_id: FieldId::new(999),
            ..valid_sowing()
        };

        let result = svc.create_sowing(sowing).await;
        assert!(matches!(
            result,
            Err(CropTrackError::Validation(ValidationError::FieldNotFound(id))) if id.get() == 999
        ));
        assert!(svc.list_sowings().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_report_shape_error_before_checking_existence() {
        let svc = make_service().await;
        let sowing = NewSowing {
            field_id: FieldId::new(999),
            crop: String::new(),
            ..valid_sowing()
        };

        let result = svc.create_sowing(sowing).await;
        assert!(matches!(
            result,
            Err(CropTrackError::Validation(ValidationError::EmptyCrop))
        ));
    }

    #[tokio::test]
    async fn should_skip_existence_check_when_payload_is_malformed() {
        let svc = SowingService::new(InMemorySowingRepo::default(), BrokenRepo);
        let sowing = NewSowing {
            sowed_at: String::new(),
            ..valid_sowing()
        };

        let result = svc.create_sowing(sowing).await;
        assert!(matches!(
            result,
            Err(CropTrackError::Validation(ValidationError::EmptySowedAt))
        ));
    }

    #[tokio::test]
    async fn should_return_storage_error_when_existence_check_fails() {
        let svc = SowingService::new(InMemorySowingRepo::default(), BrokenRepo);

        let result = svc.create_sowing(valid_sowing()).await;
        assert!(matches!(result, Err(CropTrackError::Storage(_))));
    }

    #[tokio::test]
    async fn should_return_empty_list_when_nothing_sowed() {
        let svc = make_service().await;
        assert!(svc.list_sowings().await.unwrap().is_empty());
    }
}
