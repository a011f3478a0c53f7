//! Shared application state for axum handlers.

use std::sync::Arc;

use croptrack_app::ports::{FieldRepository, HarvestRepository, SowingRepository};
use croptrack_app::services::field_service::FieldService;
use croptrack_app::services::harvest_service::HarvestService;
use croptrack_app::services::sowing_service::SowingService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch. The field
/// repository type appears in every service since sowings and harvests check
/// field existence. `Clone` is implemented manually so only the `Arc`
/// wrappers are cloned.
pub struct AppState<FR, SR, HR> {
    /// Field service.
    pub field_service: Arc<FieldService<FR>>,
    /// Sowing service.
    pub sowing_service: Arc<SowingService<SR, FR>>,
    /// Harvest service.
    pub harvest_service: Arc<HarvestService<HR, FR>>,
}

impl<FR, SR, HR> Clone for AppState<FR, SR, HR> {
    fn clone(&self) -> Self {
        Self {
            field_service: Arc::clone(&self.field_service),
            sowing_service: Arc::clone(&self.sowing_service),
            harvest_service: Arc::clone(&self.harvest_service),
        }
    }
}

impl<FR, SR, HR> AppState<FR, SR, HR>
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        field_service: FieldService<FR>,
        sowing_service: SowingService<SR, FR>,
        harvest_service: HarvestService<HR, FR>,
    ) -> Self {
        Self {
            field_service: Arc::new(field_service),
            sowing_service: Arc::new(sowing_service),
            harvest_service: Arc::new(harvest_service),
        }
    }
}
