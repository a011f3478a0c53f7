//! In-memory repository fakes shared by the service tests.

use std::future::Future;
use std::sync::{Arc, Mutex};

use croptrack_domain::error::CropTrackError;
use croptrack_domain::field::{Field, NewField};
use croptrack_domain::harvest::{Harvest, NewHarvest};
use croptrack_domain::id::{FieldId, HarvestId, SowingId};
use croptrack_domain::sowing::{NewSowing, Sowing};

use crate::ports::{FieldRepository, HarvestRepository, SowingRepository};

/// Field store; clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryFieldRepo {
    store: Arc<Mutex<Vec<Field>>>,
}

impl FieldRepository for InMemoryFieldRepo {
    fn create(&self, field: NewField) -> impl Future<Output = Result<Field, CropTrackError>> + Send {
        let mut store = self.store.lock().unwrap();
        let id = FieldId::new(i64::try_from(store.len()).unwrap() + 1);
        let field = field.into_field(id);
        store.push(field.clone());
        async { Ok(field) }
    }

    fn exists(&self, id: FieldId) -> impl Future<Output = Result<bool, CropTrackError>> + Send {
        let store = self.store.lock().unwrap();
        let found = store.iter().any(|field| field.id == id);
        async move { Ok(found) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Field>, CropTrackError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }
}

#[derive(Clone, Default)]
pub struct InMemorySowingRepo {
    store: Arc<Mutex<Vec<Sowing>>>,
}

impl SowingRepository for InMemorySowingRepo {
    fn create(
        &self,
        sowing: NewSowing,
    ) -> impl Future<Output = Result<Sowing, CropTrackError>> + Send {
        let mut store = self.store.lock().unwrap();
        let id = SowingId::new(i64::try_from(store.len()).unwrap() + 1);
        let sowing = sowing.into_sowing(id);
        store.push(sowing.clone());
        async { Ok(sowing) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Sowing>, CropTrackError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }
}

#[derive(Clone, Default)]
pub struct InMemoryHarvestRepo {
    store: Arc<Mutex<Vec<Harvest>>>,
}

impl HarvestRepository for InMemoryHarvestRepo {
    fn create(
        &self,
        harvest: NewHarvest,
    ) -> impl Future<Output = Result<Harvest, CropTrackError>> + Send {
        let mut store = self.store.lock().unwrap();
        let id = HarvestId::new(i64::try_from(store.len()).unwrap() + 1);
        let harvest = harvest.into_harvest(id);
        store.push(harvest.clone());
        async { Ok(harvest) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Harvest>, CropTrackError>> + Send {
        let result = self.store.lock().unwrap().clone();
        async { Ok(result) }
    }
}

/// Repository whose every call fails like a lost connection.
#[derive(Clone, Copy, Default)]
pub struct BrokenRepo;

fn broken<T>() -> Result<T, CropTrackError> {
    Err(CropTrackError::Storage("connection lost".into()))
}

impl FieldRepository for BrokenRepo {
    async fn create(&self, _field: NewField) -> Result<Field, CropTrackError> {
        broken()
    }

    async fn exists(&self, _id: FieldId) -> Result<bool, CropTrackError> {
        broken()
    }

    async fn get_all(&self) -> Result<Vec<Field>, CropTrackError> {
        broken()
    }
}

impl SowingRepository for BrokenRepo {
    async fn create(&self, _sowing: NewSowing) -> Result<Sowing, CropTrackError> {
        broken()
    }

    async fn get_all(&self) -> Result<Vec<Sowing>, CropTrackError> {
        broken()
    }
}

impl HarvestRepository for BrokenRepo {
    async fn create(&self, _harvest: NewHarvest) -> Result<Harvest, CropTrackError> {
        broken()
    }

    async fn get_all(&self) -> Result<Vec<Harvest>, CropTrackError> {
        broken()
    }
}
