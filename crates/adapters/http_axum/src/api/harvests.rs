//! JSON handlers for harvests. The collection is served at `/harvest`.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use croptrack_app::ports::{FieldRepository, HarvestRepository, SowingRepository};
use croptrack_domain::harvest::{Harvest, NewHarvest};
use croptrack_domain::id::FieldId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for recording a harvest.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateHarvestRequest {
    pub field_id: FieldId,
    pub crop: String,
    pub yield_t_per_ha: f64,
}

impl From<CreateHarvestRequest> for NewHarvest {
    fn from(req: CreateHarvestRequest) -> Self {
        NewHarvest::new(req.field_id, req.crop, req.yield_t_per_ha)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Harvest>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Ok(Json<Harvest>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /harvest`
pub async fn list<FR, SR, HR>(
    State(state): State<AppState<FR, SR, HR>>,
) -> Result<ListResponse, ApiError>
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    let harvests = state.harvest_service.list_harvests().await?;
    Ok(ListResponse::Ok(Json(harvests)))
}

/// `POST /harvest`
pub async fn create<FR, SR, HR>(
    State(state): State<AppState<FR, SR, HR>>,
    payload: Result<Json<CreateHarvestRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state.harvest_service.create_harvest(req.into()).await?;
    Ok(CreateResponse::Ok(Json(created)))
}
