//! JSON handlers for sowings.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use croptrack_app::ports::{FieldRepository, HarvestRepository, SowingRepository};
use croptrack_domain::id::FieldId;
use croptrack_domain::sowing::{NewSowing, Sowing};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for recording a sowing.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateSowingRequest {
    pub field_id: FieldId,
    pub crop: String,
    pub sowed_at: String,
}

impl From<CreateSowingRequest> for NewSowing {
    fn from(req: CreateSowingRequest) -> Self {
        NewSowing::new(req.field_id, req.crop, req.sowed_at)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Sowing>>),
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
    Ok(Json<Sowing>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /sowings`
pub async fn list<FR, SR, HR>(
    State(state): State<AppState<FR, SR, HR>>,
) -> Result<ListResponse, ApiError>
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    let sowings = state.sowing_service.list_sowings().await?;
    Ok(ListResponse::Ok(Json(sowings)))
}

/// `POST /sowings`
pub async fn create<FR, SR, HR>(
    State(state): State<AppState<FR, SR, HR>>,
    payload: Result<Json<CreateSowingRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state.sowing_service.create_sowing(req.into()).await?;
    Ok(CreateResponse::Ok(Json(created)))
}
