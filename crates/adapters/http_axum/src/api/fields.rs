//! JSON handlers for fields.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use croptrack_app::ports::{FieldRepository, HarvestRepository, SowingRepository};
use croptrack_domain::field::{Field, NewField};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a field.
///
/// Missing keys fall back to their zero value and are reported by validation.
/// An `id` key is ignored.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct CreateFieldRequest {
    pub name: String,
    pub area_ha: f64,
    pub region: String,
}

impl From<CreateFieldRequest> for NewField {
    fn from(req: CreateFieldRequest) -> Self {
        NewField::new(req.name, req.area_ha, req.region)
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Field>>),
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
    Ok(Json<Field>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /fields`
pub async fn list<FR, SR, HR>(
    State(state): State<AppState<FR, SR, HR>>,
) -> Result<ListResponse, ApiError>
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    let fields = state.field_service.list_fields().await?;
    Ok(ListResponse::Ok(Json(fields)))
}

/// `POST /fields`
pub async fn create<FR, SR, HR>(
    State(state): State<AppState<FR, SR, HR>>,
    payload: Result<Json<CreateFieldRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    FR: FieldRepository + Send + Sync + 'static,
    SR: SowingRepository + Send + Sync + 'static,
    HR: HarvestRepository + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let created = state.field_service.create_field(req.into()).await?;
    Ok(CreateResponse::Ok(Json(created)))
}
