//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use croptrack_domain::error::CropTrackError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps request and service failures to an HTTP response.
pub enum ApiError {
    /// The request body could not be parsed into the expected shape.
    Malformed(JsonRejection),
    /// The service rejected the request or storage failed.
    Service(CropTrackError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection)
    }
}

impl From<CropTrackError> for ApiError {
    fn from(err: CropTrackError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Malformed(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "malformed request body");
                (StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::Service(CropTrackError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Service(CropTrackError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
