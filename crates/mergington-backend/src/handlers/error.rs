use axum::{Json, http::StatusCode, response::IntoResponse};

use mergington::data::ErrorDetail;
use mergington::errors::{ErrorKind, RosterError};

/// A roster failure rendered as `{"detail": ...}` with a matching status.
#[derive(Debug)]
pub struct ApiError(RosterError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<RosterError> for ApiError {
    fn from(error: RosterError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = ErrorDetail {
            detail: self.0.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
