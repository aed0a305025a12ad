use axum::{
    response::{IntoResponse, Json, Response},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use crate::errors::AppError;

/// Body returned for every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::AlreadyExists => StatusCode::CONFLICT,
            AppError::InvalidCredentials => StatusCode::BAD_REQUEST,
            AppError::NoActiveSession => StatusCode::NO_CONTENT,
            AppError::UnknownOperation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidBody(rejection) => rejection.status(),
            // Anything else is a generic failure
            AppError::DivisionByZero | AppError::Generic(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// The IntoResponse trait implementation converts AppError into a well-formed HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 204 must not carry a body
        if status == StatusCode::NO_CONTENT {
            tracing::debug!("Responding 204: {}", self);
            return status.into_response();
        }

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Request rejected ({}): {}", status, self);
        }

        (status, Json(ErrorResponse { detail: self.to_string() })).into_response()
    }
}
