//! HTTP mapping for `CounterError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use counterd_core::error::CounterError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Handler-level error. Always renders a JSON body.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub CounterError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            CounterError::Unauthorized => StatusCode::UNAUTHORIZED,
            CounterError::BadRequest(_) | CounterError::UnsupportedVersion => StatusCode::BAD_REQUEST,
            CounterError::Io { .. } | CounterError::Overflow | CounterError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.0 {
            CounterError::Unauthorized => json!({ "error": "unauthorized" }),
            ref e => json!({
                "error": e.client_code().as_str(),
                "message": e.to_string(),
            }),
        };
        (status, Json(body)).into_response()
    }
}
