use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use stocksim_core::errors::Error as CoreError;
use thiserror::Error;

use crate::models::{ErrorResponse, SimulateResponse};

/// Message returned for simulation failures the caller cannot correct.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::warn!("Rejected request: {}", self);
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        self.log(status);
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Error rendered in the `{"success": false, "error": ..}` envelope of the
/// simulate endpoint. Internal details are logged but not returned.
#[derive(Debug)]
pub struct SimulationFailure(pub ApiError);

impl From<ApiError> for SimulationFailure {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl From<CoreError> for SimulationFailure {
    fn from(err: CoreError) -> Self {
        Self(ApiError::Core(err))
    }
}

impl IntoResponse for SimulationFailure {
    fn into_response(self) -> Response {
        let status = self.0.status();
        self.0.log(status);
        let message = if status.is_server_error() {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        } else {
            self.0.to_string()
        };
        (status, Json(SimulateResponse::failure(message))).into_response()
    }
}
