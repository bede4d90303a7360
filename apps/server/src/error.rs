use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use finmirror_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        let ApiError::Core(e) = self;
        match e {
            CoreError::ExecutionConflict => StatusCode::CONFLICT,
            CoreError::ConfigInvalid(_) | CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::ExportTargetMissing(_) | CoreError::Transport(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
