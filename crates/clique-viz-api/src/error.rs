//! Errors returned by the upload proxy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::types::{ApiResponse, ErrorBody};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The upload was not multipart form data.
    #[error("Expected multipart/form-data, got {0}")]
    NotMultipart(String),

    /// The solver could not be reached or dropped the connection.
    #[error("Solver unreachable: {0}")]
    SolverUnreachable(#[from] reqwest::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotMultipart(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::SolverUnreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotMultipart(_) => "NOT_MULTIPART",
            ApiError::SolverUnreachable(_) => "SOLVER_UNREACHABLE",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(code = self.code(), error = %self, "upload rejected");
        (
            self.status(),
            Json(ApiResponse::new(ErrorBody {
                code: self.code().into(),
                message: self.to_string(),
            })),
        )
            .into_response()
    }
}
