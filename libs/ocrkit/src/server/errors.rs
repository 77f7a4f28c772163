use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::types::ErrorResponse;

/// Everything that can end an `/ocr` request early.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("No imageBase64 provided")]
    MissingImage,

    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    #[error("{0}")]
    Decode(#[from] base64::DecodeError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Recognition(String),
}

impl OcrError {
    pub fn status(&self) -> StatusCode {
        match self {
            OcrError::MissingImage => StatusCode::BAD_REQUEST,
            OcrError::InvalidBody { status, .. } => *status,
            OcrError::Decode(_) | OcrError::Io(_) | OcrError::Recognition(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_client_error()
    }
}

impl From<anyhow::Error> for OcrError {
    fn from(err: anyhow::Error) -> Self {
        OcrError::Recognition(format!("{:#}", err))
    }
}

impl IntoResponse for OcrError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
