//! Error responses for reading routes

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use super::dto::ReadingResponse;
use super::form::InputError;
use crate::domain::DomainError;
use crate::interfaces::http::common::ApiResponse;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Reading pair refused by the billing engine; carries the current
    /// listing so the caller can re-render it next to the message.
    #[error("{message}")]
    Rejected {
        message: String,
        readings: Vec<ReadingResponse>,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Domain(DomainError::Validation(_)) | Self::Rejected { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::Domain(DomainError::Storage(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Rejected { message, readings } => {
                (status, Json(ApiResponse::rejected(readings, message))).into_response()
            }
            other => {
                if status.is_server_error() {
                    error!("Request failed: {}", other);
                }
                (status, Json(ApiResponse::<()>::error(other.to_string()))).into_response()
            }
        }
    }
}
