//! Shared HTTP building blocks: response envelope and extractors

mod extract;

pub use extract::{ApiJson, ApiJsonRejection, ValidatedForm, ValidatedFormRejection};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard API response envelope
///
/// Success: `{"success": true, "data": {...}}`.
/// Failure: `{"success": false, "error": "..."}`, optionally with `data`
/// carrying context such as the current listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload
    pub data: Option<T>,
    /// Error description, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Failure that still returns data to the caller
    pub fn rejected(data: T, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Some(data),
            error: Some(message.into()),
        }
    }
}
