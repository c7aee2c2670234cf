use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

use crate::images::ImageHostError;

/// Meta
///
/// The status block carried by every response, success or failure.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[ts(export)]
pub struct Meta {
    pub code: u16,
    pub success: bool,
    pub message: String,
}

/// Envelope
///
/// The uniform response wrapper: `{meta, data?}`. Error responses carry no
/// `data` field at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub meta: Meta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

fn envelope<T: Serialize>(code: StatusCode, message: &str, data: Option<T>) -> Response {
    let body = Envelope {
        meta: Meta {
            code: code.as_u16(),
            success: code.is_success(),
            message: message.to_string(),
        },
        data,
    };
    (code, Json(body)).into_response()
}

/// 200 response with a payload.
pub fn ok<T: Serialize>(message: &str, data: T) -> Response {
    envelope(StatusCode::OK, message, Some(data))
}

/// 201 response with the created record.
pub fn created<T: Serialize>(message: &str, data: T) -> Response {
    envelope(StatusCode::CREATED, message, Some(data))
}

/// 200 response with no payload (deletes).
pub fn ok_message(message: &str) -> Response {
    envelope::<()>(StatusCode::OK, message, None)
}

/// ApiError
///
/// Every failure a handler can produce. All variants are mapped into the
/// uniform envelope at the HTTP boundary; nothing propagates past it.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed pagination or DTO input.
    #[error("{0}")]
    Validation(String),
    /// Bad credentials or a missing/invalid/expired token.
    #[error("{0}")]
    Unauthorized(String),
    /// Role mismatch or self-modification guard.
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    /// Duplicate admin email.
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("image upload failed: {0}")]
    ImageUpload(#[from] ImageHostError),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::ImageUpload(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Internal failures are logged with their cause but surface as an
        // opaque message.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        envelope::<()>(status, &message, None)
    }
}
