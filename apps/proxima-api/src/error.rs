//! Error types for the Proxima API

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contact_mailer::MailError;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidBody(String),

    #[error("Failed to track QR visit: {0}")]
    VisitNotRecorded(#[from] StoreError),

    #[error(transparent)]
    Mail(#[from] MailError),

    #[error("Failed to process contact form: {0}")]
    ContactDispatch(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::VisitNotRecorded(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Mail(MailError::Authentication) => StatusCode::UNAUTHORIZED,
            ApiError::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ContactDispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable text for the `detail` field
    pub fn detail(&self) -> String {
        match self {
            ApiError::Mail(MailError::Message(msg) | MailError::Transport(msg)) => {
                format!("An unexpected error occurred while sending email: {}", msg)
            }
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        match &self {
            ApiError::InvalidBody(_) => tracing::warn!("Rejected request body: {}", detail),
            ApiError::Mail(MailError::Connection(cause)) => {
                tracing::error!("{} ({})", detail, cause)
            }
            _ => tracing::error!("{}", detail),
        }

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
