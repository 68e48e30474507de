use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use chroma_core::ColorError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Browser clients branch on `success`, so errors keep the same
        // envelope as successful responses.
        let body = Json(json!({
            "success": false,
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

impl From<ColorError> for AppError {
    fn from(err: ColorError) -> Self {
        match err {
            ColorError::InvalidFormat(_) => Self::bad_request(
                "Invalid hex format. Use the #RRGGBB format",
            ),
            ColorError::MissingField(_) => {
                Self::bad_request("Both a name and a hex code are required")
            }
            ColorError::NotFound(_) => Self::not_found(err.to_string()),
            ColorError::Storage(msg) => {
                tracing::error!(error = %msg, "color storage failed");
                Self::internal("Internal server error")
            }
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = ?err, "request failed");
        Self::internal(err.to_string())
    }
}
