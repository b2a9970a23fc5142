use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a request can fail with. Converted to a JSON error body at the
/// boundary; nothing below the handlers panics on a bad request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Name is required")]
    MissingName,

    #[error("Guest not found")]
    GuestNotFound,

    #[error("{context}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Failed to generate QR code")]
    QrEncoding(#[source] anyhow::Error),
}

impl ApiError {
    pub fn db(context: &'static str, source: sqlx::Error) -> Self {
        Self::Database { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingName => StatusCode::BAD_REQUEST,
            ApiError::GuestNotFound => StatusCode::NOT_FOUND,
            ApiError::Database { .. } | ApiError::QrEncoding(..) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // The caller gets the short message; the cause stays in the logs.
        match &self {
            ApiError::Database { context, source } => error!(error = %source, "{context}"),
            ApiError::QrEncoding(source) => error!(error = %source, "QR encoding failed"),
            _ => {}
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
