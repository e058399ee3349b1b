//! API error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobtrack_common::Error;
use serde_json::json;

/// Error returned by every record handler
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Integrity(_) | Error::ConfigConflict(_) => StatusCode::CONFLICT,
            Error::Database(_) | Error::Io(_) | Error::Config(_) => {
                tracing::error!("request failed: {}", self.0);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.0.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Turn a missing row into a 404
pub fn found<T>(record: Option<T>, what: &str, id: i64) -> Result<T, ApiError> {
    record.ok_or_else(|| ApiError(Error::NotFound(format!("{} {}", what, id))))
}
