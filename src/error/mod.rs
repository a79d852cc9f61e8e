use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::value::Value;

/// Structured error produced by an [`ErrorFactory`](crate::factory::ErrorFactory).
///
/// Serializes to `{"reason": ..., "message": ..., "data": {...}}`. The code is
/// kept out of the body and drives the response status line instead.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status code
    #[serde(skip)]
    pub code: u16,

    /// Short machine-readable reason, e.g. `FormatError`
    pub reason: String,

    /// Rendered human-readable message
    pub message: String,

    /// Placeholder name to supplied value
    pub data: BTreeMap<String, Value>,
}

impl ApiError {
    /// Status code for the transport layer.
    ///
    /// Codes outside `100..=999` map to `500 Internal Server Error`.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Body as a `serde_json::Value`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "reason": self.reason,
            "message": self.message,
            "data": self.data,
        })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(
                reason = %self.reason,
                status = %status.as_u16(),
                message = %self.message,
                "API error"
            );
        } else {
            tracing::warn!(
                reason = %self.reason,
                status = %status.as_u16(),
                message = %self.message,
                "API error"
            );
        }

        (status, Json(self)).into_response()
    }
}
