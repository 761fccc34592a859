//! JSON bodies shared between route handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The body sent to the client when a request fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// A short, human readable description of what went wrong.
    pub error: String,
    /// Extra detail about the error, e.g. which field is missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The body sent to the client to confirm an action that returns no data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBody {
    /// The confirmation message, e.g. "Transaction deleted".
    pub message: String,
}

#[inline]
pub fn render_error(status_code: StatusCode, error: &str, detail: Option<String>) -> Response {
    let body = ErrorBody {
        error: error.to_owned(),
        detail,
    };

    (status_code, Json(body)).into_response()
}

#[inline]
pub fn render_message(status_code: StatusCode, message: &str) -> Response {
    let body = MessageBody {
        message: message.to_owned(),
    };

    (status_code, Json(body)).into_response()
}
