//! HTTP API handlers

pub mod artists;
pub mod audios;
pub mod genres;
pub mod health;
pub mod roles;
pub mod songs;
pub mod users;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tunelib_common::Error;

/// Query parameters shared by the single-field listings
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Sort key; unrecognized values fall back to ascending order
    pub sort: Option<String>,

    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

pub(crate) fn default_page() -> i64 {
    1
}

/// Maps service errors onto HTTP status codes with a JSON error body
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, format!("Not found: {}", msg)),
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, format!("Invalid input: {}", msg)),
            err => {
                tracing::error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

pub(crate) fn id_mismatch(path_id: i64, body_id: i64) -> ApiError {
    ApiError(Error::InvalidInput(format!(
        "id mismatch between path ({}) and body ({})",
        path_id, body_id
    )))
}
