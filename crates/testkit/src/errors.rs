use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Error bodies follow the `{"detail": "..."}` shape of the real backend.
#[derive(Debug, Error)]
pub enum StubError {
    #[error("Not authenticated")]
    Unauthorized,
    #[error("Invalid credentials")]
    BadCredentials,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        let status = match self {
            StubError::Unauthorized | StubError::BadCredentials => StatusCode::UNAUTHORIZED,
            StubError::NotFound(_) => StatusCode::NOT_FOUND,
            StubError::BadRequest(_) => StatusCode::BAD_REQUEST,
            StubError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({"detail": self.to_string()}))).into_response()
    }
}
