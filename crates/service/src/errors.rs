use models::ModelError;
use thiserror::Error;

/// Failure of a single API call.
///
/// `Display` is always the fixed, human-readable message for the operation
/// (e.g. "Failed to fetch leaders"); the variant keeps the detail.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { message: String, status: u16, body: String },
    /// The request never produced a response.
    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// A success response whose body did not match the expected shape.
    #[error("{message}")]
    Decode {
        message: String,
        #[source]
        source: reqwest::Error,
    },
    /// A success response that carried an unusable value.
    #[error("{message}")]
    Invalid { message: String, reason: String },
    #[error("Upload failed")]
    Upload(Option<String>),
    /// The token store failed while preparing or finishing a call.
    #[error("{message}")]
    Token {
        message: String,
        #[source]
        source: SessionError,
    },
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ApiError {
    pub fn status(message: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Status { message: message.into(), status, body: body.into() }
    }

    pub fn token(message: impl Into<String>, source: SessionError) -> Self {
        Self::Token { message: message.into(), source }
    }

    /// HTTP status code when the server responded at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status_code(), Some(401 | 403))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("session storage error: {0}")]
    Storage(String),
}

impl SessionError {
    pub(crate) fn storage(e: impl std::fmt::Display) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Rejections and failures surfaced by the screen controllers.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("another operation is still in progress")]
    Busy,
    #[error("nothing is being edited")]
    NotEditing,
    #[error(transparent)]
    Validation(#[from] ModelError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_operation_message() {
        let e = ApiError::status("Failed to fetch leaders", 500, "boom");
        assert_eq!(e.to_string(), "Failed to fetch leaders");
        assert_eq!(e.status_code(), Some(500));
        assert!(!e.is_unauthorized());
        assert!(ApiError::status("Failed to load tickets", 401, "").is_unauthorized());
    }

    #[test]
    fn upload_message_is_fixed() {
        assert_eq!(ApiError::Upload(Some("no url".into())).to_string(), "Upload failed");
        assert_eq!(ApiError::Upload(None).to_string(), "Upload failed");
    }

    #[test]
    fn token_store_failure_keeps_the_operation_message() {
        use std::error::Error as _;
        let e = ApiError::token("Failed to create leader", SessionError::Storage("disk full".into()));
        assert_eq!(e.to_string(), "Failed to create leader");
        assert_eq!(e.source().map(|s| s.to_string()).as_deref(), Some("session storage error: disk full"));
    }

    #[test]
    fn screen_errors_pass_messages_through() {
        let e: ScreenError = ApiError::status("Failed to create leader", 400, "").into();
        assert_eq!(e.to_string(), "Failed to create leader");
        let v: ScreenError = ModelError::required("name").into();
        assert_eq!(v.to_string(), "validation error: name is required");
    }
}
