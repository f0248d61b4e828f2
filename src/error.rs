//! Error types for moderation, configuration and the sentiment backend.

use thiserror::Error;

/// Failures surfaced by [`crate::moderator::ContentModerator::moderate`].
#[derive(Debug, Error)]
pub enum ModerationError {
    /// Input was empty or whitespace-only; no analyzer ran.
    #[error("Empty text provided")]
    EmptyText,

    /// The sentiment backend refused the text and the policy is `fail`.
    #[error("sentiment unavailable: {0}")]
    SentimentUnavailable(#[from] SentimentError),
}

/// Failures reported by a [`crate::sentiment::SentimentBackend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SentimentError {
    /// The backend cannot score this input (e.g. lossy-decoded text).
    #[error("text cannot be processed: {reason}")]
    Unprocessable { reason: String },
}

/// Startup-time configuration failures. Never produced while serving requests.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("spam pattern '{id}' does not compile: {source}")]
    InvalidPattern {
        id: String,
        #[source]
        source: regex::Error,
    },

    #[error("spam pattern at position {0} has an empty id")]
    EmptyPatternId(usize),

    #[error("spam pattern id '{0}' is declared more than once")]
    DuplicatePatternId(String),
}

/// Transport-level errors returned by the HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing text field")]
    MissingText,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Empty text provided")]
    EmptyText,

    #[error("{0}")]
    Internal(String),
}

impl From<ModerationError> for ApiError {
    fn from(e: ModerationError) -> Self {
        match e {
            ModerationError::EmptyText => ApiError::EmptyText,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

/// Error response body.
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = match &self {
            ApiError::MissingText | ApiError::InvalidBody(_) | ApiError::EmptyText => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "moderation request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}
