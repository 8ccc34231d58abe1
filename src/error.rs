use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Rejections from the roster store. Each one is a local validation
/// failure; nothing here is retryable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity {activity} not found")]
    NotFound { activity: String },
    #[error("Student {email} is already signed up for {activity}")]
    AlreadyEnrolled { activity: String, email: String },
    #[error("Student {email} is not signed up for {activity}")]
    NotEnrolled { activity: String, email: String },
}

impl RosterError {
    pub fn status(&self) -> StatusCode {
        match self {
            RosterError::NotFound { .. } => StatusCode::NOT_FOUND,
            RosterError::AlreadyEnrolled { .. } | RosterError::NotEnrolled { .. } => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// Failures while loading a seed registry from disk.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
