use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload returned to clients when a request cannot be fulfilled
///
/// Immutable once built: fields are only reachable through accessors.
/// `message` and `details` may be absent; an absent value is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Local wall-clock time the error was constructed (no offset)
    #[schema(example = "2024-01-01T00:00:00")]
    timestamp: NaiveDateTime,
    /// Stable, user-facing summary
    #[schema(example = "not found")]
    message: Option<String>,
    /// Diagnostic context, e.g. the offending field or upstream cause
    #[schema(example = "user id 42")]
    details: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response, storing every value verbatim
    pub fn new(
        timestamp: NaiveDateTime,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::from_parts(timestamp, Some(message.into()), Some(details.into()))
    }

    /// Create an error response where either text may be absent
    pub fn from_parts(
        timestamp: NaiveDateTime,
        message: Option<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            timestamp,
            message,
            details,
        }
    }

    /// Create an error response stamped with the current local time
    pub fn now(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::new(Local::now().naive_local(), message, details)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Consume the response, returning `(timestamp, message, details)`
    pub fn into_parts(self) -> (NaiveDateTime, Option<String>, Option<String>) {
        (self.timestamp, self.message, self.details)
    }
}

// Status is left to the caller: `(StatusCode::NOT_FOUND, err)` overrides the default.
impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}
