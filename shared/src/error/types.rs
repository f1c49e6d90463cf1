//! Error type and its JSON rendering

use super::codes::ErrorCode;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// JSON shape an error is rendered with
///
/// Endpoints keep the key name their clients already parse:
/// - `Single`: `{"error": "<message>"}`
/// - `List`: `{"errors": ["<message>"]}`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorShape {
    #[default]
    Single,
    List,
}

/// Application error with structured error code
///
/// This is the primary error type for the API, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - The body shape the endpoint responds with
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Body shape used when rendered as an HTTP response
    pub shape: ErrorShape,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            shape: ErrorShape::Single,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            shape: ErrorShape::Single,
        }
    }

    /// Render this error as `{"errors": [...]}`
    pub fn listed(mut self) -> Self {
        self.shape = ErrorShape::List;
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a required field error
    pub fn required_field(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::RequiredField, msg)
    }

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum ErrorBody<'a> {
    Single { error: &'a str },
    List { errors: [&'a str; 1] },
}

impl AppError {
    fn body(&self) -> ErrorBody<'_> {
        match self.shape {
            ErrorShape::Single => ErrorBody::Single {
                error: &self.message,
            },
            ErrorShape::List => ErrorBody::List {
                errors: [&self.message],
            },
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(self.body())).into_response()
    }
}
