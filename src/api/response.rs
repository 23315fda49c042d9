//! Response types for the engine API.
//!
//! This module defines the error response structure and the mapping from
//! [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, ErrorKind};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

fn error_code(error: &EngineError) -> &'static str {
    match error {
        EngineError::InvalidInput { .. } => "INVALID_INPUT",
        EngineError::InvalidRate { .. } => "INVALID_RATE",
        EngineError::AlreadyClockedIn { .. } => "ALREADY_CLOCKED_IN",
        EngineError::NoOpenClockIn { .. } => "NO_OPEN_CLOCK_IN",
        EngineError::InvalidDuration { .. } => "INVALID_DURATION",
        EngineError::AlreadyProcessed { .. } => "ALREADY_PROCESSED",
        EngineError::AlreadyDecided { .. } => "ALREADY_DECIDED",
        EngineError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
        EngineError::EmployeeNotFound { .. } => "EMPLOYEE_NOT_FOUND",
        EngineError::RequestNotFound { .. } => "REQUEST_NOT_FOUND",
        EngineError::PayrollRecordNotFound { .. } => "PAYROLL_RECORD_NOT_FOUND",
        EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
            "CONFIG_ERROR"
        }
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let status = match error.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Config => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(error_code(&error), error.to_string()),
        }
    }
}
