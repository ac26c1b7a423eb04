//! Response types for the HR payroll API.
//!
//! This module defines the error response structures, the mapping from
//! [`HrError`] to HTTP statuses, and the response bodies that add derived
//! fields to stored records.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::HrError;
use crate::models::Employee;

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

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an error for a path parameter that failed to parse.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::new("INVALID_PATH", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<HrError> for ApiErrorResponse {
    fn from(error: HrError) -> Self {
        let message = error.to_string();
        let (status, code) = match &error {
            HrError::ConfigNotFound { .. } | HrError::ConfigParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR")
            }
            HrError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            HrError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            HrError::PayrollYearNotFound { .. } => {
                (StatusCode::NOT_FOUND, "PAYROLL_YEAR_NOT_FOUND")
            }
            HrError::AmbiguousPayrollYear { .. } => {
                (StatusCode::CONFLICT, "AMBIGUOUS_PAYROLL_YEAR")
            }
            HrError::Duplicate { .. } => (StatusCode::CONFLICT, "DUPLICATE"),
            HrError::StaleRecord { .. } => (StatusCode::CONFLICT, "STALE_RECORD"),
            HrError::YearsOverlap { .. } | HrError::PeriodsOverlap { .. } => {
                (StatusCode::BAD_REQUEST, "OVERLAP")
            }
            HrError::CloseOutOfOrder { .. } => (StatusCode::BAD_REQUEST, "CLOSE_OUT_OF_ORDER"),
            HrError::InvalidTransition { .. } => (StatusCode::BAD_REQUEST, "INVALID_TRANSITION"),
            HrError::Closed { .. } => (StatusCode::BAD_REQUEST, "RECORD_CLOSED"),
            HrError::PeriodsAlreadyCreated { .. } => {
                (StatusCode::CONFLICT, "PERIODS_ALREADY_CREATED")
            }
            HrError::InvalidDateRange { .. }
            | HrError::PeriodOutsideYear { .. }
            | HrError::HolidayOutsidePeriod { .. }
            | HrError::InvalidInterval { .. }
            | HrError::InvalidRecord { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        };

        let error = if status == StatusCode::INTERNAL_SERVER_ERROR {
            ApiError::with_details(code, "Internal error", message)
        } else {
            ApiError::new(code, message)
        };
        ApiErrorResponse { status, error }
    }
}

/// An employee with the derived age.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// The stored record.
    #[serde(flatten)]
    pub employee: Employee,
    /// Age as `Ny Mm Dd`, when the date of birth is known.
    pub age: Option<String>,
}
