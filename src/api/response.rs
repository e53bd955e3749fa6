//! Response types for the Leave & Overtime Accrual Engine API.
//!
//! This module defines the success payloads that are not plain domain
//! records, plus the error response structure and the mapping from
//! engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::LeaveRequest;

/// Balance summary for one employee, as shown on their info page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee this summary describes.
    pub employee_id: String,
    /// The employee's display name.
    pub full_name: String,
    /// Annual vacation allowance at the employee's current tenure.
    pub allowed_hours: Decimal,
    /// Vacation hours consumed this anniversary year.
    pub vacation_used: Decimal,
    /// Banked overtime hours.
    pub overtime_hours: Decimal,
    /// Unpaid time-off hours accrued.
    pub unpaid_time: Decimal,
    /// Allowance plus overtime bank minus vacation used.
    pub total_hours_available: Decimal,
}

/// One entry of a manager's approval queue, annotated with the days on
/// which approving it would breach the staffing floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictQueueEntry {
    /// The pending request.
    pub request: LeaveRequest,
    /// Days that would breach the floor; empty when approval is safe.
    pub conflict_days: Vec<NaiveDate>,
}

/// Result of an anniversary rollover check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RolloverOutcome {
    /// The employee the check ran for.
    pub employee_id: String,
    /// True when balances were reset by this call.
    pub applied: bool,
    /// The next date the rollover applies on.
    pub next_rollover: NaiveDate,
    /// Vacation hours used after the check.
    pub vacation_used: Decimal,
}

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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_RANGE", message),
            },
            EngineError::InvalidHours { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_HOURS", message),
            },
            EngineError::InsufficientBalance { balance, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INSUFFICIENT_BALANCE",
                    message,
                    format!("The request exceeds the available {balance}"),
                ),
            },
            EngineError::DuplicateRequest { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("DUPLICATE_REQUEST", message),
            },
            EngineError::SchedulingConflict { days } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "SCHEDULING_CONFLICT",
                    message,
                    days.iter()
                        .map(|day| day.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                ),
            },
            EngineError::AuthorizationDenied { .. } => ApiErrorResponse {
                status: StatusCode::FORBIDDEN,
                error: ApiError::new("AUTHORIZATION_DENIED", message),
            },
            EngineError::NotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", message),
            },
            EngineError::AlreadyDecided { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("ALREADY_DECIDED", message),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
        }
    }
}
