//! Error types for the Leave & Overtime Accrual Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all validation and lifecycle failures the engine can report. Every
//! failure is recoverable: it is surfaced to the submitting actor with a
//! specific reason and the actor resubmits with corrected input.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

use crate::models::RequestState;

/// Identifies which balance a request exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceKind {
    /// The annual vacation-hour allowance.
    Vacation,
    /// The banked overtime hours an employee can draw on.
    Overtime,
    /// The working hours available inside the requested date range.
    RangeHours,
}

impl std::fmt::Display for BalanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BalanceKind::Vacation => write!(f, "vacation hours"),
            BalanceKind::Overtime => write!(f, "overtime bank"),
            BalanceKind::RangeHours => write!(f, "working hours in range"),
        }
    }
}

/// The main error type for the Leave & Overtime Accrual Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::NotFound {
///     entity: "employee",
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested date range failed validation.
    #[error("Invalid date range: {message}")]
    InvalidRange {
        /// A description of what made the range invalid.
        message: String,
    },

    /// A request asked for more hours than a balance can cover.
    #[error("Insufficient {balance}: requested {requested}, available {available}")]
    InsufficientBalance {
        /// The balance that was exhausted.
        balance: BalanceKind,
        /// The hours the request asked for.
        requested: Decimal,
        /// The hours actually available.
        available: Decimal,
    },

    /// An hour quantity was negative or otherwise unusable.
    #[error("Invalid hours: {message}")]
    InvalidHours {
        /// A description of what made the quantity invalid.
        message: String,
    },

    /// A record already exists for this employee covering this date.
    #[error("Employee '{employee_id}' already has a request covering {date}")]
    DuplicateRequest {
        /// The employee holding the existing record.
        employee_id: String,
        /// The contested date.
        date: NaiveDate,
    },

    /// Approving would drop the department below its staffing floor.
    #[error("Approval would breach the staffing floor on {} day(s)", days.len())]
    SchedulingConflict {
        /// The days on which the floor would be breached, sorted.
        days: Vec<NaiveDate>,
    },

    /// The acting employee lacks the role or scope for this operation.
    #[error("Authorization denied: {message}")]
    AuthorizationDenied {
        /// A description of the missing authority.
        message: String,
    },

    /// A referenced employee, department or record does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// The kind of entity that was looked up.
        entity: &'static str,
        /// The identifier that missed.
        id: String,
    },

    /// A request was approved or denied more than once.
    #[error("Request {id} was already decided: {state}")]
    AlreadyDecided {
        /// The request whose lifecycle is already terminal.
        id: Uuid,
        /// The terminal state the request is in.
        state: RequestState,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
