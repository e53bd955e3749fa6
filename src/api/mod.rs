//! HTTP API for the Leave & Overtime Accrual Engine.
//!
//! The API exposes submission endpoints for employees, decision and
//! record endpoints for managers, and read endpoints for balances and
//! the conflict queue. Build a router with [`create_router`] over an
//! [`AppState`].

pub mod handlers;
pub mod request;
pub mod response;
pub mod state;

pub use handlers::create_router;
pub use request::{
    Decision, LeaveOfAbsenceEntry, OvertimeSubmission, SickDayEntry, VacationSubmission,
};
pub use response::{ApiError, ApiErrorResponse, ConflictQueueEntry, EmployeeSummary, RolloverOutcome};
pub use state::{AppState, Clock};
