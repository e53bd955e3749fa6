//! Request types for the Leave & Overtime Accrual Engine API.
//!
//! JSON bodies for the submission, decision and record endpoints. The
//! API consumes already-typed dates and decimal hour fields; it does no
//! free-form parsing of its own.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /vacations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationSubmission {
    /// The employee requesting leave.
    pub employee_id: String,
    /// First day away (inclusive).
    pub start_date: NaiveDate,
    /// Last day away (inclusive).
    pub end_date: NaiveDate,
    /// Hours of the range to take unpaid.
    #[serde(default)]
    pub unpaid_hours: Decimal,
    /// Hours of the range to draw from the overtime bank.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

/// Request body for `POST /overtime`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeSubmission {
    /// The employee claiming overtime.
    pub employee_id: String,
    /// The date the overtime was worked.
    pub date: NaiveDate,
    /// Raw hours worked beyond the standard shift.
    pub hours: Decimal,
}

/// Request body for approval and denial endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// The manager or owner making the decision.
    pub approver_id: String,
    /// Approve despite reported staffing conflicts.
    #[serde(default)]
    pub acknowledge_conflicts: bool,
}

/// Request body for `POST /sick-days`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SickDayEntry {
    /// The employee who was away sick.
    pub employee_id: String,
    /// The date of the sick day.
    pub date: NaiveDate,
    /// The manager entering the record.
    pub recorded_by: String,
}

/// Request body for `POST /leaves-of-absence`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveOfAbsenceEntry {
    /// The employee on leave.
    pub employee_id: String,
    /// First day away (inclusive).
    pub start_date: NaiveDate,
    /// Last day away (inclusive).
    pub end_date: NaiveDate,
    /// Whether the leave is unpaid.
    #[serde(default)]
    pub unpaid: bool,
    /// The manager entering the record.
    pub recorded_by: String,
}
