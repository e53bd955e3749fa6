//! Leave, overtime, sick-day and leave-of-absence records.
//!
//! Requests are created in `Submitted` state by the employee action and
//! are moved exactly once to `Approved` or `Denied` by a manager action.
//! Sick days and leaves of absence are manager-entered and carry no
//! submission phase.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DateInterval;

/// Lifecycle state of a leave or overtime request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestState {
    /// Awaiting a manager decision.
    Submitted,
    /// Approved by a manager; balances have been reconciled.
    Approved,
    /// Denied by a manager; any reservation has been released.
    Denied,
}

impl RequestState {
    /// Returns true while the request still counts against scheduling.
    ///
    /// Denied requests free their days; submitted and approved ones hold
    /// them.
    pub fn is_live(&self) -> bool {
        !matches!(self, RequestState::Denied)
    }
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestState::Submitted => write!(f, "submitted"),
            RequestState::Approved => write!(f, "approved"),
            RequestState::Denied => write!(f, "denied"),
        }
    }
}

/// A vacation request over an inclusive date range.
///
/// The hour breakdown is computed at submission time and never
/// recomputed: `hours_total = hours_vacation + hours_unpaid +
/// hours_overtime`. The overtime portion is reserved from the employee's
/// bank at submission and restored on denial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The requesting employee.
    pub employee_id: String,
    /// Department snapshot taken at submission time.
    pub department_id: String,
    /// First day away (inclusive).
    pub start_date: NaiveDate,
    /// Last day away (inclusive).
    pub end_date: NaiveDate,
    /// Total working hours the request consumes.
    pub hours_total: Decimal,
    /// Hours drawn from the annual vacation allowance.
    pub hours_vacation: Decimal,
    /// Hours taken unpaid.
    pub hours_unpaid: Decimal,
    /// Hours drawn from the overtime bank.
    pub hours_overtime: Decimal,
    /// Lifecycle state.
    pub state: RequestState,
    /// The manager who decided the request, once decided.
    pub decided_by: Option<String>,
}

impl LeaveRequest {
    /// The inclusive date interval this request covers.
    pub fn interval(&self) -> DateInterval {
        DateInterval::new(self.start_date, self.end_date)
    }
}

/// A request to bank overtime worked on a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The requesting employee.
    pub employee_id: String,
    /// Department snapshot taken at submission time.
    pub department_id: String,
    /// The date the overtime was worked.
    pub date: NaiveDate,
    /// Raw hours worked beyond the standard shift.
    pub raw_hours: Decimal,
    /// Banked hours after the tiered rate is applied.
    pub banked_hours: Decimal,
    /// Lifecycle state.
    pub state: RequestState,
    /// The manager who decided the request, once decided.
    pub decided_by: Option<String>,
}

/// A sick day entered by a manager.
///
/// Created directly in an approved state; at most one record exists per
/// (employee, date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SickDayRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee who was away sick.
    pub employee_id: String,
    /// Department snapshot taken at entry time.
    pub department_id: String,
    /// The date of the sick day.
    pub date: NaiveDate,
    /// Hours away; always a fixed full day.
    pub hours: Decimal,
    /// The manager who entered the record.
    pub recorded_by: String,
}

/// A leave of absence entered by a manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveOfAbsenceRecord {
    /// Unique identifier for the record.
    pub id: Uuid,
    /// The employee on leave.
    pub employee_id: String,
    /// First day away (inclusive).
    pub start_date: NaiveDate,
    /// Last day away (inclusive).
    pub end_date: NaiveDate,
    /// Whether the leave is unpaid.
    pub unpaid: bool,
    /// Unpaid hours accrued by the leave.
    pub hours_unpaid: Decimal,
    /// Total working hours covered by the leave.
    pub hours_total: Decimal,
    /// The manager who entered the record.
    pub recorded_by: String,
}
