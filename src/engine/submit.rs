//! Request submission pipeline.
//!
//! Each submission validates its rules in a fixed order and
//! short-circuits on the first failure, so the actor always sees the
//! most specific reason. Vacation submission is the one place a balance
//! moves before approval: the overtime portion is reserved immediately,
//! and denial later releases it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::calculation::{
    HOURS_PER_DAY, annual_entitlement, banked_overtime_hours, is_valid_range, self_overlap,
    working_hours_between,
};
use crate::config::EntitlementTier;
use crate::error::{BalanceKind, EngineError, EngineResult};
use crate::models::{
    DateInterval, Department, Employee, LeaveOfAbsenceRecord, LeaveRequest, OvertimeRequest,
    RequestState, SickDayRecord,
};

/// Validates and submits a vacation request.
///
/// Rules are checked in order, short-circuiting on the first failure:
///
/// 1. the unpaid and overtime portions fit in the range's working hours;
/// 2. the overtime portion fits in the employee's current bank;
/// 3. the range is ordered and not in the past;
/// 4. the vacation portion fits the annual allowance;
/// 5. the range does not overlap the employee's own live requests.
///
/// On success the overtime portion is reserved by deducting it from the
/// employee's bank, and the returned request is in `Submitted` state
/// with its hour breakdown computed.
///
/// Rule 4 compares the vacation portion against the *full* annual
/// allowance; hours already used this year are not subtracted. See the
/// proposed-fix test before changing this.
pub fn submit_vacation(
    employee: &mut Employee,
    department: &Department,
    own_open_intervals: &[DateInterval],
    tiers: &[EntitlementTier],
    start: NaiveDate,
    end: NaiveDate,
    unpaid_hours: Decimal,
    overtime_hours: Decimal,
    today: NaiveDate,
) -> EngineResult<LeaveRequest> {
    if unpaid_hours < Decimal::ZERO || overtime_hours < Decimal::ZERO {
        return Err(EngineError::InvalidHours {
            message: "unpaid and overtime portions must not be negative".to_string(),
        });
    }

    let hours_total = working_hours_between(start, end);
    let offset_hours = unpaid_hours + overtime_hours;
    if offset_hours > hours_total {
        return Err(EngineError::InsufficientBalance {
            balance: BalanceKind::RangeHours,
            requested: offset_hours,
            available: hours_total,
        });
    }

    if overtime_hours > employee.overtime_hours {
        return Err(EngineError::InsufficientBalance {
            balance: BalanceKind::Overtime,
            requested: overtime_hours,
            available: employee.overtime_hours,
        });
    }

    if !is_valid_range(start, end, today) {
        let message = if start > end {
            "start date is after end date".to_string()
        } else {
            "both dates must be today or later".to_string()
        };
        return Err(EngineError::InvalidRange { message });
    }

    let hours_vacation = hours_total - unpaid_hours - overtime_hours;
    // Checked against the full annual allowance, not allowance minus
    // hours already used this year.
    let allowed_hours = annual_entitlement(employee.anniversary_date, tiers, today);
    if hours_vacation > allowed_hours {
        return Err(EngineError::InsufficientBalance {
            balance: BalanceKind::Vacation,
            requested: hours_vacation,
            available: allowed_hours,
        });
    }

    if self_overlap(start, end, own_open_intervals) {
        let candidate = DateInterval::new(start, end);
        let first_shared_day = own_open_intervals
            .iter()
            .flat_map(|interval| interval.days())
            .filter(|day| candidate.contains(*day))
            .min()
            .unwrap_or(start);
        return Err(EngineError::DuplicateRequest {
            employee_id: employee.id.clone(),
            date: first_shared_day,
        });
    }

    // Reserve the overtime portion now; denial restores it.
    employee.overtime_hours -= overtime_hours;

    Ok(LeaveRequest {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        department_id: department.id.clone(),
        start_date: start,
        end_date: end,
        hours_total,
        hours_vacation,
        hours_unpaid: unpaid_hours,
        hours_overtime: overtime_hours,
        state: RequestState::Submitted,
        decided_by: None,
    })
}

/// Validates and submits an overtime claim for a single date.
///
/// Overtime can only be claimed for work already done, so future dates
/// are rejected, as is a second claim for the same date. No balance
/// moves until a manager approves the claim.
pub fn submit_overtime(
    employee: &Employee,
    department: &Department,
    date: NaiveDate,
    raw_hours: Decimal,
    already_claimed: bool,
    today: NaiveDate,
) -> EngineResult<OvertimeRequest> {
    if raw_hours <= Decimal::ZERO {
        return Err(EngineError::InvalidHours {
            message: "overtime hours worked must be positive".to_string(),
        });
    }

    if date > today {
        return Err(EngineError::InvalidRange {
            message: "overtime cannot be claimed for a future date".to_string(),
        });
    }

    if already_claimed {
        return Err(EngineError::DuplicateRequest {
            employee_id: employee.id.clone(),
            date,
        });
    }

    Ok(OvertimeRequest {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        department_id: department.id.clone(),
        date,
        raw_hours,
        banked_hours: banked_overtime_hours(raw_hours),
        state: RequestState::Submitted,
        decided_by: None,
    })
}

/// Records a sick day on behalf of an employee.
///
/// Sick days are manager-entered and carry no submission phase: the
/// record is created already approved, always for a fixed 8-hour day,
/// at most once per (employee, date).
pub fn record_sick_day(
    manager: &Employee,
    employee: &Employee,
    department: &Department,
    date: NaiveDate,
    already_recorded: bool,
) -> EngineResult<SickDayRecord> {
    if !manager.can_approve_for(&department.id) {
        return Err(EngineError::AuthorizationDenied {
            message: format!(
                "'{}' cannot record sick days for department '{}'",
                manager.id, department.id
            ),
        });
    }

    if already_recorded {
        return Err(EngineError::DuplicateRequest {
            employee_id: employee.id.clone(),
            date,
        });
    }

    Ok(SickDayRecord {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        department_id: department.id.clone(),
        date,
        hours: HOURS_PER_DAY,
        recorded_by: manager.id.clone(),
    })
}

/// Records a leave of absence on behalf of an employee.
///
/// Manager-entered like sick days, but over a range and optionally
/// unpaid; the unpaid hours accrue to the employee's `unpaid_time`
/// immediately since there is no approval phase to defer them to.
pub fn record_leave_of_absence(
    manager: &Employee,
    employee: &mut Employee,
    department: &Department,
    start: NaiveDate,
    end: NaiveDate,
    unpaid: bool,
) -> EngineResult<LeaveOfAbsenceRecord> {
    if !manager.can_approve_for(&department.id) {
        return Err(EngineError::AuthorizationDenied {
            message: format!(
                "'{}' cannot record leaves of absence for department '{}'",
                manager.id, department.id
            ),
        });
    }

    if start > end {
        return Err(EngineError::InvalidRange {
            message: "start date is after end date".to_string(),
        });
    }

    let hours_total = working_hours_between(start, end);
    let hours_unpaid = if unpaid { hours_total } else { Decimal::ZERO };
    employee.unpaid_time += hours_unpaid;

    Ok(LeaveOfAbsenceRecord {
        id: Uuid::new_v4(),
        employee_id: employee.id.clone(),
        start_date: start,
        end_date: end,
        unpaid,
        hours_unpaid,
        hours_total,
        recorded_by: manager.id.clone(),
    })
}
