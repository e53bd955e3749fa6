//! Balance reconciliation and anniversary rollover.
//!
//! The functions here are the only code permitted to mutate an
//! employee's stored balances. Approval and denial effects are split out
//! per request type so the decision layer applies exactly one of them
//! per lifecycle transition.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calculation::add_year;
use crate::models::{Employee, LeaveRequest, OvertimeRequest};

/// Applies the anniversary rollover to an employee if it is due.
///
/// A two-phase gate driven by `rollover_pending` and `next_rollover`:
///
/// - Phase A (`rollover_pending` set, date reached): clear the flag.
///   No balance change yet.
/// - Phase B (flag clear, date reached): advance `next_rollover` by one
///   year, reset `vacation_used` to zero, and set `rollover_pending`
///   again for the next cycle.
///
/// The phases run in sequence, so a single call on or after the
/// rollover date performs the full reset; once Phase B has advanced
/// `next_rollover`, repeat calls are no-ops until the next anniversary.
/// Phase B must assign the flag, not compare it: a comparison would
/// leave the gate open and is exactly the regression the
/// exactly-once tests pin down.
///
/// Returns true when balances were reset.
pub fn apply_rollover(employee: &mut Employee, today: NaiveDate) -> bool {
    if today >= employee.next_rollover && employee.rollover_pending {
        employee.rollover_pending = false;
    }

    if today >= employee.next_rollover && !employee.rollover_pending {
        employee.next_rollover = add_year(employee.next_rollover);
        employee.vacation_used = Decimal::ZERO;
        employee.rollover_pending = true;
        return true;
    }

    false
}

/// Applies an approved vacation request to the employee's balances.
///
/// The vacation portion lands on `vacation_used` and the unpaid portion
/// on `unpaid_time`. The overtime portion was already deducted from the
/// bank at submission time, so approval does not touch it.
pub fn on_approve_vacation(employee: &mut Employee, request: &LeaveRequest) {
    employee.vacation_used += request.hours_vacation;
    employee.unpaid_time += request.hours_unpaid;
}

/// Releases the reservation a denied vacation request was holding.
///
/// Only the overtime portion was reserved at submission; vacation and
/// unpaid balances were never applied, so denial leaves them alone.
pub fn on_deny_vacation(employee: &mut Employee, request: &LeaveRequest) {
    employee.overtime_hours += request.hours_overtime;
}

/// Credits an approved overtime request's banked hours.
pub fn on_approve_overtime(employee: &mut Employee, request: &OvertimeRequest) {
    employee.overtime_hours += request.banked_hours;
}

// Overtime denial has no balance effect: nothing was reserved at
// submission, so the decision layer only moves the lifecycle state.
