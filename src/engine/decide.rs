//! Manager approval and denial decisions.
//!
//! Decisions move a request from `Submitted` to a terminal state exactly
//! once; there is no resubmission path. Every decision checks the
//! approver's scope first, then the lifecycle guard, and only then
//! applies the reconciliation effect.

use chrono::NaiveDate;

use crate::calculation::staffing_conflicts;
use crate::error::{EngineError, EngineResult};
use crate::models::{DateInterval, Employee, LeaveRequest, OvertimeRequest, RequestState};

use super::reconcile;

fn authorize(approver: &Employee, department_id: &str) -> EngineResult<()> {
    if approver.can_approve_for(department_id) {
        Ok(())
    } else {
        Err(EngineError::AuthorizationDenied {
            message: format!(
                "'{}' cannot decide requests for department '{}'",
                approver.id, department_id
            ),
        })
    }
}

fn guard_submitted(id: uuid::Uuid, state: RequestState) -> EngineResult<()> {
    match state {
        RequestState::Submitted => Ok(()),
        terminal => Err(EngineError::AlreadyDecided { id, state: terminal }),
    }
}

/// Approves a vacation request and reconciles the employee's balances.
///
/// The staffing check is re-run here against the current approved
/// snapshot, since the picture may have changed between submission and
/// decision. Conflicts are advisory: the approval fails with the
/// conflicting days unless the approver passes `acknowledge_conflicts`,
/// keeping the final call with the human while still surfacing what
/// they are signing off on.
pub fn approve_vacation(
    approver: &Employee,
    employee: &mut Employee,
    request: &mut LeaveRequest,
    approved_dept_intervals: &[DateInterval],
    max_simultaneous_off: u32,
    acknowledge_conflicts: bool,
) -> EngineResult<Vec<NaiveDate>> {
    authorize(approver, &request.department_id)?;
    guard_submitted(request.id, request.state)?;

    let conflicts = staffing_conflicts(
        request.start_date,
        request.end_date,
        approved_dept_intervals,
        max_simultaneous_off,
    );
    if !conflicts.is_empty() && !acknowledge_conflicts {
        return Err(EngineError::SchedulingConflict { days: conflicts });
    }

    reconcile::on_approve_vacation(employee, request);
    request.state = RequestState::Approved;
    request.decided_by = Some(approver.id.clone());
    Ok(conflicts)
}

/// Denies a vacation request, releasing its overtime reservation.
pub fn deny_vacation(
    approver: &Employee,
    employee: &mut Employee,
    request: &mut LeaveRequest,
) -> EngineResult<()> {
    authorize(approver, &request.department_id)?;
    guard_submitted(request.id, request.state)?;

    reconcile::on_deny_vacation(employee, request);
    request.state = RequestState::Denied;
    request.decided_by = Some(approver.id.clone());
    Ok(())
}

/// Approves an overtime claim, crediting the banked hours.
pub fn approve_overtime(
    approver: &Employee,
    employee: &mut Employee,
    request: &mut OvertimeRequest,
) -> EngineResult<()> {
    authorize(approver, &request.department_id)?;
    guard_submitted(request.id, request.state)?;

    reconcile::on_approve_overtime(employee, request);
    request.state = RequestState::Approved;
    request.decided_by = Some(approver.id.clone());
    Ok(())
}

/// Denies an overtime claim. Nothing was reserved, so no balance moves.
pub fn deny_overtime(approver: &Employee, request: &mut OvertimeRequest) -> EngineResult<()> {
    authorize(approver, &request.department_id)?;
    guard_submitted(request.id, request.state)?;

    request.state = RequestState::Denied;
    request.decided_by = Some(approver.id.clone());
    Ok(())
}
