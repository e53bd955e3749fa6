//! HTTP request handlers for the Leave & Overtime Accrual Engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Each command locks the ledger for the duration of the request, so a
//! submission or decision never interleaves its balance updates with
//! another request over the same employee.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{annual_entitlement, batch_conflicts};
use crate::config::PolicyLoader;
use crate::engine;
use crate::error::EngineResult;
use crate::models::{LeaveOfAbsenceRecord, LeaveRequest, OvertimeRequest, SickDayRecord};
use crate::store::Ledger;

use super::request::{
    Decision, LeaveOfAbsenceEntry, OvertimeSubmission, SickDayEntry, VacationSubmission,
};
use super::response::{
    ApiError, ApiErrorResponse, ConflictQueueEntry, EmployeeSummary, RolloverOutcome,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vacations", post(submit_vacation))
        .route("/vacations/:id/approve", post(approve_vacation))
        .route("/vacations/:id/deny", post(deny_vacation))
        .route("/overtime", post(submit_overtime))
        .route("/overtime/:id/approve", post(approve_overtime))
        .route("/overtime/:id/deny", post(deny_overtime))
        .route("/sick-days", post(record_sick_day))
        .route("/leaves-of-absence", post(record_leave_of_absence))
        .route("/employees/:id/summary", get(employee_summary))
        .route("/employees/:id/rollover", post(run_rollover))
        .route("/departments/:id/conflicts", get(department_conflicts))
        .with_state(state)
}

/// Maps a JSON extraction failure to a 400 response, shared by all
/// POST endpoints.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

/// Renders an engine outcome as a JSON response with logging.
fn engine_response<T: Serialize>(
    correlation_id: Uuid,
    operation: &'static str,
    result: EngineResult<T>,
) -> Response {
    match result {
        Ok(value) => {
            info!(correlation_id = %correlation_id, operation, "Request completed");
            (StatusCode::OK, Json(value)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, operation, error = %err, "Request rejected");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for `POST /vacations`.
async fn submit_vacation(
    State(state): State<AppState>,
    payload: Result<Json<VacationSubmission>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = state.today();
    let mut ledger = state.ledger().write().await;
    let result = perform_submit_vacation(&mut ledger, state.policy(), today, &submission);
    engine_response(correlation_id, "submit_vacation", result)
}

fn perform_submit_vacation(
    ledger: &mut Ledger,
    policy: &PolicyLoader,
    today: NaiveDate,
    submission: &VacationSubmission,
) -> EngineResult<LeaveRequest> {
    let employee = ledger.employee(&submission.employee_id)?;
    let department = ledger.department_of(employee)?.clone();
    let own_intervals = ledger.open_intervals_for(&submission.employee_id);

    let employee = ledger.employee_mut(&submission.employee_id)?;
    let request = engine::submit_vacation(
        employee,
        &department,
        &own_intervals,
        policy.tiers(),
        submission.start_date,
        submission.end_date,
        submission.unpaid_hours,
        submission.overtime_hours,
        today,
    )?;

    ledger.insert_vacation(request.clone());
    Ok(request)
}

/// Handler for `POST /vacations/{id}/approve`.
async fn approve_vacation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Decision>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let decision = match payload {
        Ok(Json(decision)) => decision,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut ledger = state.ledger().write().await;
    let result = perform_decide_vacation(&mut ledger, id, &decision, true);
    engine_response(correlation_id, "approve_vacation", result)
}

/// Handler for `POST /vacations/{id}/deny`.
async fn deny_vacation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Decision>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let decision = match payload {
        Ok(Json(decision)) => decision,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut ledger = state.ledger().write().await;
    let result = perform_decide_vacation(&mut ledger, id, &decision, false);
    engine_response(correlation_id, "deny_vacation", result)
}

fn perform_decide_vacation(
    ledger: &mut Ledger,
    id: Uuid,
    decision: &Decision,
    approve: bool,
) -> EngineResult<LeaveRequest> {
    let approver = ledger.employee(&decision.approver_id)?.clone();
    let department_id = ledger.vacation(id)?.department_id.clone();
    let max_off = ledger.department(&department_id)?.max_simultaneous_off();
    let approved_intervals = ledger.approved_intervals_in(&department_id);

    // Take the request out so it can be mutated alongside the employee;
    // it goes back in whether or not the decision stuck.
    let mut request = ledger.take_vacation(id)?;
    let outcome: EngineResult<()> = (|| {
        let employee = ledger.employee_mut(&request.employee_id)?;
        if approve {
            engine::approve_vacation(
                &approver,
                employee,
                &mut request,
                &approved_intervals,
                max_off,
                decision.acknowledge_conflicts,
            )?;
        } else {
            engine::deny_vacation(&approver, employee, &mut request)?;
        }
        Ok(())
    })();

    let decided = request.clone();
    ledger.insert_vacation(request);
    outcome.map(|()| decided)
}

/// Handler for `POST /overtime`.
async fn submit_overtime(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeSubmission>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let today = state.today();
    let mut ledger = state.ledger().write().await;
    let result = perform_submit_overtime(&mut ledger, today, &submission);
    engine_response(correlation_id, "submit_overtime", result)
}

fn perform_submit_overtime(
    ledger: &mut Ledger,
    today: NaiveDate,
    submission: &OvertimeSubmission,
) -> EngineResult<OvertimeRequest> {
    let employee = ledger.employee(&submission.employee_id)?.clone();
    let department = ledger.department_of(&employee)?.clone();
    let already_claimed = ledger.overtime_claimed_on(&submission.employee_id, submission.date);

    let request = engine::submit_overtime(
        &employee,
        &department,
        submission.date,
        submission.hours,
        already_claimed,
        today,
    )?;

    ledger.insert_overtime(request.clone());
    Ok(request)
}

/// Handler for `POST /overtime/{id}/approve`.
async fn approve_overtime(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Decision>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let decision = match payload {
        Ok(Json(decision)) => decision,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut ledger = state.ledger().write().await;
    let result = perform_decide_overtime(&mut ledger, id, &decision, true);
    engine_response(correlation_id, "approve_overtime", result)
}

/// Handler for `POST /overtime/{id}/deny`.
async fn deny_overtime(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<Decision>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let decision = match payload {
        Ok(Json(decision)) => decision,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut ledger = state.ledger().write().await;
    let result = perform_decide_overtime(&mut ledger, id, &decision, false);
    engine_response(correlation_id, "deny_overtime", result)
}

fn perform_decide_overtime(
    ledger: &mut Ledger,
    id: Uuid,
    decision: &Decision,
    approve: bool,
) -> EngineResult<OvertimeRequest> {
    let approver = ledger.employee(&decision.approver_id)?.clone();

    let mut request = ledger.take_overtime(id)?;
    let outcome: EngineResult<()> = (|| {
        if approve {
            let employee = ledger.employee_mut(&request.employee_id)?;
            engine::approve_overtime(&approver, employee, &mut request)?;
        } else {
            engine::deny_overtime(&approver, &mut request)?;
        }
        Ok(())
    })();

    let decided = request.clone();
    ledger.insert_overtime(request);
    outcome.map(|()| decided)
}

/// Handler for `POST /sick-days`.
async fn record_sick_day(
    State(state): State<AppState>,
    payload: Result<Json<SickDayEntry>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entry = match payload {
        Ok(Json(entry)) => entry,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut ledger = state.ledger().write().await;
    let result = perform_record_sick_day(&mut ledger, &entry);
    engine_response(correlation_id, "record_sick_day", result)
}

fn perform_record_sick_day(
    ledger: &mut Ledger,
    entry: &SickDayEntry,
) -> EngineResult<SickDayRecord> {
    let manager = ledger.employee(&entry.recorded_by)?.clone();
    let employee = ledger.employee(&entry.employee_id)?.clone();
    let department = ledger.department_of(&employee)?.clone();
    let already_recorded = ledger.sick_day_recorded_on(&entry.employee_id, entry.date);

    let record =
        engine::record_sick_day(&manager, &employee, &department, entry.date, already_recorded)?;

    ledger.insert_sick_day(record.clone());
    Ok(record)
}

/// Handler for `POST /leaves-of-absence`.
async fn record_leave_of_absence(
    State(state): State<AppState>,
    payload: Result<Json<LeaveOfAbsenceEntry>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let entry = match payload {
        Ok(Json(entry)) => entry,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let mut ledger = state.ledger().write().await;
    let result = perform_record_leave_of_absence(&mut ledger, &entry);
    engine_response(correlation_id, "record_leave_of_absence", result)
}

fn perform_record_leave_of_absence(
    ledger: &mut Ledger,
    entry: &LeaveOfAbsenceEntry,
) -> EngineResult<LeaveOfAbsenceRecord> {
    let manager = ledger.employee(&entry.recorded_by)?.clone();
    let employee = ledger.employee(&entry.employee_id)?;
    let department = ledger.department_of(employee)?.clone();

    let employee = ledger.employee_mut(&entry.employee_id)?;
    let record = engine::record_leave_of_absence(
        &manager,
        employee,
        &department,
        entry.start_date,
        entry.end_date,
        entry.unpaid,
    )?;

    ledger.insert_leave_of_absence(record.clone());
    Ok(record)
}

/// Handler for `GET /employees/{id}/summary`.
async fn employee_summary(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.today();
    let ledger = state.ledger().read().await;
    let result = perform_employee_summary(&ledger, state.policy(), today, &id);
    engine_response(correlation_id, "employee_summary", result)
}

fn perform_employee_summary(
    ledger: &Ledger,
    policy: &PolicyLoader,
    today: NaiveDate,
    employee_id: &str,
) -> EngineResult<EmployeeSummary> {
    let employee = ledger.employee(employee_id)?;
    let allowed_hours = annual_entitlement(employee.anniversary_date, policy.tiers(), today);

    Ok(EmployeeSummary {
        employee_id: employee.id.clone(),
        full_name: employee.full_name.clone(),
        allowed_hours,
        vacation_used: employee.vacation_used,
        overtime_hours: employee.overtime_hours,
        unpaid_time: employee.unpaid_time,
        total_hours_available: allowed_hours + employee.overtime_hours - employee.vacation_used,
    })
}

/// Handler for `POST /employees/{id}/rollover`.
async fn run_rollover(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let today = state.today();
    let mut ledger = state.ledger().write().await;
    let result = perform_rollover(&mut ledger, today, &id);
    engine_response(correlation_id, "rollover", result)
}

fn perform_rollover(
    ledger: &mut Ledger,
    today: NaiveDate,
    employee_id: &str,
) -> EngineResult<RolloverOutcome> {
    let employee = ledger.employee_mut(employee_id)?;
    let applied = engine::apply_rollover(employee, today);

    Ok(RolloverOutcome {
        employee_id: employee.id.clone(),
        applied,
        next_rollover: employee.next_rollover,
        vacation_used: employee.vacation_used,
    })
}

/// Handler for `GET /departments/{id}/conflicts`.
async fn department_conflicts(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    let ledger = state.ledger().read().await;
    let result = perform_department_conflicts(&ledger, &id);
    engine_response(correlation_id, "department_conflicts", result)
}

fn perform_department_conflicts(
    ledger: &Ledger,
    department_id: &str,
) -> EngineResult<Vec<ConflictQueueEntry>> {
    let department = ledger.department(department_id)?;
    let pending = ledger.pending_vacations_in(department_id);
    let approved_intervals = ledger.approved_intervals_in(department_id);

    let entries = batch_conflicts(&pending, &approved_intervals, department.max_simultaneous_off())
        .into_iter()
        .map(|(request, conflict_days)| ConflictQueueEntry {
            request: request.clone(),
            conflict_days,
        })
        .collect();

    Ok(entries)
}
